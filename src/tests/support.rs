use layered_lexicon::{LexicalCategory, Lexicon, Settings};

use crate::{PosAnnotation, Sentence, Word};

pub fn tagged(text: &str, class: &str, head: &str, features: &[(&str, &str)]) -> Word {
    let mut pos = PosAnnotation::new(class).feature("head", head);
    for (key, value) in features {
        pos = pos.feature(*key, *value);
    }
    Word::new(text).with_lemma(text.to_lowercase()).with_pos(pos)
}

pub fn noun(text: &str) -> Word {
    tagged(text, "N(soort,ev,basis,zijd,stan)", "N", &[])
}

pub fn adjective(text: &str) -> Word {
    tagged(text, "ADJ(vrij,basis,zonder)", "ADJ", &[])
}

pub fn adverb(text: &str) -> Word {
    tagged(text, "BW()", "BW", &[])
}

pub fn finite_verb(text: &str, tense: &str) -> Word {
    tagged(
        text,
        "WW(pv,tgw,met-t)",
        "WW",
        &[("wvorm", "pv"), ("pvtijd", tense)],
    )
}

pub fn pronoun(text: &str, vwtype: &str, person: &str) -> Word {
    tagged(
        text,
        "VNW(pers,pron,nomin,vol,3,ev,masc)",
        "VNW",
        &[("vwtype", vwtype), ("persoon", person)],
    )
}

pub fn name(text: &str) -> Word {
    tagged(text, "SPEC(deeleigen)", "SPEC", &[])
}

pub fn punct(text: &str) -> Word {
    tagged(text, "LET()", "LET", &[])
}

pub fn sentence(id: &str, words: Vec<Word>) -> Sentence {
    Sentence::new(id, words)
}

pub fn lexicon_with(settings: Settings) -> Lexicon {
    Lexicon::builder(settings)
        .frequency("huis", 12000, 40.0)
        .frequency("hij", 50000, 10.0)
        .frequency("niet", 40000, 12.0)
        .frequency("man", 8000, 70.0)
        .frequency("jan", 300, 90.0)
        .polarity("mooi", LexicalCategory::Adjective, 0.7)
        .polarity("onwetend", LexicalCategory::Adjective, -0.4)
        .polarity("huis", LexicalCategory::Noun, 0.005)
        .semantic(LexicalCategory::Verb, "lopen", "process")
        .semantic(LexicalCategory::Verb, "zijn", "state")
        .semantic(LexicalCategory::Noun, "man", "human")
        .semantic(LexicalCategory::Noun, "huis", "artefact")
        .semantic(LexicalCategory::Noun, "vrijheid", "dynamic")
        .semantic(LexicalCategory::Noun, "ding", "institute")
        .semantic(LexicalCategory::Adjective, "mooi", "abstract")
        .build()
}

pub fn lexicon() -> Lexicon {
    lexicon_with(Settings::default())
}
