//! Word classification scenarios.

use std::path::{Path, PathBuf};

use layered_lexicon::{SemanticType, Settings};

use super::support::*;
use crate::{
    ClassifyError, ClassifyResult, Entity, NerClass, NerTag, ParseTree, PosAnnotation, PosHead,
    VerbForm, Word, WordClass, WordClassifier, WordFeatures,
};

fn classify(word: Word) -> ClassifyResult<WordFeatures> {
    let lexicon = lexicon();
    WordClassifier::new(&lexicon).classify(&sentence("s.1", vec![word]), 0, None)
}

#[test]
fn frequency_bands_and_log_frequency() {
    let huis = classify(noun("huis")).unwrap();
    assert_eq!(huis.frequency_bands, [true; 4]);
    assert_eq!(huis.frequency, 12000);
    assert_eq!(huis.log_frequency, Some(12000f64.ln()));

    let man = classify(noun("Man")).unwrap();
    assert_eq!(man.frequency_bands, [false, false, true, true]);

    let unknown = classify(noun("zwerfkei")).unwrap();
    assert_eq!(unknown.frequency_bands, [false; 4]);
    assert_eq!(unknown.frequency, 0);
    assert_eq!(unknown.log_frequency, None);
}

#[test]
fn semantic_type_by_lemma_and_head() {
    let lopen = finite_verb("loopt", "tgw").with_lemma("lopen");
    assert_eq!(classify(lopen).unwrap().semantic_type, SemanticType::Process);
    assert_eq!(classify(noun("man")).unwrap().semantic_type, SemanticType::ConcreteHuman);
    assert_eq!(classify(noun("ding")).unwrap().semantic_type, SemanticType::Broad);
    assert_eq!(classify(noun("gedoe")).unwrap().semantic_type, SemanticType::Unfound);
    // "mooi" is only in the adjective table
    assert_eq!(classify(adverb("mooi")).unwrap().semantic_type, SemanticType::Unfound);

    let mut no_lemma = noun("huis");
    no_lemma.lemma = None;
    assert_eq!(classify(no_lemma).unwrap().semantic_type, SemanticType::Unfound);
}

#[test]
fn polarity_uses_lowercased_form_and_head() {
    assert_eq!(classify(adjective("Mooi")).unwrap().polarity, Some(0.7));
    assert_eq!(classify(adverb("mooi")).unwrap().polarity, None);
    assert_eq!(classify(adjective("lelijk")).unwrap().polarity, None);
    // below the threshold, stored as zero rather than absent
    assert_eq!(classify(noun("huis")).unwrap().polarity, Some(0.0));
}

#[test]
fn annotation_contract_needs_exactly_one_tag() {
    let err = classify(Word::new("kaal")).unwrap_err();
    assert!(matches!(err, ClassifyError::MissingAnnotation { found: 0, .. }));

    let doubled = noun("huis").with_pos(PosAnnotation::new("N(soort)").feature("head", "N"));
    let err = classify(doubled).unwrap_err();
    assert!(matches!(err, ClassifyError::MissingAnnotation { found: 2, .. }));

    let mut annotated = noun("huis");
    annotated.set_private_pos("wwform(hoofdww)".into());
    assert!(classify(annotated).is_ok());
}

#[test]
fn index_past_the_sentence_is_an_error() {
    let lexicon = lexicon();
    let s = sentence("s.7", vec![noun("huis")]);
    let err = WordClassifier::new(&lexicon).classify(&s, 1, None).unwrap_err();
    assert!(matches!(err, ClassifyError::NoSuchWord { ref sentence, index: 1 } if sentence == "s.7"));
}

#[test]
fn verb_forms() {
    let form = |wvorm: &str| {
        classify(tagged("x", "WW()", "WW", &[("wvorm", wvorm)])).map(|f| f.class)
    };
    assert_eq!(form("inf").unwrap(), WordClass::Infinitive);
    assert_eq!(form("vd").unwrap(), WordClass::PastParticiple);
    assert_eq!(form("od").unwrap(), WordClass::PresentParticiple);
    assert!(matches!(
        form("bogus").unwrap_err(),
        ClassifyError::UnexpectedVerbForm { ref form, .. } if form == "bogus"
    ));

    assert_eq!(classify(finite_verb("loopt", "tgw")).unwrap().class, WordClass::PresentTense);
    assert_eq!(classify(finite_verb("liep", "verl")).unwrap().class, WordClass::PastTense);
    assert!(matches!(
        classify(finite_verb("loop", "conj")).unwrap_err(),
        ClassifyError::UnexpectedVerbForm { ref form, .. } if form == "conj"
    ));
}

#[test]
fn pronoun_person_and_reference() {
    let hij = classify(pronoun("hij", "pers", "3m")).unwrap();
    assert_eq!(hij.class, WordClass::ThirdPerson);
    assert!(hij.is_pronoun_ref);

    let zich = classify(pronoun("zich", "refl", "3")).unwrap();
    assert_eq!(zich.class, WordClass::ThirdPerson);
    assert!(!zich.is_pronoun_ref);

    assert_eq!(classify(pronoun("ik", "pers", "1")).unwrap().class, WordClass::FirstPerson);
    assert_eq!(classify(pronoun("jouw", "bez", "2v")).unwrap().class, WordClass::SecondPerson);
    assert_eq!(classify(pronoun("wie", "pers", "")).unwrap().class, WordClass::PlainWord);

    let deze = classify(pronoun("deze", "aanw", "")).unwrap();
    assert_eq!(deze.class, WordClass::PlainWord);
    assert!(deze.is_pronoun_ref);

    let die = classify(pronoun("die", "betr", "")).unwrap();
    assert!(die.is_relative);

    assert!(matches!(
        classify(pronoun("hen", "pers", "4")).unwrap_err(),
        ClassifyError::UnexpectedPerson { ref person, .. } if person == "4"
    ));
}

#[test]
fn generic_men_is_neutral() {
    let men = tagged(
        "Men",
        "VNW(pers,pron,nomin,red,3p,ev,masc)",
        "VNW",
        &[("vwtype", "pers"), ("persoon", "9"), ("case", "gen")],
    );
    let men = classify(men).unwrap();
    assert_eq!(men.class, WordClass::PlainWord);
    assert!(!men.is_archaic);
    assert!(!men.is_pronoun_ref);
}

#[test]
fn archaic_case_and_subordinators() {
    let des = classify(tagged("des", "LID(bep,gen,evmo)", "LID", &[("case", "gen")])).unwrap();
    assert!(des.is_archaic);
    let de = classify(tagged("de", "LID(bep,stan,rest)", "LID", &[("case", "stan")])).unwrap();
    assert!(!de.is_archaic);
    let wiens = tagged("wiens", "VNW(vb,gen)", "VNW", &[("vwtype", "vb"), ("case", "gen")]);
    assert!(classify(wiens).unwrap().is_archaic);

    let omdat = classify(tagged("omdat", "VG(onder)", "VG", &[("conjtype", "onder")])).unwrap();
    assert!(omdat.is_subordinate);
    let en = classify(tagged("en", "VG(neven)", "VG", &[("conjtype", "neven")])).unwrap();
    assert!(!en.is_subordinate);
}

#[test]
fn names_need_eigen_in_the_tag() {
    assert_eq!(classify(name("Jan")).unwrap().class, WordClass::Name);
    let abbreviation = tagged("enz", "SPEC(afk)", "SPEC", &[]);
    assert_eq!(classify(abbreviation).unwrap().class, WordClass::PlainWord);
}

#[test]
fn content_words_and_parse_labels() {
    assert!(classify(noun("huis")).unwrap().is_content);
    assert!(classify(adverb("snel")).unwrap().is_content);
    assert!(classify(adjective("mooi")).unwrap().is_content);
    assert!(!classify(pronoun("hij", "pers", "3")).unwrap().is_content);
    // without a parse a verb has no construction label
    assert!(!classify(finite_verb("loopt", "tgw")).unwrap().is_content);

    let lexicon = lexicon();
    let classifier = WordClassifier::new(&lexicon);
    let s = sentence(
        "s.1",
        vec![
            noun("huis"),
            finite_verb("wordt", "tgw"),
            tagged("gebouwd", "WW(vd)", "WW", &[("wvorm", "vd")]),
        ],
    );
    let mut tree = ParseTree::new();
    tree.set_verb_form(1, VerbForm::Passive);
    tree.set_verb_form(2, VerbForm::Main);

    let wordt = classifier.classify(&s, 1, Some(&tree)).unwrap();
    assert!(wordt.is_passive);
    assert!(!wordt.is_content);
    assert_eq!(wordt.verb_form, Some(VerbForm::Passive));

    let gebouwd = classifier.classify(&s, 2, Some(&tree)).unwrap();
    assert!(gebouwd.is_content);
    assert!(!gebouwd.is_passive);

    // labels on non-verbs are ignored
    tree.set_verb_form(0, VerbForm::Main);
    assert_eq!(classifier.classify(&s, 0, Some(&tree)).unwrap().verb_form, None);
}

#[test]
fn negation_flags() {
    let niet = classify(adverb("Niet")).unwrap();
    assert!(niet.is_prop_neg);
    assert!(!niet.is_morph_neg);

    let onwetend = classify(adjective("onwetend").with_morphemes(&["on", "weet", "end"])).unwrap();
    assert!(onwetend.is_morph_neg);
    assert!(!onwetend.is_prop_neg);

    assert!(classify(noun("Anti-held")).unwrap().is_morph_neg);
}

#[test]
fn richest_morphological_layer_wins() {
    let word = noun("wandeling")
        .with_morphemes(&["wandeling"])
        .with_morphemes(&["wandel", "ing"])
        .with_morphemes(&["wan", "del"]);
    let features = classify(word).unwrap();
    assert_eq!(features.morphemes, vec!["wandel".to_string(), "ing".to_string()]);
    assert_eq!(features.morph_len(), 2);
    assert!(features.is_nominal);
}

#[test]
fn punctuation_stops_after_the_grammatical_class() {
    let s = sentence("s.1", vec![punct(",").with_morphemes(&["niet", "-"])])
        .with_entity(Entity::ner("per", vec![0]));
    let lexicon = lexicon();
    let comma = WordClassifier::new(&lexicon).classify(&s, 0, None).unwrap();
    assert!(comma.is_punctuation());
    assert!(comma.morphemes.is_empty());
    assert_eq!(comma.ner, None);
    assert_eq!(comma.head, PosHead::Punctuation);
}

#[test]
fn named_entity_tags() {
    let s = sentence("s.1", vec![name("Jan"), name("Jansen"), finite_verb("slaapt", "tgw")])
        .with_entity(Entity::ner("per", vec![0, 1]));
    let lexicon = lexicon();
    let classifier = WordClassifier::new(&lexicon);
    assert_eq!(
        classifier.classify(&s, 0, None).unwrap().ner,
        Some(NerTag::begin(NerClass::Per))
    );
    assert_eq!(
        classifier.classify(&s, 1, None).unwrap().ner,
        Some(NerTag::inside(NerClass::Per))
    );
    assert_eq!(classifier.classify(&s, 2, None).unwrap().ner, None);
}

#[test]
fn compound_segments_need_a_configured_path() {
    let segmenter = |word: &str, resources: &Path| -> usize {
        assert_eq!(resources, Path::new("/opt/decompounder"));
        if word == "voetbalveld" {
            3
        } else {
            0
        }
    };

    let without = lexicon();
    let features = WordClassifier::new(&without)
        .with_segmenter(&segmenter)
        .classify(&sentence("s.1", vec![noun("voetbalveld")]), 0, None)
        .unwrap();
    assert_eq!(features.compound_len, 0);

    let with = lexicon_with(Settings {
        decompounder_path: Some(PathBuf::from("/opt/decompounder")),
        ..Settings::default()
    });
    let classifier = WordClassifier::new(&with).with_segmenter(&segmenter);
    let s = sentence("s.1", vec![noun("voetbalveld"), noun("huis")]);
    assert_eq!(classifier.classify(&s, 0, None).unwrap().compound_len, 3);
    assert_eq!(classifier.classify(&s, 1, None).unwrap().compound_len, 0);
}

#[test]
fn length_counts_graphemes() {
    assert_eq!(classify(noun("huis")).unwrap().char_len, 4);
    assert_eq!(classify(noun("cafe\u{301}")).unwrap().char_len, 4);
}
