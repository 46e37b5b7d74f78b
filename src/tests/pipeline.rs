//! Whole-document analysis.

use std::time::Duration;

use layered_lexicon::Settings;

use super::support::*;
use crate::{
    AnnotationType, Analyzer, Chunk, ClassifyError, Document, MetricSink, Paragraph, ParseTree,
    Sentence, TimeoutParser, VerbForm, ANNOTATOR, METRIC_SET, PRIVATE_POS_SET,
};

fn parsing() -> Settings {
    Settings {
        use_parser: true,
        ..Settings::default()
    }
}

/// Marks every finite verb as a main verb and scores each sentence by its
/// length.
fn toy_parser(sentence: &Sentence) -> Option<ParseTree> {
    let mut tree = ParseTree::new();
    for (index, word) in sentence.words.iter().enumerate() {
        if word.tagger_pos().any(|p| p.feat("head") == "WW") {
            tree.set_verb_form(index, VerbForm::Main);
        }
    }
    tree.set_d_level(sentence.words.len() as u32);
    Some(tree)
}

fn two_paragraphs() -> Document {
    Document::new(
        "doc",
        vec![
            Paragraph::new(
                "p.1",
                vec![
                    sentence(
                        "s.1",
                        vec![name("Jan"), finite_verb("loopt", "tgw"), punct(".")],
                    )
                    .with_chunk(Chunk::new("NP", vec![0])),
                    sentence(
                        "s.2",
                        vec![
                            pronoun("hij", "pers", "3"),
                            finite_verb("ziet", "tgw"),
                            tagged("een", "LID(onbep)", "LID", &[]),
                            adjective("mooi"),
                            noun("huis"),
                        ],
                    )
                    .with_chunk(Chunk::new("NP", vec![0]))
                    .with_chunk(Chunk::new("NP", vec![2, 3, 4]))
                    .with_chunk(Chunk::new("PP", vec![1])),
                ],
            ),
            Paragraph::new("p.2", vec![sentence("s.3", vec![adverb("niet")])]),
        ],
    )
}

#[test]
fn metrics_land_on_every_level() {
    let lexicon = lexicon();
    let mut doc = two_paragraphs();
    let stats = Analyzer::new(&lexicon).analyze(&mut doc).unwrap();

    assert_eq!(stats.counts.words, 8);
    assert_eq!(stats.sentence_count, 3);
    assert_eq!(doc.metric("word_count"), Some("8"));
    assert_eq!(doc.metric("sentence_count"), Some("3"));
    assert_eq!(doc.metric("paragraph_count"), Some("2"));
    assert_eq!(doc.metric("np_count"), Some("3"));
    assert_eq!(doc.metric("np_size"), Some("5"));
    assert!(doc.metric("TTW").is_some());
    assert!(doc.metric("rarity").is_some());

    let p1 = &doc.paragraphs[0];
    assert_eq!(p1.metric("sentence_count"), Some("2"));
    assert_eq!(p1.metric("polarity"), Some("0.7"));
    assert_eq!(p1.metric("TTW"), None);

    let s1 = &p1.sentences[0];
    assert_eq!(s1.metric("word_count"), Some("2"));
    assert_eq!(s1.metric("name_count"), Some("1"));
    assert_eq!(s1.metric("pronoun_tw_count"), Some("1"));
    assert_eq!(s1.metric("polarity"), None);
    assert_eq!(s1.metric("d_level"), None);

    assert_eq!(
        p1.sentences[1].metric("log_freq_sum"),
        Some((50000f64.ln() + 12000f64.ln()).to_string().as_str())
    );

    let huis = &p1.sentences[1].words[4];
    assert_eq!(huis.metric("content_word"), Some("true"));
    assert_eq!(huis.metric("word_freq"), Some(12000f64.ln().to_string().as_str()));
    assert_eq!(huis.metric("archaic"), None);
    assert!(s1.words[2].metrics.is_empty());

    assert!(doc
        .declarations
        .iter()
        .any(|d| d.annotation_type == AnnotationType::Metric && d.set == METRIC_SET));
    assert!(doc
        .declarations
        .iter()
        .any(|d| d.annotation_type == AnnotationType::Pos
            && d.set == PRIVATE_POS_SET
            && d.annotator == ANNOTATOR));
    assert!(doc.stylesheet.is_none());
}

#[test]
fn parser_is_only_asked_when_enabled() {
    let parser = toy_parser;

    let lexicon = lexicon();
    let mut doc = two_paragraphs();
    let stats = Analyzer::new(&lexicon)
        .with_parser(&parser)
        .analyze(&mut doc)
        .unwrap();
    assert_eq!(stats.d_level, None);
    assert_eq!(doc.paragraphs[0].sentences[0].words[1].pos.len(), 1);

    let lexicon = lexicon_with(parsing());
    let mut doc = two_paragraphs();
    let stats = Analyzer::new(&lexicon)
        .with_parser(&parser)
        .analyze(&mut doc)
        .unwrap();
    // sentence lengths including punctuation: 3 + 5 + 1
    assert_eq!(stats.d_level, Some(9));
    assert_eq!(doc.metric("d_level"), Some("9"));
    let loopt = &doc.paragraphs[0].sentences[0].words[1];
    assert_eq!(loopt.pos[1].set.as_deref(), Some(PRIVATE_POS_SET));
    assert_eq!(loopt.pos[1].class, "wwform(hoofdww)");
    assert_eq!(loopt.metric("content_word"), Some("true"));
}

#[test]
fn missing_parse_is_degraded_not_fatal() {
    let parser = |_: &Sentence| -> Option<ParseTree> { None };
    let lexicon = lexicon_with(parsing());
    let mut doc = two_paragraphs();
    let stats = Analyzer::new(&lexicon)
        .with_parser(&parser)
        .analyze(&mut doc)
        .unwrap();
    assert_eq!(stats.d_level, None);
    assert_eq!(stats.counts.content_words, 3);
}

#[test]
fn timed_out_parser_counts_as_unavailable() {
    let parser = TimeoutParser::new(
        |sentence: &Sentence| {
            std::thread::sleep(Duration::from_millis(300));
            toy_parser(sentence)
        },
        Duration::from_millis(5),
    );
    let lexicon = lexicon_with(parsing());
    let mut doc = Document::new(
        "d",
        vec![Paragraph::new(
            "p",
            vec![sentence("s", vec![finite_verb("loopt", "tgw")])],
        )],
    );
    let stats = Analyzer::new(&lexicon)
        .with_parser(&parser)
        .analyze(&mut doc)
        .unwrap();
    assert_eq!(stats.d_level, None);
    assert_eq!(stats.counts.content_words, 0);
}

#[test]
fn reanalysis_tolerates_own_annotations() {
    let parser = toy_parser;
    let lexicon = lexicon_with(parsing());
    let analyzer = Analyzer::new(&lexicon).with_parser(&parser);
    let mut doc = two_paragraphs();
    let first = analyzer.analyze(&mut doc).unwrap();
    let annotated = doc.clone();
    let second = analyzer.analyze(&mut doc).unwrap();
    assert_eq!(first.counts, second.counts);
    assert_eq!(doc.declarations.len(), 2);
    assert_eq!(doc, annotated);

    let word_counts = doc.metrics.iter().filter(|m| m.class == "word_count").count();
    assert_eq!(word_counts, 1);
    let huis = &doc.paragraphs[0].sentences[1].words[4];
    assert_eq!(huis.metrics.len(), 3);
    assert_eq!(huis.pos.len(), 1);
}

#[test]
fn schema_violation_aborts_the_document() {
    let lexicon = lexicon();
    let mut doc = two_paragraphs();
    doc.paragraphs[1].sentences[0]
        .words
        .push(pronoun("zij", "pers", "x"));
    let before = doc.clone();
    let err = Analyzer::new(&lexicon).analyze(&mut doc).unwrap_err();
    assert!(matches!(err, ClassifyError::UnexpectedPerson { ref word, .. } if word == "zij"));
    assert_eq!(doc, before);
    assert!(doc.declarations.is_empty());
    assert!(doc.paragraphs[0].metrics.is_empty());
    assert!(doc.paragraphs[0].sentences[0].words[0].metrics.is_empty());
}

#[test]
fn failing_paragraph_is_left_untouched() {
    let lexicon = lexicon();
    let mut paragraph = Paragraph::new(
        "p.1",
        vec![
            sentence("s.1", vec![noun("huis")]),
            sentence("s.2", vec![pronoun("zij", "pers", "x")]),
        ],
    );
    let before = paragraph.clone();
    assert!(Analyzer::new(&lexicon).analyze_paragraph(&mut paragraph).is_err());
    assert_eq!(paragraph, before);
}

#[test]
fn empty_document_has_no_ratios() {
    let lexicon = lexicon_with(Settings {
        style_sheet: Some("tscanview.xsl".into()),
        ..Settings::default()
    });
    let mut doc = Document::new("empty", vec![Paragraph::new("p.1", vec![])]);
    let stats = Analyzer::new(&lexicon).analyze(&mut doc).unwrap();
    assert_eq!(stats.counts.words, 0);
    assert_eq!(doc.metric("word_count"), Some("0"));
    assert_eq!(doc.metric("TTW"), None);
    assert_eq!(doc.metric("word_freq"), None);
    assert_eq!(doc.paragraphs[0].metric("sentence_count"), Some("0"));
    assert_eq!(doc.stylesheet.as_deref(), Some("tscanview.xsl"));
}

#[test]
fn json_round_trip_through_analysis() {
    let json = r#"{
        "id": "doc",
        "paragraphs": [{
            "id": "p.1",
            "sentences": [{
                "id": "s.1",
                "words": [
                    {"text": "Zij", "lemma": "zij",
                     "pos": [{"class": "VNW(pers,pron,nomin,vol,3v,ev,fem)",
                              "features": {"head": "VNW", "vwtype": "pers", "persoon": "3v"}}]},
                    {"text": "is", "lemma": "zijn",
                     "pos": [{"class": "WW(pv,tgw,ev)",
                              "features": {"head": "WW", "wvorm": "pv", "pvtijd": "tgw"}}]},
                    {"text": "niet", "lemma": "niet",
                     "pos": [{"class": "BW()", "features": {"head": "BW"}}]},
                    {"text": "onwetend", "lemma": "onwetend",
                     "pos": [{"class": "ADJ(vrij,basis,zonder)", "features": {"head": "ADJ"}}],
                     "morphology": [{"morphemes": ["on", "weet", "end"]}]}
                ]
            }]
        }]
    }"#;
    let lexicon = lexicon();
    let mut doc = Document::from_json_str(json).unwrap();
    let stats = Analyzer::new(&lexicon).analyze(&mut doc).unwrap();
    assert_eq!(stats.counts.negations(), 2);
    assert_eq!(stats.counts.state, 1);
    assert_eq!(stats.polarity, Some(-0.4));

    let written = Document::from_json_str(&doc.to_json_string().unwrap()).unwrap();
    let sentence = &written.paragraphs[0].sentences[0];
    assert_eq!(sentence.metric("prop_neg_count"), Some("1"));
    assert_eq!(sentence.metric("morph_neg_count"), Some("1"));
    assert_eq!(sentence.words[3].metric("morph_negative"), Some("true"));
    assert_eq!(sentence.words[3].metric("polarity"), Some("-0.4"));
    assert_eq!(sentence.words[2].metric("proper_negative"), Some("true"));
}
