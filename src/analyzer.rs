//! Document analysis pipeline.
//!
//! Sentences are analysed strictly one after another: classify every word,
//! write word metrics back, fold the words into a sentence node, then merge
//! that node upwards. A schema violation anywhere aborts the document and
//! leaves it untouched.

use layered_lexicon::Lexicon;
use log::debug;

use crate::collaborators::{CompoundSegmenter, ParseTree, SyntaxParser};
use crate::document::{
    AnnotationType, Document, Paragraph, Sentence, ANNOTATOR, METRIC_SET, PRIVATE_POS_SET,
};
use crate::metrics::{annotate, annotate_word};
use crate::negation::count_phrase_negations;
use crate::stats::{Level, StatNode};
use crate::word::WordClassifier;
use crate::ClassifyResult;

/// Chunk class of noun phrases.
const NOUN_PHRASE: &str = "NP";

/// Runs the classifier and aggregator over whole documents.
pub struct Analyzer<'a> {
    lexicon: &'a Lexicon,
    parser: Option<&'a dyn SyntaxParser>,
    segmenter: Option<&'a dyn CompoundSegmenter>,
}

impl<'a> Analyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            parser: None,
            segmenter: None,
        }
    }

    /// Parser consulted when the settings enable parsing.
    pub fn with_parser(mut self, parser: &'a dyn SyntaxParser) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Segmenter consulted when a decompounder path is configured.
    pub fn with_segmenter(mut self, segmenter: &'a dyn CompoundSegmenter) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    fn classifier(&self) -> WordClassifier<'a> {
        let classifier = WordClassifier::new(self.lexicon);
        match self.segmenter {
            Some(segmenter) => classifier.with_segmenter(segmenter),
            None => classifier,
        }
    }

    /// Analyse `doc` in place and return its stat tree.
    ///
    /// On error `doc` is left exactly as it was.
    pub fn analyze(&self, doc: &mut Document) -> ClassifyResult<StatNode> {
        all_or_nothing(doc, |doc| {
            let settings = self.lexicon.settings();
            doc.declare(AnnotationType::Metric, METRIC_SET, ANNOTATOR);
            doc.declare(AnnotationType::Pos, PRIVATE_POS_SET, ANNOTATOR);
            if let Some(style) = &settings.style_sheet {
                doc.stylesheet = Some(style.clone());
            }

            let mut stats = StatNode::new(Level::Document, doc.id.clone());
            for paragraph in doc.paragraphs.iter_mut() {
                stats.merge(self.fold_paragraph(paragraph)?);
            }
            stats.finalize(settings.rarity_level);
            annotate(doc, &stats);
            Ok(stats)
        })
    }

    /// Analyse one paragraph; on error it is left unchanged.
    pub fn analyze_paragraph(&self, paragraph: &mut Paragraph) -> ClassifyResult<StatNode> {
        all_or_nothing(paragraph, |paragraph| self.fold_paragraph(paragraph))
    }

    fn fold_paragraph(&self, paragraph: &mut Paragraph) -> ClassifyResult<StatNode> {
        let mut stats = StatNode::new(Level::Paragraph, paragraph.id.clone());
        for sentence in paragraph.sentences.iter_mut() {
            stats.merge(self.analyze_sentence(sentence)?);
        }
        stats.finalize(self.lexicon.settings().rarity_level);
        annotate(paragraph, &stats);
        Ok(stats)
    }

    /// Analyse one sentence. Every word is classified before anything is
    /// written, so an error leaves the sentence unchanged.
    pub fn analyze_sentence(&self, sentence: &mut Sentence) -> ClassifyResult<StatNode> {
        let parse = self.parse(sentence);
        let classifier = self.classifier();
        let features = (0..sentence.words.len())
            .map(|index| classifier.classify(&*sentence, index, parse.as_ref()))
            .collect::<ClassifyResult<Vec<_>>>()?;

        for (word, features) in sentence.words.iter_mut().zip(&features) {
            if !features.is_punctuation() {
                annotate_word(word, features);
            }
        }

        let mut stats = StatNode::sentence(sentence.id.clone(), sentence.text());
        for word in features {
            stats.add_word(word);
        }
        let tokens: Vec<String> = sentence
            .words
            .iter()
            .map(|w| w.text.to_lowercase())
            .collect();
        stats.add_phrase_negations(count_phrase_negations(&tokens));

        let noun_phrases = sentence.chunks.iter().filter(|c| c.class == NOUN_PHRASE);
        let (count, size) = noun_phrases.fold((0, 0), |(n, s), c| (n + 1, s + c.members.len()));
        stats.set_noun_phrases(count, size);
        stats.d_level = parse.as_ref().and_then(ParseTree::d_level);

        stats.finalize(self.lexicon.settings().rarity_level);
        annotate(sentence, &stats);
        Ok(stats)
    }

    fn parse(&self, sentence: &Sentence) -> Option<ParseTree> {
        if !self.lexicon.settings().use_parser {
            return None;
        }
        let parser = self.parser?;
        let tree = parser.parse(sentence);
        if tree.is_none() {
            debug!("no parse for sentence {}, continuing without", sentence.id);
        }
        tree
    }
}

/// Run `analyse` on a copy of `node` and keep the copy only on success.
fn all_or_nothing<T: Clone>(
    node: &mut T,
    analyse: impl FnOnce(&mut T) -> ClassifyResult<StatNode>,
) -> ClassifyResult<StatNode> {
    let mut draft = node.clone();
    let stats = analyse(&mut draft)?;
    *node = draft;
    Ok(stats)
}
