//! Injected external capabilities: the syntactic parser and the compound
//! segmenter.
//!
//! Both run outside this crate. The classifier only sees their results, and
//! treats an unavailable parse or segmentation as missing optional data.

use std::collections::HashMap;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::warn;

use crate::document::Sentence;

/// Parses one sentence into a [`ParseTree`], or reports it unavailable.
pub trait SyntaxParser {
    fn parse(&self, sentence: &Sentence) -> Option<ParseTree>;
}

impl<F> SyntaxParser for F
where
    F: Fn(&Sentence) -> Option<ParseTree>,
{
    fn parse(&self, sentence: &Sentence) -> Option<ParseTree> {
        self(sentence)
    }
}

/// Counts the compound segments of a word; 0 when it does not decompose.
pub trait CompoundSegmenter {
    fn segment_count(&self, word: &str, resources: &Path) -> usize;
}

impl<F> CompoundSegmenter for F
where
    F: Fn(&str, &Path) -> usize,
{
    fn segment_count(&self, word: &str, resources: &Path) -> usize {
        self(word, resources)
    }
}

/// Verb construction label assigned by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerbForm {
    Main,
    Passive,
    Auxiliary,
    Copula,
    Other(String),
}

impl VerbForm {
    pub fn from_label(label: &str) -> Self {
        match label {
            "hoofdww" => VerbForm::Main,
            "passiefww" => VerbForm::Passive,
            "hulpww" => VerbForm::Auxiliary,
            "koppelww" => VerbForm::Copula,
            other => VerbForm::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            VerbForm::Main => "hoofdww",
            VerbForm::Passive => "passiefww",
            VerbForm::Auxiliary => "hulpww",
            VerbForm::Copula => "koppelww",
            VerbForm::Other(label) => label,
        }
    }
}

pub type NodeId = usize;

/// A node of the parse tree: a phrase with a category or a leaf with a
/// part of speech pointing at a sentence-local word index.
#[derive(Debug, Clone, Default, PartialEq)]
struct ParseNode {
    cat: Option<String>,
    pos: Option<String>,
    parent: Option<NodeId>,
    word: Option<usize>,
}

/// Parse of one sentence as produced by the external parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
    verb_forms: HashMap<usize, VerbForm>,
    d_level: Option<u32>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase node with syntactic category `cat`.
    pub fn phrase(&mut self, parent: Option<NodeId>, cat: &str) -> NodeId {
        self.push(ParseNode {
            cat: Some(cat.to_string()),
            parent,
            ..ParseNode::default()
        })
    }

    /// Add a leaf for sentence-local word `word` with parser tag `pos`.
    pub fn leaf(&mut self, parent: NodeId, word: usize, pos: &str) -> NodeId {
        self.push(ParseNode {
            pos: Some(pos.to_string()),
            parent: Some(parent),
            word: Some(word),
            ..ParseNode::default()
        })
    }

    fn push(&mut self, node: ParseNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn set_verb_form(&mut self, word: usize, form: VerbForm) {
        self.verb_forms.insert(word, form);
    }

    pub fn set_d_level(&mut self, level: u32) {
        self.d_level = Some(level);
    }

    /// Construction label of the verb at `word`.
    pub fn verb_form(&self, word: usize) -> Option<&VerbForm> {
        self.verb_forms.get(&word)
    }

    /// Syntactic depth score of the sentence.
    pub fn d_level(&self) -> Option<u32> {
        self.d_level
    }

    /// True when the word's node is verbal but its parent is a noun phrase.
    pub fn is_verbal_in_noun_phrase(&self, word: usize) -> bool {
        let Some(node) = self.nodes.iter().find(|n| n.word == Some(word)) else {
            return false;
        };
        if node.pos.as_deref() != Some("verb") {
            return false;
        }
        node.parent
            .and_then(|parent| self.nodes.get(parent))
            .map_or(false, |parent| parent.cat.as_deref() == Some("np"))
    }
}

/// Runs a parser on a worker thread and gives up after a timeout.
///
/// An expired request counts as "parse unavailable". The worker is left to
/// finish on its own; its late result is dropped. Threads are not bounded:
/// a parser that never returns keeps one thread alive per timed-out
/// sentence, so wrap only parsers that eventually finish.
pub struct TimeoutParser<P> {
    inner: Arc<P>,
    timeout: Duration,
}

impl<P> TimeoutParser<P> {
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<P> SyntaxParser for TimeoutParser<P>
where
    P: SyntaxParser + Send + Sync + 'static,
{
    fn parse(&self, sentence: &Sentence) -> Option<ParseTree> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let owned = sentence.clone();
        thread::spawn(move || {
            // the receiver is gone once the request timed out
            let _ = tx.send(inner.parse(&owned));
        });
        match rx.recv_timeout(self.timeout) {
            Ok(tree) => tree,
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    "parser timed out after {:?} on sentence {}",
                    self.timeout, sentence.id
                );
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("parser worker failed on sentence {}", sentence.id);
                None
            }
        }
    }
}
