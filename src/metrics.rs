//! Metric annotations written back onto the document.
//!
//! Class names are the ones downstream consumers of the metric set read,
//! so they keep their established spelling.

use crate::document::{Metric, MetricSink, Word, METRIC_SET};
use crate::stats::{Level, StatNode};
use crate::word::WordFeatures;

fn metric(class: impl Into<String>, value: impl ToString) -> Metric {
    Metric {
        set: METRIC_SET.to_string(),
        class: class.into(),
        value: value.to_string(),
    }
}

/// Per-word metrics. Flags are only written when set.
pub fn word_metrics(word: &WordFeatures) -> Vec<Metric> {
    let flags = [
        ("content_word", word.is_content),
        ("archaic", word.is_archaic),
        ("nominalization", word.is_nominal),
        ("subordinate", word.is_subordinate),
        ("betrekkelijk", word.is_relative),
        ("proper_negative", word.is_prop_neg),
        ("morph_negative", word.is_morph_neg),
    ];
    let mut metrics: Vec<Metric> = flags
        .iter()
        .filter(|(_, set)| *set)
        .map(|(class, _)| metric(*class, "true"))
        .collect();
    if let Some(polarity) = word.polarity {
        metrics.push(metric("polarity", polarity));
    }
    if word.compound_len > 0 {
        metrics.push(metric("compound_len", word.compound_len));
    }
    if let Some(freq) = word.log_frequency {
        metrics.push(metric("word_freq", freq));
    }
    metrics
}

/// Write word metrics and the verb construction label onto `word`,
/// replacing those of an earlier run.
pub fn annotate_word(word: &mut Word, features: &WordFeatures) {
    word.clear_metrics(METRIC_SET);
    for m in word_metrics(features) {
        word.push_metric(m);
    }
    if let Some(form) = &features.verb_form {
        word.set_private_pos(format!("wwform({})", form.label()));
    }
}

/// Metrics of a sentence, paragraph or document node.
pub fn stat_metrics(node: &StatNode) -> Vec<Metric> {
    let c = &node.counts;
    let mut metrics = vec![
        metric("word_count", c.words),
        metric("name_count", c.names),
        metric("vd_count", c.past_participles),
        metric("od_count", c.present_participles),
        metric("inf_count", c.infinitives),
        metric("passive_count", c.passives),
        metric("archaic_count", c.archaics),
        metric("content_count", c.content_words),
        metric("nominal_count", c.nominalizations),
        metric("subordinate_cnt", c.subordinates),
        metric("relative_cnt", c.relatives),
        metric("prop_neg_count", c.prop_negations),
        metric("morph_neg_count", c.morph_negations),
    ];
    if let Some(polarity) = node.polarity {
        metrics.push(metric("polarity", polarity));
    }
    metrics.push(metric("compound_count", c.compounds));
    metrics.push(metric("compound_len", c.compound_segments));
    if let Some(derived) = node.derived() {
        if let Some(freq) = derived.mean_frequency {
            metrics.push(metric("word_freq", freq));
        }
        if let Some(freq) = derived.mean_frequency_no_names {
            metrics.push(metric("word_freq_nonames", freq));
        }
    }
    for (class, count) in ["freq50", "freq65", "freq77", "freq80"]
        .iter()
        .zip(c.frequency_bands)
    {
        metrics.push(metric(*class, count));
    }
    metrics.extend([
        metric("pronoun_tw_count", c.present_tense),
        metric("pronoun_verl_count", c.past_tense),
        metric("pronoun_ref_count", c.pronoun_refs),
        metric("pronoun_1_count", c.first_person),
        metric("pronoun_2_count", c.second_person),
        metric("pronoun_3_count", c.third_person),
        metric("character_sum", c.characters),
        metric("character_sum_no_names", c.characters_no_names),
        metric("morph_count", c.morphemes),
        metric("morph_count_no_names", c.morphemes_no_names),
        metric("log_freq_sum", c.log_frequency_sum),
        metric("concrete_strict", c.concrete_strict),
        metric("concrete_broad", c.concrete_broad),
        metric("abstract_strict", c.abstract_strict),
        metric("abstract_broad", c.abstract_broad),
        metric("state_count", c.state),
        metric("action_count", c.action),
        metric("process_count", c.process),
        metric("weird_count", c.weird),
        metric("human_count", c.human),
        metric("np_count", c.noun_phrases),
        metric("np_size", c.noun_phrase_size),
    ]);
    if let Some(d_level) = node.d_level {
        metrics.push(metric("d_level", d_level));
    }
    match node.level() {
        Level::Sentence => {}
        Level::Paragraph => metrics.push(metric("sentence_count", node.sentence_count)),
        Level::Document => {
            metrics.push(metric("sentence_count", node.sentence_count));
            metrics.push(metric("paragraph_count", node.stat_children().count()));
            if let Some(derived) = node.derived() {
                let ratios = [
                    ("TTW", derived.type_token_words),
                    ("TTL", derived.type_token_lemmas),
                    ("rarity", derived.rarity),
                ];
                for (class, value) in ratios {
                    if let Some(value) = value {
                        metrics.push(metric(class, value));
                    }
                }
            }
        }
    }
    metrics
}

/// Attach the metrics of `node` to its document counterpart, replacing
/// those of an earlier run.
pub fn annotate<S: MetricSink>(sink: &mut S, node: &StatNode) {
    sink.clear_metrics(METRIC_SET);
    for m in stat_metrics(node) {
        sink.push_metric(m);
    }
}
