//! Convention detection over a data tree's keys.

use serde_json::Value;

use crate::case;
use crate::convention::Convention;

/// Classify the dominant naming convention of a tree's keys.
///
/// Every key of every nested mapping is visited depth-first, in iteration
/// order; sequence elements are visited in order. Each key is classified
/// first-match-wins (underscore, then internal uppercase with a lowercase
/// first character, then uppercase first character), and each match
/// overwrites the running result. The traversal never stops early, so the
/// *last* matching key determines the outcome: a tree mixing conventions is
/// governed entirely by the convention of the last key that matched.
///
/// Scalars are leaves and never contribute to classification. An empty
/// mapping — or any input without a classifiable key — yields
/// [`Convention::Neutral`].
pub fn detect(data: &Value) -> Convention {
    fold_value(data, Convention::Neutral)
}

/// Fold the classification accumulator through one node.
fn fold_value(value: &Value, acc: Convention) -> Convention {
    match value {
        Value::Object(map) => map
            .iter()
            .fold(acc, |acc, (key, value)| fold_value(value, classify(key, acc))),
        Value::Array(items) => items.iter().fold(acc, |acc, item| fold_value(item, acc)),
        _ => acc,
    }
}

/// Classify a single key, keeping the accumulator when no rule matches.
fn classify(key: &str, acc: Convention) -> Convention {
    if case::has_underscore(key) {
        Convention::Snake
    } else if case::has_uppercase(key) && case::is_first_char_lower(key) {
        Convention::Camel
    } else if case::is_first_char_upper(key) {
        Convention::Pascal
    } else {
        acc
    }
}
