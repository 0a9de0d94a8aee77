//! Recursive key rewriting over JSON-like trees.

use serde_json::{Map, Value};

/// Rename every mapping key matching `predicate` using `transform`, at any
/// depth, and return the rewritten tree.
///
/// The input is never mutated: mappings are rebuilt in iteration order with
/// renamed keys, sequences are rewritten element-wise preserving order and
/// length, and scalar leaves are cloned unchanged. A value is recursed into
/// independently of whether its key was renamed. Because the caller's tree
/// is left untouched, aliased sub-trees cannot be double-converted and the
/// same input may be shared across threads.
///
/// If two keys of one mapping rewrite to the same name, the later entry
/// wins; renaming is only injective over keys that follow one convention.
pub fn rewrite<P, T>(data: &Value, predicate: P, transform: T) -> Value
where
    P: Fn(&str) -> bool,
    T: Fn(&str) -> String,
{
    rewrite_node(data, &predicate, &transform)
}

fn rewrite_node<P, T>(value: &Value, predicate: &P, transform: &T) -> Value
where
    P: Fn(&str) -> bool,
    T: Fn(&str) -> String,
{
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, value) in map {
                let key = if predicate(key) {
                    transform(key)
                } else {
                    key.clone()
                };
                out.insert(key, rewrite_node(value, predicate, transform));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| rewrite_node(item, predicate, transform))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
