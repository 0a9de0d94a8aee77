//! Public conversion surface composing detection, policy, and rewriting.

use serde_json::Value;

use crate::convention::Target;
use crate::detect::detect;
use crate::error::Result;
use crate::policy;
use crate::rewrite::rewrite;

/// Convert a tree's keys to the natural opposite of the detected convention.
///
/// snake_case toggles to camelCase, camelCase to snake_case, and PascalCase
/// to camelCase. A tree with no detectable convention is returned unchanged
/// (as a clone); the input is never mutated.
pub fn convert(data: &Value) -> Value {
    run(data, None)
}

/// Convert a tree's keys to an explicitly requested convention.
///
/// Requesting the convention that was detected is identity.
pub fn convert_to(data: &Value, target: Target) -> Value {
    run(data, Some(target))
}

/// Tag-string surface compatible with the original API.
///
/// `None` auto-toggles like [`convert`]; `Some("_")` forces snake_case and
/// `Some("PC")` forces PascalCase. Any other tag is an
/// [`UnknownTarget`](crate::ConventionerError::UnknownTarget) error.
pub fn convert_tagged(data: &Value, to: Option<&str>) -> Result<Value> {
    let target = to.map(|tag| tag.parse::<Target>()).transpose()?;
    Ok(run(data, target))
}

fn run(data: &Value, target: Option<Target>) -> Value {
    match policy::rule_for(detect(data), target) {
        Some(rule) => rewrite(data, rule.predicate, rule.transform),
        None => data.clone(),
    }
}
