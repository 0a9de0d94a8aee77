//! Conversion policy: dispatch from detected/requested conventions to rules.

use crate::case;
use crate::convention::{Convention, Target};

/// A predicate/transform pair selected for one conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRule {
    /// Tests whether a key belongs to the source convention.
    pub predicate: fn(&str) -> bool,
    /// Rewrites a matching key into the target convention.
    pub transform: fn(&str) -> String,
}

/// Resolve the rule for a detected convention and an optional forced target.
///
/// With no target, each convention toggles to its natural opposite:
/// snake_case → camelCase, camelCase → snake_case, PascalCase → camelCase.
/// With a target, any of the three conventions can be forced. `None` means
/// the combination is identity: nothing was detected, the tree is already
/// in the requested convention, or the combination is unsupported.
pub fn rule_for(detected: Convention, target: Option<Target>) -> Option<ConversionRule> {
    match (detected, target) {
        (Convention::Snake, None) | (Convention::Snake, Some(Target::Camel)) => {
            Some(ConversionRule {
                predicate: case::has_underscore,
                transform: case::snake_to_camel,
            })
        }
        (Convention::Camel, None) | (Convention::Camel, Some(Target::Snake)) => {
            Some(ConversionRule {
                predicate: case::has_uppercase,
                transform: case::camel_to_snake,
            })
        }
        (Convention::Pascal, None) | (Convention::Pascal, Some(Target::Camel)) => {
            Some(ConversionRule {
                predicate: case::is_first_char_upper,
                transform: case::pascal_to_camel,
            })
        }
        (Convention::Camel, Some(Target::Pascal)) => Some(ConversionRule {
            predicate: case::is_first_char_lower,
            transform: case::camel_to_pascal,
        }),
        (Convention::Snake, Some(Target::Pascal)) => Some(ConversionRule {
            predicate: case::has_underscore,
            transform: case::snake_to_pascal,
        }),
        (Convention::Pascal, Some(Target::Snake)) => Some(ConversionRule {
            predicate: case::is_first_char_upper,
            transform: case::pascal_to_snake,
        }),
        // Neutral trees and same-convention requests fall through.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_toggle_rules() {
        let rule = rule_for(Convention::Snake, None).unwrap();
        assert_eq!((rule.transform)("user_id"), "userId");

        let rule = rule_for(Convention::Camel, None).unwrap();
        assert_eq!((rule.transform)("blogDate"), "blog_date");

        let rule = rule_for(Convention::Pascal, None).unwrap();
        assert_eq!((rule.transform)("BlogDate"), "blogDate");
    }

    #[test]
    fn test_forced_target_rules() {
        let rule = rule_for(Convention::Camel, Some(Target::Pascal)).unwrap();
        assert_eq!((rule.transform)("blogDate"), "BlogDate");

        let rule = rule_for(Convention::Snake, Some(Target::Pascal)).unwrap();
        assert_eq!((rule.transform)("user_id"), "UserId");

        let rule = rule_for(Convention::Pascal, Some(Target::Snake)).unwrap();
        assert_eq!((rule.transform)("BlogDate"), "blog_date");

        let rule = rule_for(Convention::Camel, Some(Target::Snake)).unwrap();
        assert_eq!((rule.transform)("blogDate"), "blog_date");
    }

    #[test]
    fn test_predicate_matches_source_convention() {
        let rule = rule_for(Convention::Snake, None).unwrap();
        assert!((rule.predicate)("user_id"));
        assert!(!(rule.predicate)("plain"));
    }

    #[test]
    fn test_neutral_is_identity() {
        assert!(rule_for(Convention::Neutral, None).is_none());
        assert!(rule_for(Convention::Neutral, Some(Target::Pascal)).is_none());
    }

    #[test]
    fn test_same_convention_is_identity() {
        assert!(rule_for(Convention::Snake, Some(Target::Snake)).is_none());
        assert!(rule_for(Convention::Camel, Some(Target::Camel)).is_none());
        assert!(rule_for(Convention::Pascal, Some(Target::Pascal)).is_none());
    }
}
