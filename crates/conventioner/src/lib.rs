//! Conventioner: convention-aware property-name conversion for JSON-like data.
//!
//! Conventioner inspects the keys of a data tree, classifies the dominant
//! naming convention (snake_case, camelCase, or PascalCase), and rewrites
//! every matching key into a target convention — either the natural opposite
//! of what was detected, or one requested explicitly.
//!
//! # Core Principles
//!
//! - **Detect, then rewrite**: a single pass classifies the tree, a policy
//!   table picks the predicate/transform pair, and a recursive rewrite
//!   applies it to every nested mapping and sequence
//! - **Non-destructive**: the input tree is never mutated; conversion always
//!   returns a new tree
//! - **Keys only**: values are opaque and pass through untouched, apart from
//!   recursion into nested containers
//!
//! # Example
//!
//! ```
//! use conventioner::convert;
//! use serde_json::json;
//!
//! let data = json!({ "user_id": 1, "user_name": "Some user" });
//!
//! assert_eq!(convert(&data), json!({ "userId": 1, "userName": "Some user" }));
//! ```

pub mod case;
pub mod error;

mod convention;
mod convert;
mod detect;
mod policy;
mod rewrite;

pub use convention::{Convention, Target};
pub use convert::{convert, convert_tagged, convert_to};
pub use detect::detect;
pub use error::{ConventionerError, Result};
pub use policy::{rule_for, ConversionRule};
pub use rewrite::rewrite;
