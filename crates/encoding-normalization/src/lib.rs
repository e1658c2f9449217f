//! Normalization and validation of chart encoding definitions.
//!
//! Takes user-authored channel definitions, which may use short type names,
//! boolean bins, unknown aggregates or types that do not suit their
//! channel, and resolves them into complete, consistent definitions.
//!
//! # Overview
//!
//! - **Classifier** ([`classify`]): shape predicates and discreteness
//! - **Compatibility** ([`compatibility`]): per-channel legality rules
//! - **Normalizer** ([`normalize`]): the repair pipeline
//! - **Keys and titles** ([`key`]): identity strings and display labels
//!
//! # Example
//!
//! ```
//! use encoding_model::{Channel, FieldDef};
//! use encoding_normalization::{FieldKeyOptions, Warning, field, normalize_field_def};
//!
//! let raw = FieldDef::new("amount").with_aggregate("count").with_type("N");
//! let mut warnings: Vec<Warning> = Vec::new();
//! let resolved = normalize_field_def(&raw, Channel::Y, &mut warnings)?;
//!
//! assert_eq!(resolved.field_type.as_deref(), Some("quantitative"));
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(field(&resolved, &FieldKeyOptions::new()), "count_*");
//! # Ok::<(), encoding_model::EncodingError>(())
//! ```
//!
//! # Diagnostics
//!
//! Warnings go to a caller-supplied [`WarningSink`]. Collect them in a
//! `Vec<Warning>`, or use [`TracingSink`] to log them through `tracing`.
//! Errors are reserved for contract violations, such as classifying a field
//! whose type was never resolved.

pub mod classify;
pub mod compatibility;
pub mod key;
pub mod normalize;
mod warning;

pub use classify::{
    default_type, get_field_def, has_condition_field_def, is_conditional_def, is_continuous,
    is_count, is_discrete, is_field_def, is_repeat_ref, is_scale_field_def, is_value_def,
};
pub use compatibility::{Compatibility, channel_compatibility};
pub use key::{COUNT_KEY, FieldKeyOptions, field, title};
pub use normalize::{Normalized, normalize, normalize_bin, normalize_field_def, normalize_with_report};
pub use warning::{TracingSink, Warning, WarningSink};
