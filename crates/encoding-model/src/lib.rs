//! Data model for chart encoding channel definitions.
//!
//! A channel definition binds either a data attribute ([`FieldDef`]), a
//! constant ([`ValueDef`]) or a conditional pair of the two
//! ([`ConditionalDef`]) to a visual [`Channel`]. Definitions arrive in their
//! user-authored form (short type names, boolean bins, possibly invalid
//! aggregates) and are resolved by the `encoding-normalization` crate.
//!
//! # Module Organization
//!
//! - [`channel`]: The closed channel enumeration
//! - [`field_type`]: Canonical measurement types
//! - [`field_def`]: Field definitions, field references and bin parameters
//! - [`channel_def`]: The channel definition union and its shape precedence
//! - [`config`]: Settings used for title derivation

pub mod channel;
pub mod channel_def;
pub mod config;
pub mod error;
pub mod field_def;
pub mod field_type;

pub use channel::Channel;
pub use channel_def::{ChannelDef, Condition, ConditionalDef, ValueDef, is_field_shaped};
pub use config::{Config, DEFAULT_COUNT_TITLE};
pub use error::{EncodingError, Result};
pub use field_def::{Bin, BinParams, Field, FieldDef, RepeatRef, RepeatTarget};
pub use field_type::FieldType;
