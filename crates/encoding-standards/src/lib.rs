//! Registries consulted when resolving chart encodings.
//!
//! These are the fixed vocabularies behind field definitions: which
//! aggregate operators exist and which of them count, how bins are named
//! and how many a channel gets by default, what range a channel produces,
//! how time units are canonicalized, and which short type names expand to
//! which types.
//!
//! All functions are pure lookups over static tables.

pub mod aggregate;
pub mod bin;
pub mod channel;
pub mod quote;
pub mod timeunit;
pub mod types;

pub use aggregate::{AggregateOp, is_aggregate_op, is_counting_aggregate_op};
pub use bin::{auto_max_bins, bin_to_string};
pub use channel::{RangeType, range_type};
pub use quote::string_value;
pub use timeunit::{is_discrete_by_default, normalize_time_unit};
pub use types::full_type_name;
