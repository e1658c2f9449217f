//! Normalization warnings and the sinks that receive them.
//!
//! Each variant carries only the data its message needs. Warnings never
//! change what a normalization step returns; they only report a repair or
//! a questionable channel binding.

use serde::{Deserialize, Serialize};
use std::fmt;

use encoding_model::{Channel, FieldType};

/// A non-fatal issue found while resolving a channel definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    // Repairs
    /// Aggregate operator is not in the registry; it was dropped.
    InvalidAggregate { aggregate: String },
    /// A counting aggregate on a non-quantitative type; type was forced.
    InvalidFieldTypeForCountAggregate {
        field_type: String,
        aggregate: String,
    },
    /// Type missing or unrecognized; a channel default was assigned.
    EmptyOrInvalidFieldType {
        field_type: Option<String>,
        channel: Channel,
        default_type: FieldType,
    },
    /// Unsupported `day` inside a composite time unit was rewritten.
    DayReplacedWithDate {
        time_unit: String,
        replacement: String,
    },

    // Channel compatibility
    /// Facets need a discrete field.
    FacetChannelShouldBeDiscrete { channel: Channel },
    /// Channel needs an orderable, continuous (or binned) field.
    DiscreteChannelIncompatible { channel: Channel },
    /// Shapes only encode nominal data.
    ShapeRequiresNominal,
    /// Nominal data has no order to encode.
    OrderRequiresOrderedType,
}

impl Warning {
    /// Stable identifier for filtering and tests.
    pub fn code(&self) -> &'static str {
        match self {
            Warning::InvalidAggregate { .. } => "invalid-aggregate",
            Warning::InvalidFieldTypeForCountAggregate { .. } => {
                "invalid-field-type-for-count-aggregate"
            }
            Warning::EmptyOrInvalidFieldType { .. } => "empty-or-invalid-field-type",
            Warning::DayReplacedWithDate { .. } => "day-replaced-with-date",
            Warning::FacetChannelShouldBeDiscrete { .. } => "facet-channel-should-be-discrete",
            Warning::DiscreteChannelIncompatible { .. } => "discrete-channel-incompatible",
            Warning::ShapeRequiresNominal => "shape-requires-nominal",
            Warning::OrderRequiresOrderedType => "order-requires-ordered-type",
        }
    }

    /// Whether this warning came from the channel compatibility check.
    pub fn is_incompatibility(&self) -> bool {
        matches!(
            self,
            Warning::FacetChannelShouldBeDiscrete { .. }
                | Warning::DiscreteChannelIncompatible { .. }
                | Warning::ShapeRequiresNominal
                | Warning::OrderRequiresOrderedType
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InvalidAggregate { aggregate } => {
                write!(f, "Invalid aggregation operator \"{aggregate}\"")
            }
            Warning::InvalidFieldTypeForCountAggregate {
                field_type,
                aggregate,
            } => write!(
                f,
                "Invalid field type \"{field_type}\" for aggregate: \"{aggregate}\", using \"quantitative\" instead."
            ),
            Warning::EmptyOrInvalidFieldType {
                field_type,
                channel,
                default_type,
            } => write!(
                f,
                "Invalid field type \"{}\" for channel \"{channel}\", using \"{default_type}\" instead.",
                field_type.as_deref().unwrap_or("undefined")
            ),
            Warning::DayReplacedWithDate {
                time_unit,
                replacement,
            } => write!(
                f,
                "Time unit \"{time_unit}\" is not supported. We are replacing it with {replacement}."
            ),
            Warning::FacetChannelShouldBeDiscrete { channel } => write!(
                f,
                "{channel} encoding should be discrete (ordinal / nominal / binned)."
            ),
            Warning::DiscreteChannelIncompatible { channel } => {
                write!(f, "Channel {channel} should not be used with discrete field.")
            }
            Warning::ShapeRequiresNominal => {
                f.write_str("Shape channel should be used with nominal data only")
            }
            Warning::OrderRequiresOrderedType => f.write_str(
                "Channel order is inappropriate for nominal field, which has no inherent order.",
            ),
        }
    }
}

/// Receiver for warnings. Delivery is fire-and-forget.
pub trait WarningSink {
    fn warn(&mut self, warning: Warning);
}

/// Collects warnings in emission order.
impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(code = warning.code(), "{}", warning);
    }
}
