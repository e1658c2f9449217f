//! Per-channel legality of resolved field definitions.

use encoding_model::{Channel, FieldDef, Result};

use crate::classify::{is_continuous, is_discrete};
use crate::warning::Warning;

/// Outcome of a compatibility check. Incompatibility is advisory: callers
/// report the warning and keep using the definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    Incompatible(Warning),
}

impl Compatibility {
    pub fn is_compatible(&self) -> bool {
        matches!(self, Self::Compatible)
    }

    pub fn warning(&self) -> Option<&Warning> {
        match self {
            Self::Compatible => None,
            Self::Incompatible(warning) => Some(warning),
        }
    }
}

/// Check whether a fully resolved field definition suits `channel`.
///
/// # Errors
///
/// Propagates [`encoding_model::EncodingError::InvalidFieldType`] when the
/// rule for `channel` classifies discreteness and the type is unresolved.
pub fn channel_compatibility(field_def: &FieldDef, channel: Channel) -> Result<Compatibility> {
    let compatibility = match channel {
        Channel::Row | Channel::Column => {
            // Bucketed time is not strictly continuous, so a time unit is
            // tolerated on facets.
            if is_continuous(field_def)? && field_def.time_unit().is_none() {
                Compatibility::Incompatible(Warning::FacetChannelShouldBeDiscrete { channel })
            } else {
                Compatibility::Compatible
            }
        }
        Channel::X
        | Channel::Y
        | Channel::Color
        | Channel::Text
        | Channel::Detail
        | Channel::Tooltip => Compatibility::Compatible,
        Channel::Opacity | Channel::Size | Channel::X2 | Channel::Y2 => {
            if is_discrete(field_def)? && !field_def.has_bin() {
                Compatibility::Incompatible(Warning::DiscreteChannelIncompatible { channel })
            } else {
                Compatibility::Compatible
            }
        }
        Channel::Shape => {
            if field_def.field_type.as_deref() != Some("nominal") {
                Compatibility::Incompatible(Warning::ShapeRequiresNominal)
            } else {
                Compatibility::Compatible
            }
        }
        Channel::Order => {
            if field_def.field_type.as_deref() == Some("nominal") {
                Compatibility::Incompatible(Warning::OrderRequiresOrderedType)
            } else {
                Compatibility::Compatible
            }
        }
    };
    Ok(compatibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_model::EncodingError;

    fn typed(field_type: &str) -> FieldDef {
        FieldDef::new("f").with_type(field_type)
    }

    #[test]
    fn test_facets_require_discrete() {
        let result = channel_compatibility(&typed("quantitative"), Channel::Row).unwrap();
        assert_eq!(
            result.warning(),
            Some(&Warning::FacetChannelShouldBeDiscrete {
                channel: Channel::Row
            })
        );
        assert!(
            channel_compatibility(&typed("ordinal"), Channel::Column)
                .unwrap()
                .is_compatible()
        );
    }

    #[test]
    fn test_facets_tolerate_time_unit() {
        let yearly = typed("temporal").with_time_unit("year");
        assert!(
            channel_compatibility(&yearly, Channel::Row)
                .unwrap()
                .is_compatible()
        );
        assert!(
            !channel_compatibility(&typed("temporal"), Channel::Row)
                .unwrap()
                .is_compatible()
        );
    }

    #[test]
    fn test_position_and_color_always_compatible() {
        for channel in [
            Channel::X,
            Channel::Y,
            Channel::Color,
            Channel::Text,
            Channel::Detail,
            Channel::Tooltip,
        ] {
            assert!(
                channel_compatibility(&typed("nominal"), channel)
                    .unwrap()
                    .is_compatible()
            );
        }
    }

    #[test]
    fn test_continuous_channels_reject_discrete() {
        let result = channel_compatibility(&typed("nominal"), Channel::Size).unwrap();
        assert_eq!(
            result,
            Compatibility::Incompatible(Warning::DiscreteChannelIncompatible {
                channel: Channel::Size
            })
        );

        let binned = typed("quantitative").with_bin(true);
        assert!(
            channel_compatibility(&binned, Channel::Opacity)
                .unwrap()
                .is_compatible()
        );
        assert!(
            channel_compatibility(&typed("quantitative"), Channel::X2)
                .unwrap()
                .is_compatible()
        );
    }

    #[test]
    fn test_shape_and_order() {
        assert!(
            channel_compatibility(&typed("nominal"), Channel::Shape)
                .unwrap()
                .is_compatible()
        );
        assert_eq!(
            channel_compatibility(&typed("ordinal"), Channel::Shape)
                .unwrap()
                .warning(),
            Some(&Warning::ShapeRequiresNominal)
        );
        assert_eq!(
            channel_compatibility(&typed("nominal"), Channel::Order)
                .unwrap()
                .warning(),
            Some(&Warning::OrderRequiresOrderedType)
        );
        assert!(
            channel_compatibility(&typed("ordinal"), Channel::Order)
                .unwrap()
                .is_compatible()
        );
    }

    #[test]
    fn test_unresolved_type_is_fatal_where_discreteness_matters() {
        let raw = FieldDef::new("f").with_type("q");
        assert!(matches!(
            channel_compatibility(&raw, Channel::Size),
            Err(EncodingError::InvalidFieldType { .. })
        ));
        // x never classifies discreteness
        assert!(channel_compatibility(&raw, Channel::X).unwrap().is_compatible());
    }
}
