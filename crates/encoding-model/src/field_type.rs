//! Measurement types of encoded fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EncodingError;

/// Canonical measurement type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
    Temporal,
}

impl FieldType {
    /// Canonical full name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Ordinal => "ordinal",
            Self::Quantitative => "quantitative",
            Self::Temporal => "temporal",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses canonical full names only. Short aliases are expanded by the
/// type-name registry before a type is stored on a resolved definition.
impl FromStr for FieldType {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nominal" => Ok(Self::Nominal),
            "ordinal" => Ok(Self::Ordinal),
            "quantitative" => Ok(Self::Quantitative),
            "temporal" => Ok(Self::Temporal),
            _ => Err(EncodingError::InvalidFieldType {
                field_type: Some(s.to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_str_is_strict() {
        assert_eq!(
            "temporal".parse::<FieldType>().unwrap(),
            FieldType::Temporal
        );
        assert!("Q".parse::<FieldType>().is_err());
        assert!("Nominal".parse::<FieldType>().is_err());
    }
}
