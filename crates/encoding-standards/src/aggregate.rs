//! Aggregate operator registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reduction operators accepted in the `aggregate` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    Argmax,
    Argmin,
    Average,
    Count,
    Distinct,
    Max,
    Mean,
    Median,
    Min,
    Missing,
    Q1,
    Q3,
    Ci0,
    Ci1,
    Stderr,
    Stdev,
    Stdevp,
    Sum,
    Valid,
    Values,
    Variance,
    Variancep,
}

impl AggregateOp {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Argmax,
            Self::Argmin,
            Self::Average,
            Self::Count,
            Self::Distinct,
            Self::Max,
            Self::Mean,
            Self::Median,
            Self::Min,
            Self::Missing,
            Self::Q1,
            Self::Q3,
            Self::Ci0,
            Self::Ci1,
            Self::Stderr,
            Self::Stdev,
            Self::Stdevp,
            Self::Sum,
            Self::Valid,
            Self::Values,
            Self::Variance,
            Self::Variancep,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argmax => "argmax",
            Self::Argmin => "argmin",
            Self::Average => "average",
            Self::Count => "count",
            Self::Distinct => "distinct",
            Self::Max => "max",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Min => "min",
            Self::Missing => "missing",
            Self::Q1 => "q1",
            Self::Q3 => "q3",
            Self::Ci0 => "ci0",
            Self::Ci1 => "ci1",
            Self::Stderr => "stderr",
            Self::Stdev => "stdev",
            Self::Stdevp => "stdevp",
            Self::Sum => "sum",
            Self::Valid => "valid",
            Self::Values => "values",
            Self::Variance => "variance",
            Self::Variancep => "variancep",
        }
    }

    /// Counting operators always produce a quantitative result, whatever the
    /// type of the field they count.
    pub fn is_counting(&self) -> bool {
        matches!(
            self,
            Self::Count | Self::Valid | Self::Missing | Self::Distinct
        )
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregateOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("Unknown aggregate operator: {s}"))
    }
}

/// Membership test against the operator registry. Names are case-sensitive.
pub fn is_aggregate_op(name: &str) -> bool {
    name.parse::<AggregateOp>().is_ok()
}

/// Whether `name` is a registered counting operator.
pub fn is_counting_aggregate_op(name: Option<&str>) -> bool {
    name.and_then(|name| name.parse::<AggregateOp>().ok())
        .is_some_and(|op| op.is_counting())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_membership() {
        assert!(is_aggregate_op("sum"));
        assert!(is_aggregate_op("variancep"));
        assert!(!is_aggregate_op("Sum"));
        assert!(!is_aggregate_op("total"));
    }

    #[test]
    fn test_counting_ops() {
        for name in ["count", "valid", "missing", "distinct"] {
            assert!(is_counting_aggregate_op(Some(name)), "{name}");
        }
        assert!(!is_counting_aggregate_op(Some("mean")));
        assert!(!is_counting_aggregate_op(Some("bogus")));
        assert!(!is_counting_aggregate_op(None));
    }
}
