//! Visual encoding channels.
//!
//! The channel enumeration is closed: every consumer matches it without a
//! wildcard arm, and a token outside the set fails when it is parsed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EncodingError;

/// A named visual encoding slot that a field or constant can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    X,
    Y,
    X2,
    Y2,
    Color,
    Opacity,
    Size,
    Shape,
    Text,
    Tooltip,
    Detail,
    Order,
    Row,
    Column,
}

impl Channel {
    /// All channels, in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::X,
            Self::Y,
            Self::X2,
            Self::Y2,
            Self::Color,
            Self::Opacity,
            Self::Size,
            Self::Shape,
            Self::Text,
            Self::Tooltip,
            Self::Detail,
            Self::Order,
            Self::Row,
            Self::Column,
        ]
    }

    /// Channel token as it appears in a chart specification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::X2 => "x2",
            Self::Y2 => "y2",
            Self::Color => "color",
            Self::Opacity => "opacity",
            Self::Size => "size",
            Self::Shape => "shape",
            Self::Text => "text",
            Self::Tooltip => "tooltip",
            Self::Detail => "detail",
            Self::Order => "order",
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| EncodingError::UnknownChannel(s.to_string()))
    }
}
