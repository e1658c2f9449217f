//! Output range classification of channels.

use encoding_model::Channel;
use serde::{Deserialize, Serialize};

/// What kind of output range a channel's scale produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    Continuous,
    Discrete,
    /// Either, depending on the scale type (color).
    Flexible,
}

/// Range type of a channel; `None` for channels without a scale.
pub fn range_type(channel: Channel) -> Option<RangeType> {
    match channel {
        // x2 and y2 share the x and y scales.
        Channel::X
        | Channel::Y
        | Channel::X2
        | Channel::Y2
        | Channel::Size
        | Channel::Opacity => Some(RangeType::Continuous),
        // text and tooltip have no scale but discrete output.
        Channel::Row | Channel::Column | Channel::Shape | Channel::Text | Channel::Tooltip => {
            Some(RangeType::Discrete)
        }
        Channel::Color => Some(RangeType::Flexible),
        Channel::Detail | Channel::Order => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_type() {
        assert_eq!(range_type(Channel::Y2), Some(RangeType::Continuous));
        assert_eq!(range_type(Channel::Shape), Some(RangeType::Discrete));
        assert_eq!(range_type(Channel::Color), Some(RangeType::Flexible));
        assert_eq!(range_type(Channel::Detail), None);
        assert_eq!(range_type(Channel::Order), None);
    }
}
