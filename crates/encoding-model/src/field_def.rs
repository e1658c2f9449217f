//! Field definitions: "plot this data attribute on this channel".
//!
//! Members are kept in their user-authored string form until the
//! normalizer resolves them. Accessors follow chart-spec truthiness: an
//! empty string or a `false` bin flag counts as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target of a repeat placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatTarget {
    Row,
    Column,
}

impl RepeatTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// Placeholder for a field that a repeat operator substitutes later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepeatRef {
    pub repeat: RepeatTarget,
}

/// Field reference: either a concrete attribute path or a repeat placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Name(String),
    Repeat(RepeatRef),
}

impl Field {
    /// The attribute path, if this is a concrete field.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Repeat(_) => None,
        }
    }

    /// Whether the reference names something. An empty path does not.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Name(name) => !name.is_empty(),
            Self::Repeat(_) => true,
        }
    }

    /// Text used when the field is spliced into keys and titles.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Repeat(repeat) => repeat.repeat.as_str(),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Explicit binning parameters.
///
/// Member order is the order used when the parameters are rendered into a
/// key, see `bin_to_string` in the standards crate. Members without a typed
/// slot are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minstep: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divide: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxbins: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BinParams {
    pub fn with_maxbins(mut self, maxbins: u32) -> Self {
        self.maxbins = Some(maxbins);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Whether a bin-count hint is set. Zero counts as unset.
    pub fn has_maxbins(&self) -> bool {
        self.maxbins.is_some_and(|maxbins| maxbins != 0)
    }

    /// Whether a bin-step hint is set. Zero counts as unset.
    pub fn has_step(&self) -> bool {
        self.step.is_some_and(|step| step != 0.0)
    }
}

/// Binning request: a flag for default binning or explicit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bin {
    Flag(bool),
    Params(BinParams),
}

impl Bin {
    /// A `false` flag means "no binning".
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Flag(enabled) => *enabled,
            Self::Params(_) => true,
        }
    }
}

impl From<bool> for Bin {
    fn from(enabled: bool) -> Self {
        Self::Flag(enabled)
    }
}

impl From<BinParams> for Bin {
    fn from(params: BinParams) -> Self {
        Self::Params(params)
    }
}

/// Binding of a data attribute to a channel, with optional aggregation,
/// time bucketing and binning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<Bin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Value>,
    /// Members this crate does not interpret (title, axis, legend, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDef {
    /// Create a definition for the given field.
    pub fn new(field: impl Into<Field>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    /// Create a bare `count` aggregate, which needs no field.
    pub fn count() -> Self {
        Self {
            aggregate: Some("count".to_string()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn with_aggregate(mut self, aggregate: impl Into<String>) -> Self {
        self.aggregate = Some(aggregate.into());
        self
    }

    pub fn with_time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.time_unit = Some(time_unit.into());
        self
    }

    pub fn with_bin(mut self, bin: impl Into<Bin>) -> Self {
        self.bin = Some(bin.into());
        self
    }

    pub fn with_scale(mut self, scale: Value) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_sort(mut self, sort: Value) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The field reference, if it names something.
    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref().filter(|field| field.is_present())
    }

    /// Declared type, if non-empty.
    pub fn field_type(&self) -> Option<&str> {
        non_empty(self.field_type.as_deref())
    }

    /// Aggregate operator name, if non-empty.
    pub fn aggregate(&self) -> Option<&str> {
        non_empty(self.aggregate.as_deref())
    }

    /// Time unit name, if non-empty.
    pub fn time_unit(&self) -> Option<&str> {
        non_empty(self.time_unit.as_deref())
    }

    /// Binning request, unless absent or a `false` flag.
    pub fn bin(&self) -> Option<&Bin> {
        self.bin.as_ref().filter(|bin| bin.is_enabled())
    }

    pub fn has_bin(&self) -> bool {
        self.bin().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
