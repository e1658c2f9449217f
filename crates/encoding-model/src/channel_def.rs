//! Channel definitions: the union of field, value and conditional forms.
//!
//! Deserialization decides the variant from the raw JSON shape in a fixed
//! order: field-shaped first, then conditional, then constant value. The
//! first matching shape wins on ambiguous input, so a field definition that
//! also carries a `condition` stays a field definition.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::field_def::FieldDef;

/// A constant bound to a channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueDef {
    /// `None` when the member is absent; an explicit JSON `null` is a value.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ValueDef {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            extra: Map::new(),
        }
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// The branch of a conditional definition that applies when its predicate
/// (a selection or test kept in the branch's extra members) holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Condition {
    Field(FieldDef),
    Value(ValueDef),
}

impl Condition {
    pub fn from_value(raw: Value) -> Result<Self> {
        if is_field_shaped(&raw) {
            Ok(Self::Field(serde_json::from_value(raw)?))
        } else {
            Ok(Self::Value(serde_json::from_value(raw)?))
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(serde::de::Error::custom)
    }
}

/// A condition plus the constant used when it does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalDef {
    pub condition: Condition,
    #[serde(flatten)]
    pub fallback: ValueDef,
}

/// Anything that can be bound to a channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChannelDef {
    Field(FieldDef),
    Value(ValueDef),
    Conditional(ConditionalDef),
}

impl ChannelDef {
    /// Classify and decode a raw JSON channel definition.
    pub fn from_value(raw: Value) -> Result<Self> {
        if is_field_shaped(&raw) {
            Ok(Self::Field(serde_json::from_value(raw)?))
        } else if raw.get("condition").is_some_and(|condition| !condition.is_null()) {
            Ok(Self::Conditional(serde_json::from_value(raw)?))
        } else {
            Ok(Self::Value(serde_json::from_value(raw)?))
        }
    }

    /// Parse a channel definition from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(raw)
    }
}

impl<'de> Deserialize<'de> for ChannelDef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(serde::de::Error::custom)
    }
}

impl From<FieldDef> for ChannelDef {
    fn from(def: FieldDef) -> Self {
        Self::Field(def)
    }
}

impl From<ValueDef> for ChannelDef {
    fn from(def: ValueDef) -> Self {
        Self::Value(def)
    }
}

impl From<ConditionalDef> for ChannelDef {
    fn from(def: ConditionalDef) -> Self {
        Self::Conditional(def)
    }
}

/// Raw-shape test: a truthy `field` member or a `count` aggregate.
pub fn is_field_shaped(raw: &Value) -> bool {
    raw.get("field").is_some_and(is_truthy)
        || raw.get("aggregate").and_then(Value::as_str) == Some("count")
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
