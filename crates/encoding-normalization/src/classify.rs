//! Shape discrimination and discreteness classification.
//!
//! Predicates over [`ChannelDef`] keep the precedence used when a raw
//! definition is decoded: field shape, then value shape, then the
//! conditional unwrap.

use encoding_model::{
    Channel, ChannelDef, Condition, EncodingError, Field, FieldDef, FieldType, Result,
};
use encoding_standards::{RangeType, is_discrete_by_default, range_type};

/// A field definition refers to data when it names a field or is a bare
/// `count`.
pub(crate) fn is_field_reference(field_def: &FieldDef) -> bool {
    field_def.field().is_some() || is_count(field_def)
}

pub fn is_field_def(channel_def: &ChannelDef) -> bool {
    matches!(channel_def, ChannelDef::Field(field_def) if is_field_reference(field_def))
}

/// True when a `value` member is present. An explicit `null` counts.
pub fn is_value_def(channel_def: &ChannelDef) -> bool {
    match channel_def {
        ChannelDef::Field(field_def) => field_def.extra.contains_key("value"),
        ChannelDef::Value(value_def) => value_def.value.is_some(),
        ChannelDef::Conditional(conditional) => conditional.fallback.value.is_some(),
    }
}

pub fn is_conditional_def(channel_def: &ChannelDef) -> bool {
    match channel_def {
        ChannelDef::Field(field_def) => has_condition_member(&field_def.extra),
        ChannelDef::Value(value_def) => has_condition_member(&value_def.extra),
        ChannelDef::Conditional(_) => true,
    }
}

/// True for conditionals whose condition is itself a field definition.
///
/// Agrees with [`get_field_def`]: a `condition` member carried in the extra
/// members of a field or value definition is opaque and never counts.
pub fn has_condition_field_def(channel_def: &ChannelDef) -> bool {
    get_conditional_field_def(channel_def).is_some()
}

fn has_condition_member(extra: &serde_json::Map<String, serde_json::Value>) -> bool {
    extra
        .get("condition")
        .is_some_and(|condition| !condition.is_null())
}

/// Repeat placeholders are substituted elsewhere and never treated as a
/// concrete field path.
pub fn is_repeat_ref(field: &Field) -> bool {
    matches!(field, Field::Repeat(_))
}

pub fn is_count(field_def: &FieldDef) -> bool {
    field_def.aggregate.as_deref() == Some("count")
}

/// A field definition carrying scale or sort settings.
pub fn is_scale_field_def(field_def: &FieldDef) -> bool {
    field_def.scale.as_ref().is_some_and(|scale| !scale.is_null())
        || field_def.sort.as_ref().is_some_and(|sort| !sort.is_null())
}

/// The field definition of a channel definition: the definition itself, or
/// the field-shaped condition of a conditional.
pub fn get_field_def(channel_def: &ChannelDef) -> Option<&FieldDef> {
    match channel_def {
        ChannelDef::Field(field_def) if is_field_reference(field_def) => Some(field_def),
        _ => get_conditional_field_def(channel_def),
    }
}

fn get_conditional_field_def(channel_def: &ChannelDef) -> Option<&FieldDef> {
    match channel_def {
        ChannelDef::Conditional(conditional) => match &conditional.condition {
            Condition::Field(field_def) if is_field_reference(field_def) => Some(field_def),
            Condition::Field(_) | Condition::Value(_) => None,
        },
        ChannelDef::Field(_) | ChannelDef::Value(_) => None,
    }
}

/// Whether a resolved field maps to a discrete domain.
///
/// Binned quantitative fields are discrete; temporal fields depend on their
/// time unit.
///
/// # Errors
///
/// [`EncodingError::InvalidFieldType`] if the type is missing or not a
/// canonical full name. Normalized definitions always carry one.
pub fn is_discrete(field_def: &FieldDef) -> Result<bool> {
    let field_type = field_def
        .field_type()
        .ok_or_else(|| EncodingError::InvalidFieldType {
            field_type: field_def.field_type.clone(),
        })?
        .parse::<FieldType>()?;

    Ok(match field_type {
        FieldType::Nominal | FieldType::Ordinal => true,
        FieldType::Quantitative => field_def.has_bin(),
        FieldType::Temporal => is_discrete_by_default(field_def.time_unit()),
    })
}

pub fn is_continuous(field_def: &FieldDef) -> Result<bool> {
    Ok(!is_discrete(field_def)?)
}

/// Type to assume when a definition declares none.
pub fn default_type(field_def: &FieldDef, channel: Channel) -> FieldType {
    if field_def.time_unit().is_some() {
        return FieldType::Temporal;
    }
    if field_def.has_bin() {
        return FieldType::Quantitative;
    }
    match range_type(channel) {
        Some(RangeType::Continuous) => FieldType::Quantitative,
        Some(RangeType::Discrete) => FieldType::Nominal,
        // color
        Some(RangeType::Flexible) => FieldType::Nominal,
        None => FieldType::Quantitative,
    }
}
