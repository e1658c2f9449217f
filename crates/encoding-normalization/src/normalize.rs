//! Resolution of user-authored channel definitions.
//!
//! [`normalize_field_def`] runs a fixed sequence of repairs. Each step
//! builds on the previous step's output and never touches the caller's
//! value: aggregate validation, time unit canonicalization, bin defaults,
//! type resolution, then the advisory channel compatibility check.

use std::borrow::Cow;

use encoding_model::{
    Bin, BinParams, Channel, ChannelDef, Condition, ConditionalDef, FieldDef, FieldType, Result,
};
use encoding_standards::{
    auto_max_bins, full_type_name, is_aggregate_op, is_counting_aggregate_op, normalize_time_unit,
};

use crate::classify::{default_type, is_field_reference};
use crate::compatibility::{Compatibility, channel_compatibility};
use crate::warning::{Warning, WarningSink};

/// A resolved value together with the warnings raised while resolving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

/// Resolve any channel definition.
///
/// Field definitions are normalized; a conditional whose condition is a
/// field definition gets only its condition normalized, with the fallback
/// passed through. Everything else is returned unchanged.
///
/// # Errors
///
/// Only contract violations surface as errors; see [`normalize_field_def`].
pub fn normalize<S>(channel_def: &ChannelDef, channel: Channel, sink: &mut S) -> Result<ChannelDef>
where
    S: WarningSink + ?Sized,
{
    match channel_def {
        ChannelDef::Field(field_def) if is_field_reference(field_def) => Ok(ChannelDef::Field(
            normalize_field_def(field_def, channel, sink)?,
        )),
        ChannelDef::Conditional(ConditionalDef {
            condition: Condition::Field(condition),
            fallback,
        }) if is_field_reference(condition) => Ok(ChannelDef::Conditional(ConditionalDef {
            condition: Condition::Field(normalize_field_def(condition, channel, sink)?),
            fallback: fallback.clone(),
        })),
        _ => Ok(channel_def.clone()),
    }
}

/// Resolve a channel definition, collecting its warnings.
pub fn normalize_with_report(
    channel_def: &ChannelDef,
    channel: Channel,
) -> Result<Normalized<ChannelDef>> {
    let mut warnings = Vec::new();
    let value = normalize(channel_def, channel, &mut warnings)?;
    Ok(Normalized { value, warnings })
}

/// Repair and complete a field definition for `channel`.
///
/// The returned definition always carries a canonical type. Every repair
/// emits one warning to `sink`; compatibility problems are reported but do
/// not alter the result.
///
/// # Errors
///
/// The pipeline always assigns a canonical type before the compatibility
/// check, so the classifier's `InvalidFieldType` cannot be reached from
/// here in practice; it is still propagated rather than swallowed.
pub fn normalize_field_def<S>(field_def: &FieldDef, channel: Channel, sink: &mut S) -> Result<FieldDef>
where
    S: WarningSink + ?Sized,
{
    let mut def = field_def.clone();

    // Drop invalid aggregate
    if let Some(aggregate) = def
        .aggregate()
        .filter(|aggregate| !is_aggregate_op(aggregate))
        .map(str::to_string)
    {
        tracing::debug!(%channel, aggregate = %aggregate, "Dropping invalid aggregate");
        sink.warn(Warning::InvalidAggregate { aggregate });
        def.aggregate = None;
    }

    // Canonicalize time unit
    let replaced = def
        .time_unit()
        .and_then(|unit| match normalize_time_unit(unit) {
            Cow::Owned(replacement) => Some((unit.to_string(), replacement)),
            Cow::Borrowed(_) => None,
        });
    if let Some((time_unit, replacement)) = replaced {
        def.time_unit = Some(replacement.clone());
        sink.warn(Warning::DayReplacedWithDate {
            time_unit,
            replacement,
        });
    }

    // Fill in bin defaults
    if let Some(bin) = def.bin().map(|bin| normalize_bin(bin, channel)) {
        def.bin = Some(bin);
    }

    // Resolve type
    match def.field_type().and_then(full_type_name) {
        Some(full_type) => {
            def.field_type = Some(full_type.as_str().to_string());
            if full_type != FieldType::Quantitative && is_counting_aggregate_op(def.aggregate()) {
                let aggregate = def.aggregate().unwrap_or_default().to_string();
                tracing::debug!(%channel, %aggregate, "Forcing quantitative type for counting aggregate");
                sink.warn(Warning::InvalidFieldTypeForCountAggregate {
                    field_type: full_type.as_str().to_string(),
                    aggregate,
                });
                def.field_type = Some(FieldType::Quantitative.as_str().to_string());
            }
        }
        None => {
            let default = default_type(&def, channel);
            tracing::debug!(%channel, default_type = %default, "Assigning default field type");
            sink.warn(Warning::EmptyOrInvalidFieldType {
                field_type: def.field_type.take(),
                channel,
                default_type: default,
            });
            def.field_type = Some(default.as_str().to_string());
        }
    }

    if let Compatibility::Incompatible(warning) = channel_compatibility(&def, channel)? {
        sink.warn(warning);
    }

    Ok(def)
}

/// Give a bin request an explicit bin count when it has neither a count
/// nor a step.
pub fn normalize_bin(bin: &Bin, channel: Channel) -> Bin {
    match bin {
        Bin::Flag(true) => Bin::Params(BinParams::default().with_maxbins(auto_max_bins(channel))),
        Bin::Params(params) if !params.has_maxbins() && !params.has_step() => {
            Bin::Params(params.clone().with_maxbins(auto_max_bins(channel)))
        }
        _ => bin.clone(),
    }
}
