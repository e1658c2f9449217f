//! Bin parameter formatting and default bin counts.

use encoding_model::{Bin, BinParams, Channel};
use serde_json::Value;

/// Default number of bins for a channel. Facets and legend-driven channels
/// get fewer bins so each one stays distinguishable.
pub fn auto_max_bins(channel: Channel) -> u32 {
    match channel {
        Channel::Row
        | Channel::Column
        | Channel::Size
        | Channel::Color
        | Channel::Opacity
        | Channel::Shape => 6,
        Channel::X
        | Channel::Y
        | Channel::X2
        | Channel::Y2
        | Channel::Text
        | Channel::Tooltip
        | Channel::Detail
        | Channel::Order => 10,
    }
}

/// Render a bin request as an identifier fragment.
///
/// A flag renders as `bin`; explicit parameters append `_<name>_<value>`
/// for each set parameter, with non-word characters replaced by `_`.
///
/// Parameter order is canonical, not the authoring order: typed parameters
/// come first in the declaration order of [`BinParams`], then any other
/// members sorted by name. Two requests with the same parameters always get
/// the same key.
pub fn bin_to_string(bin: &Bin) -> String {
    match bin {
        Bin::Flag(_) => "bin".to_string(),
        Bin::Params(params) => {
            let mut out = String::from("bin");
            for (name, value) in param_entries(params) {
                out.push_str(&var_name(&format!("_{name}_{value}")));
            }
            out
        }
    }
}

fn param_entries(params: &BinParams) -> Vec<(&str, String)> {
    let mut entries = Vec::new();
    if let Some(extent) = &params.extent {
        entries.push(("extent", format_list(extent)));
    }
    if let Some(base) = params.base {
        entries.push(("base", format_number(base)));
    }
    if let Some(step) = params.step {
        entries.push(("step", format_number(step)));
    }
    if let Some(steps) = &params.steps {
        entries.push(("steps", format_list(steps)));
    }
    if let Some(minstep) = params.minstep {
        entries.push(("minstep", format_number(minstep)));
    }
    if let Some(divide) = &params.divide {
        entries.push(("divide", format_list(divide)));
    }
    if let Some(maxbins) = params.maxbins {
        entries.push(("maxbins", maxbins.to_string()));
    }
    if let Some(nice) = params.nice {
        entries.push(("nice", nice.to_string()));
    }
    for (name, value) in &params.extra {
        entries.push((name.as_str(), format_value(value)));
    }
    entries
}

/// Shortest decimal form. Magnitudes below `1e-6` or from `1e21` up use
/// exponent notation with an explicit sign, e.g. `1e-7` and `1e+21`.
fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if value.is_finite() && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Text form of an untyped parameter: strings unquoted, arrays joined by
/// `,`, objects as an opaque marker.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| number.to_string(), format_number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => format_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format_number(*value))
        .collect::<Vec<_>>()
        .join(",")
}

fn var_name(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
