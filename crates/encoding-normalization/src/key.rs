//! Identity keys and display titles for resolved field definitions.

use encoding_model::{Config, FieldDef};
use encoding_standards::{bin_to_string, string_value};

use crate::classify::is_count;

/// Key for a bare `count` aggregate, shared by every count on a chart.
pub const COUNT_KEY: &str = "count_*";

/// Options for [`field`]. Empty strings behave like unset options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldKeyOptions {
    /// Prepended as `<prefix>_`.
    pub prefix: Option<String>,
    /// Appended as `_<suffix>`. Ignored for binned fields.
    pub suffix: Option<String>,
    /// Replaces the aggregate operator name in the function prefix.
    pub aggregate: Option<String>,
    /// Suffix used for binned fields instead of `suffix`.
    pub bin_suffix: Option<String>,
    /// Skip the bin/aggregate/time unit function prefix.
    pub nofn: bool,
    /// Wrap the key as `<expr>["<key>"]`.
    pub expr: Option<String>,
}

impl FieldKeyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_aggregate(mut self, aggregate: impl Into<String>) -> Self {
        self.aggregate = Some(aggregate.into());
        self
    }

    pub fn with_bin_suffix(mut self, bin_suffix: impl Into<String>) -> Self {
        self.bin_suffix = Some(bin_suffix.into());
        self
    }

    pub fn without_fn(mut self) -> Self {
        self.nofn = true;
        self
    }

    pub fn with_expr(mut self, expr: impl Into<String>) -> Self {
        self.expr = Some(expr.into());
        self
    }
}

/// Derive the identity key of a field definition.
///
/// Definitions that compute the same column get the same key: the field
/// path, prefixed by the first of bin, aggregate or time unit present.
///
/// On the binned path the suffix always comes from `bin_suffix`, so a caller
/// `suffix` is discarded even when `bin_suffix` is unset.
pub fn field(field_def: &FieldDef, options: &FieldKeyOptions) -> String {
    let mut suffix = non_empty(options.suffix.as_deref());

    let mut key = if is_count(field_def) {
        COUNT_KEY.to_string()
    } else {
        let base = field_path(field_def);
        let function = if options.nofn {
            None
        } else if let Some(bin) = field_def.bin() {
            suffix = non_empty(options.bin_suffix.as_deref());
            Some(bin_to_string(bin))
        } else if let Some(aggregate) = field_def.aggregate() {
            Some(
                non_empty(options.aggregate.as_deref())
                    .unwrap_or(aggregate)
                    .to_string(),
            )
        } else {
            field_def.time_unit().map(str::to_string)
        };

        match function {
            Some(function) => format!("{function}_{base}"),
            None => base.to_string(),
        }
    };

    if let Some(suffix) = suffix {
        key = format!("{key}_{suffix}");
    }
    if let Some(prefix) = non_empty(options.prefix.as_deref()) {
        key = format!("{prefix}_{key}");
    }
    if let Some(expr) = non_empty(options.expr.as_deref()) {
        key = format!("{expr}[{}]", string_value(&key));
    }
    key
}

/// Derive a human-readable title, e.g. `SUM(price)`.
pub fn title(field_def: &FieldDef, config: &Config) -> String {
    if is_count(field_def) {
        return config.count_title.clone();
    }

    let function = field_def
        .aggregate()
        .or_else(|| field_def.time_unit())
        .or_else(|| field_def.has_bin().then_some("bin"));

    match function {
        Some(function) => format!("{}({})", function.to_uppercase(), field_path(field_def)),
        None => field_path(field_def).to_string(),
    }
}

fn field_path(field_def: &FieldDef) -> &str {
    field_def.field().map_or("", |field| field.as_str())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_model::BinParams;

    #[test]
    fn test_plain_field() {
        let def = FieldDef::new("price").with_type("quantitative");
        assert_eq!(field(&def, &FieldKeyOptions::new()), "price");
        assert_eq!(title(&def, &Config::default()), "price");
    }

    #[test]
    fn test_count_ignores_field_and_function() {
        let def = FieldDef::new("x").with_aggregate("count");
        assert_eq!(field(&def, &FieldKeyOptions::new()), COUNT_KEY);
        assert_eq!(field(&def, &FieldKeyOptions::new().without_fn()), COUNT_KEY);
        assert_eq!(
            field(&def, &FieldKeyOptions::new().with_suffix("end")),
            "count_*_end"
        );
        assert_eq!(title(&def, &Config::default()), "Number of Records");
    }

    #[test]
    fn test_function_priority() {
        let def = FieldDef::new("t")
            .with_aggregate("mean")
            .with_time_unit("month")
            .with_bin(BinParams::default().with_maxbins(10));
        assert_eq!(field(&def, &FieldKeyOptions::new()), "bin_maxbins_10_t");

        let def = FieldDef::new("t").with_aggregate("mean").with_time_unit("month");
        assert_eq!(field(&def, &FieldKeyOptions::new()), "mean_t");
        assert_eq!(
            field(&def, &FieldKeyOptions::new().with_aggregate("average")),
            "average_t"
        );

        let def = FieldDef::new("t").with_time_unit("month");
        assert_eq!(field(&def, &FieldKeyOptions::new()), "month_t");
        assert_eq!(field(&def, &FieldKeyOptions::new().without_fn()), "t");
    }

    #[test]
    fn test_bin_path_replaces_suffix() {
        let def = FieldDef::new("a").with_bin(true);
        let options = FieldKeyOptions::new().with_suffix("end");
        assert_eq!(field(&def, &options), "bin_a");

        let options = options.with_bin_suffix("range");
        assert_eq!(field(&def, &options), "bin_a_range");
    }

    #[test]
    fn test_nofn_keeps_caller_suffix_for_binned_field() {
        let def = FieldDef::new("a").with_bin(true);
        let options = FieldKeyOptions::new().without_fn().with_suffix("end");
        assert_eq!(field(&def, &options), "a_end");
    }

    #[test]
    fn test_titles() {
        let config = Config::default();
        assert_eq!(
            title(&FieldDef::new("p").with_aggregate("sum"), &config),
            "SUM(p)"
        );
        assert_eq!(
            title(&FieldDef::new("d").with_time_unit("yearmonth"), &config),
            "YEARMONTH(d)"
        );
        assert_eq!(
            title(&FieldDef::new("v").with_bin(true), &config),
            "BIN(v)"
        );
        assert_eq!(
            title(&FieldDef::count(), &Config::new().with_count_title("Rows")),
            "Rows"
        );
    }
}
