//! Property tests for normalization and key derivation.

use encoding_model::{Bin, BinParams, Channel, FieldDef};
use encoding_normalization::{FieldKeyOptions, Warning, field, normalize_field_def, title};
use encoding_standards::is_counting_aggregate_op;
use proptest::prelude::*;

fn channel() -> impl Strategy<Value = Channel> {
    proptest::sample::select(Channel::all().to_vec())
}

fn bin() -> impl Strategy<Value = Option<Bin>> {
    prop_oneof![
        Just(None),
        Just(Some(Bin::Flag(true))),
        Just(Some(Bin::Flag(false))),
        (0u32..30).prop_map(|maxbins| Some(Bin::Params(BinParams::default().with_maxbins(maxbins)))),
        (0.0f64..50.0).prop_map(|step| Some(Bin::Params(BinParams::default().with_step(step)))),
        Just(Some(Bin::Params(BinParams {
            nice: Some(true),
            ..BinParams::default()
        }))),
    ]
}

fn optional(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(values).prop_map(str::to_string))
}

const TYPES: &[&str] = &[
    "quantitative",
    "nominal",
    "ordinal",
    "temporal",
    "Q",
    "n",
    "O",
    "t",
];
const AGGREGATES: &[&str] = &["sum", "mean", "count", "distinct", "valid", "max", "bogus", ""];
const NON_COUNTING_AGGREGATES: &[&str] = &["sum", "mean", "max", "argmin", "bogus", ""];
const TIME_UNITS: &[&str] = &["year", "month", "day", "hours", "yearmonthday", "monthdate", ""];

fn field_def(
    types: impl Strategy<Value = Option<String>>,
    aggregates: &'static [&'static str],
) -> impl Strategy<Value = FieldDef> {
    (
        "[a-z][a-z0-9_.]{0,8}",
        types,
        optional(aggregates),
        optional(TIME_UNITS),
        bin(),
    )
        .prop_map(|(name, field_type, aggregate, time_unit, bin)| FieldDef {
            field_type,
            aggregate,
            time_unit,
            bin,
            ..FieldDef::new(name)
        })
}

fn normalize_twice(def: &FieldDef, channel: Channel) -> (FieldDef, FieldDef) {
    let mut warnings: Vec<Warning> = Vec::new();
    let once = normalize_field_def(def, channel, &mut warnings).expect("first pass");
    let twice = normalize_field_def(&once, channel, &mut warnings).expect("second pass");
    (once, twice)
}

proptest! {
    #[test]
    fn normalization_is_idempotent_for_typed_defs(
        def in field_def(proptest::sample::select(TYPES).prop_map(|t| Some(t.to_string())), AGGREGATES),
        channel in channel(),
    ) {
        let (once, twice) = normalize_twice(&def, channel);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_is_idempotent_for_untyped_non_counting_defs(
        def in field_def(Just(None), NON_COUNTING_AGGREGATES),
        channel in channel(),
    ) {
        prop_assume!(!is_counting_aggregate_op(def.aggregate()));
        let (once, twice) = normalize_twice(&def, channel);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_defs_always_carry_a_canonical_type(
        def in field_def(optional(&["Q", "nominal", "geojson", ""]), AGGREGATES),
        channel in channel(),
    ) {
        let mut warnings: Vec<Warning> = Vec::new();
        let resolved = normalize_field_def(&def, channel, &mut warnings).expect("normalize");
        let field_type = resolved.field_type.as_deref().unwrap_or_default();
        prop_assert!(field_type.parse::<encoding_model::FieldType>().is_ok());
    }

    #[test]
    fn field_key_is_total(
        def in field_def(optional(TYPES), AGGREGATES),
        prefix in proptest::option::of("[a-z]{0,3}"),
        suffix in proptest::option::of("[a-z]{0,3}"),
        aggregate in proptest::option::of("[a-z]{0,3}"),
        bin_suffix in proptest::option::of("[a-z]{0,3}"),
        nofn in any::<bool>(),
        expr in proptest::option::of("[a-z]{0,5}"),
    ) {
        let options = FieldKeyOptions { prefix, suffix, aggregate, bin_suffix, nofn, expr };
        let key = field(&def, &options);
        prop_assert!(!key.is_empty());
        let _ = title(&def, &encoding_model::Config::default());
    }
}
