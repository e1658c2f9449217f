//! Field type name aliases.

use encoding_model::FieldType;

/// Expand a type name, full or single-letter, to its canonical type.
/// Matching is case-insensitive; unknown names expand to `None`.
pub fn full_type_name(name: &str) -> Option<FieldType> {
    match name.to_lowercase().as_str() {
        "q" | "quantitative" => Some(FieldType::Quantitative),
        "t" | "temporal" => Some(FieldType::Temporal),
        "o" | "ordinal" => Some(FieldType::Ordinal),
        "n" | "nominal" => Some(FieldType::Nominal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_type_name() {
        assert_eq!(full_type_name("Q"), Some(FieldType::Quantitative));
        assert_eq!(full_type_name("n"), Some(FieldType::Nominal));
        assert_eq!(full_type_name("Temporal"), Some(FieldType::Temporal));
        assert_eq!(full_type_name("ordinal"), Some(FieldType::Ordinal));
        assert_eq!(full_type_name("geo"), None);
    }
}
