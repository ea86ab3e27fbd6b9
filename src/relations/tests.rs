//! Relations Module Tests
//!
//! Covers whitespace cleanup, order-stable deduplication, and the age/name ordering.

#[cfg(test)]
mod tests {
    use crate::relations::normalizer::{normalize_relations, RelationNormalizer};
    use crate::search::types::{PersonRecord, RelationEntry};

    fn rel(name: &str, age: Option<&str>) -> RelationEntry {
        RelationEntry::new(name, age)
    }

    fn names(relations: &[RelationEntry]) -> Vec<&str> {
        relations.iter().map(|r| r.name.as_str()).collect()
    }

    // ============================================================
    // WHITESPACE
    // ============================================================

    #[test]
    fn test_names_and_ages_are_trimmed() {
        let result = normalize_relations(vec![rel("  Janice \t  Whitsitt ", Some(" 79 "))]);

        assert_eq!(result, vec![rel("Janice Whitsitt", Some("79"))]);
    }

    // ============================================================
    // DEDUPLICATION
    // ============================================================

    #[test]
    fn test_duplicates_differing_by_case_and_whitespace_collapse_to_first() {
        let result = normalize_relations(vec![
            rel("Goldie  Whitsitt", Some("75")),
            rel("goldie whitsitt", Some(" 75")),
            rel("GOLDIE WHITSITT ", Some("75")),
        ]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Goldie Whitsitt");
    }

    #[test]
    fn test_same_name_different_age_is_kept() {
        let result = normalize_relations(vec![
            rel("Pat Roe", Some("40")),
            rel("Pat Roe", Some("41")),
            rel("Pat Roe", None),
        ]);

        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_missing_age_and_empty_age_are_duplicates() {
        let result = normalize_relations(vec![rel("Pat Roe", None), rel("pat roe", Some("  "))]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].age, None);
    }

    // ============================================================
    // ORDERING
    // ============================================================

    #[test]
    fn test_sorted_by_age_descending() {
        let result = normalize_relations(vec![
            rel("Emily Carter", Some("15")),
            rel("Lola Sonnenberg", Some("104")),
            rel("Michael Carter", Some("45")),
        ]);

        assert_eq!(
            names(&result),
            vec!["Lola Sonnenberg", "Michael Carter", "Emily Carter"]
        );
    }

    #[test]
    fn test_missing_and_non_numeric_ages_sort_last() {
        let result = normalize_relations(vec![
            rel("Unknown Age", None),
            rel("Text Age", Some("forty")),
            rel("Young", Some("1")),
            rel("Zero", Some("0")),
        ]);

        assert_eq!(names(&result), vec!["Young", "Zero", "Text Age", "Unknown Age"]);
    }

    #[test]
    fn test_ages_beyond_i64_still_sort_numerically() {
        let result = normalize_relations(vec![
            rel("Zed", None),
            rel("Ann", Some("99999999999999999999")),
            rel("Bob", Some("5")),
        ]);

        assert_eq!(names(&result), vec!["Ann", "Bob", "Zed"]);
    }

    #[test]
    fn test_signed_and_zero_padded_ages_compare_by_value() {
        let result = normalize_relations(vec![
            rel("Missing", None),
            rel("Padded", Some("007")),
            rel("Plus", Some("+12")),
            rel("Minus Two", Some("-2")),
            rel("Huge Negative", Some("-99999999999999999999")),
            rel("Minus Zero", Some("-0")),
        ]);

        assert_eq!(
            names(&result),
            vec!["Plus", "Padded", "Minus Zero", "Missing", "Minus Two", "Huge Negative"]
        );
    }

    #[test]
    fn test_age_ties_break_by_case_insensitive_name() {
        let result = normalize_relations(vec![
            rel("charlie", Some("30")),
            rel("Bravo", Some("30")),
            rel("alpha", Some("30")),
            rel("delta", None),
            rel("Echo", None),
        ]);

        assert_eq!(names(&result), vec!["alpha", "Bravo", "charlie", "delta", "Echo"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let input = vec![
            rel(" b  person", Some("x")),
            rel("A Person", Some(" 12 ")),
            rel("a person", Some("12")),
            rel("C Person", None),
            rel("d person", Some("90")),
        ];

        let once = normalize_relations(input);
        let twice = normalize_relations(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_list() {
        assert!(normalize_relations(Vec::new()).is_empty());
    }

    // ============================================================
    // RECORD-LEVEL
    // ============================================================

    #[test]
    fn test_normalizer_applies_to_both_lists() {
        let mut record = PersonRecord::new("Name Search", "James E Whitsitt");
        record.first_name = "James".to_string();
        record.relatives = vec![
            rel("Goldie Whitsitt", Some("75")),
            rel("Janice Whitsitt", Some("79")),
            rel("janice  whitsitt", Some("79")),
        ];
        record.associates = vec![rel("B", None), rel("A", Some("2"))];

        let record = RelationNormalizer::new().normalize(record);

        assert_eq!(
            record.relatives,
            vec![
                rel("Janice Whitsitt", Some("79")),
                rel("Goldie Whitsitt", Some("75"))
            ]
        );
        assert_eq!(names(&record.associates), vec!["A", "B"]);
        assert_eq!(record.first_name, "James");
        assert_eq!(record.input_given, "James E Whitsitt");
    }
}
