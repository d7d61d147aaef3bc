use proptest::prelude::*;
use strab_map::{SignalMatcher, build_patterns, normalize_code};

proptest! {
    #[test]
    fn original_is_always_the_last_pattern(code in "\\PC{0,24}") {
        let norm = normalize_code(&code);
        let patterns = build_patterns(&norm);
        prop_assert_eq!(patterns.last(), Some(&code.trim().to_string()));
        if !norm.is_parsed() {
            prop_assert_eq!(patterns.len(), 1);
        }
    }

    #[test]
    fn parsed_letters_are_uppercase(letters in "[a-zA-Z]{1,3}", digits in "[0-9]{1,3}") {
        let norm = normalize_code(&format!("{letters} {digits}"));
        prop_assert!(norm.is_parsed());
        prop_assert_eq!(norm.letters, letters.to_uppercase());
        prop_assert_eq!(norm.numbers, digits);
    }

    #[test]
    fn resolve_counts_every_query(
        codes in proptest::collection::vec("\\PC{0,12}", 1..20),
        pool in proptest::collection::vec("[A-Za-z_ -]{0,16}\\.(svg|png)", 0..8),
    ) {
        let mut matcher = SignalMatcher::new(pool);
        for code in &codes {
            let _ = matcher.resolve(code);
        }
        let stats = matcher.counters();
        prop_assert_eq!(stats.total_queries, codes.len() as u64);
        prop_assert!(stats.cache_hits + stats.not_found <= stats.total_queries);
        prop_assert_eq!(stats.total_queries - stats.cache_hits, matcher.cache_len() as u64);
    }
}
