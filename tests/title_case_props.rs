// tests/title_case_props.rs
use proptest::prelude::*;
use unicode_scrape::core::text::title_case;

proptest! {
    #[test]
    fn title_case_is_idempotent(s in "[A-Za-z0-9 ,'()+-]{0,48}") {
        let once = title_case(&s);
        prop_assert_eq!(title_case(&once), once);
    }

    #[test]
    fn title_case_is_idempotent_beyond_ascii(s in "[A-Za-zÀ-ÿΑ-ωА-я0-9 '-]{0,32}") {
        let once = title_case(&s);
        prop_assert_eq!(title_case(&once), once);
    }

    #[test]
    fn title_case_keeps_non_letters(s in "[A-Z ]{1,32}") {
        let out = title_case(&s);
        prop_assert_eq!(out.to_uppercase(), s.clone());
        prop_assert_eq!(out.chars().count(), s.chars().count());
    }
}
