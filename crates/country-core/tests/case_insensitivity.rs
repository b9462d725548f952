//! Property-based tests for case-insensitive resolution of identifiers.
//!
//! Every Catalog entity must resolve to itself from its alpha-2 code, alpha-3
//! code and English name, whatever the casing of the token.

use std::sync::LazyLock;

use country_core::Countries;
use proptest::prelude::*;

static COUNTRIES: LazyLock<Countries> =
    LazyLock::new(|| Countries::embedded().expect("embedded catalog"));

fn recase(value: &str, upper: &[bool]) -> String {
    value
        .chars()
        .zip(upper.iter().cycle())
        .map(|(c, &up)| {
            if up {
                c.to_uppercase().collect::<String>()
            } else {
                c.to_lowercase().collect::<String>()
            }
        })
        .collect()
}

fn casing_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..8)
}

proptest! {
    #[test]
    fn identifiers_resolve_in_any_case(slot in 0usize..249, upper in casing_strategy()) {
        let countries = &*COUNTRIES;
        let entities = countries.all().as_slice();
        let country = entities[slot % entities.len()];

        for property in ["alpha2", "alpha3", "name_en"] {
            let value = countries
                .get(country, property)
                .unwrap()
                .and_then(|value| value.as_str())
                .unwrap()
                .to_string();
            let token = recase(&value, &upper);
            prop_assert_eq!(countries.resolve(token.as_str()).unwrap(), country, "{}", token);
        }
    }

    #[test]
    fn numeric_codes_resolve_to_their_entity(slot in 0usize..249) {
        let countries = &*COUNTRIES;
        let entities = countries.all().as_slice();
        let country = entities[slot % entities.len()];
        let code = countries.numeric_code(country).unwrap();
        prop_assert_eq!(countries.resolve(code).unwrap(), country);
    }
}
