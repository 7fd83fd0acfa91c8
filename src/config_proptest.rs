//! Property-based tests for loader flattening.
//!
//! These tests use proptest to generate arbitrarily nested loader lists and
//! verify that flattening keeps every string whole and drops every container.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{flatten, LoaderSpec};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn loader_spec() -> impl Strategy<Value = LoaderSpec> {
        let leaf = "[a-z_.]{0,12}".prop_map(LoaderSpec::Token);
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(LoaderSpec::Nested)
        })
    }

    /// Reference walk collecting every leaf string.
    fn leaves(spec: &LoaderSpec, out: &mut Vec<String>) {
        match spec {
            LoaderSpec::Token(token) => out.push(token.clone()),
            LoaderSpec::Nested(items) => items.iter().for_each(|item| leaves(item, out)),
        }
    }

    proptest! {
        /// Property: the flat set holds exactly the strings present at any depth
        #[test]
        fn flatten_keeps_exactly_the_leaves(spec in loader_spec()) {
            let mut expected = Vec::new();
            leaves(&spec, &mut expected);
            let expected: BTreeSet<String> = expected.into_iter().collect();

            prop_assert_eq!(flatten(&spec), expected);
        }

        /// Property: strings are never decomposed into characters
        #[test]
        fn flatten_never_splits_strings(token in "[a-z_.]{2,20}", depth in 0usize..6) {
            let mut spec = LoaderSpec::Token(token.clone());
            for _ in 0..depth {
                spec = LoaderSpec::Nested(vec![spec]);
            }

            let tokens = flatten(&spec);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens.contains(&token));
        }

        /// Property: nesting does not change the result
        #[test]
        fn flatten_ignores_grouping(spec in loader_spec()) {
            let wrapped = LoaderSpec::Nested(vec![LoaderSpec::Nested(vec![spec.clone()])]);
            prop_assert_eq!(flatten(&wrapped), flatten(&spec));
        }
    }
}
