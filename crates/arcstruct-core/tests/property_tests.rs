//! Property-based tests for classification, collation and reporting.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cmp::Ordering;

use arcstruct_core::InspectionConfig;
use arcstruct_core::classify::classify;
use arcstruct_core::classify::final_segment;
use arcstruct_core::formats::RawEntry;
use arcstruct_core::inspection::collect;
use arcstruct_core::report::collation::compare;
use arcstruct_core::report::collation::sort;
use arcstruct_core::report::render_structure;
use proptest::prelude::*;

proptest! {
    /// Every string classifies, and exactly one of directory/extension holds.
    #[test]
    fn prop_classification_is_total(path in ".*") {
        let c = classify(&path);
        prop_assert_eq!(c.is_directory, c.extension.is_none());
        if let Some(ext) = c.extension {
            prop_assert!(ext.starts_with('.'));
            prop_assert!(final_segment(&path).ends_with(ext));
            prop_assert!(!ext.contains('/'));
        }
    }

    /// The extension starts at the first dot of the final segment.
    #[test]
    fn prop_extension_from_first_dot(
        dirs in prop::collection::vec("[a-z.]{1,8}", 0..4),
        stem in "[a-zA-Z0-9_]{1,10}",
        ext in "(\\.[a-z0-9]{1,4}){1,3}",
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&stem);
        path.push_str(&ext);
        prop_assert_eq!(classify(&path).extension, Some(ext.as_str()));
    }

    /// Collation is antisymmetric and only equal for identical strings.
    #[test]
    fn prop_collation_antisymmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
    }

    /// Collation is transitive over sorted triples.
    #[test]
    fn prop_collation_transitive(mut v in prop::collection::vec("[a-zA-Z0-9./_ -]{0,8}", 3)) {
        sort(&mut v);
        prop_assert_ne!(compare(&v[0], &v[1]), Ordering::Greater);
        prop_assert_ne!(compare(&v[1], &v[2]), Ordering::Greater);
        prop_assert_ne!(compare(&v[0], &v[2]), Ordering::Greater);
    }

    /// Sorting twice gives the same order.
    #[test]
    fn prop_sort_idempotent(v in prop::collection::vec("[a-zA-Z0-9./_-]{0,12}", 0..32)) {
        let mut once = v.clone();
        sort(&mut once);
        let mut twice = once.clone();
        sort(&mut twice);
        prop_assert_eq!(once, twice);
    }

    /// Directories are slash-terminated and input order does not matter.
    #[test]
    fn prop_structure_independent_of_input_order(
        paths in prop::collection::vec("[a-zA-Z]{1,6}(/[a-zA-Z]{1,6}){0,2}(\\.[a-z]{1,3})?/?", 1..24)
    ) {
        let config = InspectionConfig::default();
        let forward: Vec<_> = paths.iter().map(|p| Ok(RawEntry::unflagged(p.as_str()))).collect();
        let backward: Vec<_> = paths.iter().rev().map(|p| Ok(RawEntry::unflagged(p.as_str()))).collect();

        let a = collect(Box::new(forward.into_iter()), "zip", &config).unwrap();
        let b = collect(Box::new(backward.into_iter()), "zip", &config).unwrap();

        let doc_a = render_structure(&a.entries);
        let doc_b = render_structure(&b.entries);
        prop_assert_eq!(doc_a.lines(), doc_b.lines());
        prop_assert_eq!(doc_a.len(), paths.len());

        for entry in &a.entries {
            if entry.is_directory {
                prop_assert!(doc_a.lines().contains(&entry.display_path()));
                prop_assert!(entry.display_path().ends_with('/'));
            }
        }
    }

    /// Extension sets never hold duplicates.
    #[test]
    fn prop_extensions_unique(
        names in prop::collection::vec("[a-z]{1,4}\\.(txt|md|png|tar\\.gz)", 0..40)
    ) {
        let config = InspectionConfig::default();
        let raw: Vec<_> = names.iter().map(|p| Ok(RawEntry::unflagged(p.as_str()))).collect();
        let collection = collect(Box::new(raw.into_iter()), "zip", &config).unwrap();

        let exts = collection.extensions.as_slice();
        for (i, ext) in exts.iter().enumerate() {
            prop_assert!(!exts[i + 1..].contains(ext));
        }
        prop_assert!(exts.len() <= 4);
    }
}
