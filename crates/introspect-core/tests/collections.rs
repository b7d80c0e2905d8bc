//! Tests for set conversion and zero values

use std::collections::HashSet;

use introspect_core::collections::{slice_to_set, zero_value};
use introspect_core::error::IntrospectError;

#[test]
fn test_slice_to_set_lenient_deduplicates()
{
    let set = slice_to_set([1, 2, 2, 3], false).expect("lenient conversion never fails");
    assert_eq!(set, HashSet::from([1, 2, 3]));
}

#[test]
fn test_slice_to_set_strict_names_duplicate()
{
    let error = slice_to_set([1, 2, 2, 3], true).unwrap_err();
    assert_eq!(error, IntrospectError::DuplicateElement("2".to_string()));
    assert_eq!(error.to_string(), "duplicate element: 2");
}

#[test]
fn test_slice_to_set_strict_reports_first_duplicate()
{
    let error = slice_to_set(["a", "b", "b", "a"], true).unwrap_err();
    assert_eq!(error.to_string(), "duplicate element: \"b\"");
}

#[test]
fn test_slice_to_set_strict_without_duplicates()
{
    let set = slice_to_set(vec!["x".to_string(), "y".to_string()], true).expect("no duplicates");
    assert_eq!(set.len(), 2);
    assert!(set.contains("x"));
    assert!(set.contains("y"));
}

#[test]
fn test_slice_to_set_empty()
{
    for strict in [false, true] {
        let set = slice_to_set(Vec::<u8>::new(), strict).expect("empty input");
        assert!(set.is_empty());
    }
}

#[test]
fn test_slice_to_set_accepts_borrowed_items()
{
    let values = [10, 20, 10];
    let set = slice_to_set(values.iter(), false).expect("lenient conversion never fails");
    assert_eq!(set.len(), 2);
    assert!(set.contains(&&10));
}

#[derive(Debug, Default, PartialEq)]
struct Settings
{
    retries: u32,
    name: String,
    tags: Vec<String>,
}

#[test]
fn test_zero_value()
{
    assert_eq!(zero_value::<i32>(), 0);
    assert!(!zero_value::<bool>());
    assert_eq!(zero_value::<String>(), "");
    assert_eq!(zero_value::<Option<u8>>(), None);
    let settings = zero_value::<Settings>();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.retries, 0);
    assert!(settings.name.is_empty());
    assert!(settings.tags.is_empty());
    assert!(zero_value::<Vec<u8>>().is_empty());
}
