//! Property tests: library numbering against the reference tables.

use proptest::prelude::*;
use switch_matrix::get_numbering_function_by_name;

mod reference;

use reference::*;

fn check(layout: &str, wiring: Option<&str>, reference: &Reference, row: u32, col: u32) {
    let f = get_numbering_function_by_name(layout, wiring).unwrap();

    let checked = f.channel(row, col).unwrap().to_string();
    let unchecked = f.channel_unchecked(row, col);
    let expected = reference(row, col);

    assert_eq!(checked, expected, "{layout} {wiring:?} ({row}, {col})");
    assert_eq!(unchecked, expected, "{layout} {wiring:?} ({row}, {col})");
}

proptest! {
    #[test]
    fn test_4x32(
        config in prop::sample::select(vec!["M1H", "M1L", "M2H", "M2L"]),
        row in 1u32..=4,
        column in 1u32..=32,
    ) {
        check("4x32", Some(config), &numbering_function_4x32(config), row, column);
    }

    #[test]
    fn test_4x64(
        config in prop::sample::select(vec!["MH", "ML"]),
        row in 1u32..=4,
        column in 1u32..=64,
    ) {
        check("4x64", Some(config), &numbering_function_4x64(config), row, column);
    }

    #[test]
    fn test_4x128(row in 1u32..=4, column in 1u32..=128) {
        check("4x128", None, &numbering_function_4x128(), row, column);
    }

    #[test]
    fn test_8x32(
        config in prop::sample::select(vec!["MH", "ML"]),
        row in 1u32..=8,
        column in 1u32..=32,
    ) {
        check("8x32", Some(config), &numbering_function_8x32(config), row, column);
    }

    #[test]
    fn test_8x64(row in 1u32..=8, column in 1u32..=64) {
        check("8x64", None, &numbering_function_8x64(), row, column);
    }

    #[test]
    fn test_16x32(row in 1u32..=16, column in 1u32..=32) {
        check("16x32", None, &numbering_function_16x32(), row, column);
    }

    #[test]
    fn test_same_function_is_deterministic(
        config in prop::sample::select(vec!["M1H", "M1L", "M2H", "M2L"]),
        row in 1u32..=4,
        column in 1u32..=32,
    ) {
        let f = get_numbering_function_by_name("4x32", Some(config)).unwrap();
        prop_assert_eq!(f.channel(row, column), f.channel(row, column));
        prop_assert_eq!(f.channel_unchecked(row, column), f.channel_unchecked(row, column));
    }

    #[test]
    fn test_locate_round_trip(
        row in 1u32..=8,
        column in 1u32..=32,
        config in prop::sample::select(vec!["MH", "ML"]),
    ) {
        let f = get_numbering_function_by_name("8x32", Some(config)).unwrap();
        let id = f.channel(row, column).unwrap();
        let coordinate = f.locate(id).unwrap();
        prop_assert_eq!((coordinate.row, coordinate.col), (row, column));
    }

    #[test]
    fn test_distinct_coordinates_get_distinct_ids(
        a in (1u32..=16, 1u32..=32),
        b in (1u32..=16, 1u32..=32),
    ) {
        prop_assume!(a != b);
        let f = get_numbering_function_by_name("16x32", None).unwrap();
        prop_assert_ne!(f.channel(a.0, a.1).unwrap(), f.channel(b.0, b.1).unwrap());
    }
}

#[test]
fn test_documented_examples_against_reference() {
    assert_eq!(numbering_function_4x32("M1H")(1, 1), "101");
    assert_eq!(numbering_function_4x32("M2L")(2, 5), "401");
    assert_eq!(numbering_function_4x64("ML")(1, 1), "165");
    assert_eq!(numbering_function_4x128()(3, 10), "510");
    assert_eq!(numbering_function_8x32("MH")(4, 32), "432");
    assert_eq!(numbering_function_16x32()(15, 32), "832");
}
