//! Integration tests for the size query.

use guardio::{Measurable, SizeError, length_of};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn a_sequence_of_five_elements_measures_five() {
    assert_eq!(length_of(&[10, 20, 30, 40, 50]), Ok(5));
}

#[test]
fn file_metadata_measures_the_file_length() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sized");
    std::fs::write(&path, b"twelve bytes").unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert_eq!(length_of(&metadata), Ok(12));
}

#[test]
fn an_unrepresentable_length_is_overflow() {
    struct Oversized;
    impl Measurable for Oversized {
        fn raw_len(&self) -> u128 {
            (usize::MAX as u128) + 1
        }
    }

    assert_eq!(
        length_of(&Oversized),
        Err(SizeError::Overflow {
            actual: (usize::MAX as u128) + 1
        })
    );
}

#[test]
fn the_query_borrows_and_the_value_survives() {
    let value = String::from("still here");
    assert_eq!(length_of(&value), Ok(10));
    assert_eq!(value, "still here");
}
