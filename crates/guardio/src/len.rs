//! Size query over any measurable value.
//!
//! [`Measurable`] is the seam: a type that exposes no size operation does
//! not implement it, which makes "value has no length" a compile-time
//! caller error rather than a runtime case. The single runtime failure is
//! a true length that does not fit the platform's size integer.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::{CStr, OsStr};

use crate::error::{SizeError, SizeResult};

/// A value whose length can be queried without taking ownership.
pub trait Measurable {
    /// The value's true length, in whatever unit the value counts itself
    /// in (elements, bytes, ...). Wide enough that no implementor needs to
    /// saturate or lie.
    fn raw_len(&self) -> u128;
}

/// Compute the length of `value`.
///
/// Invokes the value's size operation exactly once. Returns
/// [`SizeError::Overflow`] only when the true length cannot be represented
/// as a `usize` on this platform.
pub fn length_of<T: Measurable + ?Sized>(value: &T) -> SizeResult<usize> {
    let raw = value.raw_len();
    usize::try_from(raw).map_err(|_| SizeError::Overflow { actual: raw })
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn raw_len(&self) -> u128 {
        (**self).raw_len()
    }
}

impl<T> Measurable for [T] {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<T, const N: usize> Measurable for [T; N] {
    fn raw_len(&self) -> u128 {
        N as u128
    }
}

impl Measurable for str {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl Measurable for String {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<T> Measurable for Vec<T> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<T> Measurable for VecDeque<T> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<K, V, S> Measurable for HashMap<K, V, S> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<K, V> Measurable for BTreeMap<K, V> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<T, S> Measurable for HashSet<T, S> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl<T> Measurable for BTreeSet<T> {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl Measurable for OsStr {
    fn raw_len(&self) -> u128 {
        self.len() as u128
    }
}

impl Measurable for CStr {
    fn raw_len(&self) -> u128 {
        self.to_bytes().len() as u128
    }
}

impl Measurable for std::fs::Metadata {
    /// File length in bytes; a `u64` on every platform, so this is where
    /// overflow is reachable on 32-bit targets.
    fn raw_len(&self) -> u128 {
        u128::from(self.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::{Measurable, length_of};
    use crate::error::SizeError;

    #[test]
    fn sequences_report_their_element_count() {
        assert_eq!(length_of(&[1, 2, 3, 4, 5]), Ok(5));
        assert_eq!(length_of(&vec!["a", "b"]), Ok(2));
        assert_eq!(length_of("héllo"), Ok(6));
    }

    #[test]
    fn maps_report_their_entry_count() {
        let map: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into();
        assert_eq!(length_of(&map), Ok(2));
    }

    #[test]
    fn empty_values_report_zero() {
        assert_eq!(length_of(""), Ok(0));
        assert_eq!(length_of(&Vec::<u8>::new()), Ok(0));
    }

    #[test]
    fn a_length_past_the_platform_width_is_overflow() {
        struct Galactic;
        impl Measurable for Galactic {
            fn raw_len(&self) -> u128 {
                u128::from(u64::MAX) + 1
            }
        }

        assert_eq!(
            length_of(&Galactic),
            Err(SizeError::Overflow {
                actual: u128::from(u64::MAX) + 1
            })
        );
    }

    #[test]
    fn the_exact_platform_maximum_still_fits() {
        struct Max;
        impl Measurable for Max {
            fn raw_len(&self) -> u128 {
                usize::MAX as u128
            }
        }
        assert_eq!(length_of(&Max), Ok(usize::MAX));
    }

    #[test]
    fn repeated_queries_are_stable() {
        let value = vec![0u8; 7];
        let first = length_of(&value);
        let second = length_of(&value);
        assert_eq!(first, second);
        assert_eq!(first, Ok(7));
    }
}
