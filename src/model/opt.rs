//! Present-or-absent value wrapper.
//!
//! [`MustOpt`] marks fields that may legitimately not apply (a track
//! without an album, a playlist without a cover). Unlike `Option`, it
//! offers no way to silently fall back to a default value: callers check
//! [`MustOpt::valid`] and then take the value with [`MustOpt::must`].

use crate::error::{Error, Result};

/// A value that is either present or absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MustOpt<T> {
    Present(T),
    Absent,
}

impl<T> MustOpt<T> {
    /// Wrap a present value.
    pub fn new(value: T) -> Self {
        Self::Present(value)
    }

    /// An absent value.
    pub fn empty() -> Self {
        Self::Absent
    }

    /// Whether a value is present.
    pub fn valid(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the contained value.
    ///
    /// Fails with [`Error::EmptyValueAccess`] if absent.
    pub fn must(&self) -> Result<&T> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(Self::empty_access()),
        }
    }

    /// Borrowing view for pattern matching.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    fn empty_access() -> Error {
        Error::EmptyValueAccess {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl<T> From<Option<T>> for MustOpt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value() {
        let opt = MustOpt::new(5);
        assert!(opt.valid());
        assert_eq!(*opt.must().unwrap(), 5);
    }

    #[test]
    fn test_absent_value_fails_on_must() {
        let opt: MustOpt<String> = MustOpt::empty();
        assert!(!opt.valid());
        let err = opt.must().unwrap_err();
        assert!(matches!(err, Error::EmptyValueAccess { .. }));
        assert!(err.to_string().contains("String"));
    }

    #[test]
    fn test_absent_is_not_zero() {
        // An absent number and a present zero are different things
        assert_ne!(MustOpt::<i32>::empty(), MustOpt::new(0));
    }

    #[test]
    fn test_from_option() {
        assert!(MustOpt::from(Some("x")).valid());
        assert!(!MustOpt::<&str>::from(None).valid());
        assert_eq!(MustOpt::new(3).as_option(), Some(&3));
    }
}
