//! Array-specific error types.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors raised by the array itself, as opposed to its elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access with an index that is not below the current length.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the array at the time of the access.
        len: usize,
    },
    /// The requested capacity cannot be represented as an allocation
    /// (more than `isize::MAX` bytes, or the growth computation overflowed).
    CapacityOverflow {
        /// Number of element slots requested.
        requested: usize,
    },
    /// The global allocator could not provide the requested region.
    AllocFailed {
        /// Layout of the region that could not be allocated.
        layout: Layout,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: requested {requested} slots")
            }
            Self::AllocFailed { layout } => {
                write!(
                    f,
                    "allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for ArrayError {}

/// Failure of a `try_*` operation that constructs elements from a
/// caller-supplied fallible closure.
///
/// Keeps the container's own failures separate from whatever the element
/// constructor reported, so callers can match on the kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TryBuildError<E> {
    /// The array could not obtain storage.
    Array(ArrayError),
    /// The element constructor returned an error.
    Element(E),
}

impl<E> From<ArrayError> for TryBuildError<E> {
    fn from(err: ArrayError) -> Self {
        Self::Array(err)
    }
}

impl<E: fmt::Display> fmt::Display for TryBuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(err) => write!(f, "{err}"),
            Self::Element(err) => write!(f, "element construction failed: {err}"),
        }
    }
}

impl<E: Error + 'static> Error for TryBuildError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Array(err) => Some(err),
            Self::Element(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom")
        }
    }

    impl Error for Boom {}

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = ArrayError::OutOfRange { index: 10, len: 5 };
        assert_eq!(err.to_string(), "index out of range: index 10, length 5");
    }

    #[test]
    fn alloc_failed_reports_layout() {
        let layout = Layout::array::<u64>(4).unwrap();
        let err = ArrayError::AllocFailed { layout };
        assert_eq!(err.to_string(), "allocation of 32 bytes (align 8) failed");
    }

    #[test]
    fn build_error_source_chains_to_inner() {
        let err: TryBuildError<Boom> = TryBuildError::Element(Boom);
        assert_eq!(err.source().unwrap().to_string(), "boom");
        assert_eq!(err.to_string(), "element construction failed: boom");

        let err: TryBuildError<Boom> = ArrayError::CapacityOverflow { requested: 7 }.into();
        assert!(matches!(
            err,
            TryBuildError::Array(ArrayError::CapacityOverflow { requested: 7 })
        ));
    }
}
