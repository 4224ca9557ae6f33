//! Contiguous growable array built directly on raw allocation primitives.
//!
//! [`DynArray`] plays the role of `Vec<T>` but manages its own storage
//! through `std::alloc` and `std::ptr`, keeping allocation (raw slots) and
//! construction (live values) separate. This crate is the only one in the
//! workspace that contains `unsafe` code, and only in `raw`, `array` and
//! `into_iter`.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T>
//! ├── RawBuf<T>     (owns the allocation, never touches elements)
//! ├── len           ([0, len) live, [len, capacity) raw)
//! └── InitGuard<T>  (rollback of partially constructed runs)
//! ```
//!
//! # Failure model
//!
//! - [`ArrayError::OutOfRange`] is returned only by checked access
//!   ([`DynArray::at`]).
//! - Storage failures surface as [`ArrayError::CapacityOverflow`] or
//!   [`ArrayError::AllocFailed`] from the `try_*` methods; the other methods
//!   panic or abort the way standard collections do.
//! - Element construction failures are either panics (from `Clone`,
//!   `Default` or a closure) or the caller's own error type wrapped in
//!   [`TryBuildError::Element`].
//!
//! In all cases a growing operation that fails leaves the array as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod into_iter;
mod macros;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::GrowthPolicy;
pub use error::{ArrayError, TryBuildError};
pub use into_iter::IntoIter;
