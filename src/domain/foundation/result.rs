//! Result conventions shared by every domain and application operation.
//!
//! Operations return [`DomainResult`] instead of panicking on expected
//! failures. Composition uses the standard combinators: `map`, `and_then`
//! and `unwrap_or` play the role of map, flat-map and get-or-else. There is
//! no unchecked accessor; a failure is only ever observed by matching on it.

use super::DomainError;

/// Outcome of a domain operation.
pub type DomainResult<T> = Result<T, DomainError>;

/// Collapses a sequence of results into one.
///
/// Yields every success value in order, or the first failure encountered
/// scanning left to right. Results after the first failure are not inspected.
pub fn combine<T, I>(results: I) -> DomainResult<Vec<T>>
where
    I: IntoIterator<Item = DomainResult<T>>,
{
    results.into_iter().collect()
}
