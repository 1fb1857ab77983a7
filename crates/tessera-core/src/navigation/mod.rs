//! Foreign-key navigation over caller-supplied snapshots.
//!
//! Finders never own or cache data. Every lookup asks the supplier for a
//! fresh snapshot and scans it in iteration order, so navigation cost is the
//! supplier's cost.

mod backward;
mod finder;
mod trace;


// re-exports
pub use backward::{BackwardFinder, BackwardMatches};
pub use finder::Finder;
pub use trace::{NavigationDirection, NavigationTraceEvent, NavigationTraceSink};

///
/// SnapshotSupplier
///
/// Source of a finite, ordered view of all entities of one table.
/// Implemented for any `Fn() -> impl IntoIterator`.
///

pub trait SnapshotSupplier<T>: Send + Sync {
    type Snapshot: Iterator<Item = T>;

    fn snapshot(&self) -> Self::Snapshot;
}

impl<T, F, I> SnapshotSupplier<T> for F
where
    F: Fn() -> I + Send + Sync,
    I: IntoIterator<Item = T>,
{
    type Snapshot = I::IntoIter;

    fn snapshot(&self) -> Self::Snapshot {
        self().into_iter()
    }
}
