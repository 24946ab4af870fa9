//! Failures surfaced by set, view, and cursor operations.
//!
//! Every failure here is synchronous and leaves the set exactly as it was:
//! either an operation completes with all invariants restored, or it reports
//! an `Error` without having mutated anything.

/// The ways an [`AvlSet`][crate::AvlSet] operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value passed to [`add`][crate::AvlSet::add] is already in the set.
    #[error("value is already present in the set")]
    DuplicateValue,

    /// [`first`][crate::AvlSet::first] or [`last`][crate::AvlSet::last] was
    /// called on an empty set or view.
    #[error("the set is empty")]
    Empty,

    /// A sub-range was requested with `from >= to`, which would denote an
    /// empty or inverted half-open interval.
    #[error("range bounds are inverted or denote an empty interval")]
    InvalidRange,

    /// A mutation through a [`RangeView`][crate::RangeView] named a value
    /// outside the view's bounds.
    #[error("value lies outside the view's bounds")]
    OutOfBounds,

    /// [`Cursor::remove`][crate::Cursor::remove] was called before any
    /// element had been yielded, or twice without an intervening step.
    #[error("cursor has no current element")]
    NoCurrentElement,
}
