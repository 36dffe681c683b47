//! Identity and nullness short-circuits.
//!
//! These run before any structural work. Identity is only a fast path:
//! operands that are equal but distinct always fall through to the
//! field-by-field rule.

use std::cmp::Ordering;

/// Outcome of the nullness check on two optional operands
#[derive(Debug)]
pub enum Nullness<'a, T> {
    /// Ordering fixed without looking inside either operand
    Decided(Ordering),
    /// Both operands present; structural comparison must decide
    Present(&'a T, &'a T),
}

/// `Some(Equal)` when both references point at the same instance.
pub fn reference_compares<T: ?Sized>(left: &T, right: &T) -> Option<Ordering> {
    std::ptr::eq(left, right).then_some(Ordering::Equal)
}

/// Identity first, then nullness: `None` sorts before any `Some`.
pub fn try_reference_compares<'a, T>(left: &'a Option<T>, right: &'a Option<T>) -> Nullness<'a, T> {
    if let Some(ordering) = reference_compares(left, right) {
        return Nullness::Decided(ordering);
    }
    match (left, right) {
        (None, None) => Nullness::Decided(Ordering::Equal),
        (None, Some(_)) => Nullness::Decided(Ordering::Less),
        (Some(_), None) => Nullness::Decided(Ordering::Greater),
        (Some(l), Some(r)) => Nullness::Present(l, r),
    }
}
