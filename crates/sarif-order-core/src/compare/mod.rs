//! Deterministic structural ordering for the SARIF document tree.
//!
//! Every comparer is a stateless, zero-sized value implementing
//! [`Comparer`]. Comparers compose by injection: container comparers take
//! their element comparer as a type parameter, and each record comparer is a
//! fixed tie-break chain over its fields built from primitive, container and
//! nested record comparers.
//!
//! ## Layers
//!
//! - [`identity`]: reference-identity and nullness short-circuits
//! - [`primitive`]: strings, scalars, enums, floats, URIs, JSON values
//! - [`container`]: nullable values, ordered lists, keyed maps
//! - [`record`]: one comparer per record type
//!
//! ## Guarantees
//!
//! - **Strict total order**: reflexive, antisymmetric, transitive; safe for
//!   `sort_by`.
//! - **Equality agreement**: `compare == Equal` iff every declared field is
//!   recursively equal.
//! - **Null first**: `None` sorts before any `Some` value of the same field.
//! - **Pure**: no mutation, no shared state; comparers are `Send + Sync`.

pub mod container;
pub mod identity;
pub mod primitive;
pub mod record;

use std::cmp::Ordering;

pub use container::{list, map, nullable, ListComparer, MapComparer, Nullable};
pub use identity::{reference_compares, try_reference_compares, Nullness};
pub use primitive::{Float, Index, JsonValue, Natural, Ordinal, Rank, UriText};
pub use record::*;

/// A total order over values of `T`.
pub trait Comparer<T: ?Sized>: Send + Sync {
    /// Order `left` relative to `right`
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Structural equality derived from [`Comparer::compare`]
    fn equals(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}
