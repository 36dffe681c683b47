use super::RefComparer;
use crate::compare::{reference_compares, Comparer, JsonValue, ListComparer, MapComparer, Ordinal};
use crate::model::Ref;
use std::cmp::Ordering;

impl Comparer<Ref> for RefComparer {
    /// Variant ordinal first. Payloads are only compared when both sides hold
    /// the same variant.
    fn compare(&self, left: &Ref, right: &Ref) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        match (left, right) {
            (Ref::AnythingMapArray(l), Ref::AnythingMapArray(r)) => {
                ListComparer(MapComparer(JsonValue)).compare(l, r)
            }
            (Ref::String(l), Ref::String(r)) => Comparer::<String>::compare(&Ordinal, l, r),
            _ => left.discriminant().cmp(&right.discriminant()),
        }
    }
}
