//! Generic container comparers.
//!
//! Each container comparer is parameterized by the comparer of its elements,
//! so one implementation serves every list and map field of every record.

use super::identity::{reference_compares, try_reference_compares, Nullness};
use super::primitive::Ordinal;
use super::Comparer;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Optional value: `None` sorts before any `Some`, including empty containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<C>(pub C);

impl<T, C: Comparer<T>> Comparer<Option<T>> for Nullable<C> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match try_reference_compares(left, right) {
            Nullness::Decided(ordering) => ordering,
            Nullness::Present(l, r) => self.0.compare(l, r),
        }
    }
}

/// Ordered list: element-wise by position, shorter list first on a tied prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListComparer<C>(pub C);

impl<T, C: Comparer<T>> Comparer<[T]> for ListComparer<C> {
    fn compare(&self, left: &[T], right: &[T]) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        for (l, r) in left.iter().zip(right) {
            let ordering = self.0.compare(l, r);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        left.len().cmp(&right.len())
    }
}

impl<T, C: Comparer<T>> Comparer<Vec<T>> for ListComparer<C> {
    fn compare(&self, left: &Vec<T>, right: &Vec<T>) -> Ordering {
        Comparer::<[T]>::compare(self, left, right)
    }
}

/// Keyed map: entries sorted by ordinal key, then compared like a list of
/// `(key, value)` pairs. Insertion order never matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapComparer<C>(pub C);

impl<C> MapComparer<C> {
    fn compare_entries<'a, V: 'a>(
        &self,
        left: impl Iterator<Item = (&'a String, &'a V)>,
        right: impl Iterator<Item = (&'a String, &'a V)>,
    ) -> Ordering
    where
        C: Comparer<V>,
    {
        let left = canonical_entries(left);
        let right = canonical_entries(right);
        for ((lk, lv), (rk, rv)) in left.iter().zip(&right) {
            let ordering = Ordinal
                .compare(lk.as_str(), rk.as_str())
                .then_with(|| self.0.compare(lv, rv));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        left.len().cmp(&right.len())
    }
}

/// Entries of a map in ordinal key order.
pub fn canonical_entries<'a, V: 'a>(
    entries: impl Iterator<Item = (&'a String, &'a V)>,
) -> Vec<(&'a String, &'a V)> {
    let mut sorted: Vec<_> = entries.collect();
    sorted.sort_unstable_by(|(a, _), (b, _)| Ordinal.compare(a.as_str(), b.as_str()));
    sorted
}

impl<V, S, C: Comparer<V>> Comparer<HashMap<String, V, S>> for MapComparer<C> {
    fn compare(&self, left: &HashMap<String, V, S>, right: &HashMap<String, V, S>) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        self.compare_entries(left.iter(), right.iter())
    }
}

impl<V, C: Comparer<V>> Comparer<BTreeMap<String, V>> for MapComparer<C> {
    fn compare(&self, left: &BTreeMap<String, V>, right: &BTreeMap<String, V>) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        self.compare_entries(left.iter(), right.iter())
    }
}

impl<C> Comparer<serde_json::Map<String, serde_json::Value>> for MapComparer<C>
where
    C: Comparer<serde_json::Value>,
{
    fn compare(
        &self,
        left: &serde_json::Map<String, serde_json::Value>,
        right: &serde_json::Map<String, serde_json::Value>,
    ) -> Ordering {
        if let Some(ordering) = reference_compares(left, right) {
            return ordering;
        }
        self.compare_entries(left.iter(), right.iter())
    }
}

/// Shorthand for an optional field compared with `comparer`
pub const fn nullable<C>(comparer: C) -> Nullable<C> {
    Nullable(comparer)
}

/// Shorthand for an optional list field whose elements use `comparer`
pub const fn list<C>(comparer: C) -> Nullable<ListComparer<C>> {
    Nullable(ListComparer(comparer))
}

/// Shorthand for an optional map field whose values use `comparer`
pub const fn map<C>(comparer: C) -> Nullable<MapComparer<C>> {
    Nullable(MapComparer(comparer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::primitive::Natural;

    #[test]
    fn test_shorter_prefix_sorts_first() {
        assert_eq!(
            ListComparer(Natural).compare(&vec![1, 2], &vec![1, 2, 3]),
            Ordering::Less
        );
    }

    #[test]
    fn test_first_difference_decides() {
        assert_eq!(
            ListComparer(Natural).compare(&vec![1, 3], &vec![1, 2, 9]),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_list_after_none() {
        let empty: Option<Vec<i64>> = Some(Vec::new());
        assert_eq!(list(Natural).compare(&empty, &None), Ordering::Greater);
        assert_eq!(list(Natural).compare(&None, &empty), Ordering::Less);
        assert_eq!(list(Natural).compare(&None::<Vec<i64>>, &None), Ordering::Equal);
    }

    #[test]
    fn test_map_insertion_order_irrelevant() {
        let mut a = HashMap::new();
        a.insert("a".to_string(), 1);
        a.insert("b".to_string(), 2);
        let mut b = HashMap::new();
        b.insert("b".to_string(), 2);
        b.insert("a".to_string(), 1);
        assert_eq!(MapComparer(Natural).compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_map_key_before_value() {
        let a: BTreeMap<String, i64> = [("a".to_string(), 9)].into_iter().collect();
        let b: BTreeMap<String, i64> = [("b".to_string(), 1)].into_iter().collect();
        assert_eq!(MapComparer(Natural).compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_map_value_breaks_key_tie() {
        let a: BTreeMap<String, i64> = [("k".to_string(), 1)].into_iter().collect();
        let b: BTreeMap<String, i64> = [("k".to_string(), 2)].into_iter().collect();
        assert_eq!(MapComparer(Natural).compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_map_subset_sorts_first() {
        let a: BTreeMap<String, i64> = [("a".to_string(), 1)].into_iter().collect();
        let b: BTreeMap<String, i64> = [("a".to_string(), 1), ("b".to_string(), 0)]
            .into_iter()
            .collect();
        assert_eq!(MapComparer(Natural).compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_empty_map_after_none() {
        let empty: Option<HashMap<String, i64>> = Some(HashMap::new());
        assert_eq!(map(Natural).compare(&empty, &None), Ordering::Greater);
    }

    #[test]
    fn test_nullable_delegates_when_present() {
        assert_eq!(nullable(Natural).compare(&Some(1), &Some(2)), Ordering::Less);
    }
}
