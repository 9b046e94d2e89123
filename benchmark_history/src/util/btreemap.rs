//!
//! Utility functions for `BTreeMap`.
//!

use std::collections::BTreeMap;

/// Intersects two `BTreeMap` instances by key and merges the matching values
/// with the `merger` function.
///
/// # Arguments
///
/// * `map1` - The first map, iterated in key order.
/// * `map2` - The second map, whose matching entries are consumed.
/// * `merger` - A closure taking the key and both values, and returning the
///   merged result.
///
/// # Returns
///
/// An iterator over the merged results, in key order. Keys present in only
/// one of the maps are skipped.
///
/// # Example
///
/// ```rust
/// use benchmark_history::util::btreemap::intersect_map;
///
/// let reference = [("cpt/get", 100), ("uniset/contains", 10), ("uniset/removed", 5)];
/// let candidate = [("cpt/get", 150), ("uniset/contains", 20)];
/// let expected: Vec<_> = [("cpt/get", 50), ("uniset/contains", 10)].into();
/// assert_eq!(
///     intersect_map(reference.into(), candidate.into(), |name, r, c| (name, c - r))
///         .collect::<Vec<_>>(),
///     expected
/// )
/// ```
pub fn intersect_map<K, V1, V2, R>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
    merger: impl Fn(K, V1, V2) -> R,
) -> impl Iterator<Item = R>
where
    K: Ord,
{
    map1.into_iter().filter_map(move |(key, value1)| {
        map2.remove(&key).map(|value2| merger(key, value1, value2))
    })
}
