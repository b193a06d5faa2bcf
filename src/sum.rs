use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
    num::NonZeroUsize,
    thread,
};

use crate::number::Number;

/// Sum the values of the map.
///
/// Keys only need the equality and hashing contract of a [`HashMap`] key.
/// The result does not depend on the iteration order for integers. For floats,
/// rounding may differ in the last bits between orders.
///
/// An empty map sums to [`Number::ZERO`].
#[must_use]
pub fn sum_numbers<K, V, S>(map: &HashMap<K, V, S>) -> V
where
    K: Eq + Hash,
    V: Number,
    S: BuildHasher,
{
    map.values().fold(V::ZERO, |sum, value| sum.accumulate(*value))
}

/// Add together the integer values of the map.
#[must_use]
pub fn sum_ints<S: BuildHasher>(map: &HashMap<String, i64, S>) -> i64 {
    let mut sum = 0_i64;
    for value in map.values() {
        sum = sum.wrapping_add(*value);
    }
    sum
}

/// Add together the floating-point values of the map.
#[must_use]
pub fn sum_floats<S: BuildHasher>(map: &HashMap<String, f64, S>) -> f64 {
    let mut sum = 0.0_f64;
    for value in map.values() {
        sum += value;
    }
    sum
}

/// Sum the values of the map on up to `n_shards` scoped threads.
///
/// Values are split into contiguous shards, each shard is summed independently,
/// and the partial sums are then combined. The integer result is the same as
/// [`sum_numbers`] for any number of shards.
#[must_use]
pub fn sum_sharded<K, V, S>(map: &HashMap<K, V, S>, n_shards: NonZeroUsize) -> V
where
    K: Eq + Hash,
    V: Number,
    S: BuildHasher,
{
    let values: Vec<V> = map.values().copied().collect();
    if n_shards.get() == 1 || values.len() <= 1 {
        return values.into_iter().fold(V::ZERO, V::accumulate);
    }
    let shard_size = values.len().div_ceil(n_shards.get());
    thread::scope(|scope| {
        let handles: Vec<_> = values
            .chunks(shard_size)
            .map(|shard| {
                scope.spawn(move || shard.iter().fold(V::ZERO, |sum, value| sum.accumulate(*value)))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
            .fold(V::ZERO, V::accumulate)
    })
}

impl<T> SumValues for T where T: ?Sized {}

/// Sum the values of any iterator over `(key, value)` pairs.
pub trait SumValues {
    fn sum_values<K, V>(self) -> V
    where
        Self: Iterator<Item = (K, V)> + Sized,
        V: Number,
    {
        self.fold(V::ZERO, |sum, (_, value)| sum.accumulate(value))
    }
}
