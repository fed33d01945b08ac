//! Hash table with separate chaining.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::types::{PrimerError, PrimerResult, DEFAULT_BUCKET_COUNT};

/// Key-value map that resolves collisions by chaining pairs in buckets.
///
/// A key lives in bucket `hash(key) % bucket_count`. The hash function is
/// supplied as a [`BuildHasher`]; the default is the standard library's
/// randomly seeded SipHash. The bucket count is fixed at construction.
#[derive(Clone)]
pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    hasher: S,
    len: usize,
}

impl<K, V> HashTable<K, V, RandomState> {
    /// Create a table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::empty(DEFAULT_BUCKET_COUNT, RandomState::new())
    }

    /// Create a table with `bucket_count` buckets.
    pub fn with_buckets(bucket_count: usize) -> PrimerResult<Self> {
        Self::with_buckets_and_hasher(bucket_count, RandomState::new())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Create a table with `bucket_count` buckets and a custom hash function.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> PrimerResult<Self> {
        if bucket_count == 0 {
            return Err(PrimerError::InvalidBucketCount(bucket_count));
        }
        Ok(Self::empty(bucket_count, hasher))
    }

    fn empty(bucket_count: usize, hasher: S) -> Self {
        log::debug!("Creating hash table with {} buckets", bucket_count);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            hasher,
            len: 0,
        }
    }

    /// Number of key-value pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate over all pairs, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    /// Bucket index for `key`.
    fn bucket_of(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Insert or update a pair. Returns the previous value for `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, existing)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &K) -> PrimerResult<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| not_found(key))
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> PrimerResult<&mut V> {
        let index = self.bucket_of(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| not_found(key))
    }

    /// Remove `key` and return its value.
    pub fn delete(&mut self, key: &K) -> PrimerResult<V> {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| not_found(key))?;
        self.len -= 1;
        // Keep chain order.
        Ok(bucket.remove(pos).1)
    }

    /// Whether `key` is present. Never fails.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }
}

fn not_found<K: fmt::Debug>(key: &K) -> PrimerError {
    PrimerError::KeyNotFound(format!("{:?}", key))
}

impl<K, V> Default for HashTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buckets.iter()).finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Display for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashTable({{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", k, v)?;
        }
        write!(f, "}})")
    }
}
