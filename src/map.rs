//! Ordered map type for sections and fields.
//!
//! This module provides [`KeyMap`], a wrapper around [`IndexMap`] whose key hashing and
//! equality are chosen by a [`KeyPolicy`]:
//!
//! - [`CaseSensitive`]: plain string comparison (the default)
//! - [`CaseInsensitive`]: ASCII case folding; the casing used on first insertion is the
//!   one that is kept and written out
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: sections and keys serialize in first-insertion order
//! - **Stable removals**: removing an entry keeps the relative order of the rest
//! - **Custom equality**: lookups go through [`indexmap::Equivalent`], so a `&str` can be
//!   matched against a case-folded key without allocating
//!
//! ## Examples
//!
//! ```rust
//! use inifile::{CaseInsensitive, KeyMap};
//!
//! let mut map: KeyMap<i32, CaseInsensitive> = KeyMap::new();
//! map.insert("Port", 80);
//! map.insert("PORT", 8080);
//!
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("port"), Some(&8080));
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Port"]);
//! ```

use indexmap::{Equivalent, IndexMap};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Strategy deciding when two keys name the same entry.
///
/// `keys_eq` and `hash_key` must agree: keys that compare equal must hash identically.
pub trait KeyPolicy: Clone + Default + fmt::Debug {
    fn keys_eq(a: &str, b: &str) -> bool;
    fn hash_key<H: Hasher>(key: &str, state: &mut H);
}

/// Exact, case-sensitive key matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseSensitive;

impl KeyPolicy for CaseSensitive {
    #[inline]
    fn keys_eq(a: &str, b: &str) -> bool {
        a == b
    }

    #[inline]
    fn hash_key<H: Hasher>(key: &str, state: &mut H) {
        key.hash(state);
    }
}

/// ASCII case-insensitive key matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl KeyPolicy for CaseInsensitive {
    #[inline]
    fn keys_eq(a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    fn hash_key<H: Hasher>(key: &str, state: &mut H) {
        for byte in key.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        // Terminator keeps ("ab", "c") and ("a", "bc") distinct when hashed in sequence.
        state.write_u8(0xff);
    }
}

/// Stored key: the original text plus the policy used to compare it.
#[derive(Clone)]
struct Key<P> {
    name: String,
    policy: PhantomData<P>,
}

impl<P> Key<P> {
    fn new(name: String) -> Self {
        Key {
            name,
            policy: PhantomData,
        }
    }
}

impl<P: KeyPolicy> PartialEq for Key<P> {
    fn eq(&self, other: &Self) -> bool {
        P::keys_eq(&self.name, &other.name)
    }
}

impl<P: KeyPolicy> Eq for Key<P> {}

impl<P: KeyPolicy> Hash for Key<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        P::hash_key(&self.name, state);
    }
}

/// Borrowed lookup key, hashed the same way as [`Key`].
struct Lookup<'a, P>(&'a str, PhantomData<P>);

impl<'a, P> Lookup<'a, P> {
    fn new(name: &'a str) -> Self {
        Lookup(name, PhantomData)
    }
}

impl<P: KeyPolicy> Hash for Lookup<'_, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        P::hash_key(self.0, state);
    }
}

impl<P: KeyPolicy> Equivalent<Key<P>> for Lookup<'_, P> {
    fn equivalent(&self, key: &Key<P>) -> bool {
        P::keys_eq(self.0, &key.name)
    }
}

/// An insertion-ordered map from string keys to `V`, compared according to `P`.
///
/// Keys are stored as given; trimming is the caller's job.
#[derive(Clone)]
pub struct KeyMap<V, P = CaseSensitive> {
    inner: IndexMap<Key<P>, V>,
}

impl<V, P: KeyPolicy> KeyMap<V, P> {
    /// Creates an empty `KeyMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyMap {
            inner: IndexMap::new(),
        }
    }

    /// Creates an empty `KeyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyMap {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`, returning the previous value.
    ///
    /// An existing entry keeps its original key text and position.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        match self.inner.get_mut(&Lookup::<P>::new(key)) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.inner.insert(Key::new(key.to_string()), value);
                None
            }
        }
    }

    /// Returns the value for `key`, inserting `make()` first when it is absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: &str, make: F) -> &mut V {
        let index = match self.inner.get_index_of(&Lookup::<P>::new(key)) {
            Some(index) => index,
            None => self.inner.insert_full(Key::new(key.to_string()), make()).0,
        };
        &mut self.inner[index]
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(&Lookup::<P>::new(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.inner.get_mut(&Lookup::<P>::new(key))
    }

    /// Returns the stored key text and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.inner
            .get_key_value(&Lookup::<P>::new(key))
            .map(|(k, v)| (k.name.as_str(), v))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(&Lookup::<P>::new(key))
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.shift_remove(&Lookup::<P>::new(key))
    }

    /// Keeps only the entries for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &mut V) -> bool,
    {
        self.inner.retain(|k, v| keep(&k.name, v));
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(|k| k.name.as_str())
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> Iter<'_, V, P> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Returns a mutable iterator over the key-value pairs, in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, V, P> {
        IterMut {
            inner: self.inner.iter_mut(),
        }
    }
}

impl<V, P: KeyPolicy> Default for KeyMap<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, P: KeyPolicy> fmt::Debug for KeyMap<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Order-insensitive equality, like `HashMap`.
impl<V: PartialEq, P: KeyPolicy> PartialEq for KeyMap<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map_or(false, |o| v == o))
    }
}

impl<V: Eq, P: KeyPolicy> Eq for KeyMap<V, P> {}

/// Borrowing iterator over a [`KeyMap`].
pub struct Iter<'a, V, P> {
    inner: indexmap::map::Iter<'a, Key<P>, V>,
}

impl<'a, V, P> Iterator for Iter<'a, V, P> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.name.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for Iter<'_, V, P> {}

/// Mutable iterator over a [`KeyMap`]. Keys stay immutable.
pub struct IterMut<'a, V, P> {
    inner: indexmap::map::IterMut<'a, Key<P>, V>,
}

impl<'a, V, P> Iterator for IterMut<'a, V, P> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.name.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for IterMut<'_, V, P> {}

impl<'a, V, P: KeyPolicy> IntoIterator for &'a KeyMap<V, P> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`KeyMap`].
pub struct IntoIter<V, P> {
    inner: indexmap::map::IntoIter<Key<P>, V>,
}

impl<V, P> Iterator for IntoIter<V, P> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.name, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, P> ExactSizeIterator for IntoIter<V, P> {}

impl<V, P: KeyPolicy> IntoIterator for KeyMap<V, P> {
    type Item = (String, V);
    type IntoIter = IntoIter<V, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.inner.into_iter(),
        }
    }
}

impl<K: AsRef<str>, V, P: KeyPolicy> FromIterator<(K, V)> for KeyMap<V, P> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = KeyMap::new();
        for (k, v) in iter {
            map.insert(k.as_ref(), v);
        }
        map
    }
}
