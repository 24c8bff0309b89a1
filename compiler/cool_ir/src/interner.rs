//! Sharded string interner.
//!
//! Provides O(1) interning and lookup. Shards are individually locked so one
//! interner can back several scanners running over different files.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Shard exceeded capacity.
    #[error("interner shard {shard_idx} exceeded capacity: {count} strings, max is {max}", max = Name::MAX_LOCAL)]
    ShardOverflow { shard_idx: usize, count: usize },
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }

    /// Next free local index, or an overflow error.
    fn next_local(&self, shard_idx: usize) -> Result<u32, InternError> {
        u32::try_from(self.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: self.strings.len(),
            })
    }
}

/// Sharded string interner.
///
/// Equal strings always intern to equal [`Name`]s; distinct strings never
/// share one.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner holding only the empty string.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        Self {
            shards,
            total_count: AtomicUsize::new(1),
        }
    }

    /// Compute shard for a string based on its hash.
    ///
    /// The empty string always lands in shard 0 so it matches [`Name::EMPTY`].
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    fn find(&self, shard_idx: usize, s: &str) -> Option<Name> {
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Name::new(shard_idx as u32, local))
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    fn insert(&self, shard_idx: usize, owned: String) -> Result<Name, InternError> {
        let mut guard = self.shards[shard_idx].write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(owned.as_str()) {
            return Ok(Name::new(shard_idx as u32, local));
        }

        let local = guard.next_local(shard_idx)?;
        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(owned.into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx as u32, local))
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    #[inline]
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        match self.find(shard_idx, s) {
            Some(name) => Ok(name),
            None => self.insert(shard_idx, s.to_owned()),
        }
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Try to intern an owned String without copying it a second time.
    pub fn try_intern_owned(&self, s: String) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(&s);
        match self.find(shard_idx, &s) {
            Some(name) => Ok(name),
            None => self.insert(shard_idx, s),
        }
    }

    /// Intern an owned String, avoiding double allocation.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern_owned` for fallible interning.
    pub fn intern_owned(&self, s: String) -> Name {
        self.try_intern_owned(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// All interned strings are leaked, so the reference outlives the guard.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned string names.
///
/// Lets consumers resolve handles without depending on the concrete
/// interner type.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests;
