use std::fmt;
use std::str::FromStr;

use crate::error::{FixtureError, Result};
use crate::layout::{self, FANOUT, MAX_DEPTH};

/// A root-to-leaf sequence of bucket indices, zero padded to the full trie
/// depth.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    buckets: [u8; MAX_DEPTH],
}

impl Path {
    pub fn normalize(spec: &str) -> Result<Self> {
        let len = spec.chars().count();
        if len >= MAX_DEPTH {
            return Err(FixtureError::PathTooLong {
                path: spec.to_owned(),
                len,
                max: MAX_DEPTH,
            });
        }
        let mut buckets = [0; MAX_DEPTH];
        for (slot, c) in buckets.iter_mut().zip(spec.chars()) {
            *slot = layout::digit_value(c).ok_or_else(|| FixtureError::InvalidDigit {
                path: spec.to_owned(),
                digit: c,
                fanout: FANOUT,
            })?;
        }
        Ok(Self { buckets })
    }

    pub fn from_hash(hash: PathHash) -> Self {
        let mut buckets = [0; MAX_DEPTH];
        for (level, slot) in buckets.iter_mut().enumerate() {
            *slot = hash.bucket(level);
        }
        Self { buckets }
    }

    pub fn hash(&self) -> PathHash {
        let mut value = 0u64;
        for (level, &bucket) in self.buckets.iter().enumerate() {
            debug_assert!(bucket as u64 <= layout::level_mask(level));
            value |= (bucket as u64 & layout::level_mask(level)) << layout::level_shift(level);
        }
        PathHash(value)
    }

    pub fn buckets(&self) -> &[u8; MAX_DEPTH] {
        &self.buckets
    }

    pub fn prefix(&self, len: usize) -> &[u8] {
        &self.buckets[..len]
    }

    /// One past the deepest non-zero bucket.
    pub fn depth(&self) -> usize {
        self.buckets
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |i| i + 1)
    }
}

impl FromStr for Path {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::normalize(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &bucket in &self.buckets {
            write!(f, "{}", layout::digit_char(bucket))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Path({})", self)
    }
}

/// Synthetic hash value whose bit fields spell out a `Path`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathHash(pub u64);

impl PathHash {
    pub fn bucket(self, level: usize) -> u8 {
        ((self.0 >> layout::level_shift(level)) & layout::level_mask(level)) as u8
    }
}

impl fmt::Display for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&Path::from_hash(*self), f)
    }
}

impl fmt::Debug for PathHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PathHash({})", self)
    }
}
