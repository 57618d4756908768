use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};

use crate::path::{Path, PathHash};

/// A test item that hashes to a chosen path. Its `Hash` impl feeds only the
/// synthetic hash, so distinct items can genuinely collide.
#[derive(Clone, Copy)]
pub struct RawCollider {
    identity: usize,
    hash: PathHash,
}

impl RawCollider {
    pub fn new(identity: usize, hash: PathHash) -> Self {
        Self { identity, hash }
    }

    /// Creation index; also the item's position in insertion order.
    pub fn identity(&self) -> usize {
        self.identity
    }

    pub fn hash_value(&self) -> PathHash {
        self.hash
    }

    pub fn path(&self) -> Path {
        Path::from_hash(self.hash)
    }
}

impl PartialEq for RawCollider {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.hash == other.hash
    }
}

impl Eq for RawCollider {}

impl Hash for RawCollider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash.0);
    }
}

impl fmt::Debug for RawCollider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.identity, self.hash)
    }
}

/// Hasher that reports the last `u64` written to it, so a `RawCollider`
/// lands in a hash table under its synthetic hash.
#[derive(Default, Clone, Copy)]
pub struct PathHasher {
    value: u64,
}

impl Hasher for PathHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.value = self.value.rotate_left(8) ^ byte as u64;
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.value = value;
    }

    fn finish(&self) -> u64 {
        self.value
    }
}

pub type BuildPathHasher = BuildHasherDefault<PathHasher>;
