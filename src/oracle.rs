use std::cmp::Ordering;

use hashbrown::HashSet;

use crate::expand::Entry;
use crate::layout::MAX_DEPTH;
use crate::path::Path;

/// Prefixes (including full paths) shared by more than one item. Each one
/// is a spot where the trie must hold a child node instead of a leaf.
pub struct CollidingPrefixes<'a> {
    prefixes: HashSet<&'a [u8]>,
}

impl<'a> CollidingPrefixes<'a> {
    pub fn detect(paths: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut seen = HashSet::new();
        let mut prefixes = HashSet::new();
        for path in paths {
            for len in 1..=MAX_DEPTH {
                let prefix = path.prefix(len);
                if !seen.insert(prefix) {
                    prefixes.insert(prefix);
                }
            }
        }
        Self { prefixes }
    }

    pub fn contains(&self, prefix: &[u8]) -> bool {
        self.prefixes.contains(prefix)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

// Orders paths the way a preorder walk of the trie visits them. Within a
// node, leaf entries come first in bucket order, followed by child nodes in
// bucket order:
// ```
//              root
//        /    |     |     \
//      [1]   [3]   (2)   (42*2)      [x] leaf, (x) child node
//                 /   \
//               [20] [21]
// ```
// visits 1, 3, 20, 21, 42, 42.
//
// A prefix shared with another item means descending into a child at that
// level, so an item still colliding sorts after one that has already
// settled into a leaf slot of the same node.
pub fn compare(a: &Path, b: &Path, colliding: &CollidingPrefixes) -> Ordering {
    let levels = a.buckets().iter().zip(b.buckets().iter()).enumerate();
    for (i, (x, y)) in levels {
        let ac = colliding.contains(a.prefix(i + 1));
        let bc = colliding.contains(b.prefix(i + 1));
        match (ac, bc) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => (),
        }
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Stable sort into expected iteration order; fully colliding entries keep
/// their relative input order.
pub fn sort(entries: &mut [Entry], colliding: &CollidingPrefixes) {
    entries.sort_by(|a, b| compare(&a.path, &b.path, colliding));
}

pub fn iteration_order(entries: &[Entry]) -> Vec<Entry> {
    let colliding = CollidingPrefixes::detect(entries.iter().map(|e| &e.path));
    let mut sorted = entries.to_vec();
    sort(&mut sorted, &colliding);
    sorted
}
