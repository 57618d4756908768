// A minimal hash trie for checking the oracle against. Nodes keep leaf items
// and children in separate compact arrays (as CHAMP does), and iterate all
// leaf items of a node before descending into its children. Items with the
// same full hash share a collision bucket, which iterates like a child.

use std::iter::FromIterator;
use std::mem;

use crate::bitmap::Bitmap;
use crate::collider::RawCollider;
use crate::layout::MAX_DEPTH;
use crate::path::PathHash;

enum Child {
    Node(Box<Node>),
    Collision(PathHash, Vec<RawCollider>),
}

impl Child {
    fn pair(a: RawCollider, b: RawCollider, level: usize) -> Self {
        if a.hash_value() == b.hash_value() {
            Child::Collision(a.hash_value(), vec![a, b])
        } else {
            Child::Node(Box::new(Node::pair(a, b, level)))
        }
    }
}

#[derive(Default)]
struct Node {
    item_map: Bitmap,
    child_map: Bitmap,
    items: Vec<RawCollider>,
    children: Vec<Child>,
}

impl Node {
    fn pair(a: RawCollider, b: RawCollider, level: usize) -> Self {
        assert!(level < MAX_DEPTH, "Distinct hashes agree on every level");
        let (ba, bb) = (a.hash_value().bucket(level), b.hash_value().bucket(level));
        let mut node = Node::default();
        if ba == bb {
            node.child_map.set(ba);
            node.children.push(Child::pair(a, b, level + 1));
        } else {
            node.item_map.set(ba);
            node.item_map.set(bb);
            node.items = if ba < bb { vec![a, b] } else { vec![b, a] };
        }
        node
    }

    fn insert(&mut self, item: RawCollider, level: usize) {
        let bucket = item.hash_value().bucket(level);

        if let Some(ix) = self.child_map.query(bucket) {
            let other = match &mut self.children[ix] {
                Child::Node(node) => return node.insert(item, level + 1),
                Child::Collision(hash, items) if *hash == item.hash_value() => {
                    items.push(item);
                    return;
                }
                Child::Collision(hash, _) => *hash,
            };
            // Push the collision one level down and retry there.
            let mut node = Node::default();
            node.child_map.set(other.bucket(level + 1));
            let collision = mem::replace(&mut self.children[ix], Child::Node(Box::default()));
            node.children.push(collision);
            node.insert(item, level + 1);
            self.children[ix] = Child::Node(Box::new(node));
            return;
        }

        if let Some(ix) = self.item_map.query(bucket) {
            let existing = self.items.remove(ix);
            self.item_map.clear(bucket);
            self.child_map.set(bucket);
            let child = Child::pair(existing, item, level + 1);
            self.children.insert(self.child_map.rank(bucket), child);
            return;
        }

        self.item_map.set(bucket);
        self.items.insert(self.item_map.rank(bucket), item);
    }

    fn visit(&self, out: &mut Vec<RawCollider>) {
        out.extend_from_slice(&self.items);
        for child in &self.children {
            match child {
                Child::Node(node) => node.visit(out),
                Child::Collision(_, items) => out.extend_from_slice(items),
            }
        }
    }

    fn check(&self, level: usize) {
        assert_eq!(self.item_map.len(), self.items.len());
        assert_eq!(self.child_map.len(), self.children.len());
        for (bucket, item) in self.item_map.iter().zip(&self.items) {
            assert!(!self.child_map.contains(bucket));
            assert_eq!(item.hash_value().bucket(level), bucket);
        }
        for (bucket, child) in self.child_map.iter().zip(&self.children) {
            match child {
                Child::Node(node) => node.check(level + 1),
                Child::Collision(hash, items) => {
                    assert_eq!(hash.bucket(level), bucket);
                    assert!(items.len() > 1);
                    assert!(items.iter().all(|c| c.hash_value() == *hash));
                }
            }
        }
    }
}

/// Items are kept by hash; multiple items with one hash are all retained,
/// in insertion order.
#[derive(Default)]
pub struct ModelTrie {
    root: Node,
    len: usize,
}

impl ModelTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: RawCollider) {
        self.root.insert(item, 0);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn iter(&self) -> impl Iterator<Item = RawCollider> {
        let mut out = Vec::with_capacity(self.len);
        self.root.visit(&mut out);
        out.into_iter()
    }

    pub fn check_invariants(&self) {
        self.root.check(0);
    }
}

impl FromIterator<RawCollider> for ModelTrie {
    fn from_iter<I: IntoIterator<Item = RawCollider>>(iter: I) -> Self {
        let mut trie = ModelTrie::new();
        for item in iter {
            trie.insert(item);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;

    fn item(identity: usize, spec: &str) -> RawCollider {
        RawCollider::new(identity, Path::normalize(spec).unwrap().hash())
    }

    fn ids(t: &ModelTrie) -> Vec<usize> {
        t.iter().map(|c| c.identity()).collect()
    }

    #[test]
    fn test_leaves_before_children() {
        let t: ModelTrie = vec![item(0, "20"), item(1, "3"), item(2, "21"), item(3, "1")]
            .into_iter()
            .collect();
        t.check_invariants();
        assert_eq!(t.len(), 4);
        assert_eq!(ids(&t), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_collision_pushed_down() {
        let t: ModelTrie = vec![item(0, "42"), item(1, "42"), item(2, "4"), item(3, "43")]
            .into_iter()
            .collect();
        t.check_invariants();
        assert_eq!(ids(&t), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_deepest_level() {
        let t: ModelTrie = vec![item(0, "0123456789AB"), item(1, "0123456789AC")]
            .into_iter()
            .collect();
        t.check_invariants();
        assert_eq!(ids(&t), vec![0, 1]);
    }
}
