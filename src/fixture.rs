use std::iter::FromIterator;

use crate::collider::RawCollider;
use crate::error::Result;
use crate::expand::Expander;
use crate::oracle::{self, CollidingPrefixes};

/// A set of items shaped to produce a particular trie, along with the order
/// a correct trie iterates them in.
#[derive(Clone, Debug)]
pub struct Fixture {
    title: String,
    insertion: Vec<RawCollider>,
    iteration: Vec<RawCollider>,
    colliding_prefixes: usize,
}

impl Fixture {
    pub fn build<'a>(title: &str, specs: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut expander = Expander::new();
        for spec in specs {
            expander.expand(spec).map_err(|e| e.in_fixture(title))?;
        }
        let entries = expander.finish();

        let colliding = CollidingPrefixes::detect(entries.iter().map(|e| &e.path));
        let mut sorted = entries.clone();
        oracle::sort(&mut sorted, &colliding);

        log::debug!(
            "Built fixture {:?}: {} items, {} colliding prefixes",
            title,
            entries.len(),
            colliding.len()
        );
        Ok(Self {
            title: title.to_owned(),
            insertion: entries.iter().map(|e| e.collider).collect(),
            iteration: sorted.iter().map(|e| e.collider).collect(),
            colliding_prefixes: colliding.len(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items_in_insertion_order(&self) -> &[RawCollider] {
        &self.insertion
    }

    pub fn items_in_iteration_order(&self) -> &[RawCollider] {
        &self.iteration
    }

    pub fn count(&self) -> usize {
        self.insertion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion.is_empty()
    }

    pub fn colliding_prefix_count(&self) -> usize {
        self.colliding_prefixes
    }

    /// Builds a collection from the fixture's items in insertion order.
    /// `key` runs once per item; the returned vector holds the same keys in
    /// expected iteration order.
    pub fn realize_set<C, K>(&self, mut key: impl FnMut(RawCollider) -> K) -> (C, Vec<K>)
    where
        C: FromIterator<K>,
        K: Clone,
    {
        let keys: Vec<K> = self.insertion.iter().map(|&c| key(c)).collect();
        let reference = self.reorder(&keys);
        (keys.into_iter().collect(), reference)
    }

    pub fn realize_map<C, K, V>(
        &self,
        mut key: impl FnMut(RawCollider) -> K,
        mut value: impl FnMut(RawCollider) -> V,
    ) -> (C, Vec<(K, V)>)
    where
        C: FromIterator<(K, V)>,
        K: Clone,
        V: Clone,
    {
        let pairs: Vec<(K, V)> = self
            .insertion
            .iter()
            .map(|&c| (key(c), value(c)))
            .collect();
        let reference = self.reorder(&pairs);
        (pairs.into_iter().collect(), reference)
    }

    // Identities are insertion positions, so `by_insertion[c.identity()]`
    // belongs to `c`.
    fn reorder<T: Clone>(&self, by_insertion: &[T]) -> Vec<T> {
        self.iteration
            .iter()
            .map(|c| by_insertion[c.identity()].clone())
            .collect()
    }
}
