// Fixtures for testing hash tries. A fixture is written as a list of paths
// through the trie (`"0"`, `"1A"`, `"42*5"`), from which we synthesize items
// whose hashes produce exactly that shape, plus the order a correct preorder
// walk of the trie must visit them in.
//
// ```
// let fixture = trie_fixtures::fixture("two-levels-mixed").unwrap();
// let (trie, expected): (MyTrie<_>, Vec<_>) = fixture.realize_set(|c| c);
// assert!(trie.iter().eq(expected.iter()));
// ```

mod collider;
mod corpus;
mod error;
mod expand;
mod fixture;
pub mod layout;
mod oracle;
mod path;

#[cfg(test)]
mod model;

pub use collider::{BuildPathHasher, PathHasher, RawCollider};
pub use corpus::{fixture, fixtures, for_each_fixture, specs, FixtureSpec, CORPUS};
pub use error::{FixtureError, Result};
pub use expand::{expand_all, Entry, Expander, ItemSpec};
pub use fixture::Fixture;
pub use layout::{FANOUT, MAX_DEPTH};
pub use oracle::{compare, iteration_order, CollidingPrefixes};
pub use path::{Path, PathHash};
