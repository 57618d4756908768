use hashbrown::HashSet;

use crate::collider::RawCollider;
use crate::error::{FixtureError, Result};
use crate::path::Path;

/// One entry of a fixture description: `path` or `path*count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSpec<'a> {
    pub path: &'a str,
    pub count: usize,
}

impl<'a> ItemSpec<'a> {
    pub fn parse(spec: &'a str) -> Result<Self> {
        let (path, count) = match spec.split_once('*') {
            None => return Ok(Self { path: spec, count: 1 }),
            Some(parts) => parts,
        };
        if count.is_empty() {
            return Err(FixtureError::MissingCount {
                spec: spec.to_owned(),
            });
        }
        let invalid = || FixtureError::InvalidCount {
            spec: spec.to_owned(),
            count: count.to_owned(),
        };
        if !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match count.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self { path, count: n }),
            _ => Err(invalid()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub path: Path,
    pub collider: RawCollider,
}

/// Turns item specs into entries, in order.
pub struct Expander {
    seen: HashSet<Path>,
    entries: Vec<Entry>,
}

impl Expander {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            entries: vec![],
        }
    }

    pub fn expand(&mut self, spec: &str) -> Result<()> {
        let ItemSpec { path, count } = ItemSpec::parse(spec)?;
        let path = Path::normalize(path)?;
        if !self.seen.insert(path) {
            return Err(FixtureError::DuplicatePath {
                path: path.to_string(),
            });
        }
        if count > 1 {
            log::trace!("{} items colliding at {}", count, path);
        }
        let hash = path.hash();
        for _ in 0..count {
            let collider = RawCollider::new(self.entries.len(), hash);
            self.entries.push(Entry { path, collider });
        }
        Ok(())
    }

    pub fn finish(self) -> Vec<Entry> {
        self.entries
    }
}

pub fn expand_all<'a>(specs: impl IntoIterator<Item = &'a str>) -> Result<Vec<Entry>> {
    let mut expander = Expander::new();
    for spec in specs {
        expander.expand(spec)?;
    }
    Ok(expander.finish())
}
