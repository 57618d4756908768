use thiserror::Error;

/// Defects in a fixture description. None of these can happen at test time
/// once a corpus entry builds, so callers generally treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    #[error("path `{path}` has {len} levels, but paths must be shorter than {max}")]
    PathTooLong { path: String, len: usize, max: usize },

    #[error("path `{path}` contains `{digit}`, which is not a bucket index below {fanout}")]
    InvalidDigit {
        path: String,
        digit: char,
        fanout: usize,
    },

    #[error("item spec `{spec}` is missing its collision count")]
    MissingCount { spec: String },

    #[error("item spec `{spec}` has invalid collision count `{count}`")]
    InvalidCount { spec: String, count: String },

    #[error("path `{path}` appears more than once; write colliding items as `{path}*N`")]
    DuplicatePath { path: String },

    #[error("fixture `{title}`: {source}")]
    Fixture {
        title: String,
        #[source]
        source: Box<FixtureError>,
    },
}

impl FixtureError {
    pub(crate) fn in_fixture(self, title: &str) -> Self {
        FixtureError::Fixture {
            title: title.to_owned(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
