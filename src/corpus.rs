use std::panic;

use once_cell::sync::Lazy;

use crate::fixture::Fixture;

pub struct FixtureSpec {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

macro_rules! corpus {
    ($($title:literal: [$($item:literal),* $(,)?],)*) => {
        &[$(FixtureSpec { title: $title, items: &[$($item),*] },)*]
    };
}

// Each item is a path of bucket indices from the root (`0`-`9`, `A`-`V`),
// optionally followed by `*N` for `N` items sharing that exact hash.
pub static CORPUS: &[FixtureSpec] = corpus! {
    "empty": [],
    "single-item": ["A"],
    "single-node": [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F",
        "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V",
    ],
    "few-collisions": ["42*5"],
    "many-collisions": ["42*40"],
    "few-different-collisions": ["1*3", "21*3", "22*3", "3*3"],
    "everything-on-the-2nd-level": [
        "00", "01", "02", "03", "04", "05", "06", "07",
        "10", "11", "12", "13", "14", "15", "16", "17",
        "20", "21", "22", "23", "24", "25", "26", "27",
        "30", "31", "32", "33", "34", "35", "36", "37",
    ],
    "two-levels-mixed": [
        "00", "01", "2", "30", "31", "4", "50", "51", "6", "70", "71", "8", "9", "A",
    ],
    "chain-left": ["0", "10", "110", "1110", "11110", "11111"],
    "chain-right": ["1", "01", "001", "0001", "00001", "00000"],
    "leaf-expands-into-deep-node": ["0", "00000001"],
    "collision-expands-into-node": ["0123*3", "01231"],
    "collision-beside-leaf": ["0*2", "1"],
    "collision-under-leaves": ["V", "0", "VV*2", "V1"],
    "node-contracts-to-leaf": ["01", "1", "2"],
    "node-contracts-to-collision": ["01*2", "02", "1"],
    "nested": [
        "50", "51", "520", "521", "5220", "5221", "52220", "52221", "522220", "522221", "53",
    ],
    "deep": ["0123456789AB", "0123456789AC", "0123456789A"],
    "deep-collisions": ["0123456789AB*2", "0123456789AC*2", "1"],
    "mixed-collisions-and-leaves": ["0", "1*2", "2", "3*3", "4", "5*2", "6"],
    "wide-then-deep": [
        "0", "1", "2", "3", "4", "50", "51", "52", "53", "540", "541", "5420", "5421*2", "6",
    ],
    "descending": ["V", "U", "T", "S", "R", "Q", "P", "O", "N", "M"],
    "lowercase-digits": ["a", "b0", "b1", "c*2"],
};

pub fn specs(title: &str) -> Option<&'static [&'static str]> {
    CORPUS.iter().find(|f| f.title == title).map(|f| f.items)
}

static FIXTURES: Lazy<Vec<Fixture>> = Lazy::new(|| {
    CORPUS
        .iter()
        .map(|spec| match Fixture::build(spec.title, spec.items.iter().copied()) {
            Ok(fixture) => fixture,
            Err(e) => panic!("Invalid fixture corpus: {}", e),
        })
        .collect()
});

/// Every corpus fixture, built on first use.
pub fn fixtures() -> &'static [Fixture] {
    &FIXTURES
}

pub fn fixture(title: &str) -> Option<&'static Fixture> {
    fixtures().iter().find(|f| f.title() == title)
}

/// Runs `body` once per fixture. A panic escaping `body` is reported with
/// `label` and the fixture's title.
pub fn for_each_fixture(label: &str, mut body: impl FnMut(&Fixture)) {
    for fixture in fixtures() {
        log::debug!("{}: {}", label, fixture.title());
        let r = panic::catch_unwind(panic::AssertUnwindSafe(|| body(fixture)));
        if let Err(e) = r {
            let message = if let Some(s) = e.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "non-string panic payload".to_owned()
            };
            log::error!("{} failed on fixture {:?}: {}", label, fixture.title(), message);
            panic!("{} [{}]: {}", label, fixture.title(), message);
        }
    }
}
