//! Life-like rules.
//!
//! A rule is written as `survive/birth`: the digits before the slash are the
//! numbers of living neighbors that keep a living cell alive, the digits after
//! it are the numbers of living neighbors that bring a dead cell to life.
//! Conway's Game of Life is `23/3`.
//!
//! [`RuleSet::parse_notation`] also accepts the `B3/S23` notation, see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

mod parse;

use crate::error::{Error, Result};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub use parse::is_valid;

/// The largest possible number of living neighbors.
pub const MAX_NEIGHBORS: u8 = 8;

/// A totalistic rule with a survive set and a birth set.
///
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Numbers of living neighbors that keep a living cell alive, ascending.
    survive: Vec<u8>,
    /// Numbers of living neighbors that turn a dead cell alive, ascending.
    birth: Vec<u8>,
    /// The canonical description, e.g. `23/3`.
    description: String,
}

impl RuleSet {
    /// Constructs a rule from the survive and birth counts.
    ///
    /// Duplicates are removed and counts larger than [`MAX_NEIGHBORS`] are
    /// dropped, since they can never match.
    pub fn new<S, B>(survive: S, birth: B) -> Self
    where
        S: IntoIterator<Item = u8>,
        B: IntoIterator<Item = u8>,
    {
        let survive = normalize(survive);
        let birth = normalize(birth);
        let description = describe(&survive, &birth);
        RuleSet {
            survive,
            birth,
            description,
        }
    }

    /// Parses a rule in the `survive/birth` form, e.g. `23/3`.
    ///
    /// Both halves must be non-empty strings of distinct digits from `0`
    /// to `8`. The order of the digits does not matter; the stored
    /// description is sorted.
    pub fn parse(description: &str) -> Result<Self> {
        let (survive, birth) = parse::split(description)
            .ok_or_else(|| Error::InvalidRuleDescription(description.to_owned()))?;
        Ok(RuleSet::new(survive, birth))
    }

    /// Checks a description with the same rules as [`parse`](Self::parse),
    /// without constructing anything.
    pub fn is_valid(description: &str) -> bool {
        parse::is_valid(description)
    }

    /// Parses a rule either in the `survive/birth` form or in the
    /// `B3/S23` notation.
    pub fn parse_notation(description: &str) -> Result<Self> {
        RuleSet::parse(description).or_else(|_| parse::parse_bs(description))
    }

    /// Numbers of living neighbors that keep a living cell alive.
    pub fn survive(&self) -> &[u8] {
        &self.survive
    }

    /// Numbers of living neighbors that turn a dead cell alive.
    pub fn birth(&self) -> &[u8] {
        &self.birth
    }

    /// The canonical description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a living cell with `count` living neighbors stays alive.
    #[inline]
    pub fn survives(&self, count: usize) -> bool {
        self.survive.iter().any(|&n| n as usize == count)
    }

    /// Whether a dead cell with `count` living neighbors becomes alive.
    #[inline]
    pub fn born(&self, count: usize) -> bool {
        self.birth.iter().any(|&n| n as usize == count)
    }
}

/// Conway's Game of Life, `23/3`.
impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new([2, 3], [3])
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        RuleSet::parse(input)
    }
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

fn normalize<I: IntoIterator<Item = u8>>(counts: I) -> Vec<u8> {
    let mut counts: Vec<u8> = counts
        .into_iter()
        .filter(|&n| n <= MAX_NEIGHBORS)
        .collect();
    counts.sort_unstable();
    counts.dedup();
    counts
}

fn describe(survive: &[u8], birth: &[u8]) -> String {
    let mut description = String::with_capacity(survive.len() + birth.len() + 1);
    description.extend(survive.iter().map(|&n| char::from(b'0' + n)));
    description.push('/');
    description.extend(birth.iter().map(|&n| char::from(b'0' + n)));
    description
}
