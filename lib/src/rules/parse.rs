//! Parsing rule strings.

use super::RuleSet;
use crate::error::{Error, Result};
use ca_rules::ParseLife;

/// Parses one half of a `survive/birth` description.
///
/// Returns `None` if the half is empty, contains anything but the digits
/// `0` to `8`, or repeats a digit.
fn parse_half(half: &str) -> Option<Vec<u8>> {
    if half.is_empty() {
        return None;
    }
    let mut seen = 0_u16;
    half.bytes()
        .map(|c| {
            let n = c.checked_sub(b'0').filter(|&n| n <= super::MAX_NEIGHBORS)?;
            if seen & 1 << n != 0 {
                return None;
            }
            seen |= 1 << n;
            Some(n)
        })
        .collect()
}

/// Splits a `survive/birth` description into its two halves.
pub(super) fn split(description: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let (survive, birth) = description.split_once('/')?;
    Some((parse_half(survive)?, parse_half(birth)?))
}

/// Whether the description is a valid `survive/birth` rule.
pub fn is_valid(description: &str) -> bool {
    split(description).is_some()
}

/// Collects the `b` and `s` data from `ca-rules`.
struct Bs {
    b: Vec<u8>,
    s: Vec<u8>,
}

impl ParseLife for Bs {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Bs { b, s }
    }
}

/// Parses a rule in the `B3/S23` notation.
pub(super) fn parse_bs(description: &str) -> Result<RuleSet> {
    let Bs { b, s } = Bs::parse_rule(description)
        .map_err(|_| Error::InvalidRuleDescription(description.to_owned()))?;
    Ok(RuleSet::new(s, b))
}
