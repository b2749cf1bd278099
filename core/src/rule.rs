//! Outer-totalistic transition rules.
//!
//! A rule is described by two sets of neighbor counts: the counts at which a
//! live cell stays alive ("survival") and the counts at which a dead cell
//! becomes alive ("birth"). Nothing else about the neighborhood matters.

use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

lazy_static::lazy_static! {
    /// Regex matching a rulestring such as `B3/S23` or `B3/S2,3,13`.
    static ref RULESTRING_REGEX: regex::Regex =
        regex::Regex::new(r"^[Bb]([\d,]*)/?[Ss]([\d,]*)$").unwrap();
}

/// Computes the next state of a single cell.
///
/// A live cell survives if its neighbor count is in `stay_alive`; a dead cell
/// is born if its neighbor count is in `become_alive`. Counts that can never
/// occur for a given dimensionality are allowed and simply never match.
#[inline]
pub fn next_state(
    current_alive: bool,
    neighbor_count: u32,
    stay_alive: &BTreeSet<u32>,
    become_alive: &BTreeSet<u32>,
) -> bool {
    if current_alive {
        stay_alive.contains(&neighbor_count)
    } else {
        become_alive.contains(&neighbor_count)
    }
}

/// A 2-state outer-totalistic Moore-neighborhood rule of any dimensionality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Neighbor counts that keep a live cell alive.
    pub stay_alive: BTreeSet<u32>,
    /// Neighbor counts that bring a dead cell to life.
    pub become_alive: BTreeSet<u32>,
}
impl Default for Rule {
    fn default() -> Self {
        LIFE.clone()
    }
}

lazy_static::lazy_static! {
    /// Conway's Game of Life (B3/S23).
    pub static ref LIFE: Rule = Rule::new([2, 3].iter().copied(), [3].iter().copied());
}

impl Rule {
    /// Constructs a rule from its survival and birth counts.
    pub fn new(
        stay_alive: impl IntoIterator<Item = u32>,
        become_alive: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            stay_alive: stay_alive.into_iter().collect(),
            become_alive: become_alive.into_iter().collect(),
        }
    }

    /// Returns the next state of a cell with the given state and number of
    /// live neighbors.
    #[inline]
    pub fn next_state(&self, current_alive: bool, neighbor_count: u32) -> bool {
        next_state(
            current_alive,
            neighbor_count,
            &self.stay_alive,
            &self.become_alive,
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}/S{}",
            fmt_counts(&self.become_alive),
            fmt_counts(&self.stay_alive),
        )
    }
}

/// Writes single-digit counts run together (`23`) and anything else
/// comma-separated (`2,3,13`). A lone multi-digit count gets a trailing comma
/// (`13,`) so that it is not read back as separate digits.
fn fmt_counts(counts: &BTreeSet<u32>) -> String {
    if counts.iter().all(|&n| n < 10) {
        counts.iter().join("")
    } else if counts.len() == 1 {
        format!("{},", counts.iter().join(""))
    } else {
        counts.iter().join(",")
    }
}

/// Error returned when a rulestring cannot be parsed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseRuleError(pub String);
impl fmt::Display for ParseRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid rulestring {:?}; expected something like B3/S23", self.0)
    }
}
impl std::error::Error for ParseRuleError {}

impl FromStr for Rule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRuleError(s.to_owned());
        let captures = RULESTRING_REGEX.captures(s.trim()).ok_or_else(err)?;
        let become_alive = parse_counts(&captures[1]).ok_or_else(err)?;
        let stay_alive = parse_counts(&captures[2]).ok_or_else(err)?;
        Ok(Self {
            stay_alive,
            become_alive,
        })
    }
}

fn parse_counts(s: &str) -> Option<BTreeSet<u32>> {
    if s.contains(',') {
        s.split(',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse().ok())
            .collect()
    } else {
        s.chars().map(|ch| ch.to_digit(10)).collect()
    }
}
