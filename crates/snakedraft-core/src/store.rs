// Preference store: each captain's remaining ranking and the shared
// per-contestant supply.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::DraftError;

/// A captain's ranking, most-preferred first. Entries leave the list only
/// when this captain drafts them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CaptainPreferences {
    captain: String,
    remaining: Vec<String>,
}

impl CaptainPreferences {
    fn ranked_set(&self) -> HashSet<&str> {
        self.remaining.iter().map(String::as_str).collect()
    }
}

/// Mutable draft bookkeeping, exclusively owned by one draft run.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    /// Captains in order of first appearance in the input.
    captains: Vec<CaptainPreferences>,
    /// Captain name -> index into `captains`.
    index: HashMap<String, usize>,
    /// Contestant name -> remaining supply.
    supply: HashMap<String, u32>,
}

impl PreferenceStore {
    /// Build the store from `(captain, contestant)` pairs in rank order.
    ///
    /// Rows for one captain are expected to be contiguous. A captain that
    /// shows up again after another captain's rows keeps its earlier list and
    /// the new rows are appended to it. Repeats of a contestant within one
    /// captain's ranking are dropped, so each appears once at its best rank.
    pub fn load<I, C, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<String>,
        P: Into<String>,
    {
        let mut store = Self::default();
        let mut current: Option<usize> = None;

        for (captain, contestant) in pairs {
            let captain = captain.into();
            let contestant = contestant.into();

            let idx = match current {
                Some(i) if store.captains[i].captain == captain => i,
                _ => {
                    let i = match store.index.get(&captain) {
                        Some(&i) => {
                            warn!(
                                captain = %captain,
                                "captain rows are not contiguous; appending to earlier ranking"
                            );
                            i
                        }
                        None => {
                            store.captains.push(CaptainPreferences {
                                captain: captain.clone(),
                                remaining: Vec::new(),
                            });
                            let i = store.captains.len() - 1;
                            store.index.insert(captain, i);
                            i
                        }
                    };
                    current = Some(i);
                    i
                }
            };

            let prefs = &mut store.captains[idx];
            if prefs.remaining.contains(&contestant) {
                warn!(
                    captain = %prefs.captain,
                    contestant = %contestant,
                    "contestant ranked more than once; keeping highest rank"
                );
                continue;
            }
            prefs.remaining.push(contestant);
        }

        store
    }

    /// Set the remaining supply of every given contestant to `count`.
    pub fn initialize_supply<I, S>(&mut self, contestants: I, count: u32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for contestant in contestants {
            self.supply.insert(contestant.into(), count);
        }
    }

    /// Take one unit of supply from `contestant`, returning what is left.
    ///
    /// Unknown contestants have no supply and fail the same way as exhausted
    /// ones.
    pub fn consume(&mut self, contestant: &str) -> Result<u32, DraftError> {
        match self.supply.get_mut(contestant) {
            Some(left) if *left > 0 => {
                *left -= 1;
                Ok(*left)
            }
            _ => Err(DraftError::DepletedSupply {
                contestant: contestant.to_string(),
            }),
        }
    }

    /// Remove the highest-ranked occurrence of `contestant` from `captain`'s
    /// remaining ranking. Returns false if there was nothing to remove.
    pub fn remove_top_match(&mut self, captain: &str, contestant: &str) -> bool {
        let Some(&idx) = self.index.get(captain) else {
            return false;
        };
        let remaining = &mut self.captains[idx].remaining;
        match remaining.iter().position(|c| c == contestant) {
            Some(pos) => {
                remaining.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Captain names in first-appearance order.
    pub fn captains(&self) -> impl Iterator<Item = &str> + '_ {
        self.captains.iter().map(|c| c.captain.as_str())
    }

    pub fn captain_count(&self) -> usize {
        self.captains.len()
    }

    /// The captain's remaining ranking; empty for unknown captains.
    pub fn preferences(&self, captain: &str) -> &[String] {
        self.index
            .get(captain)
            .map(|&i| self.captains[i].remaining.as_slice())
            .unwrap_or(&[])
    }

    /// Remaining supply; contestants never given supply report 0.
    pub fn supply(&self, contestant: &str) -> u32 {
        self.supply.get(contestant).copied().unwrap_or(0)
    }

    pub fn is_available(&self, contestant: &str) -> bool {
        self.supply(contestant) > 0
    }

    /// Every contestant named by any captain, deduplicated, in order of first
    /// mention (captain order, then rank order).
    pub fn contestants(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.captains
            .iter()
            .flat_map(|c| c.remaining.iter())
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// The first captain whose ranked set of contestants differs from the
    /// first captain's, if any.
    pub fn divergent_captain(&self) -> Option<&str> {
        let (first, rest) = self.captains.split_first()?;
        let reference = first.ranked_set();
        rest.iter()
            .find(|c| c.ranked_set() != reference)
            .map(|c| c.captain.as_str())
    }

    /// Whether every captain ranks the same set of contestants.
    pub fn is_uniform(&self) -> bool {
        self.divergent_captain().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_captains() -> PreferenceStore {
        PreferenceStore::load(vec![
            ("A", "x"),
            ("A", "y"),
            ("B", "y"),
            ("B", "x"),
        ])
    }

    #[test]
    fn load_groups_rows_per_captain_in_order() {
        let store = two_captains();
        assert_eq!(store.captains().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(store.preferences("A"), ["x", "y"]);
        assert_eq!(store.preferences("B"), ["y", "x"]);
    }

    #[test]
    fn load_appends_non_contiguous_rows() {
        let store = PreferenceStore::load(vec![("A", "x"), ("B", "y"), ("A", "z")]);
        assert_eq!(store.captain_count(), 2);
        assert_eq!(store.preferences("A"), ["x", "z"]);
        assert_eq!(store.preferences("B"), ["y"]);
    }

    #[test]
    fn load_empty_input() {
        let store = PreferenceStore::load(Vec::<(String, String)>::new());
        assert_eq!(store.captain_count(), 0);
        assert!(store.contestants().is_empty());
        assert!(store.is_uniform());
    }

    #[test]
    fn unknown_captain_has_no_preferences() {
        let store = two_captains();
        assert!(store.preferences("Z").is_empty());
    }

    #[test]
    fn initialize_supply_sets_every_contestant() {
        let mut store = two_captains();
        store.initialize_supply(["x", "y"], 3);
        assert_eq!(store.supply("x"), 3);
        assert_eq!(store.supply("y"), 3);
        assert_eq!(store.supply("nobody"), 0);
    }

    #[test]
    fn consume_decrements_until_depleted() {
        let mut store = two_captains();
        store.initialize_supply(["x"], 2);
        assert_eq!(store.consume("x"), Ok(1));
        assert_eq!(store.consume("x"), Ok(0));
        assert!(!store.is_available("x"));
        assert_eq!(
            store.consume("x"),
            Err(DraftError::DepletedSupply {
                contestant: "x".into()
            })
        );
        // Failure leaves supply untouched.
        assert_eq!(store.supply("x"), 0);
    }

    #[test]
    fn consume_unknown_contestant_fails() {
        let mut store = two_captains();
        assert!(matches!(
            store.consume("ghost"),
            Err(DraftError::DepletedSupply { .. })
        ));
    }

    #[test]
    fn load_keeps_only_highest_ranked_repeat() {
        let store = PreferenceStore::load(vec![
            ("A", "x"),
            ("A", "y"),
            ("A", "x"),
            ("B", "y"),
            ("A", "y"),
        ]);
        assert_eq!(store.preferences("A"), ["x", "y"]);
        assert_eq!(store.preferences("B"), ["y"]);
    }

    #[test]
    fn remove_top_match_removes_drafted_contestant() {
        let mut store = PreferenceStore::load(vec![("A", "x"), ("A", "y")]);
        assert!(store.remove_top_match("A", "x"));
        assert_eq!(store.preferences("A"), ["y"]);
        assert!(!store.remove_top_match("A", "x"));
    }

    #[test]
    fn remove_top_match_absent_is_noop() {
        let mut store = two_captains();
        assert!(!store.remove_top_match("A", "zzz"));
        assert!(!store.remove_top_match("nobody", "x"));
        assert_eq!(store.preferences("A"), ["x", "y"]);
    }

    #[test]
    fn contestants_is_union_in_first_mention_order() {
        let store = PreferenceStore::load(vec![
            ("A", "x"),
            ("A", "y"),
            ("B", "z"),
            ("B", "x"),
        ]);
        assert_eq!(store.contestants(), vec!["x", "y", "z"]);
        assert!(!store.is_uniform());
        assert_eq!(store.divergent_captain(), Some("B"));
    }

    #[test]
    fn uniform_ignores_rank_order() {
        assert!(two_captains().is_uniform());
    }
}
