// Draft engine: randomized pick order and the round-by-round snake draft.

use std::fmt;
use std::ops::Range;

use rand::Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::error::DraftError;
use crate::store::PreferenceStore;

/// Tie-break keys are drawn uniformly from this range (0-99 inclusive).
pub const PICK_KEY_RANGE: Range<u32> = 0..100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A captain's position in the round-1 pick order, with the random key that
/// placed it there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOrderEntry {
    pub captain: String,
    pub key: u32,
}

impl fmt::Display for PickOrderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.captain, self.key)
    }
}

/// One completed pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPick {
    /// 1-based round number.
    pub round: usize,
    /// 1-based position within the round's pick order.
    pub slot: usize,
    /// 1-based pick number across the whole draft.
    pub overall: usize,
    pub captain: String,
    pub contestant: String,
}

/// A captain's drafted contestants, in pick order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub captain: String,
    pub contestants: Vec<String>,
}

impl Roster {
    fn new(captain: &str) -> Self {
        Roster {
            captain: captain.to_string(),
            contestants: Vec::new(),
        }
    }
}

/// Rosters for every captain, kept in the captains' input order.
///
/// Serializes as a map from captain name to contestant array, with keys in
/// that same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rosters(Vec<Roster>);

impl Rosters {
    pub fn get(&self, captain: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|r| r.captain == captain)
            .map(|r| r.contestants.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Roster> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of contestants drafted across all rosters.
    pub fn total_picks(&self) -> usize {
        self.0.iter().map(|r| r.contestants.len()).sum()
    }
}

impl Serialize for Rosters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for roster in &self.0 {
            map.serialize_entry(&roster.captain, &roster.contestants)?;
        }
        map.end()
    }
}

/// Everything a finished draft produced.
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    /// Round-1 pick order. Even rounds run it back to front.
    pub pick_order: Vec<PickOrderEntry>,
    pub rosters: Rosters,
    /// Every pick in the order it was made.
    pub picks: Vec<DraftPick>,
}

// ---------------------------------------------------------------------------
// Pick order
// ---------------------------------------------------------------------------

/// Give each captain a random key from [`PICK_KEY_RANGE`] and sort ascending.
///
/// The sort is stable, so captains drawing the same key keep the order they
/// were supplied in.
pub fn build_pick_order<'a, I, R>(captains: I, rng: &mut R) -> Vec<PickOrderEntry>
where
    I: IntoIterator<Item = &'a str>,
    R: Rng,
{
    let mut order: Vec<PickOrderEntry> = captains
        .into_iter()
        .map(|captain| PickOrderEntry {
            captain: captain.to_string(),
            key: rng.random_range(PICK_KEY_RANGE),
        })
        .collect();
    order.sort_by_key(|entry| entry.key);
    order
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Run a `team_size`-round snake draft over `store`.
///
/// Each round walks the current pick order; every captain drafts the
/// highest-ranked contestant on their remaining list that still has supply,
/// or nothing if none is left. The order reverses after every round.
///
/// The store is consumed as the draft goes: supply is decremented and drafted
/// contestants leave the drafting captain's list.
pub fn run<R: Rng>(
    store: &mut PreferenceStore,
    team_size: usize,
    rng: &mut R,
) -> Result<DraftOutcome, DraftError> {
    let mut rosters: Vec<Roster> = store.captains().map(Roster::new).collect();
    let pick_order = build_pick_order(store.captains(), rng);
    info!(
        captains = rosters.len(),
        rounds = team_size,
        "pick order: {}",
        pick_order
            .iter()
            .map(PickOrderEntry::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Indices into `rosters`, in the current round's pick order.
    let mut order: Vec<usize> = pick_order
        .iter()
        .filter_map(|entry| rosters.iter().position(|r| r.captain == entry.captain))
        .collect();

    let mut picks = Vec::new();
    for round in 1..=team_size {
        let before = picks.len();
        for (slot, &idx) in order.iter().enumerate() {
            let captain = rosters[idx].captain.clone();

            // Read-only scan first; mutation happens below once a choice exists.
            let choice = store
                .preferences(&captain)
                .iter()
                .find(|c| store.is_available(c))
                .cloned();
            let Some(contestant) = choice else {
                debug!(round, captain = %captain, "no draftable contestant left; skipping");
                continue;
            };

            let left = store.consume(&contestant)?;
            store.remove_top_match(&captain, &contestant);
            debug!(
                round,
                captain = %captain,
                contestant = %contestant,
                supply_left = left,
                "pick"
            );

            picks.push(DraftPick {
                round,
                slot: slot + 1,
                overall: picks.len() + 1,
                captain,
                contestant: contestant.clone(),
            });
            rosters[idx].contestants.push(contestant);
        }
        info!(round, picks = picks.len() - before, "round complete");
        order.reverse();
    }

    Ok(DraftOutcome {
        pick_order,
        rosters: Rosters(rosters),
        picks,
    })
}
