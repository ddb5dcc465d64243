// Core of the snake draft: preference bookkeeping and the draft engine.
//
// No I/O lives here; callers hand in parsed preference pairs and get back
// rosters plus a pick log.

pub mod engine;
pub mod error;
pub mod store;

pub use engine::{build_pick_order, run, DraftOutcome, DraftPick, PickOrderEntry, Roster, Rosters};
pub use error::DraftError;
pub use store::PreferenceStore;
