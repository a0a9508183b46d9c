//! Crick Engine
//!
//! A live cricket scoring core: feed it one ball outcome at a time and it
//! deterministically derives the next match state — totals, extras, player
//! statistics, over progression, strike rotation — plus a human-readable
//! commentary line. Persistence, transport and UI live outside this crate;
//! the engine is pure and owns no I/O.

// --- MODULE DECLARATIONS ---
pub mod errors;
pub mod rosters;
pub mod scoring;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Shared vocabulary types usable without the engine.
pub use schema::{Extra, Player, Team, WicketType};

// --- From this crate's modules (`src/`) ---

// The two core operations.
pub use scoring::commentary::describe_delivery;
pub use scoring::engine::{resolve_delivery, BALLS_PER_OVER};

// Core state and event types.
pub use scoring::event::BallOutcome;
pub use scoring::state::{ExtrasTally, MatchClock, MatchState};
pub use scoring::stats::{BattingStats, BowlingStats};

// Roster access.
pub use rosters::{get_prefab_teams, PrefabRosters, RosterProvider};

// Crate-specific error and result types.
pub use errors::{
    InvalidStateError, RosterError, RosterResult, ScoringError, ScoringResult,
};
