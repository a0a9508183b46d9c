// Crick Schema - Shared type definitions
// This crate contains the vocabulary types shared between the scoring engine
// and any surrounding service layer: player/team identity and the enumerated
// delivery and dismissal kinds that appear on the wire.

// Re-export the main types
pub use delivery::*;
pub use players::*;

pub mod delivery;
pub mod players;
