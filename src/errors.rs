use std::fmt;

/// Main error type for the crick scoring engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Error related to an incomplete or corrupted match state snapshot
    InvalidState(InvalidStateError),
    /// Error related to team/player roster lookups
    Roster(RosterError),
}

/// Errors raised when a match state snapshot is missing a required
/// sub-structure. These are precondition failures: the resolver refuses the
/// delivery outright and the input state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidStateError {
    /// No bowler recorded on the state
    MissingBowler,
    /// No striker recorded on the state
    MissingStriker,
    /// No non-striker recorded on the state; strike rotation would have
    /// nobody to swap with
    MissingNonStriker,
    /// No extras tally recorded on the state
    MissingExtras,
}

/// Errors related to roster lookups when setting up an innings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The named team is not known to the roster provider
    TeamNotFound(String),
    /// The player id is not in the named team's eleven
    PlayerNotFound { team: String, id: u32 },
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::InvalidState(err) => write!(f, "Invalid match state: {}", err),
            ScoringError::Roster(err) => write!(f, "Roster error: {}", err),
        }
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidStateError::MissingBowler => write!(f, "Bowler is not defined"),
            InvalidStateError::MissingStriker => write!(f, "Striker is not defined"),
            InvalidStateError::MissingNonStriker => write!(f, "Non-striker is not defined"),
            InvalidStateError::MissingExtras => write!(f, "Extras are not defined"),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::TeamNotFound(name) => write!(f, "Team not found: {}", name),
            RosterError::PlayerNotFound { team, id } => {
                write!(f, "Player {} not found in team {}", id, team)
            }
        }
    }
}

impl std::error::Error for ScoringError {}
impl std::error::Error for InvalidStateError {}
impl std::error::Error for RosterError {}

impl From<InvalidStateError> for ScoringError {
    fn from(err: InvalidStateError) -> Self {
        ScoringError::InvalidState(err)
    }
}

impl From<RosterError> for ScoringError {
    fn from(err: RosterError) -> Self {
        ScoringError::Roster(err)
    }
}

/// Type alias for Results using ScoringError
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
