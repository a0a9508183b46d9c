use crate::scoring::event::BallOutcome;
use crate::scoring::state::{MatchClock, MatchState};
use chrono::NaiveTime;
use schema::{Extra, Player, WicketType};

/// A builder for match state snapshots with common defaults: start of an
/// India innings, Kohli on strike, Sharma at the other end, Cummins bowling.
///
/// # Example
/// ```ignore
/// let state = TestStateBuilder::new()
///     .with_balls(5)
///     .with_current_over_runs(3)
///     .build();
/// ```
pub struct TestStateBuilder {
    state: MatchState,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        let striker = Player {
            id: 1,
            name: "Virat Kohli".to_string(),
        };
        let non_striker = Player {
            id: 2,
            name: "Rohit Sharma".to_string(),
        };
        let bowler = Player {
            id: 14,
            name: "Pat Cummins".to_string(),
        };
        Self {
            state: MatchState::new_innings("India", "Australia", &striker, &non_striker, &bowler),
        }
    }

    /// Balls already bowled in the over in progress (team-side counter).
    pub fn with_balls(mut self, balls: u32) -> Self {
        self.state.balls = balls;
        self
    }

    /// Balls already bowled in the bowler's current over.
    pub fn with_bowler_balls(mut self, balls: u32) -> Self {
        if let Some(bowler) = self.state.bowler.as_mut() {
            bowler.balls = balls;
        }
        self
    }

    pub fn with_overs(mut self, overs: u32) -> Self {
        self.state.overs = overs;
        self
    }

    pub fn with_current_over_runs(mut self, runs: u32) -> Self {
        self.state.current_over_runs = runs;
        self
    }

    pub fn with_total_runs(mut self, runs: u32) -> Self {
        self.state.total_runs = runs;
        self
    }

    pub fn without_bowler(mut self) -> Self {
        self.state.bowler = None;
        self
    }

    pub fn without_striker(mut self) -> Self {
        self.state.striker = None;
        self
    }

    pub fn without_non_striker(mut self) -> Self {
        self.state.non_striker = None;
        self
    }

    pub fn without_extras(mut self) -> Self {
        self.state.extras = None;
        self
    }

    pub fn build(self) -> MatchState {
        self.state
    }
}

/// A clock pinned to 2:30:05 PM, so commentary lines are exact strings.
pub fn fixed_clock() -> MatchClock {
    let time = NaiveTime::from_hms_opt(14, 30, 5).expect("valid test time");
    MatchClock::fixed_for_test(time)
}

/// The timestamp prefix `fixed_clock` produces.
pub const FIXED_TIME: &str = "2:30:05 PM";

pub fn outcome(runs: Option<u32>, extras: Vec<Extra>) -> BallOutcome {
    BallOutcome {
        runs,
        extras,
        is_wicket: false,
        wicket_type: None,
        fielder: None,
    }
}

pub fn runs_outcome(runs: u32) -> BallOutcome {
    outcome(Some(runs), vec![])
}

pub fn wicket_outcome(wicket_type: Option<WicketType>, fielder: Option<&str>) -> BallOutcome {
    BallOutcome {
        runs: None,
        extras: vec![],
        is_wicket: true,
        wicket_type,
        fielder: fielder.map(|f| f.to_string()),
    }
}
