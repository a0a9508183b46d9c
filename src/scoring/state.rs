use crate::scoring::stats::{BattingStats, BowlingStats};
use chrono::{Local, NaiveTime};
use schema::Player;
use serde::{Deserialize, Serialize};

/// Tally of extras conceded so far in the innings, by kind. Overthrows are
/// not tallied separately; their runs are folded into whichever bucket (or
/// the striker's account) the delivery credits.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasTally {
    pub wide: u32,
    pub noball: u32,
    pub legbye: u32,
    pub bye: u32,
}

/// The authoritative snapshot of an innings in progress.
///
/// Snapshots arrive from external persistence as JSON documents with
/// camelCase field names; the `Option` sub-structures are optional-at-rest
/// because an external writer may have stored an incomplete document. The
/// resolver validates them up front and refuses the delivery if any is
/// missing.
///
/// `balls` is always in 0..=5; reaching 6 rolls the over atomically inside
/// `resolve_delivery`. The commentary log is ordered newest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub batting_team: String,
    pub fielding_team: String,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls: u32,
    #[serde(default)]
    pub extras: Option<ExtrasTally>,
    pub current_over_runs: u32,
    #[serde(default)]
    pub striker: Option<BattingStats>,
    #[serde(default)]
    pub non_striker: Option<BattingStats>,
    #[serde(default)]
    pub bowler: Option<BowlingStats>,
    pub commentary: Vec<String>,
}

impl MatchState {
    /// Build a zeroed state for the start of an innings from roster
    /// identities. This is the only place player identity enters the
    /// engine; every later transition just carries it along.
    pub fn new_innings(
        batting_team: &str,
        fielding_team: &str,
        striker: &Player,
        non_striker: &Player,
        bowler: &Player,
    ) -> Self {
        MatchState {
            batting_team: batting_team.to_string(),
            fielding_team: fielding_team.to_string(),
            total_runs: 0,
            wickets: 0,
            overs: 0,
            balls: 0,
            extras: Some(ExtrasTally::default()),
            current_over_runs: 0,
            striker: Some(BattingStats::for_player(striker)),
            non_striker: Some(BattingStats::for_player(non_striker)),
            bowler: Some(BowlingStats::for_player(bowler)),
            commentary: Vec::new(),
        }
    }
}

/// Wall-clock source for commentary timestamps.
///
/// Resolution itself is deterministic; the only nondeterminism in the whole
/// engine is the time prefix on commentary lines. Tests pin it with
/// `fixed_for_test`, production callers use `system`.
#[derive(Debug, Clone)]
pub struct MatchClock {
    fixed: Option<NaiveTime>,
}

impl MatchClock {
    pub fn system() -> Self {
        Self { fixed: None }
    }

    pub fn fixed_for_test(time: NaiveTime) -> Self {
        Self { fixed: Some(time) }
    }

    /// The local time of day, formatted the way the historical snapshots
    /// carry it ("2:30:05 PM").
    pub fn time_of_day(&self) -> String {
        let time = match self.fixed {
            Some(t) => t,
            None => Local::now().time(),
        };
        time.format("%-I:%M:%S %p").to_string()
    }
}
