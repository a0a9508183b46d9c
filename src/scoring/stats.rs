use schema::Player;
use serde::{Deserialize, Serialize};

/// Round to two decimal places, as the persisted documents store rates.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A batsman's running account for the innings. `strike_rate` is derived
/// and recomputed after every ball faced; it is stored rather than computed
/// on read so that persisted snapshots stay self-describing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BattingStats {
    pub id: u32,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
}

impl BattingStats {
    pub fn for_player(player: &Player) -> Self {
        BattingStats {
            id: player.id,
            name: player.name.clone(),
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
            strike_rate: 0.0,
        }
    }

    /// Runs per 100 balls faced; 0 before the first ball.
    pub fn recompute_strike_rate(&mut self) {
        self.strike_rate = if self.balls == 0 {
            0.0
        } else {
            round2(self.runs as f64 / self.balls as f64 * 100.0)
        };
    }
}

/// A bowler's running account. `balls` counts deliveries in the over in
/// progress and resets when the over completes; `overs` counts completed
/// overs only. `economy` is derived and recomputed after every delivery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BowlingStats {
    pub id: u32,
    pub name: String,
    pub overs: u32,
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub economy: f64,
}

impl BowlingStats {
    pub fn for_player(player: &Player) -> Self {
        BowlingStats {
            id: player.id,
            name: player.name.clone(),
            overs: 0,
            balls: 0,
            runs: 0,
            wickets: 0,
            maidens: 0,
            economy: 0.0,
        }
    }

    /// Runs conceded per over, counting the over in progress as a fraction;
    /// 0 before the first delivery.
    pub fn recompute_economy(&mut self) {
        let overs_bowled = self.overs as f64 + self.balls as f64 / 6.0;
        self.economy = if overs_bowled == 0.0 {
            0.0
        } else {
            round2(self.runs as f64 / overs_bowled)
        };
    }
}
