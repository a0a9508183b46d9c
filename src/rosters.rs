use crate::errors::{RosterError, RosterResult};
use schema::{Player, Team};

/// Source of team and player identity. The engine never manages rosters
/// itself; a surrounding service injects whichever provider it has (a
/// database-backed one in production, `PrefabRosters` in demos and tests).
pub trait RosterProvider {
    /// List every team this provider knows, with full elevens.
    fn teams(&self) -> Vec<Team>;

    /// Find one team by name.
    fn team(&self, name: &str) -> RosterResult<Team> {
        self.teams()
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| RosterError::TeamNotFound(name.to_string()))
    }

    /// Find one player by team name and player id.
    fn player(&self, team_name: &str, id: u32) -> RosterResult<Player> {
        let team = self.team(team_name)?;
        team.player(id)
            .cloned()
            .ok_or(RosterError::PlayerNotFound {
                team: team.name,
                id,
            })
    }
}

/// The built-in pair of international sides used for demos and testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefabRosters;

impl RosterProvider for PrefabRosters {
    fn teams(&self) -> Vec<Team> {
        get_prefab_teams()
    }
}

/// Get the two predefined sides (India and Australia, elevens with global
/// player ids 1..=22).
pub fn get_prefab_teams() -> Vec<Team> {
    vec![
        Team {
            name: "India".to_string(),
            players: vec![
                Player { id: 1, name: "Virat Kohli".to_string() },
                Player { id: 2, name: "Rohit Sharma".to_string() },
                Player { id: 3, name: "KL Rahul".to_string() },
                Player { id: 4, name: "Rishabh Pant".to_string() },
                Player { id: 5, name: "Hardik Pandya".to_string() },
                Player { id: 6, name: "Ravindra Jadeja".to_string() },
                Player { id: 7, name: "Jasprit Bumrah".to_string() },
                Player { id: 8, name: "Mohammed Shami".to_string() },
                Player { id: 9, name: "Yuzvendra Chahal".to_string() },
                Player { id: 10, name: "Shikhar Dhawan".to_string() },
                Player { id: 11, name: "Bhuvneshwar Kumar".to_string() },
            ],
        },
        Team {
            name: "Australia".to_string(),
            players: vec![
                Player { id: 12, name: "Steve Smith".to_string() },
                Player { id: 13, name: "David Warner".to_string() },
                Player { id: 14, name: "Pat Cummins".to_string() },
                Player { id: 15, name: "Mitchell Starc".to_string() },
                Player { id: 16, name: "Glenn Maxwell".to_string() },
                Player { id: 17, name: "Aaron Finch".to_string() },
                Player { id: 18, name: "Josh Hazlewood".to_string() },
                Player { id: 19, name: "Marcus Stoinis".to_string() },
                Player { id: 20, name: "Alex Carey".to_string() },
                Player { id: 21, name: "Nathan Lyon".to_string() },
                Player { id: 22, name: "Mitchell Marsh".to_string() },
            ],
        },
    ]
}
