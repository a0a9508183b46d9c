use serde::{Deserialize, Serialize};

/// Player identity as supplied by a roster provider. The scoring engine only
/// ever copies the `id` and `name` into batting/bowling statistics; it never
/// looks players up itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
}

/// A named side with its full playing eleven.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    /// Find a player on this side by id.
    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
