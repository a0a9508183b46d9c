use schema::{Extra, WicketType};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A single delivery's raw facts, as reported by the scorer.
///
/// `runs` is the off-the-bat (or declared) run count excluding automatic
/// extras penalties; `None` means the scorer declared nothing, which is not
/// the same as a dot ball. The engine accepts any combination permissively;
/// it never judges cricket-legality (a wicket on a wide is resolved as
/// sent).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BallOutcome {
    #[serde(default)]
    pub runs: Option<u32>,
    #[serde(default, deserialize_with = "lenient_extras")]
    pub extras: Vec<Extra>,
    pub is_wicket: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wicket_type: Option<WicketType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fielder: Option<String>,
}

impl BallOutcome {
    pub fn has(&self, extra: Extra) -> bool {
        self.extras.contains(&extra)
    }
}

/// Unknown extras tokens are dropped silently rather than rejected. This is
/// a documented policy, not an accident: historical payloads carry
/// free-string extras arrays, and a token the engine does not recognise
/// simply matches no scoring case.
fn lenient_extras<'de, D>(deserializer: D) -> Result<Vec<Extra>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|token| Extra::from_str(token).ok())
        .collect())
}
