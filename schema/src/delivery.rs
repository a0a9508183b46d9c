use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The extra-delivery tokens recognised by the scoring engine.
///
/// String forms are the lowercase wire tokens (`"wide"`, `"noball"`,
/// `"legbye"`, ...) carried in ball-outcome payloads. An outcome may carry
/// several at once (e.g. no-ball plus bye); the engine decides precedence.
#[derive(Serialize, Deserialize, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Extra {
    Wide,
    NoBall,
    Bye,
    LegBye,
    Overthrow,
}

/// How a batsman was dismissed. Display forms are the words used in
/// commentary lines ("WICKET! Kohli run out").
#[derive(Serialize, Deserialize, Display, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WicketType {
    Bowled,
    Caught,
    Lbw,
    #[serde(rename = "run out")]
    #[strum(serialize = "run out")]
    RunOut,
    Stumped,
    #[serde(rename = "hit wicket")]
    #[strum(serialize = "hit wicket")]
    HitWicket,
}
