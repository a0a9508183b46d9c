use crate::scoring::event::BallOutcome;
use crate::scoring::state::MatchClock;
use schema::Extra;

/// Build the human-readable commentary line for one delivery.
///
/// Pure and deterministic given a fixed clock. A wicket suppresses the runs
/// description entirely, even when extras coexist (a run-out off a bye reads
/// as just the wicket) — documented behavior, not a bug to fix here.
pub fn describe_delivery(
    outcome: &BallOutcome,
    bowler: &str,
    batsman: &str,
    clock: &MatchClock,
) -> String {
    let mut descriptions: Vec<String> = Vec::new();

    if outcome.is_wicket {
        let how = match outcome.wicket_type {
            Some(wicket_type) => wicket_type.to_string(),
            None => "is out".to_string(),
        };
        descriptions.push(format!("WICKET! {} {}", batsman, how));
        if let Some(fielder) = &outcome.fielder {
            descriptions.push(format!("c {}", fielder));
        }
    } else {
        let runs_description = describe_runs(outcome);
        if !runs_description.is_empty() {
            descriptions.push(runs_description);
        }
    }

    format!(
        "{} - {} to {}: {}",
        clock.time_of_day(),
        bowler,
        batsman,
        descriptions.join(", ")
    )
}

/// The runs fragment, chosen by the same precedence the scorer uses:
/// wide, then no-ball, then byes, then leg byes, then plain runs.
fn describe_runs(outcome: &BallOutcome) -> String {
    let declared = outcome.runs.unwrap_or(0);
    let mut description = if outcome.has(Extra::Wide) {
        format!("Wide{}", declared_suffix(outcome))
    } else if outcome.has(Extra::NoBall) {
        let mut text = format!("No ball{}", declared_suffix(outcome));
        if outcome.has(Extra::Bye) {
            text.push_str(" (bye)");
        } else if outcome.has(Extra::LegBye) {
            text.push_str(" (leg bye)");
        }
        text
    } else if outcome.has(Extra::Bye) {
        format!("{} bye{}", declared, plural(declared))
    } else if outcome.has(Extra::LegBye) {
        format!("{} leg bye{}", declared, plural(declared))
    } else if outcome.runs.is_some() {
        format!("{} run{}", declared, plural(declared))
    } else {
        String::new()
    };

    if outcome.has(Extra::Overthrow) && !description.is_empty() {
        description.push_str(" (with overthrow)");
    }

    description
}

/// " +N" for declared runs on a wide or no-ball; nothing when no runs were
/// declared.
fn declared_suffix(outcome: &BallOutcome) -> String {
    match outcome.runs {
        Some(runs) if runs > 0 => format!(" +{}", runs),
        _ => String::new(),
    }
}

fn plural(count: u32) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
