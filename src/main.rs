use crick_engine::rosters::{PrefabRosters, RosterProvider};
use crick_engine::{
    resolve_delivery, BallOutcome, Extra, MatchClock, MatchState, WicketType,
};

fn runs(n: u32) -> BallOutcome {
    BallOutcome {
        runs: Some(n),
        extras: vec![],
        is_wicket: false,
        wicket_type: None,
        fielder: None,
    }
}

fn extras(n: Option<u32>, kinds: Vec<Extra>) -> BallOutcome {
    BallOutcome {
        runs: n,
        extras: kinds,
        is_wicket: false,
        wicket_type: None,
        fielder: None,
    }
}

fn wicket(wicket_type: WicketType, fielder: Option<&str>) -> BallOutcome {
    BallOutcome {
        runs: None,
        extras: vec![],
        is_wicket: true,
        wicket_type: Some(wicket_type),
        fielder: fielder.map(|f| f.to_string()),
    }
}

fn main() {
    let rosters = PrefabRosters;

    // Opening pair and opening bowler from the prefab sides.
    let striker = match rosters.player("India", 1) {
        Ok(player) => player,
        Err(e) => {
            println!("Error loading striker: {}", e);
            return;
        }
    };
    let non_striker = match rosters.player("India", 2) {
        Ok(player) => player,
        Err(e) => {
            println!("Error loading non-striker: {}", e);
            return;
        }
    };
    let bowler = match rosters.player("Australia", 14) {
        Ok(player) => player,
        Err(e) => {
            println!("Error loading bowler: {}", e);
            return;
        }
    };

    let mut state = MatchState::new_innings("India", "Australia", &striker, &non_striker, &bowler);
    let clock = MatchClock::system();

    println!(
        "{} vs {} — {} and {} opening, {} to bowl",
        state.batting_team, state.fielding_team, striker.name, non_striker.name, bowler.name
    );
    println!();

    // A scripted first over and a bit: boundary, wide, single, no-ball hit
    // for two, six, dot, dot, and a clean bowled dismissal.
    let deliveries = vec![
        runs(4),
        extras(None, vec![Extra::Wide]),
        runs(1),
        extras(Some(2), vec![Extra::NoBall]),
        runs(6),
        runs(0),
        runs(0),
        wicket(WicketType::Bowled, None),
    ];

    for outcome in &deliveries {
        state = match resolve_delivery(&state, outcome, &clock) {
            Ok(next) => next,
            Err(e) => {
                println!("Error resolving delivery: {}", e);
                return;
            }
        };
    }

    // Scoreboard
    println!(
        "{}: {}/{} in {}.{} overs",
        state.batting_team, state.total_runs, state.wickets, state.overs, state.balls
    );
    if let (Some(striker), Some(non_striker)) = (&state.striker, &state.non_striker) {
        println!(
            "  {}* {} ({}) 4s:{} 6s:{} SR:{}",
            striker.name, striker.runs, striker.balls, striker.fours, striker.sixes,
            striker.strike_rate
        );
        println!(
            "  {}  {} ({}) 4s:{} 6s:{} SR:{}",
            non_striker.name, non_striker.runs, non_striker.balls, non_striker.fours,
            non_striker.sixes, non_striker.strike_rate
        );
    }
    if let Some(bowler) = &state.bowler {
        println!(
            "  {} {}-{}-{}-{} econ:{}",
            bowler.name, bowler.overs, bowler.maidens, bowler.runs, bowler.wickets,
            bowler.economy
        );
    }
    if let Some(extras) = &state.extras {
        println!(
            "  extras: w:{} nb:{} b:{} lb:{}",
            extras.wide, extras.noball, extras.bye, extras.legbye
        );
    }

    println!();
    println!("Commentary (newest first):");
    for line in &state.commentary {
        println!("  {}", line);
    }

    // The snapshot a persistence layer would store after the last ball.
    println!();
    match serde_json::to_string_pretty(&state) {
        Ok(doc) => println!("Snapshot:\n{}", doc),
        Err(e) => println!("Error serializing snapshot: {}", e),
    }
}
