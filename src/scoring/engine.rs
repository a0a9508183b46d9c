use crate::errors::{InvalidStateError, ScoringResult};
use crate::scoring::commentary::describe_delivery;
use crate::scoring::event::BallOutcome;
use crate::scoring::state::{MatchClock, MatchState};
use schema::Extra;

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

/// The mutually exclusive scoring cases a delivery can resolve to.
///
/// Classification is priority-ordered, first match wins — the order is
/// policy, not an accident. A wide with a no-ball token resolves as a wide;
/// a no-ball with a bye resolves as a no-ball-plus-bye even if runs were
/// also declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryClass {
    /// Wide: one automatic run plus any declared runs, all against the
    /// wide tally. Not a legal ball.
    Wide,
    /// No-ball with byes run: penalty to the no-ball tally, declared runs
    /// to the bye tally. Not a legal ball.
    NoBallBye,
    /// No-ball hit off the bat: penalty to the no-ball tally, declared
    /// runs to the striker. Not a legal ball.
    NoBallOffBat,
    /// No-ball with leg byes: as NoBallBye but crediting the leg-bye tally.
    NoBallLegBye,
    /// Byes or leg byes stretched by an overthrow. The caller has already
    /// folded the overthrow runs into `runs`. Counts as a legal ball.
    ByesOverthrow,
    /// Runs off the bat stretched by an overthrow, all credited to the
    /// striker. Counts as a legal ball.
    OffBatOverthrow,
    /// A plain scoring (or dot) delivery off the bat.
    OffBat,
    /// Nothing to score: no declared runs matched any case. Typically a
    /// clean dismissal. Still a legal ball.
    NoScore,
}

fn classify(outcome: &BallOutcome) -> DeliveryClass {
    if outcome.has(Extra::Wide) {
        DeliveryClass::Wide
    } else if outcome.has(Extra::NoBall) && outcome.has(Extra::Bye) {
        DeliveryClass::NoBallBye
    } else if outcome.has(Extra::NoBall)
        && outcome.runs.is_some()
        && !outcome.has(Extra::LegBye)
    {
        DeliveryClass::NoBallOffBat
    } else if outcome.has(Extra::NoBall) && outcome.has(Extra::LegBye) {
        DeliveryClass::NoBallLegBye
    } else if (outcome.has(Extra::LegBye) || outcome.has(Extra::Bye))
        && outcome.has(Extra::Overthrow)
    {
        DeliveryClass::ByesOverthrow
    } else if outcome.runs.is_some() && outcome.has(Extra::Overthrow) {
        DeliveryClass::OffBatOverthrow
    } else if outcome.runs.is_some() && !outcome.is_wicket {
        DeliveryClass::OffBat
    } else {
        DeliveryClass::NoScore
    }
}

/// Main entry point for ball-outcome resolution.
///
/// Takes the current match state, one delivery's outcome and the commentary
/// clock; returns the fully updated state for the caller to persist. The
/// input state is never mutated — resolution works on a cloned draft and
/// either returns it whole or fails before any field changes.
///
/// Fails with `InvalidStateError` if the snapshot is missing its bowler,
/// striker, non-striker or extras tally.
pub fn resolve_delivery(
    state: &MatchState,
    outcome: &BallOutcome,
    clock: &MatchClock,
) -> ScoringResult<MatchState> {
    let mut next = state.clone();

    // Precondition checks. `take` lifts the sub-structures out of the draft
    // so the scoring arithmetic below works on plain values.
    let mut bowler = next
        .bowler
        .take()
        .ok_or(InvalidStateError::MissingBowler)?;
    let mut striker = next
        .striker
        .take()
        .ok_or(InvalidStateError::MissingStriker)?;
    let mut non_striker = next
        .non_striker
        .take()
        .ok_or(InvalidStateError::MissingNonStriker)?;
    let mut extras = next
        .extras
        .take()
        .ok_or(InvalidStateError::MissingExtras)?;

    let declared = outcome.runs.unwrap_or(0);
    let mut runs_to_add = declared;
    let mut count_as_ball = true;

    match classify(outcome) {
        DeliveryClass::Wide => {
            runs_to_add += 1;
            count_as_ball = false;
            extras.wide += runs_to_add;
            // The bowler is debited the single penalty run only, not the
            // full wide total. Documented asymmetry carried over from the
            // original scorer.
            bowler.runs += 1;
            next.total_runs += runs_to_add;
        }
        DeliveryClass::NoBallBye => {
            runs_to_add += 1;
            count_as_ball = false;
            extras.noball += 1;
            bowler.runs += 1;
            extras.bye += declared;
            next.total_runs += runs_to_add;
            striker.balls += 1;
        }
        DeliveryClass::NoBallOffBat => {
            runs_to_add += 1;
            count_as_ball = false;
            extras.noball += 1;
            bowler.runs += runs_to_add;
            // Off-the-bat runs only; the penalty run is the no-ball's.
            striker.runs += runs_to_add - 1;
            next.total_runs += runs_to_add;
            striker.balls += 1;
        }
        DeliveryClass::NoBallLegBye => {
            runs_to_add += 1;
            count_as_ball = false;
            extras.noball += 1;
            bowler.runs += 1;
            extras.legbye += declared;
            next.total_runs += runs_to_add;
            striker.balls += 1;
        }
        DeliveryClass::ByesOverthrow => {
            if outcome.has(Extra::LegBye) {
                extras.legbye += runs_to_add;
            } else {
                extras.bye += runs_to_add;
            }
            next.total_runs += runs_to_add;
        }
        DeliveryClass::OffBatOverthrow => {
            striker.runs += runs_to_add;
            next.total_runs += runs_to_add;
        }
        DeliveryClass::OffBat => {
            striker.runs += runs_to_add;
            striker.balls += 1;
            bowler.runs += runs_to_add;
            bowler.balls += 1;
            next.total_runs += runs_to_add;

            if declared == 4 {
                striker.fours += 1;
            }
            if declared == 6 {
                striker.sixes += 1;
            }
        }
        DeliveryClass::NoScore => {}
    }

    // Wicket handling is additive, after the scoring case. A dismissal on a
    // wide or no-ball is not credited to the bowler (run-out exception,
    // simplified).
    if outcome.is_wicket && !outcome.has(Extra::Wide) && !outcome.has(Extra::NoBall) {
        next.wickets += 1;
        bowler.wickets += 1;
    }

    // Wicket deliveries do not count toward the maiden check.
    if !outcome.is_wicket {
        next.current_over_runs += runs_to_add;
    }

    if count_as_ball {
        next.balls += 1;
        if next.balls == BALLS_PER_OVER {
            if next.current_over_runs == 0 {
                bowler.maidens += 1;
            }
            bowler.overs += 1;
            next.overs += 1;
            next.balls = 0;
            next.current_over_runs = 0;
            bowler.balls = 0;
        }
    }

    striker.recompute_strike_rate();
    bowler.recompute_economy();

    // Strike rotates on odd runs off a fair delivery, and at the end of
    // every over. Both triggers on the same ball still mean one swap.
    let over_just_completed = next.balls == 0 && next.overs > 0;
    let odd_fair_runs = runs_to_add % 2 == 1
        && !outcome.has(Extra::Wide)
        && !outcome.has(Extra::NoBall);
    if odd_fair_runs || over_just_completed {
        std::mem::swap(&mut striker, &mut non_striker);
    }

    // The commentary line names the batsman on strike for the NEXT ball,
    // which is why it is built after rotation. Carried over from the
    // original scorer.
    let line = describe_delivery(outcome, &bowler.name, &striker.name, clock);
    next.commentary.insert(0, line);

    next.bowler = Some(bowler);
    next.striker = Some(striker);
    next.non_striker = Some(non_striker);
    next.extras = Some(extras);

    Ok(next)
}
