#[cfg(test)]
mod tests {
    use crate::scoring::commentary::describe_delivery;
    use crate::scoring::tests::common::{
        fixed_clock, outcome, runs_outcome, wicket_outcome, FIXED_TIME,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Extra, WicketType};

    fn describe(event: &crate::scoring::event::BallOutcome) -> String {
        describe_delivery(event, "Pat Cummins", "Virat Kohli", &fixed_clock())
    }

    #[test]
    fn plain_runs_line() {
        let line = describe(&runs_outcome(4));
        assert_eq!(
            line,
            format!("{} - Pat Cummins to Virat Kohli: 4 runs", FIXED_TIME)
        );
    }

    #[rstest]
    #[case(0, "0 runs")]
    #[case(1, "1 run")]
    #[case(2, "2 runs")]
    fn run_count_pluralization(#[case] runs: u32, #[case] expected: &str) {
        let line = describe(&runs_outcome(runs));
        assert!(line.ends_with(expected), "got: {}", line);
    }

    #[test]
    fn wide_without_declared_runs() {
        let line = describe(&outcome(None, vec![Extra::Wide]));
        assert!(line.ends_with(": Wide"), "got: {}", line);
    }

    #[test]
    fn wide_with_declared_runs() {
        let line = describe(&outcome(Some(2), vec![Extra::Wide]));
        assert!(line.ends_with(": Wide +2"), "got: {}", line);
    }

    #[rstest]
    #[case(vec![Extra::NoBall], None, "No ball")]
    #[case(vec![Extra::NoBall], Some(3), "No ball +3")]
    #[case(vec![Extra::NoBall, Extra::Bye], Some(1), "No ball +1 (bye)")]
    #[case(vec![Extra::NoBall, Extra::LegBye], Some(2), "No ball +2 (leg bye)")]
    fn no_ball_descriptions(
        #[case] extras: Vec<Extra>,
        #[case] runs: Option<u32>,
        #[case] expected: &str,
    ) {
        let line = describe(&outcome(runs, extras));
        assert!(line.ends_with(expected), "got: {}", line);
    }

    #[rstest]
    #[case(vec![Extra::Bye], Some(1), "1 bye")]
    #[case(vec![Extra::Bye], Some(3), "3 byes")]
    #[case(vec![Extra::LegBye], Some(1), "1 leg bye")]
    #[case(vec![Extra::LegBye], Some(2), "2 leg byes")]
    fn bye_descriptions(
        #[case] extras: Vec<Extra>,
        #[case] runs: Option<u32>,
        #[case] expected: &str,
    ) {
        let line = describe(&outcome(runs, extras));
        assert!(line.ends_with(expected), "got: {}", line);
    }

    #[test]
    fn overthrow_suffix_on_a_runs_description() {
        let line = describe(&outcome(Some(5), vec![Extra::Overthrow]));
        assert!(line.ends_with("5 runs (with overthrow)"), "got: {}", line);
    }

    #[test]
    fn overthrow_alone_produces_no_fragment() {
        let line = describe(&outcome(None, vec![Extra::Overthrow]));
        assert!(line.ends_with(": "), "got: {}", line);
    }

    #[test]
    fn no_declared_runs_produces_no_fragment() {
        let line = describe(&outcome(None, vec![]));
        assert!(line.ends_with(": "), "got: {}", line);
    }

    #[test]
    fn wicket_with_a_named_dismissal() {
        let line = describe(&wicket_outcome(Some(WicketType::Bowled), None));
        assert_eq!(
            line,
            format!(
                "{} - Pat Cummins to Virat Kohli: WICKET! Virat Kohli bowled",
                FIXED_TIME
            )
        );
    }

    #[test]
    fn wicket_without_a_dismissal_kind() {
        let line = describe(&wicket_outcome(None, None));
        assert!(line.ends_with("WICKET! Virat Kohli is out"), "got: {}", line);
    }

    #[test]
    fn wicket_with_a_fielder() {
        let line = describe(&wicket_outcome(
            Some(WicketType::Caught),
            Some("David Warner"),
        ));
        assert!(
            line.ends_with("WICKET! Virat Kohli caught, c David Warner"),
            "got: {}",
            line
        );
    }

    #[test]
    fn wicket_suppresses_the_runs_description() {
        // A run-out off a bye reads as just the wicket; the bye never
        // appears. Documented behavior.
        let mut event = outcome(Some(1), vec![Extra::Bye]);
        event.is_wicket = true;
        event.wicket_type = Some(WicketType::RunOut);

        let line = describe(&event);
        assert!(line.ends_with("WICKET! Virat Kohli run out"), "got: {}", line);
        assert!(!line.contains("bye"), "got: {}", line);
    }

    #[test]
    fn timestamp_prefix_comes_from_the_injected_clock() {
        let line = describe(&runs_outcome(1));
        assert!(line.starts_with(&format!("{} - ", FIXED_TIME)), "got: {}", line);
    }
}
