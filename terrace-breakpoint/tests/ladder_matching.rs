use rstest::rstest;
use terrace_breakpoint::ladder::{LAP_MAX_WIDTH, LAP_PLUS_MAX_WIDTH, PALM_MAX_WIDTH};
use terrace_breakpoint::{BreakpointLadder, BreakpointSpec, ResponsiveValue};
use terrace_common::measure::{Dimension, Measurement};

#[rstest]
#[case(0.0, "palm")]
#[case(479.0, "palm")]
#[case(480.0, "lap")]
#[case(839.0, "lap")]
#[case(840.0, "lap+")]
#[case(1079.0, "lap+")]
#[case(1080.0, "desk")]
#[case(10000.0, "desk")]
fn test_default_ladder_width_selection(#[case] width: f32, #[case] expected: &str) {
    let ladder = BreakpointLadder::default();
    let matched = ladder.find(&Measurement::new().width(width)).unwrap();
    assert_eq!(matched.name(), expected);
}

#[test]
fn test_ladder_thresholds_are_contiguous() {
    let ladder = BreakpointLadder::default();
    let rungs = ladder.breakpoints();

    for pair in rungs.windows(2) {
        let below = pair[0].bound(Dimension::Width);
        let above = pair[1].bound(Dimension::Width);
        assert_eq!(below.max, above.min);
    }

    assert_eq!(rungs[0].bound(Dimension::Width).min, f32::NEG_INFINITY);
    assert_eq!(
        rungs[rungs.len() - 1].bound(Dimension::Width).max,
        f32::INFINITY
    );
}

#[test]
fn test_config_file_specs_to_selection() {
    // specs as they would arrive from an embedded configuration document
    let json = format!(
        r#"[
            {{"name": "palm", "width": {PALM_MAX_WIDTH:?}}},
            {{"name": "lap", "width": {LAP_MAX_WIDTH:?}}},
            {{"name": "lap+", "width": {LAP_PLUS_MAX_WIDTH:?}}},
            {{"name": "desk"}}
        ]"#
    );
    let specs: Vec<BreakpointSpec> = serde_json::from_str(&json).unwrap();
    let ladder = BreakpointLadder::try_new(&specs).unwrap();

    assert_eq!(ladder, BreakpointLadder::default());

    let aspect_ratio = ResponsiveValue::new(16.0 / 9.0)
        .when("palm", 4.0 / 3.0)
        .when("lap", 3.0 / 2.0);

    let phone = Measurement::new().width(375.0).screen_height(667.0);
    assert_eq!(aspect_ratio.resolve(&ladder, &phone), Ok(&(4.0 / 3.0)));

    let desktop = Measurement::new().width(1440.0).screen_height(900.0);
    assert_eq!(aspect_ratio.resolve(&ladder, &desktop), Ok(&(16.0 / 9.0)));
}

#[test]
fn test_screen_height_constraint_rules_out_short_screens() {
    let ladder = BreakpointLadder::try_new(&[
        BreakpointSpec::new("stubby").width(480.0).screen_height(400.0),
        BreakpointSpec::new("palm").width(480.0),
    ])
    .unwrap_err();
    // two rungs on the same width threshold cannot form a ladder
    assert!(matches!(
        ladder,
        terrace_breakpoint::TerraceBreakpointError::ThresholdsNotAscending { .. }
    ));

    let ladder = BreakpointLadder::try_new(&[
        BreakpointSpec::new("stubby").width(400.0).screen_height(400.0),
        BreakpointSpec::new("palm").width(480.0),
        BreakpointSpec::new("desk"),
    ])
    .unwrap();

    // short screens land on the stubby rung
    let short = Measurement::new().width(390.0).screen_height(300.0);
    assert_eq!(ladder.find(&short).unwrap().name(), "stubby");

    // wider than stubby's rung, within palm's
    let tall = Measurement::new().width(450.0).screen_height(800.0);
    assert_eq!(ladder.find(&tall).unwrap().name(), "palm");

    // a tall screen narrower than stubby's threshold fails stubby on
    // height and every other rung on width: the no-match sentinel
    let narrow_tall = Measurement::new().width(390.0).screen_height(800.0);
    assert!(ladder.find(&narrow_tall).is_none());
}
