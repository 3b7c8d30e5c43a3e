use terrace_breakpoint::{BreakpointLadder, ResponsiveValue};
use terrace_common::measure::Measurement;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ladder = BreakpointLadder::default();

    // chart margins per breakpoint; wider screens fall back to the default
    let margins = ResponsiveValue::new((40.0, 60.0))
        .when("palm", (10.0, 16.0))
        .when("lap", (24.0, 32.0));

    for width in [320.0, 600.0, 1024.0, 1920.0] {
        let measurement = Measurement::new().width(width);
        let rung = ladder
            .find(&measurement)
            .map(|b| b.name().to_string())
            .unwrap_or_else(|| "none".to_string());
        let (top, side) = margins.resolve(&ladder, &measurement)?;
        println!("width {:>6}: {:5} -> margins top {} side {}", width, rung, top, side);
    }

    Ok(())
}
