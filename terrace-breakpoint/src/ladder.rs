use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use terrace_common::measure::{Dimension, Measurement};

use crate::breakpoint::{Bound, Breakpoint, BreakpointSpec};
use crate::error::TerraceBreakpointError;

/// Widths of the default breakpoint ladder, in CSS pixels.
pub const PALM_MAX_WIDTH: f32 = 480.0;
pub const LAP_MAX_WIDTH: f32 = 840.0;
pub const LAP_PLUS_MAX_WIDTH: f32 = 1080.0;

/// First breakpoint, in declaration order, matched by the measurement.
///
/// `None` means no match; callers fall back to a default configuration.
pub fn find<'a>(
    breakpoints: &'a [Breakpoint],
    measurement: &Measurement,
) -> Option<&'a Breakpoint> {
    breakpoints.iter().find(|b| b.test(measurement))
}

/// Linear lookup by exact name.
pub fn find_by_name<'a>(breakpoints: &'a [Breakpoint], name: &str) -> Option<&'a Breakpoint> {
    breakpoints.iter().find(|b| b.name() == name)
}

/// Every breakpoint matched by the measurement, in declaration order.
///
/// Unlike [`find`] this is meant for sparse sets whose ranges represent
/// independent, possibly overlapping concerns rather than a mutually
/// exclusive ladder.
pub fn match_all<'a>(
    breakpoints: &'a [Breakpoint],
    measurement: &Measurement,
) -> Vec<&'a Breakpoint> {
    breakpoints.iter().filter(|b| b.test(measurement)).collect()
}

/// A validated ladder of breakpoints in ascending width order.
///
/// Built from partial specs by [`BreakpointLadder::try_new`], which fills in
/// the bounds each spec leaves implied: a rung's upper threshold is its own
/// declared value (exclusive), its lower threshold the nearest preceding
/// declared value (inclusive). Adjacent rungs are disjoint and contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointLadder {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointLadder {
    /// Normalizes an ordered list of partial specs into a full ladder.
    ///
    /// Declaration order is the ascending-width order and is never
    /// reordered; declared thresholds that are not strictly ascending are
    /// rejected, as are duplicate names. Dimensions other than width chain
    /// independently, only among the rungs that declare them; a rung that
    /// leaves such a dimension undeclared is unconstrained on it. A rung
    /// with no declared width takes over at the last declared threshold,
    /// which makes the conventional trailing rest rung cover everything
    /// above the ladder.
    pub fn try_new(specs: &[BreakpointSpec]) -> Result<Self, TerraceBreakpointError> {
        let mut names = HashSet::new();
        for spec in specs {
            if !names.insert(spec.name.as_str()) {
                return Err(TerraceBreakpointError::DuplicateName(spec.name.clone()));
            }
        }

        let mut breakpoints: Vec<Breakpoint> = specs
            .iter()
            .map(|spec| Breakpoint::new(spec.name.clone()))
            .collect();

        for &dimension in &Dimension::ALL {
            let declared: Vec<f32> = specs.iter().filter_map(|s| s.get(dimension)).collect();
            if !declared.windows(2).all(|w| w[0] < w[1]) {
                return Err(TerraceBreakpointError::ThresholdsNotAscending {
                    dimension,
                    values: declared,
                });
            }

            let mut min = f32::NEG_INFINITY;
            for (spec, breakpoint) in specs.iter().zip(breakpoints.iter_mut()) {
                match spec.get(dimension) {
                    Some(threshold) => {
                        breakpoint.set_bound(dimension, Bound::new(min, threshold));
                        min = threshold;
                    }
                    // every rung participates in the width ladder; other
                    // dimensions leave undeclared rungs unconstrained
                    None if dimension == Dimension::Width => {
                        breakpoint.set_bound(dimension, Bound::at_least(min));
                    }
                    None => {}
                }
            }
        }

        log::debug!(
            "normalized breakpoint ladder: {:?}",
            breakpoints.iter().map(|b| b.name()).collect::<Vec<_>>()
        );
        Ok(Self { breakpoints })
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn find(&self, measurement: &Measurement) -> Option<&Breakpoint> {
        find(&self.breakpoints, measurement)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Breakpoint> {
        find_by_name(&self.breakpoints, name)
    }

    pub fn match_all(&self, measurement: &Measurement) -> Vec<&Breakpoint> {
        match_all(&self.breakpoints, measurement)
    }
}

impl Default for BreakpointLadder {
    /// The conventional four-rung ladder: palm, lap, lap+ and the
    /// unbounded desk rung.
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::new("palm").max_width(PALM_MAX_WIDTH),
                Breakpoint::new("lap")
                    .min_width(PALM_MAX_WIDTH)
                    .max_width(LAP_MAX_WIDTH),
                Breakpoint::new("lap+")
                    .min_width(LAP_MAX_WIDTH)
                    .max_width(LAP_PLUS_MAX_WIDTH),
                Breakpoint::new("desk").min_width(LAP_PLUS_MAX_WIDTH),
            ],
        }
    }
}
