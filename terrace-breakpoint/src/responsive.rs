use indexmap::IndexMap;
use terrace_common::measure::Measurement;

use crate::error::TerraceBreakpointError;
use crate::ladder::BreakpointLadder;

/// A per-breakpoint configuration value with a mandatory fallback.
///
/// An entry covers its own rung and every narrower rung without a nearer
/// entry: resolution finds the rung matched by the measurement, then walks
/// up the ladder to the first rung that has an entry. The fallback is used
/// when nothing matches or no entry is found above the match.
///
/// ```
/// use terrace_breakpoint::{BreakpointLadder, ResponsiveValue};
/// use terrace_common::measure::Measurement;
///
/// let ladder = BreakpointLadder::default();
/// let ticks = ResponsiveValue::new(10)
///     .when("palm", 3)
///     .when("lap", 5);
///
/// let phone = Measurement::new().width(320.0);
/// assert_eq!(ticks.resolve(&ladder, &phone), Ok(&3));
///
/// let monitor = Measurement::new().width(1600.0);
/// assert_eq!(ticks.resolve(&ladder, &monitor), Ok(&10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveValue<T> {
    entries: IndexMap<String, T>,
    fallback: T,
}

impl<T> ResponsiveValue<T> {
    pub fn new(fallback: T) -> Self {
        Self {
            entries: IndexMap::new(),
            fallback,
        }
    }

    /// Registers the value used when `name` is the matched rung, or the
    /// nearest listed rung above the match.
    pub fn when(mut self, name: impl Into<String>, value: T) -> Self {
        self.entries.insert(name.into(), value);
        self
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Resolves the value for a measurement against a ladder.
    ///
    /// Every entry must name a rung of the ladder; an unknown name is a
    /// configuration error, surfaced before any value is returned.
    pub fn resolve<'a>(
        &'a self,
        ladder: &BreakpointLadder,
        measurement: &Measurement,
    ) -> Result<&'a T, TerraceBreakpointError> {
        for name in self.entries.keys() {
            if ladder.find_by_name(name).is_none() {
                return Err(TerraceBreakpointError::UnknownBreakpoint(name.clone()));
            }
        }

        let breakpoints = ladder.breakpoints();
        let Some(matched) = breakpoints.iter().position(|b| b.test(measurement)) else {
            return Ok(&self.fallback);
        };

        for breakpoint in &breakpoints[matched..] {
            if let Some(value) = self.entries.get(breakpoint.name()) {
                return Ok(value);
            }
        }
        Ok(&self.fallback)
    }
}
