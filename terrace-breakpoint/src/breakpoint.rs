use serde::{Deserialize, Serialize};
use terrace_common::measure::{Dimension, Measurement};

/// A half-open interval `[min, max)` over one measurement dimension.
///
/// The exclusive upper bound keeps adjacent breakpoint ranges disjoint: no
/// measurement value ever satisfies two rungs of a normalized ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f32,
    pub max: f32,
}

impl Bound {
    /// Satisfied by every value.
    pub const UNBOUNDED: Bound = Bound {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The interval `[-inf, max)`.
    pub fn up_to(max: f32) -> Self {
        Self {
            min: f32::NEG_INFINITY,
            max,
        }
    }

    /// The interval `[min, +inf)`.
    pub fn at_least(min: f32) -> Self {
        Self {
            min,
            max: f32::INFINITY,
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value < self.max
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// A partial, author-supplied breakpoint declaration.
///
/// Specs are declared in ascending width order; [`crate::BreakpointLadder`]
/// validates the order and fills in the implied bounds. A declared value is
/// the rung's exclusive upper threshold for that dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<f32>,
}

impl BreakpointSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: None,
            screen_width: None,
            screen_height: None,
        }
    }

    pub fn width(self, width: f32) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub fn screen_width(self, screen_width: f32) -> Self {
        Self {
            screen_width: Some(screen_width),
            ..self
        }
    }

    pub fn screen_height(self, screen_height: f32) -> Self {
        Self {
            screen_height: Some(screen_height),
            ..self
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<f32> {
        match dimension {
            Dimension::Width => self.width,
            Dimension::ScreenWidth => self.screen_width,
            Dimension::ScreenHeight => self.screen_height,
        }
    }
}

/// A named breakpoint with an explicit bound on every recognized dimension.
///
/// Normalized ladders are built through [`crate::BreakpointLadder`]; the
/// fluent constructors here build standalone breakpoints for sparse sets
/// whose ranges may deliberately overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    name: String,
    width: Bound,
    screen_width: Bound,
    screen_height: Bound,
}

impl Breakpoint {
    /// A breakpoint with no constraints; tighten it with the bound setters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: Bound::UNBOUNDED,
            screen_width: Bound::UNBOUNDED,
            screen_height: Bound::UNBOUNDED,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bound(&self, dimension: Dimension) -> Bound {
        match dimension {
            Dimension::Width => self.width,
            Dimension::ScreenWidth => self.screen_width,
            Dimension::ScreenHeight => self.screen_height,
        }
    }

    pub(crate) fn set_bound(&mut self, dimension: Dimension, bound: Bound) {
        match dimension {
            Dimension::Width => self.width = bound,
            Dimension::ScreenWidth => self.screen_width = bound,
            Dimension::ScreenHeight => self.screen_height = bound,
        }
    }

    pub fn min_width(mut self, min: f32) -> Self {
        self.width.min = min;
        self
    }

    pub fn max_width(mut self, max: f32) -> Self {
        self.width.max = max;
        self
    }

    pub fn min_screen_width(mut self, min: f32) -> Self {
        self.screen_width.min = min;
        self
    }

    pub fn max_screen_width(mut self, max: f32) -> Self {
        self.screen_width.max = max;
        self
    }

    pub fn min_screen_height(mut self, min: f32) -> Self {
        self.screen_height.min = min;
        self
    }

    pub fn max_screen_height(mut self, max: f32) -> Self {
        self.screen_height.max = max;
        self
    }

    /// True iff every dimension the measurement carries a value for
    /// satisfies this breakpoint's bound. Missing dimensions always
    /// satisfy.
    pub fn test(&self, measurement: &Measurement) -> bool {
        Dimension::ALL.iter().all(|&dimension| {
            match measurement.get(dimension) {
                Some(value) => self.bound(dimension).contains(value),
                None => true,
            }
        })
    }
}
