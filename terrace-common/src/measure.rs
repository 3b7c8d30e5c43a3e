use std::fmt;

use serde::{Deserialize, Serialize};

/// The measurement dimensions recognized by breakpoint matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Width,
    ScreenWidth,
    ScreenHeight,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Width,
        Dimension::ScreenWidth,
        Dimension::ScreenHeight,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Width => "width",
            Dimension::ScreenWidth => "screen_width",
            Dimension::ScreenHeight => "screen_height",
        };
        write!(f, "{}", name)
    }
}

/// A partial set of measured dimension values, as produced by a DOM
/// measurement collaborator.
///
/// Dimensions left unset are unconstrained and satisfy any bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_height: Option<f32>,
}

impl Measurement {
    pub fn new() -> Self {
        Self::default()
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
