pub mod breakpoint;
pub mod error;
pub mod ladder;
pub mod responsive;

pub use breakpoint::{Bound, Breakpoint, BreakpointSpec};
pub use error::TerraceBreakpointError;
pub use ladder::BreakpointLadder;
pub use responsive::ResponsiveValue;
