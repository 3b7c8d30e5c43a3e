use terrace_common::measure::Dimension;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerraceBreakpointError {
    #[error("{dimension} thresholds must be strictly ascending in declaration order: {values:?}")]
    ThresholdsNotAscending {
        dimension: Dimension,
        values: Vec<f32>,
    },

    #[error("Duplicate breakpoint name: {0}")]
    DuplicateName(String),

    #[error("Unknown breakpoint name: {0}")]
    UnknownBreakpoint(String),
}
