//! Plot resolution policy definitions.

pub mod plot;

pub use plot::{PlotPolicy, PolicyError, SearchLimits};
