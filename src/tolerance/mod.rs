pub mod band;
pub mod difference;
pub mod error;
pub mod evaluate;
pub mod thresholds;
