pub mod error;

pub mod counts;
pub mod stats;
pub mod scale;
pub mod bars;
pub mod analysis;

pub use crate::analysis::Analysis;
pub use crate::bars::BAR_LENGTH_MAX;
pub use crate::counts::ByteCounts;
pub use crate::error::{HistError, Result};
pub use crate::scale::{Pipeline, ScaleMethod, ScaleTrace};
pub use crate::stats::Stats;
