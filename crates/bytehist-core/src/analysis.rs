use crate::bars::bar_lengths;
use crate::counts::ByteCounts;
use crate::error::Result;
use crate::scale::{Pipeline, ScaleTrace};
use crate::stats::Stats;

/// Everything derived from one input: counts, stats, pipeline trace, bars.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub counts: ByteCounts,
    pub stats: Stats,
    pub trace: ScaleTrace,
    pub bars: Vec<usize>,
}

impl Analysis {
    pub fn run(data: &[u8], pipeline: &Pipeline) -> Result<Self> {
        let counts = ByteCounts::from_bytes(data);
        let stats = Stats::from_counts(&counts);
        let trace = pipeline.run(&counts.to_f64());
        let bars = bar_lengths(trace.output(), counts.as_slice())?;

        tracing::debug!(
            bytes = counts.total(),
            distinct = stats.distinct,
            stages = trace.stages.len(),
            "analysis complete"
        );

        Ok(Self {
            counts,
            stats,
            trace,
            bars,
        })
    }
}
