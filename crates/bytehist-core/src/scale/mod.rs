// crates/bytehist-core/src/scale/mod.rs
//
// Scaling pipeline: caller-ordered methods, then a forced trailing `max`.
// Every stage is recorded so reporting can observe the computation instead of
// the transforms printing as they go.

pub mod methods;

use std::fmt;
use std::str::FromStr;

use crate::error::{HistError, Result};

pub use methods::{scale_log, scale_max, scale_minmax};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleMethod {
    Log,
    Max,
    MinMax,
}

impl ScaleMethod {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(ScaleMethod::Log),
            "max" => Ok(ScaleMethod::Max),
            "minmax" => Ok(ScaleMethod::MinMax),
            _ => Err(HistError::UnknownScaleMethod(s.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleMethod::Log => "log",
            ScaleMethod::Max => "max",
            ScaleMethod::MinMax => "minmax",
        }
    }

    /// Human label used in reports ("Log scaled", ...).
    pub fn label(self) -> &'static str {
        match self {
            ScaleMethod::Log => "Log",
            ScaleMethod::Max => "Max",
            ScaleMethod::MinMax => "MinMax",
        }
    }

    pub fn apply(self, values: &[f64]) -> Vec<f64> {
        match self {
            ScaleMethod::Log => scale_log(values),
            ScaleMethod::Max => scale_max(values),
            ScaleMethod::MinMax => scale_minmax(values),
        }
    }
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleMethod {
    type Err = HistError;

    fn from_str(s: &str) -> Result<Self> {
        ScaleMethod::parse(s)
    }
}

/// One applied step and the values it produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub method: ScaleMethod,
    /// True for the trailing `max` the pipeline always appends.
    pub forced: bool,
    pub values: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTrace {
    pub input: Vec<f64>,
    /// Never empty: the forced `max` is always the last stage.
    pub stages: Vec<Stage>,
}

impl ScaleTrace {
    pub fn output(&self) -> &[f64] {
        self.stages
            .last()
            .map(|s| s.values.as_slice())
            .unwrap_or(self.input.as_slice())
    }

    pub fn into_output(mut self) -> Vec<f64> {
        match self.stages.pop() {
            Some(s) => s.values,
            None => self.input,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pipeline {
    methods: Vec<ScaleMethod>,
}

impl Pipeline {
    pub fn new(methods: Vec<ScaleMethod>) -> Self {
        Self { methods }
    }

    /// Requested methods, without the forced trailing `max`.
    pub fn methods(&self) -> &[ScaleMethod] {
        &self.methods
    }

    pub fn run(&self, values: &[f64]) -> ScaleTrace {
        let steps = self
            .methods
            .iter()
            .map(|&m| (m, false))
            .chain(std::iter::once((ScaleMethod::Max, true)));

        let mut stages: Vec<Stage> = Vec::with_capacity(self.methods.len() + 1);
        for (method, forced) in steps {
            let prev = stages.last().map(|s| s.values.as_slice()).unwrap_or(values);
            let next = method.apply(prev);
            tracing::debug!(
                method = method.name(),
                forced,
                min = next.iter().copied().reduce(f64::min).unwrap_or(0.0),
                max = next.iter().copied().reduce(f64::max).unwrap_or(0.0),
                "scale stage"
            );
            stages.push(Stage {
                method,
                forced,
                values: next,
            });
        }

        ScaleTrace {
            input: values.to_vec(),
            stages,
        }
    }

    /// Final values only.
    pub fn scale(&self, values: &[f64]) -> Vec<f64> {
        self.run(values).into_output()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(vec![ScaleMethod::Log])
    }
}
