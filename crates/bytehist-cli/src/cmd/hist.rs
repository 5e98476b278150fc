use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Args;
use bytehist_core::{Analysis, HistError, Pipeline, ScaleMethod};

use crate::io::input;
use crate::render;

/// Exit status for a missing input file (clap uses 2 for usage errors).
pub const EXIT_INPUT_NOT_FOUND: u8 = 3;

#[derive(Args, Debug)]
pub struct HistArgs {
    /// Input file to analyze as raw bytes
    pub input: PathBuf,

    /// Scaling methods: log, max or minmax, applied in the order given
    /// (repeats allowed). A final max step always follows. A bare `--scale`
    /// means max only. The list is greedy: give INPUT first, or end it with `--`.
    #[arg(
        long,
        num_args = 0..,
        value_parser = ScaleMethod::from_str,
        default_values_t = [ScaleMethod::Log]
    )]
    pub scale: Vec<ScaleMethod>,

    /// Echo intermediate pipeline states and the bar-length column
    #[arg(long, visible_alias = "debug")]
    pub verbose: bool,

    /// Also report zstd compressed size (a real-world compressibility check)
    #[arg(long)]
    pub zstd: bool,

    /// Zstd compression level (1..=22 typical). Higher is slower.
    #[arg(long, default_value_t = 3)]
    pub zstd_level: i32,
}

impl HistArgs {
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.scale.clone())
    }
}

pub fn run(args: HistArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(&args, &mut out)
}

/// Full run with the report written to `out`; summaries go to stderr.
pub fn run_to<W: Write>(args: &HistArgs, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", args.input.display())?;

    let bytes = input::read_input(&args.input)?;
    let pipeline = args.pipeline();

    eprintln!("--- input ---");
    eprintln!("file            = {}", args.input.display());
    eprintln!("bytes           = {}", bytes.len());
    eprintln!("crc32           = 0x{:08x}", crc32fast::hash(&bytes));
    eprintln!("scale           = {}", describe(&pipeline));

    if args.zstd {
        let n = bytes.len();
        let z = zstd_size(&bytes, args.zstd_level)?;
        let ratio = if z == 0 { 0.0 } else { (n as f64) / (z as f64) };
        eprintln!("--- zstd ---");
        eprintln!("zstd_level      = {}", args.zstd_level);
        eprintln!("zstd_bytes      = {}", z);
        eprintln!("ratio_raw/zstd  = {:.4}x", ratio);
    }

    let analysis = Analysis::run(&bytes, &pipeline)
        .with_context(|| format!("analyze {}", args.input.display()))?;

    if analysis.counts.is_empty() {
        tracing::warn!(file = %args.input.display(), "empty input: rel. stddev is undefined");
    }

    render::write_report(out, &bytes, &analysis, args.verbose)?;
    out.flush()?;
    Ok(())
}

/// Process exit status for a failed run.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<HistError>() {
        Some(HistError::InputNotFound(_)) => EXIT_INPUT_NOT_FOUND,
        _ => 1,
    }
}

fn describe(p: &Pipeline) -> String {
    let mut names: Vec<&str> = p.methods().iter().map(|m| m.name()).collect();
    names.push("max(final)");
    names.join(" -> ")
}

fn zstd_size(bytes: &[u8], level: i32) -> anyhow::Result<usize> {
    let out = zstd::stream::encode_all(Cursor::new(bytes), level).context("zstd encode")?;
    Ok(out.len())
}
