// crates/bytehist-cli/src/render.rs
//
// Text report: hex preview, statistics, pipeline stages, one bar per byte value.
// Everything goes through a `Write` sink; nothing here computes.

use std::io::{self, Write};

use bytehist_core::scale::ScaleTrace;
use bytehist_core::{Analysis, Stats, BAR_LENGTH_MAX};

pub const PREVIEW_BYTES: usize = 16;

pub fn write_report<W: Write>(
    out: &mut W,
    data: &[u8],
    analysis: &Analysis,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "First {} bytes:", PREVIEW_BYTES)?;
    writeln!(out, "{}", hex_preview(data))?;

    write_stats(out, &analysis.stats)?;
    write_stages(out, &analysis.trace, verbose)?;
    writeln!(out)?;

    for (byte, &bar) in (0u8..=255).zip(&analysis.bars) {
        let count = analysis.counts.get(byte);
        writeln!(out, "{}", histogram_line(byte, count, bar, verbose))?;
    }
    Ok(())
}

/// First 16 bytes as two-digit lowercase hex, no separator.
pub fn hex_preview(data: &[u8]) -> String {
    data.iter()
        .take(PREVIEW_BYTES)
        .map(|b| format!("{b:02x}"))
        .collect()
}

pub fn write_stats<W: Write>(out: &mut W, stats: &Stats) -> io::Result<()> {
    writeln!(out, "Statistics:")?;
    for (name, val) in stat_rows(stats) {
        writeln!(out, "\t{}:  {}", name, val)?;
    }
    writeln!(out)
}

pub fn stat_rows(stats: &Stats) -> Vec<(&'static str, String)> {
    let rel = match stats.rel_stddev {
        Some(v) => float(v),
        None => "undefined".to_string(),
    };
    vec![
        ("min", stats.min.to_string()),
        ("max", stats.max.to_string()),
        ("mean", float(stats.mean)),
        ("stddev", float(stats.stddev)),
        ("rel. stddev", rel),
        ("median", float(stats.median)),
        ("distinct", format!("{}/256", stats.distinct)),
        ("entropy", format!("{:.6} bits/byte", stats.entropy)),
    ]
}

/// Float stats always carry a fractional part (`4.0`, not `4`).
fn float(v: f64) -> String {
    format!("{v:?}")
}

/// "Log scaled" etc. per stage; in verbose mode each stage's input is echoed
/// first and the final values last.
pub fn write_stages<W: Write>(out: &mut W, trace: &ScaleTrace, verbose: bool) -> io::Result<()> {
    let mut prev: &[f64] = &trace.input;
    for stage in &trace.stages {
        if verbose {
            writeln!(out, "{}", value_list(prev))?;
        }
        writeln!(out, "{} scaled", stage.method.label())?;
        prev = stage.values.as_slice();
    }
    if verbose {
        writeln!(out, "{}", value_list(prev))?;
    }
    Ok(())
}

pub fn value_list(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// ` 0x41:         12 | ****       |`
pub fn histogram_line(byte: u8, count: u64, bar: usize, verbose: bool) -> String {
    let bar = bar.min(BAR_LENGTH_MAX);
    let mut line = format!("{:>4}: {:>10} | ", format!("{:#x}", byte), count);
    if verbose {
        line.push_str(&format!("{:>6} | ", bar));
    }
    line.push_str(&"*".repeat(bar));
    line.push_str(&" ".repeat(BAR_LENGTH_MAX - bar));
    line.push('|');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_capped_at_sixteen_bytes() {
        let data: Vec<u8> = (0u8..40).collect();
        assert_eq!(hex_preview(&data), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(hex_preview(&[0xab, 0x01]), "ab01");
        assert_eq!(hex_preview(&[]), "");
    }

    #[test]
    fn float_stats_keep_fraction() {
        let rows = stat_rows(&Stats::from_values(&[4, 4, 4, 4]));
        let get = |name: &str| rows.iter().find(|(n, _)| *n == name).unwrap().1.clone();
        assert_eq!(get("min"), "4");
        assert_eq!(get("mean"), "4.0");
        assert_eq!(get("stddev"), "0.0");
        assert_eq!(get("rel. stddev"), "0.0");
        assert_eq!(get("median"), "4.0");

        let rows = stat_rows(&Stats::from_values(&[1, 2, 2, 3]));
        assert_eq!(rows[2].1, "2.0");
        assert_eq!(rows[5].1, "2.0");
        assert_eq!(stat_rows(&Stats::from_values(&[1, 2])).into_iter().nth(2).unwrap().1, "1.5");
    }

    #[test]
    fn line_is_fixed_width() {
        let a = histogram_line(0, 0, 0, false);
        let b = histogram_line(255, 123_456, 80, false);
        assert_eq!(a.len(), b.len());
        assert_eq!(a, format!(" 0x0:          0 | {}|", " ".repeat(80)));
        assert!(b.starts_with("0xff:     123456 | ****"));
    }
}
