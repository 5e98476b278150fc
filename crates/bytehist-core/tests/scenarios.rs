use bytehist_core::bars::bar_lengths;
use bytehist_core::scale::{scale_log, scale_max, scale_minmax};
use bytehist_core::{Pipeline, ScaleMethod};

fn assert_close(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (i, (g, w)) in got.iter().zip(want).enumerate() {
        assert!((g - w).abs() < 1e-4, "idx={} got={} want={}", i, g, w);
    }
}

#[test]
fn scenario_a_max() {
    assert_eq!(scale_max(&[0.0, 5.0, 10.0]), vec![0.0, 0.5, 1.0]);
}

#[test]
fn scenario_b_minmax() {
    assert_close(&scale_minmax(&[3.0, 5.0, 10.0]), &[0.0, 0.2857142857, 1.0]);
}

#[test]
fn scenario_c_log() {
    assert_close(&scale_log(&[0.0, 1.0, 9.0]), &[0.0, 0.6931, 2.3026]);
}

#[test]
fn scenario_d_log_pipeline() {
    let out = Pipeline::new(vec![ScaleMethod::Log]).scale(&[0.0, 1.0, 9.0]);
    assert_close(&out, &[0.0, 0.3010, 1.0]);
    assert_eq!(out[2], 1.0);
}

#[test]
fn scenario_e_bars() {
    let scaled = Pipeline::default().scale(&[0.0, 1.0, 9.0]);
    let bars = bar_lengths(&scaled, &[0, 1, 9]).unwrap();
    assert_eq!(bars, vec![0, 24, 80]);
}

#[test]
fn log_then_minmax_then_forced_max() {
    let p = Pipeline::new(vec![ScaleMethod::Log, ScaleMethod::MinMax]);
    let t = p.run(&[0.0, 1.0, 9.0]);
    let labels: Vec<_> = t.stages.iter().map(|s| (s.method, s.forced)).collect();
    assert_eq!(
        labels,
        vec![
            (ScaleMethod::Log, false),
            (ScaleMethod::MinMax, false),
            (ScaleMethod::Max, true),
        ]
    );
    assert_close(t.output(), &[0.0, 0.3010, 1.0]);
}

#[test]
fn repeated_methods_are_applied_each_time() {
    let once = Pipeline::new(vec![ScaleMethod::Log]).scale(&[0.0, 1.0, 9.0, 99.0]);
    let twice = Pipeline::new(vec![ScaleMethod::Log, ScaleMethod::Log]).scale(&[0.0, 1.0, 9.0, 99.0]);
    assert_ne!(once, twice);
    assert_eq!(twice[3], 1.0);
}
