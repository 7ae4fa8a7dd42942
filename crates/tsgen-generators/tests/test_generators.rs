//! Integration tests for the waveform and noise generators.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use tsgen_core::Result;
use tsgen_generators::{affine, constant, cosine, randn, sine, Generator, NoiseParams, WaveParams};
use tsgen_time::{DatetimeIndex, Period, Timestamp};

const TOL: f64 = 1e-10;

fn last(ts: &tsgen_series::TimeSerie) -> f64 {
    ts.last().map(|(_, v)| v).unwrap()
}

fn first(ts: &tsgen_series::TimeSerie) -> f64 {
    ts.first().map(|(_, v)| v).unwrap()
}

// ─── Shape ────────────────────────────────────────────────────────────────────

#[test]
fn every_generator_matches_the_range_length() {
    for (step, n) in [("1M", 12), ("1D", 367)] {
        assert_eq!(affine("2020", "2021", step, 0.0, 1.0).unwrap().len(), n);
        assert_eq!(constant("2020", "2021", step, 2.0).unwrap().len(), n);
        assert_eq!(cosine("2020", "2021", step, WaveParams::default()).unwrap().len(), n);
        assert_eq!(sine("2020", "2021", step, WaveParams::default()).unwrap().len(), n);
        assert_eq!(randn("2020", "2021", step, NoiseParams::default()).unwrap().len(), n);
    }
}

// ─── Affine and constant ──────────────────────────────────────────────────────

#[test]
fn affine_endpoints() {
    let ts = affine("2020", "2021", "1D", 0.0, 1.0).unwrap();
    assert_eq!(first(&ts), 0.0);
    assert_eq!(last(&ts), 1.0);
    let ts = affine("2020", "2021", "1D", 5.0, -5.0).unwrap();
    assert_eq!(first(&ts), 5.0);
    assert_eq!(last(&ts), -5.0);
}

#[test]
fn affine_is_linear() {
    for step in ["1M", "1D", "1h"] {
        let up = affine("2020", "2021", step, 0.0, 1.0).unwrap();
        let down = affine("2020", "2021", step, 1.0, 0.0).unwrap();
        let ones = affine("2020", "2021", step, 1.0, 1.0).unwrap();
        assert_eq!((&up + &down).unwrap(), ones);
    }
}

#[test]
fn constant_is_exact() {
    for value in [0.0, 1.0, -3.5, 1e300] {
        let ts = constant("2020", "2021", "1D", value).unwrap();
        assert!(ts.values().iter().all(|&v| v == value));
    }
}

// ─── Periodic waves ───────────────────────────────────────────────────────────

#[test]
fn cosine_shape() {
    let amplitude = 2.5;
    let params = WaveParams::default().with_amplitude(amplitude);

    let ts = cosine("2020", "2021", "1D", params).unwrap();
    assert_eq!(first(&ts), amplitude);
    assert_abs_diff_eq!(last(&ts), amplitude, epsilon = TOL);

    let half = cosine("2020", "2021", "1D", params.with_n_periods(0.5)).unwrap();
    assert_abs_diff_eq!(last(&half), -amplitude, epsilon = TOL);

    let quarter = cosine("2020", "2021", "1D", params.with_n_periods(0.25)).unwrap();
    assert_abs_diff_eq!(last(&quarter), 0.0, epsilon = TOL);
}

#[test]
fn sine_shape() {
    let amplitude = 2.5;
    let params = WaveParams::default().with_amplitude(amplitude);

    let ts = sine("2020", "2021", "1D", params).unwrap();
    assert_eq!(first(&ts), 0.0);
    assert_abs_diff_eq!(last(&ts), 0.0, epsilon = TOL);

    let half = sine("2020", "2021", "1D", params.with_n_periods(0.5)).unwrap();
    assert_abs_diff_eq!(last(&half), 0.0, epsilon = TOL);

    let quarter = sine("2020", "2021", "1D", params.with_n_periods(0.25)).unwrap();
    assert_abs_diff_eq!(last(&quarter), amplitude, epsilon = TOL);
}

#[test]
fn waves_stay_within_the_amplitude() {
    let params = WaveParams::new(3.0, 7.0);
    for ts in [
        sine("2020", "2021", "1D", params).unwrap(),
        cosine("2020", "2021", "1D", params).unwrap(),
    ] {
        assert!(ts.values().iter().all(|v| v.abs() <= 3.0));
    }
}

// ─── Noise ────────────────────────────────────────────────────────────────────

#[test]
fn randn_moments() {
    let params = NoiseParams::new(3.0, 10.0);
    let ts = randn("2020", "2021", "1min", params).unwrap();
    assert_eq!(ts.len(), 366 * 24 * 60 + 1);
    assert_eq!(ts.mean().round(), 3.0);
    assert_eq!(ts.std_dev().round(), 10.0);
}

#[test]
fn randn_draws_differ_between_calls() {
    let a = randn("2020", "2021", "1D", NoiseParams::default()).unwrap();
    let b = randn("2020", "2021", "1D", NoiseParams::default()).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.index(), b.index());
}

// ─── Injected range ───────────────────────────────────────────────────────────

#[test]
fn generators_use_the_injected_range() {
    let fake = |start: Timestamp, _end: Timestamp, _step: Period| -> Result<DatetimeIndex> {
        let day = 24 * 3600 * 1_000_000;
        Ok(DatetimeIndex::new(vec![
            start,
            start.add_micros(day)?,
            start.add_micros(10 * day)?,
        ]))
    };
    let generator = Generator::with_range(fake);
    let start: Timestamp = "2020-01-01".parse().unwrap();
    let end: Timestamp = "2030-01-01".parse().unwrap();

    let ts = generator.affine(start, end, Period::monthly(), 0.0, 1.0).unwrap();
    assert_eq!(ts.values(), &[0.0, 0.5, 1.0]);
    assert_eq!(ts.index()[2].to_string(), "2020-01-11");

    let ts = generator.constant(start, end, Period::daily(), 4.0).unwrap();
    assert_eq!(ts.values(), &[4.0, 4.0, 4.0]);
}

#[test]
fn range_errors_propagate() {
    let failing = |_: Timestamp, _: Timestamp, _: Period| -> Result<DatetimeIndex> {
        Err(tsgen_core::Error::InvalidArgument("no calendar".into()))
    };
    let generator = Generator::with_range(failing);
    let t: Timestamp = "2020".parse().unwrap();
    assert!(generator.sine(t, t, Period::daily(), WaveParams::default()).is_err());
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_affine_hits_both_endpoints(a in -1e6f64..1e6, b in -1e6f64..1e6, days in 1u32..400) {
        let start: Timestamp = "2020-01-01".parse().unwrap();
        let end = start.add_micros(i64::from(days) * 86_400_000_000).unwrap();
        let ts = Generator::new().affine(start, end, Period::daily(), a, b).unwrap();
        prop_assert_eq!(ts.len(), days as usize + 1);
        prop_assert_eq!(first(&ts), a);
        prop_assert_eq!(last(&ts), b);
    }
}
