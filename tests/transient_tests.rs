// ================================================================================
// Integration tests for 1-D transient generation
// File: tests/transient_tests.rs
// ================================================================================

use omap_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_time_axis_and_samples_match_frame_count() {
    for (total, fps) in [(100u32, 1000u32), (150, 1000), (100, 201), (400, 333), (250, 500)] {
        let config = TransientConfig {
            total_duration_ms: total,
            frame_rate_hz: fps,
            transient_count: TransientCount::AutoFill,
            ..TransientConfig::default()
        };
        let recording = generate_transient(&config, &mut rng()).unwrap();
        let expected = (f64::from(fps) / 1000.0 * f64::from(total)).floor() as usize;
        assert_eq!(recording.time_ms.len(), expected);
        assert_eq!(recording.samples.len(), expected);
    }
}

#[test]
fn test_noiseless_runs_are_identical() {
    let config = TransientConfig {
        total_duration_ms: 500,
        transient_count: TransientCount::AutoFill,
        ..TransientConfig::default()
    };
    let a = generate_transient(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let b = generate_transient(&config, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a.samples, b.samples);
    assert_eq!(a.time_ms, b.time_ms);
}

#[test]
fn test_noisy_runs_reproduce_with_the_same_seed() {
    let config = TransientConfig {
        noise_pct: 8.0,
        ..TransientConfig::default()
    };
    let a = generate_transient(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = generate_transient(&config, &mut StdRng::seed_from_u64(7)).unwrap();
    let c = generate_transient(&config, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(a.samples, b.samples);
    assert_ne!(a.samples, c.samples);
}

#[test]
fn test_vm_trough_in_depolarization_window() {
    let config = TransientConfig::default();
    let recording = generate_transient(&config, &mut rng()).unwrap();
    let min = *recording.samples.iter().min().unwrap();
    assert_eq!(min, 100); // baseline 200 - amplitude 100
    let trough = recording.samples.iter().position(|&v| v == min).unwrap();
    assert!(recording.time_ms[trough] <= 5.0);
}

#[test]
fn test_ca_peak_in_depolarization_window() {
    let config = TransientConfig {
        model_type: ModelType::Ca,
        ..TransientConfig::default()
    };
    let recording = generate_transient(&config, &mut rng()).unwrap();
    let max = *recording.samples.iter().max().unwrap();
    assert_eq!(max, 300); // baseline 200 + amplitude 100
    let peak = recording.samples.iter().position(|&v| v == max).unwrap();
    assert!(recording.time_ms[peak] <= 10.0);
}

#[test]
fn test_pre_noise_samples_stay_in_model_band() {
    for fps in [201u32, 250, 500, 1000] {
        let vm = TransientConfig {
            frame_rate_hz: fps,
            total_duration_ms: 300,
            transient_count: TransientCount::AutoFill,
            ..TransientConfig::default()
        };
        let recording = generate_transient(&vm, &mut rng()).unwrap();
        assert!(
            recording.samples.iter().all(|&v| (100..=200).contains(&v)),
            "Vm out of band at {} fps",
            fps
        );

        let ca = TransientConfig {
            model_type: ModelType::Ca,
            ..vm
        };
        let recording = generate_transient(&ca, &mut rng()).unwrap();
        assert!(
            recording.samples.iter().all(|&v| (200..=300).contains(&v)),
            "Ca out of band at {} fps",
            fps
        );
    }
}

#[test]
fn test_end_to_end_vm_recording() {
    let config = TransientConfig {
        total_duration_ms: 150,
        ..TransientConfig::default()
    };
    let recording = generate_transient(&config, &mut rng()).unwrap();
    assert_eq!(recording.time_ms.len(), 150);
    assert_eq!(recording.samples.len(), 150);
    assert!(*recording.samples.iter().min().unwrap() <= 100 + 2);
    assert_eq!(recording.time_ms[0], 0.0);
    assert_eq!(recording.time_ms[149], 149.0);
}

#[test]
fn test_duration_boundary_through_api() {
    let short = TransientConfig {
        total_duration_ms: 99,
        ..TransientConfig::default()
    };
    assert!(matches!(
        generate_transient(&short, &mut rng()),
        Err(ModelError::Configuration(_))
    ));

    let minimal = TransientConfig {
        total_duration_ms: 100,
        ..TransientConfig::default()
    };
    assert!(generate_transient(&minimal, &mut rng()).is_ok());
}

#[test]
fn test_cycle_length_boundary_through_api() {
    let fast = TransientConfig {
        cycle_length_ms: 49,
        ..TransientConfig::default()
    };
    assert!(generate_transient(&fast, &mut rng()).is_err());

    let minimal = TransientConfig {
        cycle_length_ms: 50,
        ..TransientConfig::default()
    };
    assert!(generate_transient(&minimal, &mut rng()).is_ok());
}

#[test]
fn test_frame_rate_boundaries_through_api() {
    for (fps, ok) in [(200u32, false), (201, true), (1000, true), (1001, false)] {
        let config = TransientConfig {
            frame_rate_hz: fps,
            ..TransientConfig::default()
        };
        assert_eq!(generate_transient(&config, &mut rng()).is_ok(), ok, "{} fps", fps);
    }
}

#[test]
fn test_capacity_error_reports_the_shortfall() {
    let config = TransientConfig {
        total_duration_ms: 250,
        transient_count: TransientCount::Explicit(3),
        ..TransientConfig::default()
    };
    match generate_transient(&config, &mut rng()) {
        Err(ModelError::Capacity(err)) => {
            assert_eq!(err.count, 3);
            assert_eq!(err.required_ms, 300);
            assert_eq!(err.available_ms, 250);
        }
        other => panic!("expected capacity error, got {:?}", other),
    }
}

#[test]
fn test_noise_band_scales_with_percentage() {
    let config = TransientConfig {
        total_duration_ms: 2000,
        onset_ms: 1900,
        noise_pct: 10.0,
        transient_count: TransientCount::AutoFill,
        ..TransientConfig::default()
    };
    let recording = generate_transient(&config, &mut rng()).unwrap();
    // The first 1900 frames are pure baseline plus noise with sigma 10.
    let pre_onset = &recording.samples[..1900];
    let mean = pre_onset.iter().map(|&v| f64::from(v)).sum::<f64>() / pre_onset.len() as f64;
    let variance = pre_onset
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / pre_onset.len() as f64;
    assert!((mean - 200.0).abs() < 2.0, "mean {}", mean);
    let sigma = variance.sqrt();
    assert!((sigma - 10.0).abs() < 1.0, "sigma {}", sigma);
}
