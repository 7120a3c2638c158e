//! Canonical transient waveform synthesis
//! Location: src/synth/waveform.rs
//!
//! Builds one biophysically shaped optical transient at the configured frame
//! rate: a Gaussian-edged depolarization, a linear early repolarization, and
//! an exponential late repolarization. Voltage transients deflect downward
//! from baseline, calcium transients upward. Both models span the same
//! canonical 100 ms so trains of either kind stay aligned frame-for-frame.

use std::ops::Range;

use ndarray::Array1;

use crate::config::{ModelType, TransientConfig, TRANSIENT_SPAN_MS};

use super::timing::DerivedTiming;

/// Phase shape parameters for one signal model. Each linear/Gaussian phase
/// is generated at 1-sample-per-millisecond fidelity and under-sampled to
/// the acquisition frame rate.
struct ModelShape {
    /// Depolarization length (ms).
    depolarization_ms: f64,
    /// Width of the Gaussian depolarization edge (ms).
    edge_width_ms: f64,
    /// Early repolarization length (ms).
    early_repolarization_ms: f64,
    /// Fraction of the deflection still present when early repolarization
    /// ends (APD20 for voltage, CAD40 for calcium).
    recovery_ratio: f64,
    /// Late repolarization decay constant (ms).
    tau_fall_ms: f64,
    /// Span of the active waveform (ms); any remainder of the canonical
    /// transient span is a trailing baseline pad.
    active_span_ms: f64,
}

impl ModelShape {
    fn for_model(model_type: ModelType) -> Self {
        match model_type {
            ModelType::Vm => Self {
                depolarization_ms: 5.0,
                edge_width_ms: 3.0,
                early_repolarization_ms: 5.0,
                recovery_ratio: 0.8,
                tau_fall_ms: 10.0,
                active_span_ms: 50.0,
            },
            ModelType::Ca => Self {
                depolarization_ms: 10.0,
                edge_width_ms: 6.0,
                early_repolarization_ms: 15.0,
                recovery_ratio: 0.6,
                tau_fall_ms: 30.0,
                active_span_ms: 100.0,
            },
        }
    }

    fn late_repolarization_ms(&self) -> f64 {
        self.active_span_ms - self.depolarization_ms - self.early_repolarization_ms
    }
}

/// Index ranges of the three phases within a synthesized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSpans {
    /// Gaussian-edged upstroke (downstroke for voltage).
    pub depolarization: Range<usize>,
    /// Linear partial recovery.
    pub early_repolarization: Range<usize>,
    /// Exponential return to baseline, including any trailing baseline pad.
    pub late_repolarization: Range<usize>,
}

/// One canonical transient sampled at the target frame rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientTemplate {
    samples: Vec<i32>,
    spans: PhaseSpans,
}

impl TransientTemplate {
    /// Synthesize the canonical transient for `config` at the frame rate
    /// described by `timing`. Deterministic for a given configuration.
    pub fn synthesize(config: &TransientConfig, timing: &DerivedTiming) -> Self {
        let shape = ModelShape::for_model(config.model_type);
        let baseline = f64::from(config.baseline_counts);
        let deflection = match config.model_type {
            ModelType::Vm => -f64::from(config.amplitude_counts),
            ModelType::Ca => f64::from(config.amplitude_counts),
        };

        let depolarization = depolarization_phase(&shape, baseline, deflection, timing);
        let early = early_repolarization_phase(&shape, baseline, deflection, timing);
        let late = late_repolarization_phase(&shape, baseline, deflection, timing);
        let pad_frames = timing.frames_in(f64::from(TRANSIENT_SPAN_MS) - shape.active_span_ms);

        let mut samples =
            Vec::with_capacity(depolarization.len() + early.len() + late.len() + pad_frames);
        samples.extend(depolarization.iter().map(|&v| v as i32));
        let depolarization_end = samples.len();
        samples.extend(early.iter().map(|&v| v as i32));
        let early_end = samples.len();
        samples.extend(late.iter().map(|&v| v as i32));
        samples.extend(std::iter::repeat(baseline as i32).take(pad_frames));
        let late_end = samples.len();

        Self {
            samples,
            spans: PhaseSpans {
                depolarization: 0..depolarization_end,
                early_repolarization: depolarization_end..early_end,
                late_repolarization: early_end..late_end,
            },
        }
    }

    /// Intensity samples, one per frame.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Phase boundaries used during synthesis.
    pub fn spans(&self) -> &PhaseSpans {
        &self.spans
    }

    /// Number of frames in the template.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the template holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Keep every `floor(len / target)`-th sample of a 1 ms fidelity phase, then
/// hard-truncate to exactly `target` samples. The truncation guarantees that
/// concatenated phases always reach the expected total frame count no matter
/// how the strides round.
fn under_sample(high_fidelity: &[f64], target: usize) -> Vec<f64> {
    if target == 0 || high_fidelity.is_empty() {
        return Vec::new();
    }
    let stride = (high_fidelity.len() / target).max(1);
    high_fidelity
        .iter()
        .step_by(stride)
        .take(target)
        .copied()
        .collect()
}

fn depolarization_phase(
    shape: &ModelShape,
    baseline: f64,
    deflection: f64,
    timing: &DerivedTiming,
) -> Vec<f64> {
    let period = shape.depolarization_ms as usize;
    let high_fidelity: Vec<f64> = (0..period)
        .map(|i| {
            let edge = (i as f64 - shape.depolarization_ms) / shape.edge_width_ms;
            baseline + deflection * (-(edge * edge)).exp()
        })
        .collect();
    under_sample(&high_fidelity, timing.frames_in(shape.depolarization_ms))
}

fn early_repolarization_phase(
    shape: &ModelShape,
    baseline: f64,
    deflection: f64,
    timing: &DerivedTiming,
) -> Vec<f64> {
    let period = shape.early_repolarization_ms as usize;
    // The phase recovers (1 - recovery_ratio) of the deflection.
    let slope = -(deflection - deflection * shape.recovery_ratio) / shape.early_repolarization_ms;
    let high_fidelity: Vec<f64> = (0..period)
        .map(|i| slope * i as f64 + deflection + baseline)
        .collect();
    under_sample(
        &high_fidelity,
        timing.frames_in(shape.early_repolarization_ms),
    )
}

fn late_repolarization_phase(
    shape: &ModelShape,
    baseline: f64,
    deflection: f64,
    timing: &DerivedTiming,
) -> Vec<f64> {
    let frames = timing.frames_in(shape.late_repolarization_ms());
    if frames == 0 {
        return Vec::new();
    }
    // Decay picks up where early repolarization left off and relaxes toward
    // baseline over the model's full active span.
    let decay_amplitude = deflection * shape.recovery_ratio;
    Array1::linspace(0.0, shape.active_span_ms, frames)
        .iter()
        .map(|&t| decay_amplitude * (-t / shape.tau_fall_ms).exp() + baseline)
        .collect()
}
