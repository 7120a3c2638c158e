//! End-to-end transient recording generation
//! Location: src/synth/generator.rs

use rand::Rng;
use tracing::debug;

use crate::config::TransientConfig;
use crate::error::ModelResult;

use super::noise::NoiseInjector;
use super::timing::DerivedTiming;
use super::train;
use super::waveform::TransientTemplate;

/// A 1-D synthetic recording: millisecond timestamps and one intensity
/// sample per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientRecording {
    /// Timestamp (ms) of each frame, starting at zero.
    pub time_ms: Vec<f64>,
    /// Intensity in counts, one sample per frame.
    pub samples: Vec<i32>,
}

/// Generate one full recording: validate, synthesize the canonical
/// transient, tile it into a train, and add measurement noise.
///
/// With `noise_pct = 0` the output is fully determined by the configuration
/// and `rng` is never consulted; otherwise seed `rng` for reproducibility.
pub fn generate_transient<R: Rng + ?Sized>(
    config: &TransientConfig,
    rng: &mut R,
) -> ModelResult<TransientRecording> {
    config.validate()?;
    let timing = DerivedTiming::from_config(config);
    let clean = clean_timeline(config, &timing);
    let samples = NoiseInjector::from_config(config).inject(&clean, rng);
    debug!(
        model = ?config.model_type,
        frames = timing.frame_count,
        onset_frame = timing.onset_frame,
        "generated transient recording"
    );
    Ok(TransientRecording {
        time_ms: timing.time_axis().to_vec(),
        samples,
    })
}

/// Noiseless timeline for an already-validated configuration.
pub(crate) fn clean_timeline(config: &TransientConfig, timing: &DerivedTiming) -> Vec<i32> {
    let template = TransientTemplate::synthesize(config, timing);
    train::assemble_train(&template, config, timing)
}
