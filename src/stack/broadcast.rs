//! Uniform stack broadcast
//! Location: src/stack/broadcast.rs

use ndarray::Array3;
use rand::Rng;
use tracing::debug;

use crate::config::TransientConfig;
use crate::error::ModelResult;
use crate::synth::generate_transient;

use super::{check_grid, StackRecording};

/// Replicate one synthetic timeline across every pixel of a
/// `height × width` grid.
///
/// Every pixel of frame `i` carries the timeline's value at frame `i`. The
/// broadcast adds no spatial variation and draws no new randomness, so a
/// noisy timeline is shared identically by all pixels.
pub fn generate_uniform_stack<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    config: &TransientConfig,
    rng: &mut R,
) -> ModelResult<StackRecording> {
    check_grid(height, width)?;
    let recording = generate_transient(config, rng)?;

    let mut frames = Array3::zeros((recording.samples.len(), height, width));
    for (&sample, mut frame) in recording.samples.iter().zip(frames.outer_iter_mut()) {
        frame.fill(sample);
    }
    debug!(
        frames = recording.samples.len(),
        height, width, "broadcast uniform stack"
    );
    Ok(StackRecording {
        time_ms: recording.time_ms,
        frames,
    })
}
