//! Transient train assembly
//! Location: src/synth/train.rs
//!
//! Places one or more transient templates into a baseline-filled timeline of
//! the full recording length, paced at the configured cycle length.

use crate::config::{TransientConfig, TransientCount};

use super::timing::DerivedTiming;
use super::waveform::TransientTemplate;

/// Tile `template` into a full-duration timeline.
///
/// The template is first resized into one cycle unit spanning exactly the
/// cycle length: truncated when the cycle is shorter than the canonical
/// transient, padded with baseline when longer. The unit is tiled for the
/// resolved transient count, trimmed to the frames remaining after the
/// onset, and written into a baseline-initialized timeline. The output
/// always holds exactly `timing.frame_count` samples.
pub fn assemble_train(
    template: &TransientTemplate,
    config: &TransientConfig,
    timing: &DerivedTiming,
) -> Vec<i32> {
    let baseline = config.baseline_counts as i32;
    let cycle_frames = timing.frames_in(f64::from(config.cycle_length_ms));

    let mut cycle_unit = template.samples().to_vec();
    cycle_unit.resize(cycle_frames, baseline);

    let count = resolved_count(config, timing);
    let capacity = timing.frame_count.saturating_sub(timing.onset_frame);
    let train_len = cycle_unit.len().saturating_mul(count).min(capacity);

    let mut timeline = vec![baseline; timing.frame_count];
    for (offset, &sample) in cycle_unit.iter().cycle().take(train_len).enumerate() {
        timeline[timing.onset_frame + offset] = sample;
    }
    timeline
}

/// Number of transients to tile: the configured count, or for
/// [`TransientCount::AutoFill`] enough cycles to cover the window between
/// the onset and the end of the recording.
fn resolved_count(config: &TransientConfig, timing: &DerivedTiming) -> usize {
    match config.transient_count {
        TransientCount::Explicit(count) => count as usize,
        TransientCount::AutoFill => {
            let remaining_ms = f64::from(config.total_duration_ms) - timing.onset_time_ms();
            let count = (remaining_ms / f64::from(config.cycle_length_ms)).ceil();
            if count.is_sign_negative() {
                0
            } else {
                count as usize
            }
        }
    }
}
