//! Frame timing derived from a transient configuration
//! Location: src/synth/timing.rs

use ndarray::Array1;

use crate::config::TransientConfig;

/// Read-only timing quantities derived from a [`TransientConfig`].
///
/// The invariant `time_axis().len() == frame_count` holds by construction;
/// every generated timeline carries exactly `frame_count` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTiming {
    /// Milliseconds between consecutive frames.
    pub frame_interval_ms: f64,
    /// Number of frames in the recording.
    pub frame_count: usize,
    /// Frame index at which the first transient begins.
    pub onset_frame: usize,
    /// Timestamp of the final frame (ms).
    pub final_time_ms: f64,
}

impl DerivedTiming {
    /// Derive frame timing from a validated configuration.
    pub fn from_config(config: &TransientConfig) -> Self {
        let frames_per_ms = f64::from(config.frame_rate_hz) / 1000.0;
        let frame_interval_ms = 1000.0 / f64::from(config.frame_rate_hz);
        let frame_count = (frames_per_ms * f64::from(config.total_duration_ms)).floor() as usize;
        // Half-frame onsets round to the even frame.
        let onset_frame =
            (f64::from(config.onset_ms) / frame_interval_ms).round_ties_even() as usize;
        let final_time_ms = f64::from(config.total_duration_ms) - frame_interval_ms;
        Self {
            frame_interval_ms,
            frame_count,
            onset_frame,
            final_time_ms,
        }
    }

    /// Whole number of frames spanned by `span_ms`, clamped to zero.
    ///
    /// Extreme frame rates can floor a short phase to zero frames; callers
    /// get an empty phase rather than a panic.
    pub fn frames_in(&self, span_ms: f64) -> usize {
        let frames = (span_ms / self.frame_interval_ms).floor();
        if frames.is_sign_negative() {
            0
        } else {
            frames as usize
        }
    }

    /// Onset expressed in milliseconds, aligned to the frame grid.
    pub fn onset_time_ms(&self) -> f64 {
        self.onset_frame as f64 * self.frame_interval_ms
    }

    /// Millisecond timestamps, one per frame, starting at zero.
    pub fn time_axis(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.final_time_ms, self.frame_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(total_duration_ms: u32, frame_rate_hz: u32, onset_ms: u32) -> DerivedTiming {
        DerivedTiming::from_config(&TransientConfig {
            total_duration_ms,
            frame_rate_hz,
            onset_ms,
            ..TransientConfig::default()
        })
    }

    #[test]
    fn test_full_rate_timing() {
        let t = timing(100, 1000, 0);
        assert_eq!(t.frame_interval_ms, 1.0);
        assert_eq!(t.frame_count, 100);
        assert_eq!(t.onset_frame, 0);
        assert_eq!(t.final_time_ms, 99.0);
    }

    #[test]
    fn test_half_rate_timing() {
        let t = timing(100, 500, 10);
        assert_eq!(t.frame_interval_ms, 2.0);
        assert_eq!(t.frame_count, 50);
        assert_eq!(t.onset_frame, 5);
        assert_eq!(t.final_time_ms, 98.0);
    }

    #[test]
    fn test_fractional_interval() {
        let t = timing(100, 333, 0);
        assert_eq!(t.frame_count, 33);
        assert!((t.frame_interval_ms - 3.003).abs() < 0.001);
    }

    #[test]
    fn test_time_axis_matches_frame_count() {
        for fps in [201, 250, 333, 500, 999, 1000] {
            let t = timing(150, fps, 0);
            let axis = t.time_axis();
            assert_eq!(axis.len(), t.frame_count, "fps {}", fps);
            assert_eq!(axis[0], 0.0);
            assert!((axis[axis.len() - 1] - t.final_time_ms).abs() < 1e-9);
        }
    }

    #[test]
    fn test_frames_in_clamps_to_zero() {
        let t = timing(100, 1000, 0);
        assert_eq!(t.frames_in(5.0), 5);
        assert_eq!(t.frames_in(0.0), 0);
        assert_eq!(t.frames_in(-10.0), 0);

        let t = timing(100, 250, 0);
        assert_eq!(t.frames_in(5.0), 1);
        assert_eq!(t.frames_in(50.0), 12);
    }

    #[test]
    fn test_onset_alignment() {
        let t = timing(200, 500, 17);
        // 17 ms / 2 ms per frame rounds to frame 8 (ties to even).
        assert_eq!(t.onset_frame, 8);
        assert_eq!(t.onset_time_ms(), 16.0);
    }
}
