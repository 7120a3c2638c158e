//! Model configuration structures and validation
//! Location: src/config.rs

use serde::{Deserialize, Serialize};

use crate::error::{CapacityError, ConfigurationError, ModelResult};

/// Shortest recording the generator will produce (ms).
pub const MIN_TOTAL_DURATION_MS: u32 = 100;
/// Canonical span of one transient; also the time each transient in an
/// explicit train must be able to claim (ms).
pub const TRANSIENT_SPAN_MS: u32 = 100;
/// Shortest supported pacing interval (ms).
pub const MIN_CYCLE_LENGTH_MS: u32 = 50;
/// Frame rates must be strictly above this bound (Hz).
pub const FRAME_RATE_MIN_HZ_EXCLUSIVE: u32 = 200;
/// Frame rates must be at or below this bound (Hz).
pub const FRAME_RATE_MAX_HZ: u32 = 1000;
/// Ceiling of the 16-bit fluorescence count range.
pub const FL_COUNT_MAX: u32 = u16::MAX as u32;

/// The kind of optical signal being modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ModelType {
    /// Transmembrane voltage: depolarization deflects below baseline.
    Vm,
    /// Intracellular calcium: depolarization deflects above baseline.
    Ca,
}

/// How many transients to place in the recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TransientCount {
    /// Exactly this many transients.
    Explicit(u32),
    /// As many transients as fit between the onset and the end of the
    /// recording at the configured cycle length.
    AutoFill,
}

/// Immutable parameters for one synthetic recording.
///
/// Integer-typed fields make the legacy "must be an int" runtime checks
/// unrepresentable; [`TransientConfig::validate`] covers the value ranges.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransientConfig {
    /// Signal model to synthesize.
    pub model_type: ModelType,
    /// Length of the recording (ms).
    pub total_duration_ms: u32,
    /// Start time of the first transient (ms).
    pub onset_ms: u32,
    /// Acquisition frame rate (frames per second).
    pub frame_rate_hz: u32,
    /// Baseline fluorescence (counts).
    pub baseline_counts: u32,
    /// Deflection of the transient from baseline (counts).
    pub amplitude_counts: u32,
    /// Gaussian noise magnitude as a percentage of the amplitude.
    pub noise_pct: f64,
    /// Number of transients to place.
    pub transient_count: TransientCount,
    /// Time between onsets of successive transients (ms).
    pub cycle_length_ms: u32,
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::Vm,
            total_duration_ms: 100,
            onset_ms: 0,
            frame_rate_hz: 1000,
            baseline_counts: 200,
            amplitude_counts: 100,
            noise_pct: 0.0,
            transient_count: TransientCount::Explicit(1),
            cycle_length_ms: 100,
        }
    }
}

impl TransientConfig {
    /// Check every field against its value constraints.
    ///
    /// Fails fast with the first violated constraint, before any array is
    /// allocated. An explicit transient count that cannot fit after the
    /// onset is a [`CapacityError`]; every other violation is a
    /// [`ConfigurationError`].
    pub fn validate(&self) -> ModelResult<()> {
        if self.total_duration_ms < MIN_TOTAL_DURATION_MS {
            return Err(ConfigurationError::DurationTooShort {
                actual: self.total_duration_ms,
            }
            .into());
        }
        if self.onset_ms >= self.total_duration_ms {
            return Err(ConfigurationError::OnsetOutOfWindow {
                onset_ms: self.onset_ms,
                total_duration_ms: self.total_duration_ms,
            }
            .into());
        }
        if self.frame_rate_hz <= FRAME_RATE_MIN_HZ_EXCLUSIVE || self.frame_rate_hz > FRAME_RATE_MAX_HZ
        {
            return Err(ConfigurationError::FrameRateOutOfRange {
                actual: self.frame_rate_hz,
            }
            .into());
        }
        if self.model_type == ModelType::Vm && self.amplitude_counts > self.baseline_counts {
            return Err(ConfigurationError::AmplitudeExceedsBaseline {
                baseline: self.baseline_counts,
                amplitude: self.amplitude_counts,
            }
            .into());
        }
        if self.baseline_counts > FL_COUNT_MAX {
            return Err(ConfigurationError::BaselineTooLarge {
                actual: self.baseline_counts,
            }
            .into());
        }
        if self.amplitude_counts > FL_COUNT_MAX {
            return Err(ConfigurationError::AmplitudeTooLarge {
                actual: self.amplitude_counts,
            }
            .into());
        }
        if !self.noise_pct.is_finite() || self.noise_pct < 0.0 {
            return Err(ConfigurationError::InvalidNoisePercentage(self.noise_pct).into());
        }
        if let TransientCount::Explicit(count) = self.transient_count {
            if count == 0 {
                return Err(ConfigurationError::ZeroTransientCount.into());
            }
            let required_ms = u64::from(count) * u64::from(TRANSIENT_SPAN_MS);
            let available_ms = u64::from(self.total_duration_ms - self.onset_ms);
            if required_ms > available_ms {
                return Err(CapacityError {
                    count,
                    required_ms,
                    available_ms,
                }
                .into());
            }
        }
        if self.cycle_length_ms < MIN_CYCLE_LENGTH_MS {
            return Err(ConfigurationError::CycleLengthTooShort {
                actual: self.cycle_length_ms,
            }
            .into());
        }
        Ok(())
    }
}
