// src/error.rs
//! Unified error handling for the optical-mapping model core.
//!
//! Every generator entry point validates its inputs before any array is
//! allocated and fails fast with one of the typed errors below. Errors are
//! terminal for the call: there is no retry and no partial result.

use thiserror::Error;

use crate::config::{
    FL_COUNT_MAX, FRAME_RATE_MAX_HZ, FRAME_RATE_MIN_HZ_EXCLUSIVE, MIN_CYCLE_LENGTH_MS,
    MIN_TOTAL_DURATION_MS,
};
use crate::stack::{MIN_STACK_HEIGHT, MIN_STACK_WIDTH};

/// Result type alias for model generation operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for all model generation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A configuration field failed value validation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The requested transient train cannot fit in the recording window.
    #[error(transparent)]
    Capacity(#[from] CapacityError),

    /// Stack geometry or wavefront parameters are out of range.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A [`TransientConfig`](crate::TransientConfig) field violates a value
/// constraint. Raised before any computation begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Recording shorter than the minimum transient span.
    #[error("total duration must be at least {MIN_TOTAL_DURATION_MS} ms, got {actual} ms")]
    DurationTooShort {
        /// Configured total duration (ms).
        actual: u32,
    },

    /// First transient would start at or after the end of the recording.
    #[error("onset ({onset_ms} ms) must fall before the end of the recording ({total_duration_ms} ms)")]
    OnsetOutOfWindow {
        /// Configured onset (ms).
        onset_ms: u32,
        /// Configured total duration (ms).
        total_duration_ms: u32,
    },

    /// Acquisition rate outside the supported camera range.
    #[error(
        "frame rate must be above {FRAME_RATE_MIN_HZ_EXCLUSIVE} Hz and at most {FRAME_RATE_MAX_HZ} Hz, got {actual} Hz"
    )]
    FrameRateOutOfRange {
        /// Configured frame rate (Hz).
        actual: u32,
    },

    /// A voltage transient would drive the fluorescence count negative.
    #[error("voltage baseline {baseline} minus amplitude {amplitude} must not be negative")]
    AmplitudeExceedsBaseline {
        /// Configured baseline (counts).
        baseline: u32,
        /// Configured amplitude (counts).
        amplitude: u32,
    },

    /// Baseline above the 16-bit sensor ceiling.
    #[error("baseline must not exceed {FL_COUNT_MAX} counts, got {actual}")]
    BaselineTooLarge {
        /// Configured baseline (counts).
        actual: u32,
    },

    /// Amplitude above the 16-bit sensor ceiling.
    #[error("amplitude must not exceed {FL_COUNT_MAX} counts, got {actual}")]
    AmplitudeTooLarge {
        /// Configured amplitude (counts).
        actual: u32,
    },

    /// Noise magnitude that no Gaussian can honor.
    #[error("noise percentage must be finite and non-negative, got {0}")]
    InvalidNoisePercentage(f64),

    /// An explicit transient count of zero.
    #[error("explicit transient count must be at least 1")]
    ZeroTransientCount,

    /// Pacing faster than the supported minimum cycle length.
    #[error("cycle length must be at least {MIN_CYCLE_LENGTH_MS} ms, got {actual} ms")]
    CycleLengthTooShort {
        /// Configured cycle length (ms).
        actual: u32,
    },
}

/// The requested number of transients cannot fit within the duration
/// remaining after the onset.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{count} transients need {required_ms} ms but only {available_ms} ms remain after onset")]
pub struct CapacityError {
    /// Number of transients requested.
    pub count: u32,
    /// Milliseconds required to hold them.
    pub required_ms: u64,
    /// Milliseconds available after the onset.
    pub available_ms: u64,
}

/// Stack geometry or wavefront parameters out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Grid smaller than the minimum stack footprint.
    #[error(
        "stack size ({height}, {width}) is below the minimum ({MIN_STACK_HEIGHT}, {MIN_STACK_WIDTH})"
    )]
    GridTooSmall {
        /// Requested stack height (px).
        height: usize,
        /// Requested stack width (px).
        width: usize,
    },

    /// Conduction velocity below the physiological minimum.
    #[error("conduction velocity must be at least {min} cm/s, got {actual} cm/s")]
    ConductionVelocityTooSlow {
        /// Requested conduction velocity (cm/s).
        actual: f64,
        /// Minimum supported conduction velocity (cm/s).
        min: f64,
    },
}
