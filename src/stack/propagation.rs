//! Isotropic wavefront propagation
//! Location: src/stack/propagation.rs
//!
//! Models an activation wavefront radiating from the grid center: each pixel
//! receives its own arrival delay from the conduction velocity, and its
//! timeline is a full synthetic recording shifted by that delay.

use std::collections::BTreeMap;

use ndarray::{Array2, Array3, Axis, Zip};
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::config::TransientConfig;
use crate::error::{GeometryError, ModelResult};
use crate::synth::generator::clean_timeline;
use crate::synth::{DerivedTiming, NoiseInjector};

use super::{check_grid, StackRecording};

/// Imaging resolution: a 4 cm field of view across 200 px.
pub const SPATIAL_RESOLUTION_CM_PER_PX: f64 = 0.005;
/// Resolution of the porcine video rig, for callers that model it.
pub const PIG_VIDEO_RESOLUTION_CM_PER_PX: f64 = 0.0149;
/// Slowest supported conduction velocity (cm/s).
pub const MIN_CONDUCTION_VELOCITY_CM_S: f64 = 5.0;

/// Per-pixel wavefront arrival delay (ms), radiating from the grid center.
///
/// A pure function of grid shape and conduction velocity; recomputed per
/// stack request.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationMap {
    delays_ms: Array2<f64>,
}

impl ActivationMap {
    /// Compute arrival delays for an isotropic wavefront starting at the
    /// grid center and traveling at `conduction_velocity_cm_s`.
    pub fn new(
        height: usize,
        width: usize,
        conduction_velocity_cm_s: f64,
    ) -> Result<Self, GeometryError> {
        check_grid(height, width)?;
        if conduction_velocity_cm_s < MIN_CONDUCTION_VELOCITY_CM_S {
            return Err(GeometryError::ConductionVelocityTooSlow {
                actual: conduction_velocity_cm_s,
                min: MIN_CONDUCTION_VELOCITY_CM_S,
            });
        }
        let origin_x = width as f64 / 2.0;
        let origin_y = height as f64 / 2.0;
        let delays_ms = Array2::from_shape_fn((height, width), |(y, x)| {
            let dx = x as f64 - origin_x;
            let dy = y as f64 - origin_y;
            let distance_cm = (dx * dx + dy * dy).sqrt() * SPATIAL_RESOLUTION_CM_PER_PX;
            distance_cm / conduction_velocity_cm_s * 1000.0
        });
        Ok(Self { delays_ms })
    }

    /// Arrival delays (ms), indexed by (row, column).
    pub fn delays_ms(&self) -> &Array2<f64> {
        &self.delays_ms
    }

    /// A pixel's delay floored to whole milliseconds, as used for its onset.
    pub fn onset_offset_ms(&self, row: usize, column: usize) -> u32 {
        self.delays_ms[[row, column]].floor() as u32
    }
}

/// Generate a stack depicting a wavefront expanding from the grid center.
///
/// Every pixel runs the full synthesis pipeline with its own onset offset;
/// pixels share no noise draws. Delays are floored to whole milliseconds, so
/// pixels at similar radii share a clean timeline, which is synthesized once
/// per distinct delay and written across the grid in parallel.
pub fn generate_propagating_stack<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    conduction_velocity_cm_s: f64,
    config: &TransientConfig,
    rng: &mut R,
) -> ModelResult<StackRecording> {
    let map = ActivationMap::new(height, width, conduction_velocity_cm_s)?;
    config.validate()?;
    let timing = DerivedTiming::from_config(config);

    let offsets = map.delays_ms().mapv(|delay| delay.floor() as u32);
    let mut unique_offsets: Vec<u32> = offsets.iter().copied().collect();
    unique_offsets.sort_unstable();
    unique_offsets.dedup();

    let timelines = unique_offsets
        .par_iter()
        .map(|&offset| {
            let shifted = TransientConfig {
                onset_ms: offset,
                ..config.clone()
            };
            shifted.validate()?;
            let shifted_timing = DerivedTiming::from_config(&shifted);
            Ok((offset, clean_timeline(&shifted, &shifted_timing)))
        })
        .collect::<ModelResult<BTreeMap<u32, Vec<i32>>>>()?;
    debug!(
        height,
        width,
        distinct_delays = timelines.len(),
        frames = timing.frame_count,
        "propagating wavefront"
    );

    let mut frames = Array3::zeros((timing.frame_count, height, width));
    Zip::from(frames.lanes_mut(Axis(0)))
        .and(&offsets)
        .par_for_each(|mut lane, offset| {
            if let Some(timeline) = timelines.get(offset) {
                for (slot, &value) in lane.iter_mut().zip(timeline) {
                    *slot = value;
                }
            }
        });

    let injector = NoiseInjector::from_config(config);
    if injector.sigma() > 0.0 {
        for mut lane in frames.lanes_mut(Axis(0)) {
            let noisy = injector.inject(&lane.to_vec(), rng);
            for (slot, value) in lane.iter_mut().zip(noisy) {
                *slot = value;
            }
        }
    }

    Ok(StackRecording {
        time_ms: timing.time_axis().to_vec(),
        frames,
    })
}
