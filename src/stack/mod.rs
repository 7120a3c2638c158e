//! 3-D image stack generation
//! Location: src/stack/mod.rs
//!
//! Builds (frame, row, column) stacks of synthetic optical data: either a
//! uniform broadcast of one timeline across the grid, or an isotropic
//! wavefront propagating outward from the grid center.

pub mod broadcast;
pub mod propagation;

pub use broadcast::generate_uniform_stack;
pub use propagation::{generate_propagating_stack, ActivationMap};

use ndarray::Array3;

use crate::error::GeometryError;

/// Minimum stack height (px).
pub const MIN_STACK_HEIGHT: usize = 10;
/// Minimum stack width (px).
pub const MIN_STACK_WIDTH: usize = 10;

/// A 3-D synthetic recording: millisecond timestamps and an intensity stack
/// in (frame, row, column) order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackRecording {
    /// Timestamp (ms) of each frame, starting at zero.
    pub time_ms: Vec<f64>,
    /// Intensity in counts, indexed by (frame, row, column).
    pub frames: Array3<i32>,
}

pub(crate) fn check_grid(height: usize, width: usize) -> Result<(), GeometryError> {
    if height < MIN_STACK_HEIGHT || width < MIN_STACK_WIDTH {
        return Err(GeometryError::GridTooSmall { height, width });
    }
    Ok(())
}
