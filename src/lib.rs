//! OMap-Core: synthetic optical-mapping signal generation for cardiac imaging
//!
//! This library fabricates realistic test data for cardiac optical-mapping
//! tools: fluorescence recordings of murine action potentials (Vm) and
//! calcium transients (Ca). It features:
//!
//! - Biophysically shaped transient waveforms at configurable frame rates
//! - Transient trains with explicit or auto-filled pacing
//! - Gaussian measurement noise from an injectable random source
//! - Uniform 3-D image stacks and isotropic propagating-wavefront stacks
//! - Comprehensive parameter validation with typed errors
//!
//! # Quick Start
//!
//! ```rust
//! use omap_core::{generate_transient, TransientConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), omap_core::ModelError> {
//! // One murine action potential, 100 ms at 1000 fps
//! let config = TransientConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let recording = generate_transient(&config, &mut rng)?;
//! assert_eq!(recording.time_ms.len(), recording.samples.len());
//! assert_eq!(recording.samples.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! All generators are pure in-memory computations: no file formats, no
//! rendering, no windowing. Reproducibility is the caller's choice: seed the
//! supplied [`rand::Rng`] to make noisy output repeatable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod profiles;
pub mod stack;
pub mod synth;

// Re-export commonly used types for convenience
pub use config::{ModelType, TransientConfig, TransientCount};
pub use error::{
    CapacityError, ConfigurationError, GeometryError, ModelError, ModelResult,
};
pub use profiles::ModelProfile;
pub use stack::{
    generate_propagating_stack, generate_uniform_stack, ActivationMap, StackRecording,
};
pub use synth::{
    generate_transient, ClampPolicy, DerivedTiming, NoiseInjector, PhaseSpans,
    TransientRecording, TransientTemplate,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
