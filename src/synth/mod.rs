//! Signal synthesis pipeline: waveform templates, trains, timing, and noise
//! Location: src/synth/mod.rs

pub mod generator;
pub mod noise;
pub mod timing;
pub mod train;
pub mod waveform;

pub use generator::{generate_transient, TransientRecording};
pub use noise::{ClampPolicy, NoiseInjector};
pub use timing::DerivedTiming;
pub use train::assemble_train;
pub use waveform::{PhaseSpans, TransientTemplate};
