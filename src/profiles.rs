//! Predefined model parameter presets
//! Location: src/profiles.rs

use serde::{Deserialize, Serialize};

use crate::config::{ModelType, TransientConfig, TransientCount};

/// A named, ready-to-run parameter preset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelProfile {
    /// Short identifier.
    pub name: String,
    /// Human-readable summary.
    pub description: String,
    /// Generator parameters.
    pub config: TransientConfig,
}

impl ModelProfile {
    /// One murine action potential at the default acquisition rate.
    pub fn murine_vm() -> Self {
        Self {
            name: "murine_vm".to_string(),
            description: "Single murine optical action potential, 100 ms at 1000 fps".to_string(),
            config: TransientConfig::default(),
        }
    }

    /// One murine calcium transient at the default acquisition rate.
    pub fn murine_ca() -> Self {
        Self {
            name: "murine_ca".to_string(),
            description: "Single murine optical calcium transient, 100 ms at 1000 fps"
                .to_string(),
            config: TransientConfig {
                model_type: ModelType::Ca,
                ..TransientConfig::default()
            },
        }
    }

    /// A paced voltage train with light measurement noise.
    pub fn paced_vm_train() -> Self {
        Self {
            name: "paced_vm_train".to_string(),
            description: "Voltage train paced at 250 ms over a 1 s recording, 3% noise"
                .to_string(),
            config: TransientConfig {
                total_duration_ms: 1000,
                noise_pct: 3.0,
                transient_count: TransientCount::AutoFill,
                cycle_length_ms: 250,
                ..TransientConfig::default()
            },
        }
    }

    /// A paced calcium train with light measurement noise.
    pub fn paced_ca_train() -> Self {
        Self {
            name: "paced_ca_train".to_string(),
            description: "Calcium train paced at 250 ms over a 1 s recording, 3% noise"
                .to_string(),
            config: TransientConfig {
                model_type: ModelType::Ca,
                total_duration_ms: 1000,
                noise_pct: 3.0,
                transient_count: TransientCount::AutoFill,
                cycle_length_ms: 250,
                ..TransientConfig::default()
            },
        }
    }

    /// Every built-in preset.
    pub fn all() -> Vec<Self> {
        vec![
            Self::murine_vm(),
            Self::murine_ca(),
            Self::paced_vm_train(),
            Self::paced_ca_train(),
        ]
    }
}
