// src/math/alpha/config.rs

use crate::math::{
    error::{AlphaError, AlphaResult},
    utils::constants,
};
use serde::{Deserialize, Serialize};

/// Konfiguration für den [`AlphaShaper`](super::shaper::AlphaShaper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaShaperConfig {
    /// Punkte vor der Triangulation auf Mittelwert 0 / Spannweite 1 je Achse bringen.
    pub normalize: bool,
    /// Exakt doppelte Koordinaten vor der Triangulation entfernen. Ändert die
    /// Punkt-Indizes, daher standardmäßig aus.
    pub deduplicate: bool,
    /// Heron-Nenner unterhalb dieses Werts gelten als entartet.
    pub degeneracy_tolerance: f64,
    /// Abschlag auf das optimale Alpha, damit das Grenzdreieck enthalten bleibt.
    pub alpha_epsilon: f64,
}

impl Default for AlphaShaperConfig {
    fn default() -> Self {
        Self {
            normalize: true,
            deduplicate: false,
            degeneracy_tolerance: constants::DEGENERACY_TOLERANCE,
            alpha_epsilon: constants::ALPHA_EPSILON,
        }
    }
}

impl AlphaShaperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_deduplication(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn with_degeneracy_tolerance(mut self, tolerance: f64) -> Self {
        self.degeneracy_tolerance = tolerance;
        self
    }

    pub fn with_alpha_epsilon(mut self, epsilon: f64) -> Self {
        self.alpha_epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> AlphaResult<()> {
        if !self.degeneracy_tolerance.is_finite() || self.degeneracy_tolerance < 0.0 {
            return Err(AlphaError::InvalidConfiguration {
                message: format!(
                    "degeneracy_tolerance must be finite and non-negative, got {}",
                    self.degeneracy_tolerance
                ),
            });
        }
        if !self.alpha_epsilon.is_finite() || self.alpha_epsilon < 0.0 {
            return Err(AlphaError::InvalidConfiguration {
                message: format!(
                    "alpha_epsilon must be finite and non-negative, got {}",
                    self.alpha_epsilon
                ),
            });
        }
        Ok(())
    }
}
