// src/math/utils.rs

/// Numerische Konstanten
pub mod constants {
    /// Mindestanzahl an Punkten für ein Dreieck.
    pub const MIN_POINTS: usize = 3;
    /// Unterhalb dieses Heron-Nenners gilt ein Dreieck als entartet.
    pub const DEGENERACY_TOLERANCE: f64 = 1e-16;
    /// Sentinel für entartete (kollineare) Dreiecke.
    pub const DEGENERATE_CIRCUMRADIUS_SQ: f64 = f64::INFINITY;
    /// Wird vom optimalen Alpha abgezogen, damit das Grenzdreieck im Shape bleibt.
    pub const ALPHA_EPSILON: f64 = 1e-10;
    /// Wie viele unbedeckte Punkt-Indizes ein `OptimizationFailure` mitliefert.
    pub const UNCOVERED_SAMPLE_LEN: usize = 8;
}

/// Vergleichs- und Skalierungshilfen
pub mod comparison {
    /// Ersetzt eine Null- oder nicht-endliche Skala durch 1.0
    pub fn non_zero_scale(value: f64) -> f64 {
        if value.is_finite() && value.abs() > 0.0 {
            value
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::comparison::*;

    #[test]
    fn test_non_zero_scale() {
        assert_eq!(non_zero_scale(2.5), 2.5);
        assert_eq!(non_zero_scale(0.0), 1.0);
        assert_eq!(non_zero_scale(f64::NAN), 1.0);
        assert_eq!(non_zero_scale(f64::INFINITY), 1.0);
    }
}
