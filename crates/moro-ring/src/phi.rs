use serde::{Deserialize, Serialize};

/// The golden ratio φ.
pub fn golden_ratio() -> f64 {
    (1.0 + 5.0f64.sqrt()) / 2.0
}

/// The golden angle, 360°/φ².
pub fn golden_angle_deg() -> f64 {
    let phi = golden_ratio();
    360.0 / (phi * phi)
}

/// Absolute deviation of a value from φ.
pub fn phi_divergence(value: f64) -> f64 {
    (value - golden_ratio()).abs()
}

/// Energy associated with a φ deviation: k·|divergence|.
pub fn divergence_energy(divergence: f64, scale: f64) -> f64 {
    scale * divergence.abs()
}

/// True when a ratio sits within `tolerance` of φ.
pub fn is_stable(ratio: f64, tolerance: f64) -> bool {
    phi_divergence(ratio) < tolerance
}

/// φ-convergence diagnostics for a Fibonacci weight window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhiDiagnostics {
    /// Ratio of the window's two largest terms.
    pub window_ratio: f64,
    /// Absolute deviation of that ratio from φ.
    pub divergence: f64,
    /// Scaled divergence energy.
    pub energy: f64,
}

impl PhiDiagnostics {
    /// Computes diagnostics for a window of at least two terms; shorter
    /// windows have no ratio to measure.
    pub fn for_window(window: &[i64], energy_scale: f64) -> Option<Self> {
        let len = window.len();
        if len < 2 || window[len - 2] == 0 {
            return None;
        }
        let window_ratio = window[len - 1] as f64 / window[len - 2] as f64;
        let divergence = phi_divergence(window_ratio);
        Some(Self {
            window_ratio,
            divergence,
            energy: divergence_energy(divergence, energy_scale),
        })
    }
}
