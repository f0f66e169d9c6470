/// Tolerances for curve flattening.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Maximum deviation of a flattened polyline from the true curve (in canvas units)
    pub flatten: f64,
}

impl Tolerance {
    pub const DEFAULT_FLATTEN: f64 = 0.25;

    pub fn default_precision() -> Self {
        Self {
            flatten: Self::DEFAULT_FLATTEN,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
