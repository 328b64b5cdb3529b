/// Shape of a fade ramp.
///
/// All curves are symmetric around `(0.5, 0.5)`, so a fade-out read as `1 - apply(t)` mirrors the
/// fade-in of the segment it crosses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant-rate ramp.
    #[default]
    Linear,
    /// `3t² - 2t³`: zero slope at both ends.
    Smoothstep,
    /// `6t⁵ - 15t⁴ + 10t³`: zero slope and curvature at both ends.
    Smootherstep,
}

impl Ease {
    /// Progress on the curve for ramp position `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::Smootherstep => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/ease.rs"]
mod tests;
