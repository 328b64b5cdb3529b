use crate::foundation::error::{StepreelError, StepreelResult};

/// Absolute frame position on a timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame window `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame covered by the range.
    pub start: FrameIndex,
    /// First frame past the range.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> StepreelResult<Self> {
        if start.0 > end.0 {
            return Err(StepreelError::invalid_argument(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Build a range from a start frame and a length in frames.
    pub fn from_start_len(start: u64, len: u64) -> Self {
        Self {
            start: FrameIndex(start),
            end: FrameIndex(start.saturating_add(len)),
        }
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the range covers no frame.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` falls inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Seconds denominator.
    pub den: u32, // must be > 0
}

/// Rate at which the baseline duration table is authored.
pub const BASELINE_FPS: Fps = Fps { num: 30, den: 1 };

impl Fps {
    /// Build a frame rate, rejecting a zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> StepreelResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Whole-number frame rate (`num/1`).
    pub fn whole(num: u32) -> StepreelResult<Self> {
        Self::new(num, 1)
    }

    /// Reject rates that are not strictly positive.
    pub fn validate(self) -> StepreelResult<()> {
        if self.den == 0 {
            return Err(StepreelError::invalid_argument("fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(StepreelError::invalid_argument("fps num must be > 0"));
        }
        Ok(())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of `frames` in seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// `round(secs * fps)`, clamped at zero.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

impl std::fmt::Display for Fps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
