use crate::foundation::{
    core::{BASELINE_FPS, Fps},
    error::StepreelResult,
};

/// Step categories that cost time on a trace clock.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StepCategory {
    /// Scanning pointer advances one index.
    MoveRight,
    /// A symbol joins the membership set.
    Add,
    /// A repeat is detected inside the window.
    Duplicate,
    /// Left boundary evicts one index (charged per evicted index).
    MoveLeftEach,
    /// A new best window is recorded.
    UpdateBest,
}

impl StepCategory {
    /// All categories in table order.
    pub const ALL: [StepCategory; 5] = [
        StepCategory::MoveRight,
        StepCategory::Add,
        StepCategory::Duplicate,
        StepCategory::MoveLeftEach,
        StepCategory::UpdateBest,
    ];
}

/// Frame cost of each [`StepCategory`] at one frame rate.
///
/// Every entry is at least one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationTable {
    /// Frames charged for `moveRight`.
    pub move_right: u64,
    /// Frames charged for `addToSet`.
    pub add: u64,
    /// Frames charged for `foundDuplicate`.
    pub duplicate: u64,
    /// Frames charged per evicted index in `moveLeftUntil`.
    pub move_left_each: u64,
    /// Frames charged for `updateBest`.
    pub update_best: u64,
}

/// Step costs authored at [`BASELINE_FPS`].
pub const BASELINE_DURATIONS: DurationTable = DurationTable {
    move_right: 12,
    add: 10,
    duplicate: 15,
    move_left_each: 8,
    update_best: 12,
};

impl DurationTable {
    /// Frames charged for one step of `category`.
    pub fn frames(&self, category: StepCategory) -> u64 {
        match category {
            StepCategory::MoveRight => self.move_right,
            StepCategory::Add => self.add,
            StepCategory::Duplicate => self.duplicate,
            StepCategory::MoveLeftEach => self.move_left_each,
            StepCategory::UpdateBest => self.update_best,
        }
    }

    fn map(&self, f: impl Fn(u64) -> u64) -> Self {
        Self {
            move_right: f(self.move_right),
            add: f(self.add),
            duplicate: f(self.duplicate),
            move_left_each: f(self.move_left_each),
            update_best: f(self.update_best),
        }
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        BASELINE_DURATIONS
    }
}

/// Scale [`BASELINE_DURATIONS`] from [`BASELINE_FPS`] to `target`.
pub fn scale_durations(target: Fps) -> StepreelResult<DurationTable> {
    scale_durations_from(target, BASELINE_FPS)
}

/// Scale [`BASELINE_DURATIONS`] from `baseline` to `target`.
///
/// Each entry `v` becomes `max(1, round(v * target / baseline))`, so the table is returned
/// unchanged when both rates are equal.
#[tracing::instrument]
pub fn scale_durations_from(target: Fps, baseline: Fps) -> StepreelResult<DurationTable> {
    target.validate()?;
    baseline.validate()?;

    let table = BASELINE_DURATIONS.map(|v| scale_frames(v, target, baseline));
    tracing::debug!(?table, "scaled duration table");
    Ok(table)
}

/// `max(1, round(frames * target / baseline))`.
///
/// Both rates must already be validated.
pub(crate) fn scale_frames(frames: u64, target: Fps, baseline: Fps) -> u64 {
    if target == baseline {
        return frames.max(1);
    }
    let ratio = target.as_f64() / baseline.as_f64();
    ((frames as f64) * ratio).round().max(1.0) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/timing/durations.rs"]
mod tests;
