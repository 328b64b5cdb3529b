use crate::timing::durations::StepCategory;

/// One observable step of a sliding-window scan.
///
/// The set of kinds is closed: renderers match on it exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepKind<S> {
    /// The scanning pointer advances to `index`, observing `symbol`.
    MoveRight {
        /// New right pointer.
        index: usize,
        /// Symbol at `index`.
        #[serde(rename = "char")]
        symbol: S,
    },
    /// `symbol` is recorded in the window's membership set.
    AddToSet {
        /// Inserted symbol.
        #[serde(rename = "char")]
        symbol: S,
    },
    /// `symbol` at `at_index` already exists inside the current window.
    FoundDuplicate {
        /// Repeated symbol.
        #[serde(rename = "char")]
        symbol: S,
        /// Index of the repeat (the current right pointer).
        #[serde(rename = "atIndex")]
        at_index: usize,
    },
    /// Left boundary advances from `from_index` to `stop_at_index`, evicting `[from, stop)`.
    MoveLeftUntil {
        /// Left pointer before the move.
        #[serde(rename = "fromIndex")]
        from_index: usize,
        /// Left pointer after the move.
        #[serde(rename = "stopAtIndex")]
        stop_at_index: usize,
    },
    /// Best window so far becomes the inclusive range `[start, end]`.
    UpdateBest {
        /// First index of the window.
        start: usize,
        /// Last index of the window (inclusive).
        end: usize,
    },
}

impl<S> StepKind<S> {
    /// Duration category that charges this step.
    pub fn category(&self) -> StepCategory {
        match self {
            Self::MoveRight { .. } => StepCategory::MoveRight,
            Self::AddToSet { .. } => StepCategory::Add,
            Self::FoundDuplicate { .. } => StepCategory::Duplicate,
            Self::MoveLeftUntil { .. } => StepCategory::MoveLeftEach,
            Self::UpdateBest { .. } => StepCategory::UpdateBest,
        }
    }

    /// Wire name of the kind (`moveRight`, `addToSet`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::MoveRight { .. } => "moveRight",
            Self::AddToSet { .. } => "addToSet",
            Self::FoundDuplicate { .. } => "foundDuplicate",
            Self::MoveLeftUntil { .. } => "moveLeftUntil",
            Self::UpdateBest { .. } => "updateBest",
        }
    }
}

/// A [`StepKind`] stamped with the trace-local frame it starts on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StepEvent<S> {
    /// Start frame, relative to the trace.
    pub t: u64,
    /// What happened.
    #[serde(flatten)]
    pub kind: StepKind<S>,
}

/// Ordered event log of one scan plus its playback length.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Trace<S = char> {
    /// Events in non-decreasing `t` order.
    pub events: Vec<StepEvent<S>>,
    /// Total frames, including the trailing buffer after the last event.
    pub duration: u64,
}

impl<S> Trace<S> {
    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` for traces of empty input.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Inclusive range of the last `updateBest`, if any.
    pub fn best_window(&self) -> Option<(usize, usize)> {
        self.events.iter().rev().find_map(|e| match e.kind {
            StepKind::UpdateBest { start, end } => Some((start, end)),
            _ => None,
        })
    }

    /// Length of the longest duplicate-free window found by the scan.
    pub fn best_len(&self) -> usize {
        self.best_window()
            .map(|(start, end)| end - start + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/event.rs"]
mod tests;
