use crate::{
    foundation::error::{StepreelError, StepreelResult},
    trace::event::{StepEvent, StepKind, Trace},
};

/// Visual emphasis the renderer applies for the active event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Before the first event.
    #[default]
    Idle,
    /// Right pointer just moved.
    Scan,
    /// Symbol entering the set.
    Insert,
    /// Repeated symbol highlighted.
    Duplicate,
    /// Left boundary sweeping forward.
    Shrink,
    /// Best window replaced.
    NewBest,
}

impl Emphasis {
    fn of<S>(kind: &StepKind<S>) -> Self {
        match kind {
            StepKind::MoveRight { .. } => Self::Scan,
            StepKind::AddToSet { .. } => Self::Insert,
            StepKind::FoundDuplicate { .. } => Self::Duplicate,
            StepKind::MoveLeftUntil { .. } => Self::Shrink,
            StepKind::UpdateBest { .. } => Self::NewBest,
        }
    }
}

/// Algorithm state reconstructed at one frame of a trace.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackState<S = char> {
    /// Frame the state was projected at.
    pub frame: u64,
    /// Index of the active event, `None` before the first event.
    pub event_index: Option<usize>,
    /// Left window boundary (0 until the first `moveLeftUntil`).
    pub left: usize,
    /// Right pointer; `None` before the first `moveRight`.
    pub right: Option<usize>,
    /// Length of the best window recorded so far.
    pub best_len: usize,
    /// Inclusive range of the best window recorded so far.
    pub best: Option<(usize, usize)>,
    /// Membership set contents, in window order.
    pub members: Vec<S>,
    /// Latest event starting at or before `frame`.
    pub active_event: Option<StepEvent<S>>,
    /// Emphasis derived from `active_event`.
    pub emphasis: Emphasis,
}

impl<S> Default for PlaybackState<S> {
    fn default() -> Self {
        Self {
            frame: 0,
            event_index: None,
            left: 0,
            right: None,
            best_len: 0,
            best: None,
            members: Vec::new(),
            active_event: None,
            emphasis: Emphasis::Idle,
        }
    }
}

/// Reconstruct the scan state of `trace` at `frame`.
///
/// Selects the last event with `t <= frame` by binary search and folds every event up to it.
/// Pure: any call order, including backwards seeks, yields the same states. A negative
/// `frame` is rejected with [`StepreelError::InvalidArgument`].
pub fn project<S: Clone>(trace: &Trace<S>, frame: i64) -> StepreelResult<PlaybackState<S>> {
    if frame < 0 {
        return Err(StepreelError::invalid_argument(format!(
            "frame must be >= 0, got {frame}"
        )));
    }
    let frame = frame as u64;

    let upto = trace.events.partition_point(|e| e.t <= frame);
    let Some(active) = upto.checked_sub(1) else {
        return Ok(PlaybackState {
            frame,
            ..PlaybackState::default()
        });
    };

    let mut fold = Fold::default();
    for ev in &trace.events[..upto] {
        fold.apply(&ev.kind);
    }

    let active_event = trace.events[active].clone();
    Ok(PlaybackState {
        frame,
        event_index: Some(active),
        left: fold.left,
        right: fold.right,
        best_len: fold.best.map(|(s, e)| e - s + 1).unwrap_or(0),
        best: fold.best,
        members: fold.members(),
        emphasis: Emphasis::of(&active_event.kind),
        active_event: Some(active_event),
    })
}

struct Fold<S> {
    left: usize,
    right: Option<usize>,
    best: Option<(usize, usize)>,
    // Symbols by index, as revealed by `moveRight`.
    scanned: Vec<S>,
    added_through: Option<usize>,
}

impl<S> Default for Fold<S> {
    fn default() -> Self {
        Self {
            left: 0,
            right: None,
            best: None,
            scanned: Vec::new(),
            added_through: None,
        }
    }
}

impl<S: Clone> Fold<S> {
    fn apply(&mut self, kind: &StepKind<S>) {
        match kind {
            StepKind::MoveRight { index, symbol } => {
                self.right = Some(*index);
                if *index >= self.scanned.len() {
                    self.scanned.resize(*index + 1, symbol.clone());
                }
                self.scanned[*index] = symbol.clone();
            }
            StepKind::AddToSet { .. } => self.added_through = self.right,
            StepKind::FoundDuplicate { .. } => {}
            StepKind::MoveLeftUntil { stop_at_index, .. } => self.left = *stop_at_index,
            StepKind::UpdateBest { start, end } => self.best = Some((*start, *end)),
        }
    }

    fn members(&self) -> Vec<S> {
        match self.added_through {
            Some(last) if last >= self.left => self
                .scanned
                .get(self.left..=last)
                .map(<[S]>::to_vec)
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/projector.rs"]
mod tests;
