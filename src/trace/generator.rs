use std::{collections::HashMap, hash::Hash};

use crate::{
    foundation::error::{StepreelError, StepreelResult},
    timing::durations::DurationTable,
    trace::event::{StepEvent, StepKind, Trace},
};

/// Run the longest-substring-without-repeats scan over `sequence`, recording every step.
///
/// Each event is stamped with the running clock, which then advances by the event's cost in
/// `durations`. Evictions cost `move_left_each` per evicted index (at least one). The returned
/// duration is the clock after the last event plus `max(1, tail_frames)`.
///
/// Total over any finite input, including the empty one. A negative `tail_frames` is rejected
/// with [`StepreelError::InvalidArgument`].
#[tracing::instrument(skip(sequence, durations), fields(len = sequence.len()))]
pub fn trace<S>(
    sequence: &[S],
    durations: &DurationTable,
    tail_frames: i64,
) -> StepreelResult<Trace<S>>
where
    S: Clone + Eq + Hash,
{
    if tail_frames < 0 {
        return Err(StepreelError::invalid_argument(format!(
            "tail_frames must be >= 0, got {tail_frames}"
        )));
    }

    let mut rec = Recorder::new();
    let mut last_seen: HashMap<&S, usize> = HashMap::with_capacity(sequence.len());
    let mut left = 0usize;
    let mut best_len = 0usize;

    for (right, symbol) in sequence.iter().enumerate() {
        rec.push(
            StepKind::MoveRight {
                index: right,
                symbol: symbol.clone(),
            },
            durations.move_right,
        );

        if let Some(&seen) = last_seen.get(symbol)
            && seen >= left
        {
            rec.push(
                StepKind::FoundDuplicate {
                    symbol: symbol.clone(),
                    at_index: right,
                },
                durations.duplicate,
            );
            let new_left = seen + 1;
            let evicted = (new_left - left).max(1) as u64;
            rec.push(
                StepKind::MoveLeftUntil {
                    from_index: left,
                    stop_at_index: new_left,
                },
                evicted * durations.move_left_each,
            );
            left = new_left;
        }

        rec.push(
            StepKind::AddToSet {
                symbol: symbol.clone(),
            },
            durations.add,
        );
        last_seen.insert(symbol, right);

        let window = right - left + 1;
        if window > best_len {
            best_len = window;
            rec.push(
                StepKind::UpdateBest {
                    start: left,
                    end: right,
                },
                durations.update_best,
            );
        }
    }

    let trace = rec.finish(tail_frames.max(1) as u64);
    tracing::debug!(
        events = trace.events.len(),
        duration = trace.duration,
        best_len,
        "trace generated"
    );
    Ok(trace)
}

/// [`trace`] over the `char`s of `input`.
pub fn trace_str(
    input: &str,
    durations: &DurationTable,
    tail_frames: i64,
) -> StepreelResult<Trace<char>> {
    let chars: Vec<char> = input.chars().collect();
    trace(&chars, durations, tail_frames)
}

/// Running clock plus the events stamped so far.
struct Recorder<S> {
    t: u64,
    events: Vec<StepEvent<S>>,
}

impl<S> Recorder<S> {
    fn new() -> Self {
        Self {
            t: 0,
            events: Vec::new(),
        }
    }

    fn push(&mut self, kind: StepKind<S>, cost: u64) {
        self.events.push(StepEvent { t: self.t, kind });
        self.t = self.t.saturating_add(cost);
    }

    fn finish(self, tail: u64) -> Trace<S> {
        Trace {
            duration: self.t.saturating_add(tail),
            events: self.events,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trace/generator.rs"]
mod tests;
