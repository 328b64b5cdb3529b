//! stepreel turns a sliding-window scan into a deterministic, frame-stamped animation schedule.
//!
//! The crate is the timing core behind an animated "longest substring without repeating
//! characters" walkthrough. Pixels, narration and job queues live elsewhere; this crate only
//! produces plain data for them.
//!
//! # Pipeline overview
//!
//! 1. **Scale**: `Fps -> DurationTable` (per-step frame costs at the output rate)
//! 2. **Trace**: `input + DurationTable -> Trace` (time-ordered [`StepEvent`]s plus a duration)
//! 3. **Assemble**: `intro + [Trace] + outro -> Timeline` (non-overlapping or crossfaded segments)
//! 4. **Project**: `Trace + frame -> PlaybackState` (pointer positions, set contents, emphasis)
//!
//! [`build_reel`] runs steps 1-3 from a [`ReelConfig`] document.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every operation is pure; identical inputs give identical outputs.
//! - **Seekable**: [`project`] holds no state between calls, so frames can be projected in any
//!   order or in parallel.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod projection;
mod reel;
mod timeline;
mod timing;
mod trace;

pub use foundation::core::{BASELINE_FPS, Fps, FrameIndex, FrameRange};
pub use foundation::error::{StepreelError, StepreelResult};
pub use projection::batch::{ProjectThreading, project_frames};
pub use projection::projector::{Emphasis, PlaybackState, project};
pub use reel::config::{ExampleDef, ReelConfig};
pub use reel::pipeline::{Reel, ReelFrame, build_reel};
pub use timeline::assembler::{
    AssembleOpts, Envelope, LabelOverlay, LabeledTrace, SegmentPayload, Timeline,
    TimelineSegment, TransitionPolicy, assemble,
};
pub use timing::durations::{
    BASELINE_DURATIONS, DurationTable, StepCategory, scale_durations, scale_durations_from,
};
pub use timing::ease::Ease;
pub use trace::event::{StepEvent, StepKind, Trace};
pub use trace::generator::{trace, trace_str};
