use crate::{
    foundation::core::{FrameIndex, FrameRange},
    timing::ease::Ease,
    trace::event::Trace,
};

/// How consecutive segments meet.
///
/// Selected once per assembly; the assembler never mixes policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Back-to-back segments, no overlap and no gap.
    #[default]
    HardCut,
    /// Each segment starts `overlap_frames` before its predecessor ends and the two fade across.
    Crossfade {
        /// Frames shared by two neighbors.
        overlap_frames: u64,
        /// Curve of the fade envelopes.
        #[serde(default)]
        ease: Ease,
    },
}

impl TransitionPolicy {
    fn overlap(self) -> u64 {
        match self {
            Self::HardCut => 0,
            Self::Crossfade { overlap_frames, .. } => overlap_frames,
        }
    }

    fn ease(self) -> Ease {
        match self {
            Self::HardCut => Ease::Linear,
            Self::Crossfade { ease, .. } => ease,
        }
    }
}

/// Assembly knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssembleOpts {
    /// Transition policy between every pair of neighbors.
    pub policy: TransitionPolicy,
    /// Upper bound on the label overlay shown at the start of each trace segment.
    pub label_max_frames: u64,
}

impl Default for AssembleOpts {
    fn default() -> Self {
        Self {
            policy: TransitionPolicy::HardCut,
            label_max_frames: 45,
        }
    }
}

/// A trace with the caption shown over it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabeledTrace<S = char> {
    /// Caption for the example.
    pub label: String,
    /// Scan of the example input.
    pub trace: Trace<S>,
}

/// What a segment shows. The renderer maps each variant to visuals.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentPayload {
    /// Fixed opening overlay.
    Intro,
    /// One example, by position in the assembled trace list.
    Trace {
        /// Index into the traces passed to [`assemble`].
        index: usize,
    },
    /// Fixed closing overlay.
    Outro,
}

/// Fade-in/fade-out lengths at the edges of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    /// Frames ramping 0 to 1 at the segment start.
    pub fade_in_frames: u64,
    /// Frames ramping 1 to 0 at the segment end.
    pub fade_out_frames: u64,
    /// Ramp curve.
    pub ease: Ease,
}

impl Envelope {
    /// Opacity at `local` frame of a segment lasting `duration` frames.
    pub fn opacity(&self, local: u64, duration: u64) -> f64 {
        if local >= duration {
            return 0.0;
        }
        let fade_in = if local < self.fade_in_frames {
            self.ease.apply(ramp(local, self.fade_in_frames))
        } else {
            1.0
        };
        let out_start = duration.saturating_sub(self.fade_out_frames);
        let fade_out = if self.fade_out_frames > 0 && local >= out_start {
            1.0 - self.ease.apply(ramp(local - out_start, self.fade_out_frames))
        } else {
            1.0
        };
        fade_in.min(fade_out).clamp(0.0, 1.0)
    }
}

fn ramp(offset: u64, len: u64) -> f64 {
    let denom = len.saturating_sub(1);
    if denom == 0 {
        1.0
    } else {
        (offset as f64) / (denom as f64)
    }
}

/// A time-bounded region of the composition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineSegment {
    /// Stable identifier (`intro`, `example-0`, ..., `outro`).
    pub id: String,
    /// Global frame the segment starts on.
    pub start_frame: u64,
    /// Length in frames.
    pub duration_frames: u64,
    /// Edge fades; all zero under hard cut.
    pub envelope: Envelope,
    /// What to draw.
    pub payload: SegmentPayload,
}

impl TimelineSegment {
    /// First frame past the segment.
    pub fn end_frame(&self) -> u64 {
        self.start_frame + self.duration_frames
    }

    /// Global window `[start, end)`.
    pub fn range(&self) -> FrameRange {
        FrameRange::from_start_len(self.start_frame, self.duration_frames)
    }

    /// Segment-local frame for a global `frame`, if the segment is live then.
    pub fn local_frame(&self, frame: u64) -> Option<u64> {
        self.range()
            .contains(FrameIndex(frame))
            .then(|| frame - self.start_frame)
    }

    /// Envelope opacity at global `frame`; 0 outside the segment.
    pub fn opacity_at(&self, frame: u64) -> f64 {
        match self.local_frame(frame) {
            Some(local) => self.envelope.opacity(local, self.duration_frames),
            None => 0.0,
        }
    }
}

/// Caption overlay sharing the start of a trace segment.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabelOverlay {
    /// Id of the segment the label belongs to.
    pub segment_id: String,
    /// Caption text.
    pub text: String,
    /// Same as the owning segment's start.
    pub start_frame: u64,
    /// `min(label_max_frames, trace.duration)`.
    pub duration_frames: u64,
}

/// Global schedule of intro, traces and outro.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Policy the timeline was built with.
    pub policy: TransitionPolicy,
    /// Segments sorted by `start_frame`; intro first, outro last.
    pub segments: Vec<TimelineSegment>,
    /// One caption per trace segment, in segment order.
    pub labels: Vec<LabelOverlay>,
    /// Outro `start_frame + duration_frames`.
    pub total_duration: u64,
}

impl Timeline {
    /// Every segment live at global `frame`, with its local frame.
    ///
    /// At most one entry under hard cut; two inside a crossfade overlap.
    pub fn segments_at(&self, frame: u64) -> Vec<(&TimelineSegment, u64)> {
        self.segments
            .iter()
            .filter_map(|seg| seg.local_frame(frame).map(|local| (seg, local)))
            .collect()
    }

    /// Captions visible at global `frame`.
    pub fn labels_at(&self, frame: u64) -> impl Iterator<Item = &LabelOverlay> + '_ {
        self.labels.iter().filter(move |l| {
            FrameRange::from_start_len(l.start_frame, l.duration_frames).contains(FrameIndex(frame))
        })
    }
}

/// Lay out intro, one segment per trace, and outro on a single timeline.
///
/// Under [`TransitionPolicy::HardCut`] the segments tile `[0, total_duration)` exactly. Under
/// [`TransitionPolicy::Crossfade`] each transition pulls the next segment back by the overlap,
/// capped by the next segment's duration and by the part of the previous segment after its own
/// fade-in. Starts stay sorted and non-negative and at most two segments are live at any frame.
/// With no traces the outro directly follows the intro.
#[tracing::instrument(skip(traces), fields(trace_count = traces.len()))]
pub fn assemble<S>(
    intro_frames: u64,
    traces: &[LabeledTrace<S>],
    outro_frames: u64,
    opts: &AssembleOpts,
) -> Timeline {
    let mut plan: Vec<(String, u64, SegmentPayload)> = Vec::with_capacity(traces.len() + 2);
    plan.push(("intro".to_owned(), intro_frames, SegmentPayload::Intro));
    for (index, lt) in traces.iter().enumerate() {
        plan.push((
            format!("example-{index}"),
            lt.trace.duration,
            SegmentPayload::Trace { index },
        ));
    }
    plan.push(("outro".to_owned(), outro_frames, SegmentPayload::Outro));

    let overlap = opts.policy.overlap();
    let ease = opts.policy.ease();

    let mut segments: Vec<TimelineSegment> = Vec::with_capacity(plan.len());
    let mut cursor = 0u64;
    for (id, duration_frames, payload) in plan {
        let mut envelope = Envelope {
            ease,
            ..Envelope::default()
        };
        let mut start_frame = cursor;
        if let Some(prev) = segments.last_mut() {
            // Never reach back past the end of prev's own fade-in.
            let shared = overlap
                .min(duration_frames)
                .min(prev.duration_frames - prev.envelope.fade_in_frames);
            start_frame = cursor.saturating_sub(shared);
            prev.envelope.fade_out_frames = shared;
            envelope.fade_in_frames = shared;
        }
        cursor = start_frame + duration_frames;
        segments.push(TimelineSegment {
            id,
            start_frame,
            duration_frames,
            envelope,
            payload,
        });
    }

    let labels = segments
        .iter()
        .filter_map(|seg| match seg.payload {
            SegmentPayload::Trace { index } => Some(LabelOverlay {
                segment_id: seg.id.clone(),
                text: traces[index].label.clone(),
                start_frame: seg.start_frame,
                duration_frames: opts.label_max_frames.min(seg.duration_frames),
            }),
            _ => None,
        })
        .collect();

    let total_duration = segments.last().map(TimelineSegment::end_frame).unwrap_or(0);
    tracing::debug!(
        segments = segments.len(),
        total_duration,
        "timeline assembled"
    );

    Timeline {
        policy: opts.policy,
        segments,
        labels,
        total_duration,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/assembler.rs"]
mod tests;
