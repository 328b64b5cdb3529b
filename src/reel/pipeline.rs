use crate::{
    foundation::core::Fps,
    foundation::error::{StepreelError, StepreelResult},
    projection::projector::{PlaybackState, project},
    reel::config::ReelConfig,
    timeline::assembler::{AssembleOpts, LabeledTrace, SegmentPayload, Timeline, assemble},
    timing::durations::{DurationTable, scale_durations_from, scale_frames},
    trace::generator::trace_str,
};

/// Everything the renderer needs for one walkthrough video.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reel {
    /// Output frame rate.
    pub fps: Fps,
    /// Step costs at `fps`.
    pub durations: DurationTable,
    /// One trace per configured example, in playback order.
    pub traces: Vec<LabeledTrace>,
    /// Global schedule.
    pub timeline: Timeline,
}

/// Projection of the trace live at a global frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ReelFrame<'a> {
    /// Segment the state belongs to.
    pub segment_id: &'a str,
    /// Frame within the segment.
    pub local_frame: u64,
    /// Scan state at `local_frame`.
    pub state: PlaybackState,
}

/// Scale durations, trace every example and assemble the timeline.
///
/// Intro, outro and label lengths convert with `round(secs * fps)`; the tail buffer is scaled
/// like a step cost.
#[tracing::instrument(skip(cfg), fields(fps = %cfg.fps, examples = cfg.examples.len()))]
pub fn build_reel(cfg: &ReelConfig) -> StepreelResult<Reel> {
    cfg.validate()?;

    let durations = scale_durations_from(cfg.fps, cfg.baseline_fps)?;
    let tail = scale_frames(cfg.tail_frames, cfg.fps, cfg.baseline_fps);
    let tail = i64::try_from(tail)
        .map_err(|_| StepreelError::validation("tail_frames is too large"))?;

    let traces = cfg
        .examples
        .iter()
        .map(|ex| -> StepreelResult<LabeledTrace> {
            Ok(LabeledTrace {
                label: ex.label.clone(),
                trace: trace_str(&ex.input, &durations, tail)?,
            })
        })
        .collect::<StepreelResult<Vec<_>>>()?;

    let opts = AssembleOpts {
        policy: cfg.transition,
        label_max_frames: cfg.fps.secs_to_frames_round(cfg.label_max_secs),
    };
    let timeline = assemble(
        cfg.fps.secs_to_frames_round(cfg.intro_secs),
        &traces,
        cfg.fps.secs_to_frames_round(cfg.outro_secs),
        &opts,
    );

    tracing::info!(
        total_frames = timeline.total_duration,
        seconds = cfg.fps.frames_to_secs(timeline.total_duration),
        "reel built"
    );

    Ok(Reel {
        fps: cfg.fps,
        durations,
        traces,
        timeline,
    })
}

impl Reel {
    /// Trace states live at global `frame`.
    ///
    /// Empty during intro and outro; two entries inside a crossfade between examples.
    pub fn states_at(&self, frame: i64) -> StepreelResult<Vec<ReelFrame<'_>>> {
        if frame < 0 {
            return Err(StepreelError::invalid_argument(format!(
                "frame must be >= 0, got {frame}"
            )));
        }

        self.timeline
            .segments_at(frame as u64)
            .into_iter()
            .filter_map(|(seg, local)| match seg.payload {
                SegmentPayload::Trace { index } => Some((seg, local, index)),
                SegmentPayload::Intro | SegmentPayload::Outro => None,
            })
            .map(|(seg, local, index)| {
                let lt = self.traces.get(index).ok_or_else(|| {
                    StepreelError::invalid_argument(format!(
                        "segment '{}' references missing trace {index}",
                        seg.id
                    ))
                })?;
                Ok::<_, StepreelError>(ReelFrame {
                    segment_id: seg.id.as_str(),
                    local_frame: local,
                    state: project(&lt.trace, local as i64)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reel/pipeline.rs"]
mod tests;
