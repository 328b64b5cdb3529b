use rayon::prelude::*;

use crate::{
    foundation::core::FrameRange,
    foundation::error::{StepreelError, StepreelResult},
    projection::projector::{PlaybackState, project},
    trace::event::Trace,
};

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-frame projection.
pub struct ProjectThreading {
    /// Project frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Project every frame in `range` (inclusive start, exclusive end).
///
/// States come back in frame order; the parallel path returns exactly what the sequential one
/// does since [`project`] shares no state between frames.
pub fn project_frames<S>(
    trace: &Trace<S>,
    range: FrameRange,
    threading: &ProjectThreading,
) -> StepreelResult<Vec<PlaybackState<S>>>
where
    S: Clone + Send + Sync,
{
    let frames = range.start.0..range.end.0;
    if !threading.parallel {
        return frames.map(|f| project(trace, frame_arg(f)?)).collect();
    }

    let frames: Vec<u64> = frames.collect();
    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        frames
            .par_iter()
            .map(|&f| project(trace, frame_arg(f)?))
            .collect()
    })
}

fn frame_arg(frame: u64) -> StepreelResult<i64> {
    i64::try_from(frame)
        .map_err(|_| StepreelError::invalid_argument(format!("frame {frame} exceeds i64 range")))
}

fn build_thread_pool(threads: Option<usize>) -> StepreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StepreelError::invalid_argument(
            "projection threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        StepreelError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/projection/batch.rs"]
mod tests;
