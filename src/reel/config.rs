use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::{BASELINE_FPS, Fps},
    foundation::error::{StepreelError, StepreelResult},
    timeline::assembler::TransitionPolicy,
};

/// One input to visualize.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExampleDef {
    /// Caption shown at the start of the example.
    pub label: String,
    /// Characters scanned by the trace.
    pub input: String,
}

/// JSON document describing a full walkthrough reel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReelConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Rate the baseline step costs are authored at.
    #[serde(default = "default_baseline_fps")]
    pub baseline_fps: Fps,
    /// Intro length in seconds.
    #[serde(default = "default_bookend_secs")]
    pub intro_secs: f64,
    /// Outro length in seconds.
    #[serde(default = "default_bookend_secs")]
    pub outro_secs: f64,
    /// Trailing buffer after each trace, in baseline frames.
    #[serde(default = "default_tail_frames")]
    pub tail_frames: u64,
    /// Upper bound on each example's caption, in seconds.
    #[serde(default = "default_label_max_secs")]
    pub label_max_secs: f64,
    /// Transition policy between segments.
    #[serde(default)]
    pub transition: TransitionPolicy,
    /// Examples in playback order.
    #[serde(default)]
    pub examples: Vec<ExampleDef>,
}

fn default_baseline_fps() -> Fps {
    BASELINE_FPS
}

fn default_bookend_secs() -> f64 {
    4.0
}

fn default_tail_frames() -> u64 {
    30
}

fn default_label_max_secs() -> f64 {
    1.5
}

impl ReelConfig {
    /// Config with defaults for everything but `fps` and the examples.
    pub fn new(fps: Fps, examples: Vec<ExampleDef>) -> Self {
        Self {
            fps,
            baseline_fps: default_baseline_fps(),
            intro_secs: default_bookend_secs(),
            outro_secs: default_bookend_secs(),
            tail_frames: default_tail_frames(),
            label_max_secs: default_label_max_secs(),
            transition: TransitionPolicy::default(),
            examples,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> StepreelResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| StepreelError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: &Path) -> StepreelResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open reel config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| StepreelError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject documents the pipeline cannot honor.
    pub fn validate(&self) -> StepreelResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(StepreelError::validation("fps must have num>0 and den>0"));
        }
        if self.baseline_fps.num == 0 || self.baseline_fps.den == 0 {
            return Err(StepreelError::validation(
                "baseline_fps must have num>0 and den>0",
            ));
        }
        for (name, secs) in [
            ("intro_secs", self.intro_secs),
            ("outro_secs", self.outro_secs),
            ("label_max_secs", self.label_max_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                return Err(StepreelError::validation(format!(
                    "{name} must be finite and >= 0, got {secs}"
                )));
            }
        }
        if let TransitionPolicy::Crossfade { overlap_frames, .. } = self.transition
            && overlap_frames == 0
        {
            return Err(StepreelError::validation(
                "crossfade overlap_frames must be > 0",
            ));
        }
        for (i, ex) in self.examples.iter().enumerate() {
            if ex.label.trim().is_empty() {
                return Err(StepreelError::validation(format!(
                    "example {i} has an empty label"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reel/config.rs"]
mod tests;
