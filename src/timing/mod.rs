pub(crate) mod durations;
pub(crate) mod ease;
