use std::path::Path;

use crate::error::KaraokeError;

/// Tunable parameters for the analysis and tagging pipeline.
///
/// Loadable from JSON so a host application can ship per-genre profiles;
/// any field missing from the file falls back to its default.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct KaraokeConfig {
    /// Samples per RMS analysis window.
    pub frame_length: usize,
    /// Samples advanced between consecutive windows. Must not exceed
    /// `frame_length`.
    pub hop_length: usize,
    /// Savitzky-Golay window in frames. Odd, and smaller than the envelope
    /// being smoothed.
    pub smoothing_window: usize,
    /// Savitzky-Golay polynomial order. Smaller than `smoothing_window`.
    pub smoothing_polyorder: usize,
    /// Minimum envelope value for a peak (and, negated, for a trough).
    pub extremum_min_height: f32,
    pub expected_sample_rate_hz: u32,
}

impl KaraokeConfig {
    pub const DEFAULT_FRAME_LENGTH: usize = 2048;
    pub const DEFAULT_HOP_LENGTH: usize = 512;
    pub const DEFAULT_SMOOTHING_WINDOW: usize = 71;
    pub const DEFAULT_SMOOTHING_POLYORDER: usize = 4;
    pub const DEFAULT_EXTREMUM_MIN_HEIGHT: f32 = 0.1;
    pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 22_050;

    pub fn load(path: &Path) -> Result<Self, KaraokeError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| KaraokeError::io("read karaoke config", e))?;
        serde_json::from_str(&data).map_err(|e| KaraokeError::json("parse karaoke config", e))
    }
}

impl Default for KaraokeConfig {
    fn default() -> Self {
        Self {
            frame_length: Self::DEFAULT_FRAME_LENGTH,
            hop_length: Self::DEFAULT_HOP_LENGTH,
            smoothing_window: Self::DEFAULT_SMOOTHING_WINDOW,
            smoothing_polyorder: Self::DEFAULT_SMOOTHING_POLYORDER,
            extremum_min_height: Self::DEFAULT_EXTREMUM_MIN_HEIGHT,
            expected_sample_rate_hz: Self::DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}
