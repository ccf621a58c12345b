use crate::error::KaraokeError;

/// Seconds at which an analysis frame starts: `frame * hop_length / rate`.
pub fn frame_to_time(
    frame: usize,
    hop_length: usize,
    sample_rate_hz: u32,
) -> Result<f64, KaraokeError> {
    if hop_length == 0 || sample_rate_hz == 0 {
        return Err(KaraokeError::invalid_input(
            "hop length and sample rate must be positive",
        ));
    }
    Ok(frame as f64 * hop_length as f64 / sample_rate_hz as f64)
}

/// Elementwise [`frame_to_time`] over a sequence of frame indices.
pub fn frames_to_times(
    frames: &[usize],
    hop_length: usize,
    sample_rate_hz: u32,
) -> Result<Vec<f64>, KaraokeError> {
    if hop_length == 0 || sample_rate_hz == 0 {
        return Err(KaraokeError::invalid_input(
            "hop length and sample rate must be positive",
        ));
    }
    let hop_s = hop_length as f64 / sample_rate_hz as f64;
    Ok(frames.iter().map(|&frame| frame as f64 * hop_s).collect())
}
