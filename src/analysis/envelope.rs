use crate::error::KaraokeError;

/// Frame-wise RMS energy over a sliding window.
///
/// The window covers `frame_length` samples and advances by `hop_length`.
/// A trailing window with fewer than `frame_length` samples is dropped, so
/// the last frames of a clip never report artificially low energy. Output
/// length is `(samples.len() - frame_length) / hop_length + 1`.
pub fn rms_envelope(
    samples: &[f32],
    frame_length: usize,
    hop_length: usize,
) -> Result<Vec<f32>, KaraokeError> {
    if samples.is_empty() {
        return Err(KaraokeError::invalid_input("waveform is empty"));
    }
    if frame_length == 0 || hop_length == 0 {
        return Err(KaraokeError::invalid_input(
            "frame and hop lengths must be positive",
        ));
    }
    if hop_length > frame_length {
        return Err(KaraokeError::invalid_input(format!(
            "hop length {hop_length} exceeds frame length {frame_length}"
        )));
    }
    if samples.len() < frame_length {
        return Err(KaraokeError::invalid_input(format!(
            "waveform too short for analysis: {} samples < frame length {frame_length}",
            samples.len()
        )));
    }

    let frame_count = (samples.len() - frame_length) / hop_length + 1;
    let mut envelope = Vec::with_capacity(frame_count);
    for frame_idx in 0..frame_count {
        let start = frame_idx * hop_length;
        let window = &samples[start..start + frame_length];
        let mean_sq = window.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>()
            / frame_length as f64;
        envelope.push(mean_sq.sqrt() as f32);
    }
    Ok(envelope)
}
