use crate::analysis::envelope::rms_envelope;
use crate::analysis::extrema::find_extrema;
use crate::analysis::timing::frames_to_times;
use crate::config::KaraokeConfig;
use crate::error::KaraokeError;
use crate::karaoke::tagging::render_karaoke_line;
use crate::pipeline::traits::{Smoother, SyllableSplitter, TimingAllocator};
use crate::types::{EnvelopeAnalysis, Extremum, ExtremumKind, LyricLine, VocalTrack};

pub struct KaraokeEngine {
    config: KaraokeConfig,
    smoother: Box<dyn Smoother>,
    splitter: Box<dyn SyllableSplitter>,
    allocator: Box<dyn TimingAllocator>,
}

pub(crate) struct KaraokeEngineParts {
    pub config: KaraokeConfig,
    pub smoother: Box<dyn Smoother>,
    pub splitter: Box<dyn SyllableSplitter>,
    pub allocator: Box<dyn TimingAllocator>,
}

impl KaraokeEngine {
    pub(crate) fn from_parts(parts: KaraokeEngineParts) -> Self {
        Self {
            config: parts.config,
            smoother: parts.smoother,
            splitter: parts.splitter,
            allocator: parts.allocator,
        }
    }

    /// Envelope, smoothing, extrema and time mapping in one pass over a
    /// vocal track.
    ///
    /// Tracks shorter than the smoothing window fail with
    /// `InvalidParameters`; callers working with very short clips must
    /// shrink the window themselves.
    pub fn analyze(&self, track: &VocalTrack) -> Result<EnvelopeAnalysis, KaraokeError> {
        if track.sample_rate_hz == 0 {
            return Err(KaraokeError::invalid_input("sample rate must be positive"));
        }
        if track.sample_rate_hz != self.config.expected_sample_rate_hz {
            tracing::warn!(
                expected_rate_hz = self.config.expected_sample_rate_hz,
                actual_rate_hz = track.sample_rate_hz,
                "vocal track sample rate differs from configured expectation"
            );
        }

        let raw = rms_envelope(
            &track.samples,
            self.config.frame_length,
            self.config.hop_length,
        )?;
        let envelope = self.smoother.smooth(&raw)?;

        let peak_frames = find_extrema(&envelope, self.config.extremum_min_height, true);
        let trough_frames = find_extrema(&envelope, self.config.extremum_min_height, false);

        let all_frames: Vec<usize> = (0..envelope.len()).collect();
        let frame_times =
            frames_to_times(&all_frames, self.config.hop_length, track.sample_rate_hz)?;

        tracing::debug!(
            frames = envelope.len(),
            peaks = peak_frames.len(),
            troughs = trough_frames.len(),
            "vocal envelope analyzed"
        );

        let peaks = to_extrema(&peak_frames, ExtremumKind::Peak, &envelope, &frame_times);
        let troughs = to_extrema(&trough_frames, ExtremumKind::Trough, &envelope, &frame_times);

        Ok(EnvelopeAnalysis {
            envelope,
            frame_times,
            peaks,
            troughs,
        })
    }

    /// Karaoke tag string for one aligned lyric line.
    pub fn tag_line(&self, line: &LyricLine) -> Result<String, KaraokeError> {
        if line.start_ms >= line.end_ms {
            return Err(KaraokeError::invalid_input(format!(
                "line start {} ms must precede end {} ms",
                line.start_ms, line.end_ms
            )));
        }
        let units = self.splitter.split(&line.text);
        let timed = self.allocator.allocate(&units, line.end_ms - line.start_ms)?;
        Ok(render_karaoke_line(&timed))
    }

    /// Tag every line in order. Lines are independent, so the first failing
    /// line aborts the batch without partial output.
    pub fn tag_lines(&self, lines: &[LyricLine]) -> Result<Vec<String>, KaraokeError> {
        lines.iter().map(|line| self.tag_line(line)).collect()
    }
}

fn to_extrema(
    frames: &[usize],
    kind: ExtremumKind,
    envelope: &[f32],
    frame_times: &[f64],
) -> Vec<Extremum> {
    frames
        .iter()
        .map(|&frame| Extremum {
            frame,
            kind,
            value: envelope[frame],
            time_s: frame_times[frame],
        })
        .collect()
}
