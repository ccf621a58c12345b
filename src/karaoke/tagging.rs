use crate::error::KaraokeError;
use crate::types::{SyllableUnit, TimedSyllable};

/// Uniform per-unit allocation: every unit, whitespace and punctuation
/// included, receives `span_ms / unit_count` milliseconds.
///
/// Integer division leaves up to `unit_count - 1` ms of the span
/// unallocated. That loss is part of the timing contract; it is not
/// redistributed across units.
pub fn allocate_uniform(
    units: &[SyllableUnit],
    span_ms: u64,
) -> Result<Vec<TimedSyllable>, KaraokeError> {
    if units.is_empty() {
        return Err(KaraokeError::EmptyLine);
    }

    let unit_duration = span_ms / units.len() as u64;
    let mut timed = Vec::with_capacity(units.len());
    let mut offset_ms = 0u64;
    for unit in units {
        timed.push(TimedSyllable {
            unit: unit.clone(),
            duration_ms: unit_duration,
            offset_ms,
        });
        offset_ms += unit_duration;
    }
    Ok(timed)
}

/// Render timed units as karaoke override tags: `{\k<centiseconds>}` in
/// front of each unit whose trimmed text is non-empty. Whitespace units
/// emit nothing, but their allocated duration already advanced the clock,
/// so the following tag stays aligned.
pub fn render_karaoke_line(timed: &[TimedSyllable]) -> String {
    let mut out = String::new();
    for syllable in timed {
        let text = syllable.unit.text.trim();
        if text.is_empty() {
            continue;
        }
        out.push_str(&format!("{{\\k{}}}{text}", syllable.duration_ms / 10));
    }
    out
}
