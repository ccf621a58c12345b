/// Decoded mono vocal audio. Decoding and source separation happen upstream;
/// this crate only ever reads the samples.
#[derive(Debug, Clone)]
pub struct VocalTrack {
    pub sample_rate_hz: u32,
    pub samples: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LyricLine {
    pub text: String,
    /// Millisecond interval is [start_ms, end_ms), i.e. start inclusive/end exclusive.
    pub start_ms: u64,
    /// Millisecond interval is [start_ms, end_ms), i.e. start inclusive/end exclusive.
    pub end_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    Word,
    Whitespace,
    Punctuation,
}

/// One token of a lyric line. Concatenating the texts of a line's units in
/// order reproduces the line exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct SyllableUnit {
    pub text: String,
    pub kind: UnitKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimedSyllable {
    pub unit: SyllableUnit,
    pub duration_ms: u64,
    /// Cumulative start offset within the line, relative to the line's start.
    pub offset_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Peak,
    Trough,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    pub frame: usize,
    pub kind: ExtremumKind,
    /// Envelope value at `frame`, never negated, including for troughs.
    pub value: f32,
    pub time_s: f64,
}

/// Smoothed envelope plus its detected extrema, with every frame index
/// already mapped to seconds so the result can be handed straight to a
/// plotting or inspection layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvelopeAnalysis {
    pub envelope: Vec<f32>,
    pub frame_times: Vec<f64>,
    pub peaks: Vec<Extremum>,
    pub troughs: Vec<Extremum>,
}
