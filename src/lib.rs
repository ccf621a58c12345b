pub mod analysis;
pub mod config;
pub mod error;
pub mod karaoke;
pub mod pipeline;
pub mod types;

pub use config::KaraokeConfig;
pub use error::KaraokeError;
pub use pipeline::builder::KaraokeEngineBuilder;
pub use pipeline::runtime::KaraokeEngine;
pub use pipeline::traits::{Smoother, SyllableSplitter, TimingAllocator};
pub use types::{
    EnvelopeAnalysis, Extremum, ExtremumKind, LyricLine, SyllableUnit, TimedSyllable, UnitKind,
    VocalTrack,
};
