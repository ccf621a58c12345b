use crate::error::KaraokeError;
use crate::types::{SyllableUnit, TimedSyllable};

pub trait Smoother: Send + Sync {
    fn smooth(&self, envelope: &[f32]) -> Result<Vec<f32>, KaraokeError>;
}

pub trait SyllableSplitter: Send + Sync {
    fn split(&self, line: &str) -> Vec<SyllableUnit>;
}

pub trait TimingAllocator: Send + Sync {
    fn allocate(
        &self,
        units: &[SyllableUnit],
        span_ms: u64,
    ) -> Result<Vec<TimedSyllable>, KaraokeError>;
}
