use crate::analysis::smoothing::savitzky_golay;
use crate::error::KaraokeError;
use crate::karaoke::tagging::allocate_uniform;
use crate::karaoke::tokenization::split_syllable_units;
use crate::pipeline::traits::{Smoother, SyllableSplitter, TimingAllocator};
use crate::types::{SyllableUnit, TimedSyllable};

pub struct SavitzkyGolaySmoother {
    window_length: usize,
    polyorder: usize,
}

impl SavitzkyGolaySmoother {
    pub fn new(window_length: usize, polyorder: usize) -> Self {
        Self {
            window_length,
            polyorder,
        }
    }
}

impl Smoother for SavitzkyGolaySmoother {
    fn smooth(&self, envelope: &[f32]) -> Result<Vec<f32>, KaraokeError> {
        savitzky_golay(envelope, self.window_length, self.polyorder)
    }
}

pub struct CharClassSplitter;

impl SyllableSplitter for CharClassSplitter {
    fn split(&self, line: &str) -> Vec<SyllableUnit> {
        split_syllable_units(line)
    }
}

pub struct UniformAllocator;

impl TimingAllocator for UniformAllocator {
    fn allocate(
        &self,
        units: &[SyllableUnit],
        span_ms: u64,
    ) -> Result<Vec<TimedSyllable>, KaraokeError> {
        allocate_uniform(units, span_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn savgol_smoother_delegates() {
        let smoother = SavitzkyGolaySmoother::new(5, 2);
        let envelope = vec![0.4f32; 20];
        let smoothed = smoother.smooth(&envelope).expect("smooth");
        let expected = savitzky_golay(&envelope, 5, 2).expect("smooth");
        assert_eq!(smoothed, expected);
    }

    #[test]
    fn char_class_splitter_delegates() {
        let splitter = CharClassSplitter;
        let units = splitter.split("la la");
        let expected = split_syllable_units("la la");
        assert_eq!(units, expected);
    }

    #[test]
    fn uniform_allocator_delegates() {
        let allocator = UniformAllocator;
        let units = split_syllable_units("la la");
        let timed = allocator.allocate(&units, 90).expect("allocate");
        let expected = allocate_uniform(&units, 90).expect("allocate");
        assert_eq!(timed, expected);
    }
}
