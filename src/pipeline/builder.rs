use crate::config::KaraokeConfig;
use crate::error::KaraokeError;
use crate::pipeline::defaults::{CharClassSplitter, SavitzkyGolaySmoother, UniformAllocator};
use crate::pipeline::runtime::{KaraokeEngine, KaraokeEngineParts};
use crate::pipeline::traits::{Smoother, SyllableSplitter, TimingAllocator};

pub struct KaraokeEngineBuilder {
    config: KaraokeConfig,
    smoother: Option<Box<dyn Smoother>>,
    splitter: Option<Box<dyn SyllableSplitter>>,
    allocator: Option<Box<dyn TimingAllocator>>,
}

impl KaraokeEngineBuilder {
    pub fn new(config: KaraokeConfig) -> Self {
        Self {
            config,
            smoother: None,
            splitter: None,
            allocator: None,
        }
    }

    pub fn with_smoother(mut self, smoother: Box<dyn Smoother>) -> Self {
        self.smoother = Some(smoother);
        self
    }

    pub fn with_splitter(mut self, splitter: Box<dyn SyllableSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    pub fn with_allocator(mut self, allocator: Box<dyn TimingAllocator>) -> Self {
        self.allocator = Some(allocator);
        self
    }

    pub fn build(self) -> Result<KaraokeEngine, KaraokeError> {
        validate_config(&self.config)?;

        let window = self.config.smoothing_window;
        let polyorder = self.config.smoothing_polyorder;
        Ok(KaraokeEngine::from_parts(KaraokeEngineParts {
            config: self.config,
            smoother: self
                .smoother
                .unwrap_or_else(|| Box::new(SavitzkyGolaySmoother::new(window, polyorder))),
            splitter: self.splitter.unwrap_or_else(|| Box::new(CharClassSplitter)),
            allocator: self.allocator.unwrap_or_else(|| Box::new(UniformAllocator)),
        }))
    }
}

/// Parameter checks that do not depend on input length; length-dependent
/// conditions (window vs. envelope size) surface when audio is analyzed.
fn validate_config(config: &KaraokeConfig) -> Result<(), KaraokeError> {
    if config.frame_length == 0 || config.hop_length == 0 {
        return Err(KaraokeError::invalid_input(
            "frame and hop lengths must be positive",
        ));
    }
    if config.hop_length > config.frame_length {
        return Err(KaraokeError::invalid_input(format!(
            "hop length {} exceeds frame length {}",
            config.hop_length, config.frame_length
        )));
    }
    if config.smoothing_window == 0 || config.smoothing_window % 2 == 0 {
        return Err(KaraokeError::invalid_parameters(format!(
            "smoothing window must be odd and positive, got {}",
            config.smoothing_window
        )));
    }
    if config.smoothing_polyorder >= config.smoothing_window {
        return Err(KaraokeError::invalid_parameters(format!(
            "polynomial order {} must be smaller than window {}",
            config.smoothing_polyorder, config.smoothing_window
        )));
    }
    if config.expected_sample_rate_hz == 0 {
        return Err(KaraokeError::invalid_input("sample rate must be positive"));
    }
    if !config.extremum_min_height.is_finite() {
        return Err(KaraokeError::invalid_parameters(
            "extremum height threshold must be finite",
        ));
    }
    Ok(())
}
