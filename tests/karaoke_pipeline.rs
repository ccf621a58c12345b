use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use karaoke_rs::{
    KaraokeConfig, KaraokeEngine, KaraokeEngineBuilder, KaraokeError, LyricLine, SyllableUnit,
    TimedSyllable, TimingAllocator, VocalTrack,
};

const SAMPLE_RATE_HZ: u32 = 22_050;
const NOISE_SEED: u64 = 42;
const NOISE_AMPLITUDE: f32 = 0.005;

/// Silence / 440 Hz burst / silence / burst / silence, with a small seeded
/// noise floor so the envelope is never perfectly flat.
fn two_burst_track() -> VocalTrack {
    let mut rng = StdRng::seed_from_u64(NOISE_SEED);
    let rate = SAMPLE_RATE_HZ as f32;
    let segments: [(f32, f32); 5] = [
        (0.5, 0.0),
        (0.75, 0.8),
        (0.5, 0.0),
        (0.75, 0.8),
        (0.5, 0.0),
    ];

    let mut samples = Vec::new();
    for (duration_s, amplitude) in segments {
        let count = (duration_s * rate) as usize;
        for i in 0..count {
            let tone = amplitude * (2.0 * std::f32::consts::PI * 440.0 * i as f32 / rate).sin();
            let noise = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
            samples.push(tone + noise);
        }
    }
    VocalTrack {
        sample_rate_hz: SAMPLE_RATE_HZ,
        samples,
    }
}

fn burst_engine() -> KaraokeEngine {
    // Window of 15 frames (~0.35 s at hop 512) keeps the two bursts from
    // smearing into one hump.
    let config = KaraokeConfig {
        smoothing_window: 15,
        smoothing_polyorder: 3,
        ..KaraokeConfig::default()
    };
    KaraokeEngineBuilder::new(config)
        .build()
        .expect("build should succeed")
}

#[test]
fn bursts_produce_peaks_inside_burst_intervals() {
    let engine = burst_engine();
    let analysis = engine.analyze(&two_burst_track()).expect("analyze");

    assert_eq!(analysis.envelope.len(), analysis.frame_times.len());
    assert!(!analysis.peaks.is_empty(), "expected at least one peak");

    // Burst intervals in seconds, padded by the smoothing window span.
    let bursts = [(0.5, 1.25), (1.75, 2.5)];
    for peak in &analysis.peaks {
        assert!(peak.value >= 0.1, "peak below height threshold");
        let inside = bursts
            .iter()
            .any(|&(start, end)| peak.time_s >= start - 0.4 && peak.time_s <= end + 0.4);
        assert!(inside, "peak at {:.2}s outside both bursts", peak.time_s);
    }
}

#[test]
fn nonnegative_envelope_has_no_troughs() {
    let engine = burst_engine();
    let analysis = engine.analyze(&two_burst_track()).expect("analyze");
    // An RMS envelope never dips to -0.1, so the negated search stays empty.
    assert!(analysis.troughs.is_empty());
}

#[test]
fn frame_times_are_monotonic_from_zero() {
    let engine = burst_engine();
    let analysis = engine.analyze(&two_burst_track()).expect("analyze");
    assert_eq!(analysis.frame_times[0], 0.0);
    for pair in analysis.frame_times.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn default_window_fails_on_short_clip() {
    let engine = KaraokeEngineBuilder::new(KaraokeConfig::default())
        .build()
        .expect("build should succeed");
    let track = VocalTrack {
        sample_rate_hz: SAMPLE_RATE_HZ,
        // Half a second: 18 envelope frames, far below the 71-frame window.
        samples: vec![0.1f32; SAMPLE_RATE_HZ as usize / 2],
    };
    assert!(matches!(
        engine.analyze(&track),
        Err(KaraokeError::InvalidParameters { .. })
    ));
}

#[test]
fn lines_tag_end_to_end() {
    let engine = burst_engine();
    let lines = vec![
        LyricLine {
            text: "Never gonna give you up".to_string(),
            start_ms: 0,
            end_ms: 2000,
        },
        LyricLine {
            text: "Never gonna let you down".to_string(),
            start_ms: 2000,
            end_ms: 4250,
        },
    ];
    let tagged = engine.tag_lines(&lines).expect("tag lines");

    // 9 units (5 words, 4 spaces) over 2000 ms: 222 ms each, 22 cs.
    assert_eq!(
        tagged[0],
        "{\\k22}Never{\\k22}gonna{\\k22}give{\\k22}you{\\k22}up"
    );
    // 2250 ms over 9 units: 250 ms each, 25 cs.
    assert_eq!(
        tagged[1],
        "{\\k25}Never{\\k25}gonna{\\k25}let{\\k25}you{\\k25}down"
    );
}

#[test]
fn punctuated_line_tags_every_visible_unit() {
    let engine = burst_engine();
    let line = LyricLine {
        text: "stop! now".to_string(),
        start_ms: 0,
        end_ms: 500,
    };
    // Units: "stop", "!", " ", "now" -> 125 ms each.
    assert_eq!(
        engine.tag_line(&line).expect("tag"),
        "{\\k12}stop{\\k12}!{\\k12}now"
    );
}

struct CharWeightedAllocator;

impl TimingAllocator for CharWeightedAllocator {
    fn allocate(
        &self,
        units: &[SyllableUnit],
        span_ms: u64,
    ) -> Result<Vec<TimedSyllable>, KaraokeError> {
        if units.is_empty() {
            return Err(KaraokeError::EmptyLine);
        }
        let total_chars: u64 = units.iter().map(|u| u.text.chars().count() as u64).sum();
        let mut timed = Vec::with_capacity(units.len());
        let mut offset_ms = 0u64;
        for unit in units {
            let chars = unit.text.chars().count() as u64;
            let duration_ms = span_ms * chars / total_chars.max(1);
            timed.push(TimedSyllable {
                unit: unit.clone(),
                duration_ms,
                offset_ms,
            });
            offset_ms += duration_ms;
        }
        Ok(timed)
    }
}

#[test]
fn weighted_allocator_swaps_in_through_the_builder() {
    let engine = KaraokeEngineBuilder::new(KaraokeConfig::default())
        .with_allocator(Box::new(CharWeightedAllocator))
        .build()
        .expect("build should succeed");
    let line = LyricLine {
        text: "go away".to_string(),
        start_ms: 0,
        end_ms: 700,
    };
    // 7 chars total: "go"=2 -> 200 ms, " "=1 -> 100 ms, "away"=4 -> 400 ms.
    assert_eq!(
        engine.tag_line(&line).expect("tag"),
        "{\\k20}go{\\k40}away"
    );
}
