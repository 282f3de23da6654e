//! Mock analysis -- synthesizes a result record from a random source.
//!
//! There is no model behind this module. `confidence` and `likelihood` are
//! uniform draws; recommendations and technical details are constant text.
//! The randomness sits behind [`RandomSource`] so tests can pin exact values.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Lowest possible confidence percentage.
pub const CONFIDENCE_MIN: u8 = 60;
/// Width of the confidence range; values fall in `[60, 100)`.
pub const CONFIDENCE_SPAN: u8 = 40;
/// Lowest possible likelihood percentage.
pub const LIKELIHOOD_MIN: u8 = 40;
/// Width of the likelihood range; values fall in `[40, 70)`.
pub const LIKELIHOOD_SPAN: u8 = 30;

/// Supplies uniformly distributed values in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible draws from a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of values, then repeats `fallback` forever.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    queue: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            fallback: 0.0,
        }
    }

    /// Value returned once the scripted list is exhausted.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

/// Static image/timing/model labels attached to every result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalDetails {
    pub image_quality: &'static str,
    pub analysis_time: &'static str,
    pub model_version: &'static str,
}

/// A synthesized analysis. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Integer percent in `[60, 100)`.
    pub confidence: u8,
    /// Integer percent in `[40, 70)`.
    pub likelihood: u8,
    pub recommendations: &'static [&'static str],
    pub technical_details: TechnicalDetails,
}

/// The two places an analysis can be started from. They differ in delay and
/// in the canned text they report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisProfile {
    /// Drop a file and the analysis starts immediately.
    DropZone,
    /// Pick a file, then press "Analyze X-Ray".
    #[default]
    Guided,
}

const DROP_ZONE_RECOMMENDATIONS: &[&str] = &[
    "Consult with a pulmonologist for professional diagnosis",
    "Consider additional imaging tests (CT scan)",
    "Monitor symptoms closely",
    "Follow up in 2-4 weeks if symptoms persist",
];

const GUIDED_RECOMMENDATIONS: &[&str] = &[
    "Consult with a pulmonologist for further evaluation",
    "Consider additional imaging studies if symptoms persist",
    "Monitor symptoms and seek immediate care if they worsen",
];

impl AnalysisProfile {
    /// Simulated processing time before the result appears.
    pub fn delay(self) -> Duration {
        match self {
            Self::DropZone => Duration::from_millis(2_000),
            Self::Guided => Duration::from_millis(3_000),
        }
    }

    /// Whether selecting a file starts the analysis without a second click.
    pub fn auto_analyze(self) -> bool {
        matches!(self, Self::DropZone)
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::DropZone => DROP_ZONE_RECOMMENDATIONS,
            Self::Guided => GUIDED_RECOMMENDATIONS,
        }
    }

    pub fn technical_details(self) -> TechnicalDetails {
        TechnicalDetails {
            image_quality: "Good",
            analysis_time: match self {
                Self::DropZone => "2.3s",
                Self::Guided => "2.3 seconds",
            },
            model_version: "LungAI v2.1",
        }
    }
}

/// Build a result, drawing confidence first and likelihood second.
pub fn synthesize(profile: AnalysisProfile, source: &mut dyn RandomSource) -> AnalysisResult {
    let confidence = scale(source.next_unit(), CONFIDENCE_SPAN) + CONFIDENCE_MIN;
    let likelihood = scale(source.next_unit(), LIKELIHOOD_SPAN) + LIKELIHOOD_MIN;
    AnalysisResult {
        confidence,
        likelihood,
        recommendations: profile.recommendations(),
        technical_details: profile.technical_details(),
    }
}

/// `floor(unit * span)`, with `unit` clamped into `[0, 1)` so a misbehaving
/// source can never push a value outside its range.
fn scale(unit: f64, span: u8) -> u8 {
    let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
    let scaled = (unit * f64::from(span)).floor() as u8;
    scaled.min(span - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bounds_from_zero() {
        let mut src = ScriptedRandom::new([0.0, 0.0]);
        let r = synthesize(AnalysisProfile::Guided, &mut src);
        assert_eq!(r.confidence, 60);
        assert_eq!(r.likelihood, 40);
    }

    #[test]
    fn upper_bounds_just_below_one() {
        let almost_one = 1.0 - f64::EPSILON;
        let mut src = ScriptedRandom::new([almost_one, almost_one]);
        let r = synthesize(AnalysisProfile::Guided, &mut src);
        assert_eq!(r.confidence, 99);
        assert_eq!(r.likelihood, 69);
    }

    #[test]
    fn draws_are_independent_and_ordered() {
        let mut src = ScriptedRandom::new([0.5, 0.1]);
        let r = synthesize(AnalysisProfile::DropZone, &mut src);
        assert_eq!(r.confidence, 80);
        assert_eq!(r.likelihood, 43);
    }

    #[test]
    fn out_of_range_draws_are_clamped() {
        let mut src = ScriptedRandom::new([1.0, 7.5]);
        let r = synthesize(AnalysisProfile::Guided, &mut src);
        assert_eq!(r.confidence, 99);
        assert_eq!(r.likelihood, 69);

        let mut src = ScriptedRandom::new([-3.0, f64::NAN]);
        let r = synthesize(AnalysisProfile::Guided, &mut src);
        assert_eq!(r.confidence, 60);
        assert_eq!(r.likelihood, 40);
    }

    #[test]
    fn thread_random_stays_in_range() {
        let mut src = ThreadRandom;
        for _ in 0..2_000 {
            let r = synthesize(AnalysisProfile::DropZone, &mut src);
            assert!((60..=99).contains(&r.confidence), "confidence {}", r.confidence);
            assert!((40..=69).contains(&r.likelihood), "likelihood {}", r.likelihood);
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..20 {
            assert_eq!(
                synthesize(AnalysisProfile::Guided, &mut a),
                synthesize(AnalysisProfile::Guided, &mut b)
            );
        }
    }

    #[test]
    fn static_content_is_identical_every_call() {
        for profile in [AnalysisProfile::DropZone, AnalysisProfile::Guided] {
            let mut src = ThreadRandom;
            let first = synthesize(profile, &mut src);
            for _ in 0..10 {
                let next = synthesize(profile, &mut src);
                assert_eq!(next.recommendations, first.recommendations);
                assert_eq!(next.technical_details, first.technical_details);
            }
        }
        assert_eq!(AnalysisProfile::DropZone.recommendations().len(), 4);
        assert_eq!(AnalysisProfile::Guided.recommendations().len(), 3);
        assert_eq!(AnalysisProfile::Guided.technical_details().model_version, "LungAI v2.1");
    }

    #[test]
    fn profile_timing() {
        assert_eq!(AnalysisProfile::DropZone.delay(), Duration::from_secs(2));
        assert_eq!(AnalysisProfile::Guided.delay(), Duration::from_secs(3));
        assert!(AnalysisProfile::DropZone.auto_analyze());
        assert!(!AnalysisProfile::Guided.auto_analyze());
    }

    #[test]
    fn scripted_random_falls_back() {
        let mut src = ScriptedRandom::new([0.25]).with_fallback(0.75);
        assert_eq!(src.next_unit(), 0.25);
        assert_eq!(src.next_unit(), 0.75);
        assert_eq!(src.next_unit(), 0.75);
    }
}
