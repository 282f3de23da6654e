/// End-to-end tests for the mock analysis workflow.
///
/// These drive `AnalysisWorkflow` through the real timer threads with short
/// delays, exactly as the GUI does once per frame, and use `tempfile` for
/// uploads that come from disk. No mocking beyond an injected random source.
use lungai_core::analysis::{AnalysisProfile, ScriptedRandom, SeededRandom};
use lungai_core::catalog;
use lungai_core::error::SubmitError;
use lungai_core::settings::Settings;
use lungai_core::upload::UploadedImage;
use lungai_core::workflow::{AnalysisState, AnalysisWorkflow};
use std::fs;
use std::time::{Duration, Instant};

// ── Helpers ──────────────────────────────────────────────────────────────────

const SHORT: Duration = Duration::from_millis(20);

fn png(name: &str) -> UploadedImage {
    UploadedImage::new(name, "image/png", 48_000)
}

/// Pump `process_messages()` until the workflow leaves `Analyzing` or the
/// deadline expires.
fn pump_until_settled(wf: &mut AnalysisWorkflow) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while wf.is_analyzing() {
        assert!(
            Instant::now() < deadline,
            "analysis did not complete within 30 seconds"
        );
        wf.process_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// Keep pumping for `window` and return how many times the state changed.
fn pump_for(wf: &mut AnalysisWorkflow, window: Duration) -> usize {
    let end = Instant::now() + window;
    let mut changes = 0;
    while Instant::now() < end {
        if wf.process_messages() {
            changes += 1;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    changes
}

// ── Submission lifecycle ─────────────────────────────────────────────────────

/// A valid image produces exactly one `Completed` with values in range.
#[test]
fn valid_submission_completes_once() {
    let mut wf = AnalysisWorkflow::with_source(
        AnalysisProfile::DropZone,
        SHORT,
        SeededRandom::new(1),
    );
    let id = wf.submit_file(png("chest.png")).unwrap();
    assert_eq!(wf.state(), &AnalysisState::Analyzing);
    assert_eq!(wf.current_submission(), Some(id));

    pump_until_settled(&mut wf);

    let result = wf.result().expect("result after completion").clone();
    assert!((60..=99).contains(&result.confidence));
    assert!((40..=69).contains(&result.likelihood));
    assert!(wf.completed_at().is_some());

    // Nothing else arrives afterwards.
    assert_eq!(pump_for(&mut wf, Duration::from_millis(100)), 0);
    assert_eq!(wf.result(), Some(&result));
}

/// Injected extremes map to the range bounds.
#[test]
fn injected_extremes_reach_bounds() {
    let mut wf = AnalysisWorkflow::with_source(
        AnalysisProfile::Guided,
        SHORT,
        ScriptedRandom::new([0.0, 0.0, 1.0 - f64::EPSILON, 1.0 - f64::EPSILON]),
    );
    wf.submit_file(png("a.png")).unwrap();
    pump_until_settled(&mut wf);
    let low = wf.result().unwrap().clone();
    assert_eq!((low.confidence, low.likelihood), (60, 40));

    // Re-analysis of the same file draws again.
    wf.start_analysis().unwrap();
    pump_until_settled(&mut wf);
    let high = wf.result().unwrap();
    assert_eq!((high.confidence, high.likelihood), (99, 69));
}

/// Non-image uploads never change the state, whatever it was.
#[test]
fn non_image_submission_is_a_no_op() {
    let mut wf = AnalysisWorkflow::with_source(AnalysisProfile::DropZone, SHORT, SeededRandom::new(2));
    let text = UploadedImage::new("report.pdf", "application/pdf", 900);

    assert!(matches!(
        wf.submit_file(text.clone()),
        Err(SubmitError::InvalidFileType { .. })
    ));
    assert_eq!(wf.state(), &AnalysisState::Idle);

    wf.submit_file(png("a.png")).unwrap();
    pump_until_settled(&mut wf);
    let before = wf.state().clone();

    assert!(wf.submit_file(text).is_err());
    assert_eq!(wf.state(), &before);
    assert_eq!(wf.upload().map(|u| u.name.as_str()), Some("a.png"));
}

/// Two submissions in quick succession: only the second is ever observed.
#[test]
fn second_submission_supersedes_first() {
    let mut wf = AnalysisWorkflow::with_source(
        AnalysisProfile::Guided,
        Duration::from_millis(150),
        ScriptedRandom::new([0.5]).with_fallback(0.5),
    );
    wf.submit_file(png("first.png")).unwrap();
    let second = wf.submit_file(png("second.png")).unwrap();

    pump_until_settled(&mut wf);
    assert_eq!(wf.current_submission(), Some(second));
    assert_eq!(wf.upload().map(|u| u.name.as_str()), Some("second.png"));
    assert!(wf.result().is_some());

    // The first timer was cancelled; even if it raced, nothing changes state.
    assert_eq!(pump_for(&mut wf, Duration::from_millis(300)), 0);
}

/// Navigating away cancels the timer and the result never appears.
#[test]
fn reset_cancels_pending_analysis() {
    let mut wf = AnalysisWorkflow::with_source(AnalysisProfile::Guided, SHORT, SeededRandom::new(3));
    wf.submit_file(png("a.png")).unwrap();
    wf.reset();

    assert_eq!(pump_for(&mut wf, Duration::from_millis(150)), 0);
    assert_eq!(wf.state(), &AnalysisState::Idle);
    assert!(wf.upload().is_none());
}

/// Dropping the workflow mid-analysis must not hang or panic.
#[test]
fn drop_during_analysis_is_clean() {
    let mut wf = AnalysisWorkflow::with_source(
        AnalysisProfile::Guided,
        Duration::from_secs(30),
        SeededRandom::new(4),
    );
    wf.submit_file(png("a.png")).unwrap();
    let started = Instant::now();
    drop(wf);
    assert!(started.elapsed() < Duration::from_secs(1));
}

/// The two-step flow: select, then analyse.
#[test]
fn guided_flow_select_then_start() {
    let mut wf = AnalysisWorkflow::with_source(AnalysisProfile::Guided, SHORT, SeededRandom::new(5));
    wf.set_condition(Some("tuberculosis"));
    wf.select_file(png("tb.png")).unwrap();
    assert_eq!(wf.state(), &AnalysisState::FileSelected);
    assert_eq!(pump_for(&mut wf, Duration::from_millis(60)), 0);

    wf.start_analysis().unwrap();
    pump_until_settled(&mut wf);
    assert!(matches!(wf.state(), AnalysisState::Completed(_)));
    assert_eq!(wf.condition(), Some("tuberculosis"));
}

/// Static text is identical on every run; only the numbers vary.
#[test]
fn static_content_repeats() {
    let mut wf = AnalysisWorkflow::with_source(AnalysisProfile::Guided, SHORT, SeededRandom::new(6));
    let mut seen = Vec::new();
    for i in 0..3 {
        wf.submit_file(png(&format!("{i}.png"))).unwrap();
        pump_until_settled(&mut wf);
        seen.push(wf.result().unwrap().clone());
    }
    for r in &seen[1..] {
        assert_eq!(r.recommendations, seen[0].recommendations);
        assert_eq!(r.technical_details, seen[0].technical_details);
    }
    assert_eq!(seen[0].technical_details.analysis_time, "2.3 seconds");
}

/// Uploads described from disk flow through the same path.
#[test]
fn upload_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("film.jpeg");
    let bad = dir.path().join("notes.txt");
    fs::write(&good, vec![0u8; 2_000]).unwrap();
    fs::write(&bad, b"not an x-ray").unwrap();

    let mut wf = AnalysisWorkflow::with_source(AnalysisProfile::DropZone, SHORT, SeededRandom::new(7));
    assert!(wf.submit_file(UploadedImage::from_path(&bad).unwrap()).is_err());
    assert_eq!(wf.state(), &AnalysisState::Idle);

    wf.submit_file(UploadedImage::from_path(&good).unwrap()).unwrap();
    pump_until_settled(&mut wf);
    assert_eq!(wf.upload().map(|u| u.size), Some(2_000));
    assert!(wf.result().is_some());
}

/// Settings drive the delay and seed the source.
#[test]
fn workflow_from_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lungai.json");
    fs::write(
        &path,
        r#"{ "profile": "drop_zone", "delay_override_ms": 10, "random_seed": 42 }"#,
    )
    .unwrap();
    let settings = Settings::load(&path).unwrap();

    let run = || {
        let mut wf = AnalysisWorkflow::from_settings(&settings);
        assert_eq!(wf.delay(), Duration::from_millis(10));
        assert_eq!(wf.profile(), AnalysisProfile::DropZone);
        wf.submit_file(png("a.png")).unwrap();
        pump_until_settled(&mut wf);
        wf.result().unwrap().clone()
    };
    assert_eq!(run(), run());
}

// ── Catalog lookups ──────────────────────────────────────────────────────────

#[test]
fn catalog_filter_by_symptom_substring() {
    let cough: Vec<_> = catalog::filter("Cough").iter().map(|d| d.id).collect();
    assert_eq!(
        cough,
        vec!["pneumonia", "lung-cancer", "tuberculosis", "covid-19", "asthma", "copd"]
    );
    let fever: Vec<_> = catalog::filter("fever").iter().map(|d| d.id).collect();
    assert_eq!(fever, vec!["pneumonia", "covid-19"]);
    assert_eq!(catalog::filter("").len(), catalog::all().len());
}
