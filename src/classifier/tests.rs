//! Unit tests for the simulated classifier, run on tokio's paused clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;

use super::{CANNED_LABEL, CannedClassifier, Classifier, ClassifierSession, ClassifierState};
use crate::models::UploadedFile;

const DELAY: Duration = Duration::from_millis(1000);

/// Labels a batch after its first file so tests can tell timers apart.
struct FirstNameClassifier;

impl Classifier for FirstNameClassifier {
    fn classify(&self, files: &[UploadedFile]) -> String {
        files
            .first()
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "empty".to_string())
    }
}

/// Counts how often it was asked to classify.
#[derive(Default)]
struct CountingClassifier {
    calls: AtomicUsize,
}

impl Classifier for CountingClassifier {
    fn classify(&self, _files: &[UploadedFile]) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        CANNED_LABEL.to_string()
    }
}

fn canned_session() -> ClassifierSession {
    ClassifierSession::new(Handle::current(), Arc::new(CannedClassifier), DELAY)
}

fn files(names: &[&str]) -> Vec<UploadedFile> {
    names.iter().map(|n| UploadedFile::named(*n)).collect()
}

/// Advance the paused clock and let woken timer tasks run.
async fn advance(ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[test]
fn test_canned_classifier_ignores_input() {
    let classifier = CannedClassifier;
    assert_eq!(classifier.classify(&[]), CANNED_LABEL);
    assert_eq!(classifier.classify(&files(&["report.pdf", "cat.gif"])), CANNED_LABEL);
}

#[tokio::test(start_paused = true)]
async fn test_new_session_is_idle() {
    let mut session = canned_session();
    assert_eq!(session.state(), ClassifierState::Idle);
    assert!(session.files().is_empty());
    assert!(session.result().is_none());
    assert!(!session.poll());
}

#[tokio::test(start_paused = true)]
async fn test_single_bottle_scenario() {
    let mut session = canned_session();
    session.drop_files(vec![UploadedFile::from_path("bottle.png")]);

    assert_eq!(session.state(), ClassifierState::AwaitingResult);
    assert_eq!(session.files().len(), 1);
    assert_eq!(session.files()[0].name, "bottle.png");

    advance(1000).await;
    assert!(session.poll());

    assert_eq!(session.files().len(), 1);
    assert_eq!(session.result(), Some(CANNED_LABEL));
    assert_eq!(session.state(), ClassifierState::Resolved);
}

#[tokio::test(start_paused = true)]
async fn test_result_empty_until_delay_elapses() {
    let mut session = canned_session();
    session.drop_files(files(&["bottle.png"]));

    advance(999).await;
    assert!(!session.poll());
    assert!(session.result().is_none());
    assert_eq!(session.state(), ClassifierState::AwaitingResult);

    advance(1).await;
    assert!(session.poll());
    assert_eq!(session.result(), Some(CANNED_LABEL));
}

#[tokio::test(start_paused = true)]
async fn test_drops_accumulate_without_dedup() {
    let mut session = canned_session();

    session.drop_files(files(&["a.png", "b.png"]));
    session.drop_files(files(&["a.png"]));
    session.drop_files(files(&["c.jpg", "d.jpg", "e.jpg"]));

    let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.png", "a.png", "c.jpg", "d.jpg", "e.jpg"]);
    assert_eq!(session.pending(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_empty_drop_still_schedules_result() {
    let mut session = canned_session();
    session.drop_files(Vec::new());

    assert!(session.files().is_empty());
    assert_eq!(session.state(), ClassifierState::AwaitingResult);

    advance(1000).await;
    session.poll();
    assert_eq!(session.result(), Some(CANNED_LABEL));
}

#[tokio::test(start_paused = true)]
async fn test_result_independent_of_file_type() {
    let mut session = canned_session();
    session.drop_files(files(&["notes.txt", "archive.zip"]));

    advance(1000).await;
    session.poll();
    assert_eq!(session.result(), Some(CANNED_LABEL));
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_drops_last_timer_wins() {
    let mut session = ClassifierSession::new(Handle::current(), Arc::new(FirstNameClassifier), DELAY);

    session.drop_files(files(&["first.png"]));
    advance(500).await;
    session.drop_files(files(&["second.png"]));
    assert_eq!(session.pending(), 2);

    // First timer fires; second is still pending.
    advance(500).await;
    assert!(session.poll());
    assert_eq!(session.result(), Some("first.png"));
    assert_eq!(session.state(), ClassifierState::AwaitingResult);
    assert_eq!(session.pending(), 1);

    advance(500).await;
    assert!(session.poll());
    assert_eq!(session.result(), Some("second.png"));
    assert_eq!(session.state(), ClassifierState::Resolved);
    assert_eq!(session.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_drop_after_resolved_awaits_again() {
    let mut session = ClassifierSession::new(Handle::current(), Arc::new(FirstNameClassifier), DELAY);

    session.drop_files(files(&["first.png"]));
    advance(1000).await;
    session.poll();
    assert_eq!(session.state(), ClassifierState::Resolved);

    session.drop_files(files(&["second.png"]));
    assert_eq!(session.state(), ClassifierState::AwaitingResult);
    // Previous result stays visible until the new timer fires.
    assert_eq!(session.result(), Some("first.png"));

    advance(1000).await;
    session.poll();
    assert_eq!(session.result(), Some("second.png"));
    assert_eq!(session.state(), ClassifierState::Resolved);
}

#[tokio::test(start_paused = true)]
async fn test_unmount_aborts_pending_timers() {
    let classifier = Arc::new(CountingClassifier::default());
    let mut session = ClassifierSession::new(Handle::current(), classifier.clone(), DELAY);

    session.drop_files(files(&["bottle.png"]));
    session.drop_files(files(&["can.png"]));
    advance(400).await;
    drop(session);

    advance(2000).await;
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_preview_uris_unique_across_sessions() {
    let bytes: Arc<[u8]> = Arc::from(vec![0x89, b'P', b'N', b'G']);

    let mut first = canned_session();
    first.drop_files(vec![UploadedFile::from_bytes("bottle.png", bytes.clone())]);
    let first_uris = first.preview_uris();
    drop(first);

    let mut second = canned_session();
    second.drop_files(vec![
        UploadedFile::from_bytes("bottle.png", bytes),
        UploadedFile::named("notes.txt"),
    ]);
    let second_uris = second.preview_uris();

    assert_eq!(first_uris.len(), 1);
    assert_eq!(second_uris.len(), 1);
    assert_ne!(first_uris, second_uris);
}
