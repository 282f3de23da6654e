//! The simulated-analysis timer.
//!
//! Each submission gets one short-lived background thread that waits on
//! either its cancel channel or the delay, whichever comes first. When the
//! delay wins it draws a result and posts it, tagged with the submission id,
//! to the workflow's message channel.
use crate::analysis::{synthesize, AnalysisProfile, AnalysisResult, RandomSource};

use crossbeam_channel::{after, bounded, select, Sender};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// The random source, shared between the workflow and its timer threads.
pub type SharedSource = Arc<Mutex<Box<dyn RandomSource>>>;

/// Monotonically increasing tag of one `start_analysis` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Messages sent from timer threads to the workflow.
#[derive(Debug)]
pub enum WorkflowMessage {
    /// The delay for submission `id` elapsed and a result was drawn.
    Completed {
        id: SubmissionId,
        result: AnalysisResult,
    },
}

/// Handle to a scheduled analysis.
///
/// Dropping the handle cancels the timer: the cancel sender disconnects and
/// the thread exits without drawing a result.
pub struct PendingAnalysis {
    pub id: SubmissionId,
    cancel_tx: Option<Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PendingAnalysis {
    /// Stop the timer. Idempotent.
    pub fn cancel(&mut self) {
        if self.cancel_tx.take().is_some() {
            debug!("Analysis {} cancelled", self.id);
        }
    }

    /// Whether the timer thread has exited (fired or cancelled).
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for PendingAnalysis {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule a result for submission `id` after `delay`.
///
/// Fails only when the OS cannot spawn the timer thread.
pub fn schedule(
    id: SubmissionId,
    profile: AnalysisProfile,
    delay: Duration,
    source: SharedSource,
    tx: Sender<WorkflowMessage>,
) -> std::io::Result<PendingAnalysis> {
    let (cancel_tx, cancel_rx) = bounded::<()>(0);

    let thread = thread::Builder::new()
        .name(format!("lungai-analysis-{}", id.0))
        .spawn(move || {
            select! {
                // Never sent on; a disconnect is the cancel signal.
                recv(cancel_rx) -> _ => {
                    debug!("Timer for analysis {} stopped before firing", id);
                }
                recv(after(delay)) -> _ => {
                    let result = {
                        let mut src = source.lock();
                        synthesize(profile, &mut **src)
                    };
                    debug!(
                        "Timer for analysis {} fired: confidence {}%, likelihood {}%",
                        id, result.confidence, result.likelihood
                    );
                    // The workflow may already be gone; nothing to report to then.
                    let _ = tx.send(WorkflowMessage::Completed { id, result });
                }
            }
        })?;

    Ok(PendingAnalysis {
        id,
        cancel_tx: Some(cancel_tx),
        thread: Some(thread),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScriptedRandom;
    use crossbeam_channel::unbounded;
    use std::time::Instant;

    fn scripted(values: &[f64]) -> SharedSource {
        Arc::new(Mutex::new(Box::new(ScriptedRandom::new(values.to_vec()))))
    }

    #[test]
    fn fires_once_with_its_id() {
        let (tx, rx) = unbounded();
        let pending = schedule(
            SubmissionId(3),
            AnalysisProfile::Guided,
            Duration::from_millis(5),
            scripted(&[0.0, 0.0]),
            tx,
        )
        .unwrap();

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            WorkflowMessage::Completed { id, result } => {
                assert_eq!(id, SubmissionId(3));
                assert_eq!(result.confidence, 60);
                assert_eq!(result.likelihood, 40);
            }
        }
        // Sender moved into the thread is dropped when it exits.
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
        drop(pending);
    }

    #[test]
    fn cancel_prevents_firing() {
        let (tx, rx) = unbounded();
        let mut pending = schedule(
            SubmissionId(1),
            AnalysisProfile::Guided,
            Duration::from_secs(30),
            scripted(&[]),
            tx,
        )
        .unwrap();
        pending.cancel();

        let deadline = Instant::now() + Duration::from_secs(5);
        while !pending.is_finished() {
            assert!(Instant::now() < deadline, "timer thread did not exit after cancel");
            thread::sleep(Duration::from_millis(5));
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drop_cancels() {
        let (tx, rx) = unbounded();
        let pending = schedule(
            SubmissionId(9),
            AnalysisProfile::DropZone,
            Duration::from_secs(30),
            scripted(&[]),
            tx,
        )
        .unwrap();
        drop(pending);
        // All senders gone once the thread exits: the channel disconnects
        // instead of ever delivering a result.
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(crossbeam_channel::RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn submission_id_display() {
        assert_eq!(SubmissionId(42).to_string(), "#42");
    }
}
