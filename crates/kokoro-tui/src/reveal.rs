//! Character-by-character reveal of bot lines.
//!
//! Each line gets its own task that sleeps for the initial delay and then
//! emits one [`RevealStep`] per character. Tasks are keyed by line id; the
//! event loop applies the steps and never waits on them.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use kokoro_proto::config::RevealConfig;

/// Line `id` now shows its first `shown` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub id: u64,
    pub shown: usize,
}

pub struct RevealScheduler {
    tasks: HashMap<u64, JoinHandle<()>>,
    initial_delay: Duration,
    interval: Duration,
}

impl RevealScheduler {
    pub fn new(config: &RevealConfig) -> Self {
        Self::with_timing(config.initial_delay(), config.char_interval())
    }

    pub fn with_timing(initial_delay: Duration, interval: Duration) -> Self {
        Self {
            tasks: HashMap::new(),
            initial_delay,
            interval,
        }
    }

    /// Start revealing `len` characters of line `id`. A reveal already
    /// running for the same id is aborted first.
    pub fn schedule<M>(&mut self, id: u64, len: usize, tx: mpsc::Sender<M>)
    where
        M: From<RevealStep> + Send + 'static,
    {
        self.cancel(id);

        let initial_delay = self.initial_delay;
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(initial_delay).await;
            for shown in 1..=len {
                if tx.send(RevealStep { id, shown }.into()).await.is_err() {
                    return;
                }
                if shown < len {
                    tokio::time::sleep(interval).await;
                }
            }
        });
        trace!("reveal: scheduled line {} ({} chars)", id, len);
        self.tasks.insert(id, handle);
    }

    pub fn cancel(&mut self, id: u64) {
        if let Some(stale) = self.tasks.remove(&id) {
            stale.abort();
        }
    }

    /// Forget a finished reveal.
    pub fn finish(&mut self, id: u64) {
        self.tasks.remove(&id);
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    pub fn active(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for RevealScheduler {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> RevealScheduler {
        RevealScheduler::with_timing(Duration::from_millis(1), Duration::from_millis(1))
    }

    /// No further steps: either nothing arrives or every sender is gone.
    async fn quiet(rx: &mut mpsc::Receiver<RevealStep>) -> bool {
        matches!(
            tokio::time::timeout(Duration::from_millis(150), rx.recv()).await,
            Err(_) | Ok(None)
        )
    }

    #[tokio::test]
    async fn test_emits_one_step_per_char() {
        let (tx, mut rx) = mpsc::channel::<RevealStep>(16);
        let mut reveal = fast();
        reveal.schedule(3, 4, tx);

        let mut shown = Vec::new();
        for _ in 0..4 {
            let step = rx.recv().await.unwrap();
            assert_eq!(step.id, 3);
            shown.push(step.shown);
        }
        assert_eq!(shown, vec![1, 2, 3, 4]);
        assert!(quiet(&mut rx).await);
    }

    #[tokio::test]
    async fn test_reschedule_aborts_stale_task() {
        let (tx, mut rx) = mpsc::channel::<RevealStep>(16);
        let mut reveal =
            RevealScheduler::with_timing(Duration::from_millis(50), Duration::from_millis(1));
        reveal.schedule(1, 5, tx.clone());
        reveal.schedule(1, 2, tx);
        assert_eq!(reveal.active(), 1);

        assert_eq!(rx.recv().await, Some(RevealStep { id: 1, shown: 1 }));
        assert_eq!(rx.recv().await, Some(RevealStep { id: 1, shown: 2 }));
        assert!(quiet(&mut rx).await);
    }

    #[tokio::test]
    async fn test_independent_lines_overlap() {
        let (tx, mut rx) = mpsc::channel::<RevealStep>(16);
        let mut reveal = fast();
        reveal.schedule(1, 3, tx.clone());
        reveal.schedule(2, 3, tx);
        assert_eq!(reveal.active(), 2);

        let mut finals = Vec::new();
        for _ in 0..6 {
            let step = rx.recv().await.unwrap();
            if step.shown == 3 {
                finals.push(step.id);
            }
        }
        finals.sort();
        assert_eq!(finals, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_abort_all_silences_everything() {
        let (tx, mut rx) = mpsc::channel::<RevealStep>(16);
        let mut reveal =
            RevealScheduler::with_timing(Duration::from_millis(50), Duration::from_millis(1));
        reveal.schedule(1, 3, tx.clone());
        reveal.schedule(2, 3, tx);
        reveal.abort_all();
        assert_eq!(reveal.active(), 0);
        assert!(quiet(&mut rx).await);
    }
}
