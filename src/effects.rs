use crate::models::Snapshot;
use crate::phrases::Phrase;
use tracing::info;

/// Fire-and-forget reactions to a counter change. Called by whoever drove
/// the change, after the store has finished with it.
pub trait Effects: Send + Sync {
    fn counted(&self, phrase: Phrase, snapshot: &Snapshot);

    fn reset(&self, snapshot: &Snapshot);
}

/// Server-side effects: the pulse and tone play in the browser, so all that
/// is left here is the log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEffects;

impl Effects for LogEffects {
    fn counted(&self, phrase: Phrase, snapshot: &Snapshot) {
        info!(
            phrase = phrase.slug(),
            count = snapshot.count(phrase),
            total = snapshot.total,
            "counted"
        );
    }

    fn reset(&self, snapshot: &Snapshot) {
        info!(total = snapshot.total, "counters reset");
    }
}
