use crate::phrases::{Phrase, PHRASE_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record written to the storage slot on every persist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    pub counts: BTreeMap<&'static str, u64>,
    pub total_count: u64,
    pub last_updated: String,
}

/// Record as read back from the slot. Values stay loosely typed so that one
/// bad entry does not discard the others; fields the store does not use,
/// such as `lastUpdated`, are not read at all.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    #[serde(default)]
    pub counts: Option<BTreeMap<String, serde_json::Value>>,
    /// Older records kept the map under this name.
    #[serde(default)]
    pub counters: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub total_count: Option<serde_json::Value>,
}

impl StoredRecord {
    /// `counts` wins when both maps are present.
    pub fn into_counts(self) -> BTreeMap<String, serde_json::Value> {
        self.counts.or(self.counters).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub slug: String,
    pub shortcut: char,
    pub count: u64,
}

/// Read-only copy of the counter state, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub counts: Vec<PhraseCount>,
    pub total: u64,
}

impl Snapshot {
    pub fn from_counts(counts: &[u64; PHRASE_COUNT], total: u64) -> Self {
        Self {
            counts: Phrase::ALL
                .into_iter()
                .map(|phrase| PhraseCount {
                    phrase: phrase.text().to_string(),
                    slug: phrase.slug().to_string(),
                    shortcut: phrase.shortcut(),
                    count: counts[phrase.index()],
                })
                .collect(),
            total,
        }
    }

    pub fn count(&self, phrase: Phrase) -> u64 {
        self.counts
            .get(phrase.index())
            .map(|entry| entry.count)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct IncrementRequest {
    pub phrase: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountsResponse {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IncrementResponse {
    pub phrase: Option<String>,
    pub count: Option<u64>,
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub reset: bool,
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub saved: bool,
}
