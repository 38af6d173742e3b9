//! The counter state: four phrase tallies plus their total, kept durable in
//! a single storage slot.
//!
//! Every mutation is written to the slot before the call returns. Storage
//! trouble never reaches the caller: a bad record loads as all zeros and a
//! rejected write leaves the in-memory state as the source of truth for the
//! rest of the session.

use crate::errors::StoreError;
use crate::models::{PersistedRecord, Snapshot, StoredRecord};
use crate::phrases::{Phrase, PHRASE_COUNT};
use crate::storage::StorageSlot;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, error, warn};

/// Proof that the user answered "yes" to the reset prompt.
#[derive(Debug)]
pub struct ResetConfirmation(());

impl ResetConfirmation {
    pub fn from_answer(confirmed: bool) -> Option<Self> {
        confirmed.then_some(Self(()))
    }
}

pub struct CounterStore {
    counts: [u64; PHRASE_COUNT],
    total: u64,
    slot: Box<dyn StorageSlot>,
    durable: bool,
}

impl CounterStore {
    /// Restores the last saved state from `slot`, falling back to zeros.
    pub fn load(slot: Box<dyn StorageSlot>) -> Self {
        let mut store = Self {
            counts: [0; PHRASE_COUNT],
            total: 0,
            slot,
            durable: true,
        };

        match store.read_record() {
            Ok(Some(record)) => store.restore(record),
            Ok(None) => debug!("no saved counters, starting from zero"),
            Err(err) => error!("{err}; starting from zero"),
        }

        store
    }

    fn read_record(&self) -> Result<Option<StoredRecord>, StoreError> {
        let Some(bytes) = self.slot.read()? else {
            return Ok(None);
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Parse { source })
    }

    fn restore(&mut self, record: StoredRecord) {
        let stored_total = record.total_count.as_ref().and_then(|value| value.as_u64());

        for (key, value) in &record.into_counts() {
            let Some(phrase) = Phrase::from_key(key) else {
                debug!("ignoring unknown phrase key {key:?}");
                continue;
            };
            match value.as_u64() {
                Some(count) => self.counts[phrase.index()] = count,
                None => warn!("ignoring non-numeric count {value} for {key:?}"),
            }
        }

        // The total has to fit in a u64, so trailing counts are capped.
        self.total = 0;
        for phrase in Phrase::ALL {
            let count = &mut self.counts[phrase.index()];
            let room = u64::MAX - self.total;
            if *count > room {
                warn!(phrase = phrase.slug(), stored = *count, capped = room, "count capped");
                *count = room;
            }
            self.total += *count;
        }

        if let Some(stored) = stored_total {
            if stored != self.total {
                warn!(
                    stored,
                    recomputed = self.total,
                    "saved total disagrees with counts, using recomputed total"
                );
            }
        }
    }

    /// Counts one recitation of the phrase named by `key`. Unknown keys are
    /// ignored and return `None`.
    pub fn increment(&mut self, key: &str) -> Option<u64> {
        let phrase = Phrase::from_key(key)?;
        Some(self.increment_phrase(phrase))
    }

    /// Once the total reaches `u64::MAX` further counts are dropped.
    pub fn increment_phrase(&mut self, phrase: Phrase) -> u64 {
        let Some(total) = self.total.checked_add(1) else {
            warn!(phrase = phrase.slug(), "total is saturated, count dropped");
            return self.counts[phrase.index()];
        };
        // count <= total, so this cannot overflow either.
        self.counts[phrase.index()] += 1;
        self.total = total;
        self.persist();
        self.counts[phrase.index()]
    }

    pub fn reset_all(&mut self, _confirmation: ResetConfirmation) {
        self.counts = [0; PHRASE_COUNT];
        self.total = 0;
        self.persist();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_counts(&self.counts, self.total)
    }

    pub fn count(&self, phrase: Phrase) -> u64 {
        self.counts[phrase.index()]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the last write reached the storage slot.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Writes the current state to the slot. A failed write is logged and
    /// otherwise ignored; the return value reports whether it succeeded.
    pub fn persist(&mut self) -> bool {
        self.durable = match self.write_record() {
            Ok(()) => true,
            Err(err) => {
                warn!("{err}; keeping counters in memory only");
                false
            }
        };
        self.durable
    }

    fn write_record(&mut self) -> Result<(), StoreError> {
        let record = PersistedRecord {
            counts: Phrase::ALL
                .into_iter()
                .map(|phrase| (phrase.text(), self.counts[phrase.index()]))
                .collect(),
            total_count: self.total,
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let payload = serde_json::to_vec_pretty(&record)
            .map_err(|source| StoreError::Encode { source })?;
        self.slot.write(&payload)
    }
}
