//! Session dataset store
//!
//! Holds the three dataset slots (overview, product traffic, product
//! sample) for the current session. A slot is replaced wholesale when a
//! new upload for its report kind completes; there is no partial update.
//!
//! Uploads are guarded by a per-slot generation counter: `begin_upload`
//! hands out a ticket, and `commit` installs a dataset only when the
//! ticket is still the newest for its slot. A stale in-flight parse can
//! therefore never overwrite the result of a more recently initiated
//! upload (last-initiated-wins).

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::app::models::{Dataset, ReportKind};

/// Ticket identifying one initiated upload for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    kind: ReportKind,
    serial: u64,
}

impl UploadTicket {
    /// Report kind this ticket was issued for
    pub fn kind(&self) -> ReportKind {
        self.kind
    }
}

#[derive(Debug, Default)]
struct Slot {
    dataset: Option<Dataset>,
    latest_serial: u64,
}

/// In-memory store for the session's dataset slots
#[derive(Debug, Default)]
pub struct DatasetStore {
    slots: HashMap<ReportKind, Slot>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the start of an upload for a slot.
    ///
    /// Invalidates every ticket previously issued for the same kind.
    pub fn begin_upload(&mut self, kind: ReportKind) -> UploadTicket {
        let slot = self.slots.entry(kind).or_default();
        slot.latest_serial += 1;

        UploadTicket {
            kind,
            serial: slot.latest_serial,
        }
    }

    /// Install a dataset if its ticket is still the newest for the slot.
    ///
    /// Returns whether the dataset was installed. A stale commit leaves
    /// the slot unchanged.
    pub fn commit(&mut self, ticket: UploadTicket, dataset: Dataset) -> bool {
        let slot = self.slots.entry(ticket.kind).or_default();

        if ticket.serial != slot.latest_serial {
            warn!(
                "Discarding stale upload for {} slot (ticket {} superseded by {})",
                ticket.kind.label(),
                ticket.serial,
                slot.latest_serial
            );
            return false;
        }

        debug!(
            "Installed {} dataset: {} records",
            ticket.kind.label(),
            dataset.len()
        );
        slot.dataset = Some(dataset);
        true
    }

    /// Dataset currently installed for a kind
    pub fn get(&self, kind: ReportKind) -> Option<&Dataset> {
        self.slots.get(&kind).and_then(|slot| slot.dataset.as_ref())
    }

    /// Overview slot
    pub fn overview(&self) -> Option<&Dataset> {
        self.get(ReportKind::Overview)
    }

    /// Product traffic slot
    pub fn product_traffic(&self) -> Option<&Dataset> {
        self.get(ReportKind::ProductTraffic)
    }

    /// Product sample slot
    pub fn product_sample(&self) -> Option<&Dataset> {
        self.get(ReportKind::ProductSample)
    }

    /// Whether all three known slots are populated
    pub fn is_complete(&self) -> bool {
        self.overview().is_some()
            && self.product_traffic().is_some()
            && self.product_sample().is_some()
    }

    /// Populated datasets in slot order
    pub fn populated(&self) -> Vec<&Dataset> {
        [
            ReportKind::Overview,
            ReportKind::ProductTraffic,
            ReportKind::ProductSample,
        ]
        .iter()
        .filter_map(|kind| self.get(*kind))
        .collect()
    }
}
