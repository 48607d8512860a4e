//! Resolution cycles over the prioritized source chain.
//!
//! A cycle moves through `Idle -> CheckingRemote -> CheckingSecondary -> Settled`.
//! The static catalog is consulted synchronously before the first suspension point and,
//! on a hit, published provisionally. Every write to the displayed slot is a
//! check-and-write against the cycle token, so a cycle that is no longer active can
//! never overwrite the state of a newer one.

use super::source::{CourseSource, SourceKind};
use crate::domain::catalog::StaticCatalog;
use crate::domain::course::CourseRecord;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    Idle,
    CheckingRemote,
    CheckingSecondary,
    Settled,
}

/// What a cycle writes into the displayed slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Publish {
    Provisional(Arc<CourseRecord>),
    Final {
        record: Arc<CourseRecord>,
        source: SourceKind,
    },
    NotFound,
}

/// The consumer-facing view of the displayed course.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// No identifier has been requested yet (or the view was cleared).
    Idle,
    /// Still resolving; `provisional` holds a static-catalog record when one matched.
    Loading {
        provisional: Option<Arc<CourseRecord>>,
    },
    Resolved {
        record: Arc<CourseRecord>,
        source: SourceKind,
    },
    NotFound,
}

impl DisplayState {
    /// The record to render, provisional or final.
    pub fn record(&self) -> Option<&Arc<CourseRecord>> {
        match self {
            DisplayState::Loading { provisional } => provisional.as_ref(),
            DisplayState::Resolved { record, .. } => Some(record),
            DisplayState::Idle | DisplayState::NotFound => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading { .. })
    }
}

/// The single "currently displayed course" slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySlot {
    pub cycle: u64,
    pub identifier: String,
    pub phase: CyclePhase,
    pub state: DisplayState,
}

impl DisplaySlot {
    fn idle(cycle: u64) -> Self {
        Self {
            cycle,
            identifier: String::new(),
            phase: CyclePhase::Idle,
            state: DisplayState::Idle,
        }
    }
}

/// Terminal outcome of one `resolve` call.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found {
        record: Arc<CourseRecord>,
        source: SourceKind,
    },
    NotFound,
    /// The identifier changed before this cycle finished; nothing was published.
    Superseded,
}

impl Resolution {
    pub fn record(&self) -> Option<&Arc<CourseRecord>> {
        match self {
            Resolution::Found { record, .. } => Some(record),
            Resolution::NotFound | Resolution::Superseded => None,
        }
    }
}

#[derive(Debug, Clone)]
struct CycleToken {
    cycle: u64,
    identifier: String,
}

impl CycleToken {
    fn owns(&self, slot: &DisplaySlot) -> bool {
        slot.cycle == self.cycle && slot.identifier == self.identifier
    }
}

/// Owns the displayed slot and runs resolution cycles against injected sources.
pub struct ResolutionCoordinator {
    catalog: Arc<StaticCatalog>,
    remote: Arc<dyn CourseSource>,
    secondary: Arc<dyn CourseSource>,
    slot: watch::Sender<DisplaySlot>,
}

impl ResolutionCoordinator {
    pub fn new(
        catalog: Arc<StaticCatalog>,
        remote: Arc<dyn CourseSource>,
        secondary: Arc<dyn CourseSource>,
    ) -> Self {
        let (slot, _) = watch::channel(DisplaySlot::idle(0));
        Self {
            catalog,
            remote,
            secondary,
            slot,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplaySlot> {
        self.slot.subscribe()
    }

    pub fn current(&self) -> DisplaySlot {
        self.slot.borrow().clone()
    }

    /// Drops the displayed course (view unmounted). Any in-flight cycle becomes stale.
    pub fn clear(&self) {
        self.slot.send_modify(|slot| {
            *slot = DisplaySlot::idle(slot.cycle + 1);
        });
    }

    /// Runs one resolution cycle for `identifier`, making it the active identifier.
    pub async fn resolve(&self, identifier: &str) -> Resolution {
        let identifier = identifier.trim();
        let token = self.begin(identifier);

        let provisional = self.catalog.find_local(identifier);
        if let Some(record) = &provisional {
            debug!(identifier, cycle = token.cycle, "Static catalog hit; publishing provisional record");
            self.publish(&token, Publish::Provisional(record.clone()));
        }

        let chain: [(CyclePhase, SourceKind, &dyn CourseSource); 2] = [
            (CyclePhase::CheckingRemote, SourceKind::Remote, self.remote.as_ref()),
            (CyclePhase::CheckingSecondary, SourceKind::Secondary, self.secondary.as_ref()),
        ];

        for (phase, kind, source) in chain {
            if !self.enter(&token, phase) {
                debug!(identifier, cycle = token.cycle, "Cycle superseded before {:?}", phase);
                return Resolution::Superseded;
            }
            if let Some(record) = Self::query(source, kind, identifier).await {
                return self.settle(
                    &token,
                    Resolution::Found {
                        record: Arc::new(record),
                        source: kind,
                    },
                );
            }
        }

        let fallback = match provisional {
            Some(record) => Resolution::Found {
                record,
                source: SourceKind::Static,
            },
            None => Resolution::NotFound,
        };
        self.settle(&token, fallback)
    }

    fn begin(&self, identifier: &str) -> CycleToken {
        let mut cycle = 0;
        self.slot.send_modify(|slot| {
            cycle = slot.cycle + 1;
            *slot = DisplaySlot {
                cycle,
                identifier: identifier.to_string(),
                phase: CyclePhase::Idle,
                state: DisplayState::Loading { provisional: None },
            };
        });
        CycleToken {
            cycle,
            identifier: identifier.to_string(),
        }
    }

    /// Moves a live cycle into `phase`. Returns false when the cycle is stale.
    fn enter(&self, token: &CycleToken, phase: CyclePhase) -> bool {
        let mut live = false;
        self.slot.send_if_modified(|slot| {
            live = token.owns(slot) && slot.phase != CyclePhase::Settled;
            if live && slot.phase != phase {
                slot.phase = phase;
                return true;
            }
            false
        });
        live
    }

    /// Writes into the displayed slot if `token` still owns it and has not settled.
    fn publish(&self, token: &CycleToken, publish: Publish) -> bool {
        let applied = self.slot.send_if_modified(|slot| {
            if !token.owns(slot) || slot.phase == CyclePhase::Settled {
                return false;
            }
            match publish {
                Publish::Provisional(record) => {
                    slot.state = DisplayState::Loading {
                        provisional: Some(record),
                    };
                }
                Publish::Final { record, source } => {
                    slot.state = DisplayState::Resolved { record, source };
                    slot.phase = CyclePhase::Settled;
                }
                Publish::NotFound => {
                    slot.state = DisplayState::NotFound;
                    slot.phase = CyclePhase::Settled;
                }
            }
            true
        });
        if !applied {
            debug!(
                identifier = token.identifier.as_str(),
                cycle = token.cycle,
                "Dropping publish from stale cycle"
            );
        }
        applied
    }

    fn settle(&self, token: &CycleToken, resolution: Resolution) -> Resolution {
        let publish = match &resolution {
            Resolution::Found { record, source } => Publish::Final {
                record: record.clone(),
                source: *source,
            },
            Resolution::NotFound => Publish::NotFound,
            Resolution::Superseded => return Resolution::Superseded,
        };
        if !self.publish(token, publish) {
            return Resolution::Superseded;
        }
        match &resolution {
            Resolution::Found { source, .. } => {
                info!(identifier = token.identifier.as_str(), source = %source, "Course resolved")
            }
            _ => info!(identifier = token.identifier.as_str(), "Course not found in any source"),
        }
        resolution
    }

    async fn query(
        source: &dyn CourseSource,
        kind: SourceKind,
        identifier: &str,
    ) -> Option<CourseRecord> {
        match source.fetch(identifier).await {
            Ok(Some(record)) if !record.is_blank() => Some(record),
            Ok(_) => {
                debug!(identifier, source = source.name(), "Miss at {} source", kind);
                None
            }
            Err(e) => {
                warn!(
                    identifier,
                    source = source.name(),
                    error = %e,
                    "{} source failed; falling through",
                    kind
                );
                None
            }
        }
    }
}
