//! Registry events
//!
//! Every accepted state change is recorded in an append-only log. Rejected
//! calls leave no trace. The log is kept in memory only and is cleared when
//! the registry is reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BlockHeight, Principal, RegistryEventId};

/// Significant changes to registry state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A principal registered
    Registered {
        principal: Principal,
        height: BlockHeight,
    },

    /// A claim was paid
    Claimed {
        principal: Principal,
        height: BlockHeight,
        amount: u64,
    },

    /// Claims were paused or resumed
    PauseChanged { paused: bool },

    /// The simulated chain moved to a new height
    BlockMoved { from: BlockHeight, to: BlockHeight },

    AdminChanged { admin: Principal },

    TreasuryChanged { treasury: Principal },
}

impl RegistryEvent {
    /// Returns the principal this event concerns, if any
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            RegistryEvent::Registered { principal, .. }
            | RegistryEvent::Claimed { principal, .. } => Some(principal),
            _ => None,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::Registered { .. } => "Registered",
            RegistryEvent::Claimed { .. } => "Claimed",
            RegistryEvent::PauseChanged { .. } => "PauseChanged",
            RegistryEvent::BlockMoved { .. } => "BlockMoved",
            RegistryEvent::AdminChanged { .. } => "AdminChanged",
            RegistryEvent::TreasuryChanged { .. } => "TreasuryChanged",
        }
    }
}

/// An event together with when it was recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub id: RegistryEventId,
    pub event: RegistryEvent,
    pub recorded_at: DateTime<Utc>,
}

impl RecordedEvent {
    pub fn new(event: RegistryEvent) -> Self {
        Self {
            id: RegistryEventId::new_v7(),
            event,
            recorded_at: Utc::now(),
        }
    }
}
