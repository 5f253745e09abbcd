//! Proof artifacts and the sub-phase projection derived from them.
//!
//! Laundry processing has no status field of its own. Staff record a photo at each
//! step, and [`SubPhase::infer`] reads the phase off the set of recorded kinds.

use crate::model::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofKind {
    /// Bag taken in at the laundry.
    Received,
    /// Washing finished.
    Processed,
    /// Packed and handed back to the courier.
    Ready,
}

impl Display for ProofKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProofKind::Received => "received",
            ProofKind::Processed => "processed",
            ProofKind::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// A staged photo record. Append-only: artifacts are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofArtifact {
    pub kind: ProofKind,
    /// Opaque reference to the stored photo.
    pub content_ref: String,
    pub note: Option<String>,
    pub recorded_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// A photo submitted with a laundry step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofUpload {
    pub content_ref: String,
    pub note: Option<String>,
    pub recorded_by: Option<UserId>,
}

impl ProofUpload {
    pub fn new(content_ref: impl Into<String>) -> Self {
        Self {
            content_ref: content_ref.into(),
            note: None,
            recorded_by: None,
        }
    }

    pub fn into_artifact(self, kind: ProofKind, created_at: DateTime<Utc>) -> ProofArtifact {
        ProofArtifact {
            kind,
            content_ref: self.content_ref,
            note: self.note,
            recorded_by: self.recorded_by,
            created_at,
        }
    }
}

/// Fine-grained processing phase of an `InProgress` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubPhase {
    AwaitingReceipt,
    Washing,
    Washed,
    Packed,
}

impl SubPhase {
    /// Projects a set of recorded proof kinds onto a phase.
    ///
    /// Kinds form a chain `Received -> Processed -> Ready`; a kind only counts when its
    /// predecessor is present too. Duplicates and recording order are irrelevant.
    pub fn infer<I>(kinds: I) -> SubPhase
    where
        I: IntoIterator<Item = ProofKind>,
    {
        let (mut received, mut processed, mut ready) = (false, false, false);
        for kind in kinds {
            match kind {
                ProofKind::Received => received = true,
                ProofKind::Processed => processed = true,
                ProofKind::Ready => ready = true,
            }
        }

        match (received, processed, ready) {
            (false, _, _) => SubPhase::AwaitingReceipt,
            (true, false, _) => SubPhase::Washing,
            (true, true, false) => SubPhase::Washed,
            (true, true, true) => SubPhase::Packed,
        }
    }
}

impl Display for SubPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubPhase::AwaitingReceipt => "awaiting receipt",
            SubPhase::Washing => "washing",
            SubPhase::Washed => "washed",
            SubPhase::Packed => "packed",
        };
        f.write_str(name)
    }
}
