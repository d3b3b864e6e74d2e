use crate::catalog::Entry;
use crate::ids::EntryId;

use super::SnapshotError;

/// Ready-to-render detail: an entry and one description per ability.
///
/// `descriptions[i]` belongs to `entry.abilities[i]`. The constructor is the
/// only way in, so a snapshot can never hold a partial description set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSnapshot {
    entry: Entry,
    descriptions: Vec<String>,
}

impl DetailSnapshot {
    pub fn new(entry: Entry, descriptions: Vec<String>) -> Result<Self, SnapshotError> {
        if entry.abilities.len() != descriptions.len() {
            return Err(SnapshotError::MisalignedDescriptions {
                abilities: entry.abilities.len(),
                descriptions: descriptions.len(),
            });
        }
        Ok(Self {
            entry,
            descriptions,
        })
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// `(ability name, description)` pairs in ability order.
    pub fn abilities_with_descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entry
            .abilities
            .iter()
            .zip(self.descriptions.iter())
            .map(|(ability, description)| (ability.name.as_str(), description.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading {
        id: EntryId,
    },
    Ready(DetailSnapshot),
    Failed {
        id: EntryId,
        message: String,
    },
}

/// Identifies one `load` call against a [`DetailState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub id: EntryId,
    pub generation: u64,
}

/// Detail state with a generation guard against late results.
///
/// 带代次保护的详情状态：过期结果会被丢弃。
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    phase: DetailPhase,
    generation: u64,
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn snapshot(&self) -> Option<&DetailSnapshot> {
        match &self.phase {
            DetailPhase::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Start loading `id`, discarding whatever was there before.
    pub fn begin(&mut self, id: EntryId) -> DetailTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = DetailPhase::Loading { id: id.clone() };
        DetailTicket {
            id,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &DetailTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Returns `false` and leaves the state alone if the ticket is stale.
    pub fn finish(&mut self, ticket: &DetailTicket, snapshot: DetailSnapshot) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = DetailPhase::Ready(snapshot);
        true
    }

    pub fn fail(&mut self, ticket: &DetailTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = DetailPhase::Failed {
            id: ticket.id.clone(),
            message: message.into(),
        };
        true
    }

    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = DetailPhase::Idle;
    }
}
