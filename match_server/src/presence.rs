//! Slot assignment for the two players of a match

use game_core::Slot;
use proto::Phase;

/// A connected participant and the slot it plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPresence {
    pub user_id: String,
    pub slot: Slot,
}

/// Why a player cannot take a slot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinRejection {
    #[error("match is full")]
    MatchFull,

    #[error("already joined this match")]
    AlreadyJoined,

    #[error("match is not accepting players while {0:?}")]
    NotAccepting(Phase),
}

/// Internal contradiction; the match cannot continue
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("user {0} occupies both slots")]
    DuplicateIdentity(String),

    #[error("phase {phase:?} needs both slots filled, found {occupied}")]
    MissingPlayers { phase: Phase, occupied: usize },
}

/// Bijection between user ids and the two slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presences {
    slots: [Option<String>; 2],
}

impl Presences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.slots.len()
    }

    pub fn slot_of(&self, user_id: &str) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.occupant(*slot) == Some(user_id))
    }

    pub fn occupant(&self, slot: Slot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// Occupied slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = PlayerPresence> + '_ {
        Slot::ALL.into_iter().filter_map(|slot| {
            self.occupant(slot).map(|user_id| PlayerPresence {
                user_id: user_id.to_string(),
                slot,
            })
        })
    }

    /// The slot `user_id` would get, without taking it
    pub fn can_join(&self, user_id: &str, phase: Phase) -> Result<Slot, JoinRejection> {
        if self.slot_of(user_id).is_some() {
            return Err(JoinRejection::AlreadyJoined);
        }
        if !matches!(phase, Phase::Waiting | Phase::Ready) {
            return Err(JoinRejection::NotAccepting(phase));
        }
        Slot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()].is_none())
            .ok_or(JoinRejection::MatchFull)
    }

    /// Assign the lowest free slot
    pub fn join(&mut self, user_id: &str, phase: Phase) -> Result<Slot, JoinRejection> {
        let slot = self.can_join(user_id, phase)?;
        self.slots[slot.index()] = Some(user_id.to_string());
        Ok(slot)
    }

    /// Free the slot held by `user_id`. Unknown ids are a no-op.
    pub fn leave(&mut self, user_id: &str) -> Option<Slot> {
        let slot = self.slot_of(user_id)?;
        self.slots[slot.index()] = None;
        Some(slot)
    }

    pub fn check(&self) -> Result<(), InvariantViolation> {
        match &self.slots {
            [Some(a), Some(b)] if a == b => Err(InvariantViolation::DuplicateIdentity(a.clone())),
            _ => Ok(()),
        }
    }
}
