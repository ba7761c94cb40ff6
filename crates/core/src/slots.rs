//! Slot bank - the pending pieces a player drags from
//!
//! A fixed number of slots (3 by default), each holding a piece or nothing.
//! Popping clears one slot; when that leaves every slot empty, all of them are
//! refilled at once before the pop returns, so callers never observe an empty bank.

use arrayvec::ArrayVec;

use crate::rng::PieceDrawer;
use crate::types::{PieceKind, DEFAULT_SLOT_COUNT, MAX_SLOTS};

/// Pending-piece slots
#[derive(Debug, Clone)]
pub struct SlotBank {
    slots: ArrayVec<Option<PieceKind>, MAX_SLOTS>,
    drawer: PieceDrawer,
    /// Number of refills so far (the initial fill counts as the first).
    generation: u32,
}

impl SlotBank {
    /// Create a bank of `count` slots (clamped into `1..=MAX_SLOTS`) and fill it
    pub fn new(count: usize, seed: u32) -> Self {
        let count = count.clamp(1, MAX_SLOTS);
        let mut bank = Self {
            slots: (0..count).map(|_| None).collect(),
            drawer: PieceDrawer::new(seed),
            generation: 0,
        };
        bank.refill();
        bank
    }

    /// Overwrite every slot with a freshly drawn piece
    pub fn refill(&mut self) {
        for slot in &mut self.slots {
            *slot = Some(self.drawer.draw());
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Take the piece out of `index`.
    ///
    /// Out-of-range or already-empty indices are a no-op returning None.
    /// Refills the whole bank iff this pop emptied the last slot.
    pub fn pop(&mut self, index: usize) -> Option<PieceKind> {
        let piece = self.slots.get_mut(index)?.take()?;
        if self.is_empty() {
            self.refill();
        }
        Some(piece)
    }

    /// Piece in `index`, if any
    pub fn get(&self, index: usize) -> Option<PieceKind> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<PieceKind>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when every slot is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate over (index, piece) for occupied slots
    pub fn pending(&self) -> impl Iterator<Item = (usize, PieceKind)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|kind| (i, kind)))
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Replace slot contents directly (scripted scenarios and tests).
    /// Extra entries are ignored; missing ones become empty.
    pub fn set_slots(&mut self, pieces: &[Option<PieceKind>]) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = pieces.get(i).copied().flatten();
        }
    }
}

impl Default for SlotBank {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT, 1)
    }
}
