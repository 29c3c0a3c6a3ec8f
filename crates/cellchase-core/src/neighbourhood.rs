//! The 8-connected (Moore) neighbourhood of a cell.
//!
//! Every slot is an explicit `Option<bool>`: `None` means the neighbour
//! would fall outside the board, `Some(alive)` carries its liveness.
//! There is no wraparound.

use crate::direction::Direction;

/// All 8 offsets, in [`Slot`] order: N, S, W, E, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Names one of the eight neighbour slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Slot {
    /// Row - 1.
    North = 0,
    /// Row + 1.
    South = 1,
    /// Col - 1.
    West = 2,
    /// Col + 1.
    East = 3,
    /// Row - 1, col - 1.
    NorthWest = 4,
    /// Row - 1, col + 1.
    NorthEast = 5,
    /// Row + 1, col - 1.
    SouthWest = 6,
    /// Row + 1, col + 1.
    SouthEast = 7,
}

impl Slot {
    /// All slots in offset order.
    pub const ALL: [Slot; 8] = [
        Slot::North,
        Slot::South,
        Slot::West,
        Slot::East,
        Slot::NorthWest,
        Slot::NorthEast,
        Slot::SouthWest,
        Slot::SouthEast,
    ];

    /// `(row_offset, col_offset)` of this slot.
    pub const fn offset(self) -> (i32, i32) {
        MOORE_OFFSETS[self as usize]
    }
}

impl From<Direction> for Slot {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Up => Slot::North,
            Direction::Down => Slot::South,
            Direction::Left => Slot::West,
            Direction::Right => Slot::East,
        }
    }
}

/// Liveness of the up-to-8 cells surrounding a centre cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Neighbourhood {
    slots: [Option<bool>; 8],
}

impl Neighbourhood {
    /// Build from raw slots in [`Slot`] order.
    pub const fn from_slots(slots: [Option<bool>; 8]) -> Self {
        Self { slots }
    }

    /// Liveness of one slot, `None` if off the board.
    pub fn get(&self, slot: Slot) -> Option<bool> {
        self.slots[slot as usize]
    }

    /// Liveness of the cardinal neighbour in `direction`.
    pub fn toward(&self, direction: Direction) -> Option<bool> {
        self.get(Slot::from(direction))
    }

    /// Number of neighbours that exist and are alive.
    pub fn living_count(&self) -> u8 {
        self.slots.iter().filter(|s| **s == Some(true)).count() as u8
    }

    /// Number of neighbours that exist on the board.
    pub fn present_count(&self) -> u8 {
        self.slots.iter().filter(|s| s.is_some()).count() as u8
    }

    /// Iterate `(slot, liveness)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<bool>)> + '_ {
        Slot::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}
