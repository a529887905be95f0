// [libs/domain/roster-models/src/assignment.rs]
//! The assignment grid `A : C x T -> S u {break}` (§3 Assignment, §9 design
//! notes on replacing the degenerate `[|C|, |T|, 1]` cube with a dense
//! `|C|*|T|` table of small enums).

use serde::{Deserialize, Serialize};

use crate::sector::{Position, SectorBaseId, SectorPosition};

/// One cell's state. `Break` is the `111` sentinel; `Working` carries an
/// interned sector base and a position letter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Cell {
    Break,
    Working {
        sector: SectorBaseId,
        position: Position,
    },
}

impl Cell {
    pub fn is_break(self) -> bool {
        matches!(self, Cell::Break)
    }

    pub fn sector_position(self) -> Option<SectorPosition> {
        match self {
            Cell::Break => None,
            Cell::Working { sector, position } => Some(SectorPosition {
                base: sector,
                position,
            }),
        }
    }

    pub fn sector_base(self) -> Option<SectorBaseId> {
        self.sector_position().map(|sp| sp.base)
    }
}

impl From<SectorPosition> for Cell {
    fn from(sp: SectorPosition) -> Self {
        Cell::Working {
            sector: sp.base,
            position: sp.position,
        }
    }
}

/// Dense `|C| x |T|` assignment grid, row-major by controller. Cloning
/// clones the flat backing `Vec`; at realistic sizes (`|C|*|T| <= ~2500`)
/// this is cache-friendly and simpler than a persistent/copy-on-write
/// structure (§9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    num_controllers: usize,
    num_slots: usize,
    cells: Vec<Cell>,
}

impl Assignment {
    pub fn new(num_controllers: usize, num_slots: usize) -> Self {
        Self {
            num_controllers,
            num_slots,
            cells: vec![Cell::Break; num_controllers * num_slots],
        }
    }

    pub fn num_controllers(&self) -> usize {
        self.num_controllers
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    #[inline]
    fn index(&self, controller: usize, slot: usize) -> usize {
        debug_assert!(controller < self.num_controllers);
        debug_assert!(slot < self.num_slots);
        controller * self.num_slots + slot
    }

    #[inline]
    pub fn get(&self, controller: usize, slot: usize) -> Cell {
        self.cells[self.index(controller, slot)]
    }

    #[inline]
    pub fn set(&mut self, controller: usize, slot: usize, cell: Cell) {
        let index = self.index(controller, slot);
        self.cells[index] = cell;
    }

    /// Iterates `(controller, cell)` for every controller working `slot`.
    pub fn working_in_slot(&self, slot: usize) -> impl Iterator<Item = (usize, Cell)> + '_ {
        (0..self.num_controllers)
            .map(move |c| (c, self.get(c, slot)))
            .filter(|(_, cell)| !cell.is_break())
    }

    /// Iterates the cells of one controller's row, in slot order.
    pub fn row(&self, controller: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.num_slots).map(move |t| self.get(controller, t))
    }

    /// Total non-break cells for one controller (workload, §3 soft
    /// objectives).
    pub fn workload(&self, controller: usize) -> usize {
        self.row(controller).filter(|c| !c.is_break()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_break() {
        let grid = Assignment::new(3, 4);
        assert!(grid.get(0, 0).is_break());
        assert_eq!(grid.workload(0), 0);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = Assignment::new(2, 2);
        grid.set(
            1,
            1,
            Cell::Working {
                sector: SectorBaseId(3),
                position: Position::Planner,
            },
        );
        assert_eq!(grid.workload(1), 1);
        assert!(grid.get(0, 1).is_break());
    }
}
