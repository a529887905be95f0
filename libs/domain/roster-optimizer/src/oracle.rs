// [libs/domain/roster-optimizer/src/oracle.rs]
/*!
 * APARATO: CONSTRAINT ORACLE (ESTRATO L2)
 * RESPONSABILIDAD: CONSULTAS DE ELEGIBILIDAD Y FACTIBILIDAD (§4.2)
 *
 * Pure queries against a `DomainModel` plus the current `Assignment`. No
 * query here ever mutates its inputs; `AnnealingEngine` and `RepairPasses`
 * are the only components allowed to mutate an `Assignment`.
 */

use roster_models::{Assignment, Cell, DomainModel, SectorPosition};

/// Maximum sliding-window work-block length before a break is mandatory
/// (§3 soft objectives, §4.7 EnforceBreakRules).
pub const MAX_WORK_BLOCK_SLOTS: usize = 4;

pub struct ConstraintOracle<'a> {
    domain: &'a DomainModel,
}

impl<'a> ConstraintOracle<'a> {
    pub fn new(domain: &'a DomainModel) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &'a DomainModel {
        self.domain
    }

    /// Invariant 2: shift-window eligibility. `start(t) >= VremeStart(c)`,
    /// and an `M`-shift controller is never eligible in the last two
    /// slots of the shift.
    pub fn is_eligible(&self, controller: usize, slot: usize) -> bool {
        let c = self.domain.controller(controller);
        let t = self.domain.slot(slot);
        if t.start < c.shift_start {
            return false;
        }
        if c.shift_type == roster_models::ShiftType::M
            && slot >= self.domain.num_slots().saturating_sub(2)
        {
            return false;
        }
        true
    }

    /// Invariant 3: Flag-S exclusion.
    pub fn has_flag_s(&self, controller: usize, slot: usize) -> bool {
        let c = self.domain.controller(controller);
        let t = self.domain.slot(slot);
        c.has_flag_s_at(t.start)
    }

    /// A controller may be assigned at `slot` iff eligible and not under a
    /// Flag-S restriction there.
    pub fn is_assignable(&self, controller: usize, slot: usize) -> bool {
        self.is_eligible(controller, slot) && !self.has_flag_s(controller, slot)
    }

    /// Invariant 4: `sector_position` must belong to `Req(slot)`.
    pub fn is_valid_sector(&self, sector_position: SectorPosition, slot: usize) -> bool {
        self.domain.requirement(slot).contains(&sector_position)
    }

    /// Invariant 5: would placing `sector_position` at `(controller, slot)`
    /// put a different sector base adjacent (on either side) to a non-break
    /// run it is not separated from by a break?
    pub fn would_break_continuity(
        &self,
        assignment: &Assignment,
        controller: usize,
        slot: usize,
        sector_position: SectorPosition,
    ) -> bool {
        let base = sector_position.base;
        if slot > 0 {
            if let Some(prev_base) = assignment.get(controller, slot - 1).sector_base() {
                if prev_base != base {
                    return true;
                }
            }
        }
        if slot + 1 < assignment.num_slots() {
            if let Some(next_base) = assignment.get(controller, slot + 1).sector_base() {
                if next_base != base {
                    return true;
                }
            }
        }
        false
    }

    /// Invariant 6: would placing a working (non-break) cell for `controller`
    /// at `slot` put an SS controller and a SUP controller in the same slot
    /// together? Regular-workplace controllers never conflict.
    pub fn would_violate_ss_sup(&self, assignment: &Assignment, slot: usize, controller: usize) -> bool {
        let workplace = self.domain.controller(controller).workplace;
        let opposite = match workplace {
            roster_models::OperativeWorkplace::Ss => roster_models::OperativeWorkplace::Sup,
            roster_models::OperativeWorkplace::Sup => roster_models::OperativeWorkplace::Ss,
            roster_models::OperativeWorkplace::Regular => return false,
        };
        assignment
            .working_in_slot(slot)
            .any(|(other, _)| other != controller && self.domain.controller(other).workplace == opposite)
    }

    /// Invariant 6: SS and SUP are mutually exclusive within a slot.
    pub fn ss_and_sup_both_working(&self, assignment: &Assignment, slot: usize) -> bool {
        let mut ss_working = false;
        let mut sup_working = false;
        for (controller, _) in assignment.working_in_slot(slot) {
            match self.domain.controller(controller).workplace {
                roster_models::OperativeWorkplace::Ss => ss_working = true,
                roster_models::OperativeWorkplace::Sup => sup_working = true,
                roster_models::OperativeWorkplace::Regular => {}
            }
        }
        ss_working && sup_working
    }

    /// The length of the contiguous non-break run ending at `slot`
    /// (inclusive) in `assignment`'s row for `controller`, counting
    /// backwards. Returns 0 if `slot` itself is a break.
    pub fn run_length_ending_at(&self, assignment: &Assignment, controller: usize, slot: usize) -> usize {
        if assignment.get(controller, slot).is_break() {
            return 0;
        }
        let mut length = 1;
        let mut cursor = slot;
        while cursor > 0 && !assignment.get(controller, cursor - 1).is_break() {
            cursor -= 1;
            length += 1;
        }
        length
    }

    /// True iff moving `controller` from break to work at `slot` keeps the
    /// resulting contiguous work-block at or under
    /// [`MAX_WORK_BLOCK_SLOTS`].
    pub fn can_run_longer(&self, assignment: &Assignment, controller: usize, slot: usize) -> bool {
        let before = if slot > 0 {
            self.run_length_ending_at(assignment, controller, slot - 1)
        } else {
            0
        };
        let after_run = {
            let mut length = 0;
            let mut cursor = slot + 1;
            while cursor < assignment.num_slots() && !assignment.get(controller, cursor).is_break() {
                length += 1;
                cursor += 1;
            }
            length
        };
        before + 1 + after_run <= MAX_WORK_BLOCK_SLOTS
    }

    /// Is the whole candidate assignment structurally valid, i.e. does it
    /// satisfy Invariants 1, 4, 5 and 6 everywhere (2 and 3 are enforced by
    /// every mutator directly and so are checked too, defensively)?
    pub fn is_valid_solution(&self, assignment: &Assignment) -> bool {
        for slot in 0..assignment.num_slots() {
            let mut seen = std::collections::HashSet::new();
            for (controller, cell) in assignment.working_in_slot(slot) {
                let sp = cell.sector_position().expect("working cell has a sector");
                if !seen.insert(sp) {
                    return false;
                }
                if !self.is_assignable(controller, slot) {
                    return false;
                }
                if !self.is_valid_sector(sp, slot) {
                    return false;
                }
            }
            if self.ss_and_sup_both_working(assignment, slot) {
                return false;
            }
        }
        for controller in 0..assignment.num_controllers() {
            if !self.controller_continuity_holds(assignment, controller) {
                return false;
            }
        }
        true
    }

    fn controller_continuity_holds(&self, assignment: &Assignment, controller: usize) -> bool {
        let mut previous_base = None;
        for cell in assignment.row(controller) {
            match cell.sector_base() {
                Some(base) => {
                    if let Some(prev) = previous_base {
                        if prev != base {
                            // A genuine base change mid-run is invalid; but a
                            // break in between resets `previous_base` to None
                            // below, so this only triggers on adjacent cells.
                            return false;
                        }
                    }
                    previous_base = Some(base);
                }
                None => previous_base = None,
            }
        }
        true
    }
}
