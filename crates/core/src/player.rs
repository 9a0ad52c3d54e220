//! Player kinematics - the discrete jump arc
//!
//! The player never moves horizontally. A jump is a fixed arc of
//! `distance` ticks: the first `distance / 2` ticks rise by `step_size` each,
//! the rest fall by the same amount, and the jump ends once the step counter
//! reaches `distance - 1`.
//!
//! ```text
//! step:    0  1  2  3  4  5  6  7  8  9
//! y after: 1  2  3  4  5  4  3  2  1  0     (distance 11, height 5)
//! ```

use crate::config::JumpArc;
use crate::types::CellKind;

/// Vertical state of the player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Offset above the base row in rows (fractional while airborne)
    pub y_pos: f32,
    /// Steps taken in the current jump
    pub step: u32,
    /// `step` as it was before the last advance (selects the trail sprite)
    pub prev_step: u32,
    /// +1 rising, -1 falling, 0 before the first jump
    pub direction: i8,
    pub jumping: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            y_pos: 0.0,
            step: 0,
            prev_step: 0,
            direction: 0,
            jumping: false,
        }
    }

    /// Begin a jump. Returns false (and changes nothing) when already airborne.
    pub fn start_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        true
    }

    /// Advance the arc by one tick.
    ///
    /// Returns true on the tick the player lands.
    pub fn advance(&mut self, arc: &JumpArc) -> bool {
        self.prev_step = self.step;

        if !self.jumping {
            return false;
        }

        self.direction = if self.step < arc.ascend_steps() { 1 } else { -1 };
        self.y_pos += arc.step_size() * f32::from(self.direction);
        self.step += 1;

        if self.step == arc.landing_step() {
            self.step = 0;
            self.y_pos = 0.0;
            self.jumping = false;
            return true;
        }
        false
    }

    /// Whole rows above the base row (fraction truncated)
    pub fn row_offset(&self) -> u16 {
        self.y_pos.max(0.0) as u16
    }

    /// Sprite left behind when the head scrolls out of the player column.
    pub fn trailing_cell(&self, arc: &JumpArc) -> CellKind {
        let apex = arc.ascend_steps();
        if self.prev_step == 0 && self.step == 0 {
            CellKind::PlayerForward
        } else if self.prev_step < apex {
            CellKind::PlayerAscending
        } else if self.prev_step == apex {
            CellKind::PlayerJumpTop
        } else {
            CellKind::PlayerDescending
        }
    }
}
