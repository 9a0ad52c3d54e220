//! Read-only view of the internal game state for the debug overlay.

use crate::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugSnapshot {
    pub score: u32,
    pub y_pos: f32,
    pub step: u32,
    pub prev_step: u32,
    pub direction: i8,
    pub colliding: bool,
    pub obstacle_distance: u32,
}

impl DebugSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let player = state.player();
        Self {
            score: state.score(),
            y_pos: player.y_pos,
            step: player.step,
            prev_step: player.prev_step,
            direction: player.direction,
            colliding: state.colliding(),
            obstacle_distance: state.obstacles().distance(),
        }
    }

    /// One `label: value` line per field.
    pub fn lines(&self) -> [String; 7] {
        [
            format!("score: {}", self.score),
            format!("y: {:.2}", self.y_pos),
            format!("step: {}", self.step),
            format!("prev step: {}", self.prev_step),
            format!("direction: {}", self.direction),
            format!("colliding: {}", self.colliding),
            format!("obstacle gap: {}", self.obstacle_distance),
        ]
    }
}
