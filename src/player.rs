// ── Player ──────────────────────────────────────────────────────────────────

use crate::config;
use crate::sprite::Rect;

/// The bird. Gravity and jump are fixed per-tick displacements; velocity is
/// not accumulated between ticks. `velocity_y` records the net displacement
/// applied this tick (negative while ascending), which the orchestrator uses
/// to edge-trigger the flap sound.
pub struct Player {
    pub rect: Rect,
    pub velocity_y: f64,
    animation_index: f64,
    frame_count: usize,
}

impl Player {
    pub fn spawn() -> Player {
        Player {
            rect: Rect::from_center(
                config::PLAYER_SPAWN_X,
                config::PLAYER_SPAWN_Y,
                config::PLAYER_W,
                config::PLAYER_H,
            ),
            velocity_y: 0.0,
            animation_index: 0.0,
            frame_count: config::PLAYER_FRAMES,
        }
    }

    /// Applies the upward displacement. Fires every tick the key is held;
    /// there is deliberately no edge detection.
    pub fn jump(&mut self, held: bool) {
        self.velocity_y = 0.0;
        if held {
            self.rect.y += config::JUMP;
            self.velocity_y += config::JUMP;
        }
    }

    fn apply_gravity(&mut self) {
        self.rect.y += config::GRAVITY;
        self.velocity_y += config::GRAVITY;
    }

    /// Advances the wing cycle by half a frame, so each sprite frame is
    /// shown for two ticks.
    fn update_animation(&mut self) {
        self.animation_index += 0.5;
        if self.animation_index >= self.frame_count as f64 {
            self.animation_index -= self.frame_count as f64;
        }
    }

    /// One simulation step, called after `jump` each tick. Never clamps:
    /// leaving the playfield is the boundary checker's call.
    pub fn update(&mut self) {
        self.apply_gravity();
        self.update_animation();
    }

    /// Sprite frame to display.
    pub fn frame(&self) -> usize {
        self.animation_index as usize
    }

    /// True on ticks whose net displacement points up.
    pub fn rising(&self) -> bool {
        self.velocity_y < 0.0
    }
}
