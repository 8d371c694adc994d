// ── Game tuning ─────────────────────────────────────────────────────────────
//
// All simulation runs in a fixed logical playfield of WINDOW_W x WINDOW_H
// pixels; the presenter scales that to whatever terminal it gets. Movement
// constants are displacements per tick, not accelerations.

pub const WINDOW_W: f64 = 1200.0;
pub const WINDOW_H: f64 = 900.0;

pub const TARGET_FPS: u32 = 60;

/// Horizontal scroll speed in pixels per tick. Drives pipe movement and,
/// through the spawn accumulator, the spawn cadence.
pub const SPEED: f64 = 15.0;

/// Downward displacement added every tick.
pub const GRAVITY: f64 = 3.0;

/// Upward displacement added every tick the jump key is held.
pub const JUMP: f64 = -15.0;

pub const PLAYER_W: f64 = 50.0;
pub const PLAYER_H: f64 = 36.0;
pub const PLAYER_FRAMES: usize = 3;

/// Player spawn point (rect center).
pub const PLAYER_SPAWN_X: f64 = WINDOW_W * 0.2;
pub const PLAYER_SPAWN_Y: f64 = WINDOW_H / 2.0;

pub const PIPE_W: f64 = 50.0;
/// Pipe height before the per-pair random offset is added.
pub const BASE_PIPE_H: f64 = WINDOW_H / 3.0;
/// Inclusive range the pair gap offset is drawn from.
pub const GAP_OFFSET_MIN: i32 = -50;
pub const GAP_OFFSET_MAX: i32 = 60;
/// Scrolled distance between consecutive pair spawns.
pub const DIST_BETWEEN_PIPES: f64 = 700.0;

pub const GROUND_H: f64 = WINDOW_H * 0.15;
/// Top edge of the ground band; the playable sky ends here.
pub const GROUND_TOP: f64 = WINDOW_H - GROUND_H;

pub const DIGIT_H: f64 = 50.0;
pub const SCORE_X: f64 = WINDOW_W / 2.0;
pub const SCORE_Y: f64 = WINDOW_H * 0.2;
