// ── Game state ──────────────────────────────────────────────────────────────
//
// One explicit `GameState` owned by the run loop: created at start, stepped
// once per tick, dropped at shutdown. Two phases only; `Over` is terminal
// and there is no restart.

use rand::Rng;

use crate::assets::Assets;
use crate::collision;
use crate::config;
use crate::pipes::{Pipe, PipeSpawner};
use crate::player::Player;
use crate::render::{DrawCmd, Frame};
use crate::score::ScoreTracker;
use crate::sprite::Rect;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Over,
}

/// What happened this tick, for the orchestrator's side effects (sound).
#[derive(Default, Clone, Copy)]
pub struct TickReport {
    /// Ascent began this tick.
    pub flapped: bool,
    /// The score increased this tick.
    pub scored: bool,
    /// The Running -> Over transition fired this tick.
    pub game_over: bool,
}

pub struct GameState {
    pub player: Player,
    pub pipes: Vec<Pipe>,
    pub phase: Phase,
    spawner: PipeSpawner,
    score: ScoreTracker,
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            player: Player::spawn(),
            pipes: Vec::new(),
            phase: Phase::Running,
            spawner: PipeSpawner::new(),
            score: ScoreTracker::new(),
        }
    }

    pub fn score(&self) -> f64 {
        self.score.value()
    }

    /// One fixed step: input, movement, spawn, scroll, score, collide.
    pub fn tick<R: Rng>(&mut self, jump_held: bool, rng: &mut R, assets: &Assets) -> TickReport {
        if self.phase == Phase::Over {
            return TickReport::default();
        }

        let was_rising = self.player.rising();
        self.player.jump(jump_held);
        self.player.update();

        if let Some((top, bottom)) = self.spawner.tick(&mut self.pipes, rng, assets) {
            self.score.watch(top);
            self.score.watch(bottom);
        }
        self.spawner.advance_and_cull(&mut self.pipes);

        let gained = self.score.on_tick(self.player.rect.left(), &self.pipes);

        let dead = collision::check(&self.player, &self.pipes, assets);
        if dead {
            self.phase = Phase::Over;
        }

        TickReport {
            flapped: self.player.rising() && !was_rising,
            scored: gained > 0.0,
            game_over: dead,
        }
    }

    /// This tick's draw list, back to front. Ground covers pipe stumps, the
    /// score sits on top, and the Over phase dims everything under a score
    /// panel.
    pub fn frame<'a>(&'a self, assets: &'a Assets) -> Frame<'a> {
        let mut cmds = Vec::with_capacity(self.pipes.len() + 8);
        cmds.push(DrawCmd {
            sprite: assets.background(),
            dest: Rect::new(0.0, 0.0, config::WINDOW_W, config::WINDOW_H),
        });
        for pipe in &self.pipes {
            cmds.push(DrawCmd {
                sprite: &pipe.sprite,
                dest: pipe.rect,
            });
        }
        cmds.push(DrawCmd {
            sprite: assets.bird_frame(self.player.frame()),
            dest: self.player.rect,
        });
        cmds.push(DrawCmd {
            sprite: assets.ground(),
            dest: Rect::new(0.0, config::GROUND_TOP, config::WINDOW_W, config::GROUND_H),
        });
        push_number(
            &mut cmds,
            assets,
            self.score.display(),
            config::SCORE_X,
            config::SCORE_Y,
            config::DIGIT_H,
        );

        let over = self.phase == Phase::Over;
        if over {
            let panel = Rect::from_center(
                config::WINDOW_W / 2.0,
                config::WINDOW_H / 2.0,
                330.0,
                180.0,
            );
            cmds.push(DrawCmd {
                sprite: assets.panel(),
                dest: panel,
            });
            push_number(
                &mut cmds,
                assets,
                self.score.display(),
                config::WINDOW_W / 2.0,
                config::WINDOW_H / 2.0 - 30.0,
                60.0,
            );
        }

        Frame { cmds, dim: over }
    }
}

/// Emits a centered run of digit sprites for `n`.
fn push_number<'a>(
    cmds: &mut Vec<DrawCmd<'a>>,
    assets: &'a Assets,
    n: u32,
    cx: f64,
    y: f64,
    digit_h: f64,
) {
    let text = n.to_string();
    let glyph = assets.digit(0);
    let digit_w = digit_h * glyph.width() as f64 / glyph.height() as f64;
    let gap = digit_h * 0.12;
    let advance = digit_w + gap;
    let total = text.len() as f64 * advance - gap;
    let mut x = cx - total / 2.0;
    for ch in text.bytes() {
        cmds.push(DrawCmd {
            sprite: assets.digit(ch - b'0'),
            dest: Rect::new(x, y, digit_w, digit_h),
        });
        x += advance;
    }
}
