// ── Pipes ───────────────────────────────────────────────────────────────────
//
// Pipes come in Top/Bottom pairs sharing one random gap offset, so both
// members always have the same height, the same x and the same fate. The
// spawner accumulates scrolled distance rather than counting ticks, which
// keeps spawn spacing and scroll speed driven by the same constant.

use rand::Rng;

use crate::assets::Assets;
use crate::config;
use crate::sprite::{Rect, Sprite};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PipeKind {
    Top,
    Bottom,
}

pub type PipeId = u32;

pub struct Pipe {
    pub id: PipeId,
    pub kind: PipeKind,
    pub rect: Rect,
    pub sprite: Sprite,
}

impl Pipe {
    fn spawn(id: PipeId, kind: PipeKind, gap_offset: i32, assets: &Assets) -> Pipe {
        let h = config::BASE_PIPE_H + gap_offset as f64;
        let mut pipe = Pipe {
            id,
            kind,
            rect: Rect::new(config::WINDOW_W, 0.0, config::PIPE_W, h),
            sprite: assets.pipe(h, kind == PipeKind::Top),
        };
        // top pipes hang from the ceiling; bottom pipes stand on the ground
        if pipe.kind == PipeKind::Bottom {
            pipe.rect.y = config::GROUND_TOP - h;
        }
        pipe
    }
}

pub struct PipeSpawner {
    distance_since_last_spawn: f64,
    next_id: PipeId,
}

impl PipeSpawner {
    pub fn new() -> PipeSpawner {
        PipeSpawner {
            distance_since_last_spawn: 0.0,
            next_id: 0,
        }
    }

    /// Accumulates scrolled distance; once it exceeds the pair spacing,
    /// resets and spawns one Top+Bottom pair at the right screen edge.
    /// Returns the new pair's ids.
    pub fn tick<R: Rng>(
        &mut self,
        pipes: &mut Vec<Pipe>,
        rng: &mut R,
        assets: &Assets,
    ) -> Option<(PipeId, PipeId)> {
        self.distance_since_last_spawn += config::SPEED;
        if self.distance_since_last_spawn <= config::DIST_BETWEEN_PIPES {
            return None;
        }
        self.distance_since_last_spawn = 0.0;

        let gap_offset = rng.random_range(config::GAP_OFFSET_MIN..=config::GAP_OFFSET_MAX);
        let top = Pipe::spawn(self.alloc_id(), PipeKind::Top, gap_offset, assets);
        let bottom = Pipe::spawn(self.alloc_id(), PipeKind::Bottom, gap_offset, assets);
        let ids = (top.id, bottom.id);
        pipes.push(top);
        pipes.push(bottom);
        Some(ids)
    }

    /// Scrolls every active pipe left and drops the ones whose right edge
    /// has left the screen.
    pub fn advance_and_cull(&self, pipes: &mut Vec<Pipe>) {
        for pipe in pipes.iter_mut() {
            pipe.rect.x -= config::SPEED;
        }
        pipes.retain(|p| p.rect.right() >= 0.0);
    }

    fn alloc_id(&mut self) -> PipeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixture() -> (PipeSpawner, Vec<Pipe>, ChaCha8Rng, Assets) {
        (
            PipeSpawner::new(),
            Vec::new(),
            ChaCha8Rng::seed_from_u64(7),
            Assets::build(),
        )
    }

    #[test]
    fn test_spawn_cadence_follows_distance_accumulator() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        let ticks_to_spawn =
            (config::DIST_BETWEEN_PIPES / config::SPEED).floor() as usize + 1;
        for _ in 0..ticks_to_spawn - 1 {
            assert!(spawner.tick(&mut pipes, &mut rng, &assets).is_none());
        }
        assert!(spawner.tick(&mut pipes, &mut rng, &assets).is_some());
        assert_eq!(pipes.len(), 2);
        // the accumulator resets, so the next pair takes just as long
        for _ in 0..ticks_to_spawn - 1 {
            assert!(spawner.tick(&mut pipes, &mut rng, &assets).is_none());
        }
        assert!(spawner.tick(&mut pipes, &mut rng, &assets).is_some());
        assert_eq!(pipes.len(), 4);
    }

    fn spawn_pair(
        spawner: &mut PipeSpawner,
        pipes: &mut Vec<Pipe>,
        rng: &mut ChaCha8Rng,
        assets: &Assets,
    ) -> (PipeId, PipeId) {
        loop {
            if let Some(ids) = spawner.tick(pipes, rng, assets) {
                return ids;
            }
        }
    }

    #[test]
    fn test_pair_shares_offset_and_position() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        spawn_pair(&mut spawner, &mut pipes, &mut rng, &assets);
        let (top, bottom) = (&pipes[0], &pipes[1]);
        assert_eq!(top.kind, PipeKind::Top);
        assert_eq!(bottom.kind, PipeKind::Bottom);
        // shared gap offset means identical heights
        assert_eq!(top.rect.h, bottom.rect.h);
        assert_eq!(top.rect.x, bottom.rect.x);
        assert_eq!(top.rect.x, config::WINDOW_W);
        // anchored to ceiling and ground band respectively
        assert_eq!(top.rect.top(), 0.0);
        assert_eq!(bottom.rect.bottom(), config::GROUND_TOP);
    }

    #[test]
    fn test_offset_stays_in_range() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        for _ in 0..20 {
            spawn_pair(&mut spawner, &mut pipes, &mut rng, &assets);
        }
        for pipe in &pipes {
            let offset = pipe.rect.h - config::BASE_PIPE_H;
            assert!(offset >= config::GAP_OFFSET_MIN as f64);
            assert!(offset <= config::GAP_OFFSET_MAX as f64);
        }
    }

    #[test]
    fn test_advance_moves_all_pipes_in_lockstep() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        spawn_pair(&mut spawner, &mut pipes, &mut rng, &assets);
        let x0 = pipes[0].rect.x;
        spawner.advance_and_cull(&mut pipes);
        assert_eq!(pipes[0].rect.x, x0 - config::SPEED);
        assert_eq!(pipes[1].rect.x, x0 - config::SPEED);
    }

    #[test]
    fn test_cull_waits_for_right_edge() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        spawn_pair(&mut spawner, &mut pipes, &mut rng, &assets);
        // park the pair so its right edge lands exactly on zero next tick
        for pipe in pipes.iter_mut() {
            pipe.rect.x = -config::PIPE_W + config::SPEED;
        }
        spawner.advance_and_cull(&mut pipes);
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].rect.right(), 0.0);
        // one more step pushes the right edge past zero; both go at once
        spawner.advance_and_cull(&mut pipes);
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_pair_culled_on_same_tick_despite_height_difference() {
        let (mut spawner, mut pipes, mut rng, assets) = fixture();
        spawn_pair(&mut spawner, &mut pipes, &mut rng, &assets);
        let mut len = pipes.len();
        while !pipes.is_empty() {
            assert_eq!(pipes[0].rect.x, pipes[1].rect.x);
            spawner.advance_and_cull(&mut pipes);
            let now = pipes.len();
            assert!(now == len || now == len - 2);
            len = now;
        }
    }
}
