// ── Scoring ─────────────────────────────────────────────────────────────────
//
// Each spawned pipe is watched until the player's leading edge passes its
// leading edge, then credited 0.5 and dropped from the watch list. Removal
// is the de-dup: a pipe can never be credited twice, and a Top+Bottom pair
// crossing in lockstep yields exactly 1.0.

use crate::pipes::{Pipe, PipeId};

pub struct ScoreTracker {
    scoreable: Vec<PipeId>,
    value: f64,
}

impl ScoreTracker {
    pub fn new() -> ScoreTracker {
        ScoreTracker {
            scoreable: Vec::new(),
            value: 0.0,
        }
    }

    /// Registers a freshly spawned pipe for future crediting.
    pub fn watch(&mut self, id: PipeId) {
        self.scoreable.push(id);
    }

    /// Credits every watched pipe the player has now passed. Returns the
    /// amount gained this tick.
    pub fn on_tick(&mut self, player_left: f64, pipes: &[Pipe]) -> f64 {
        let mut gained = 0.0;
        self.scoreable.retain(|id| {
            match pipes.iter().find(|p| p.id == *id) {
                Some(pipe) if player_left > pipe.rect.left() => {
                    gained += 0.5;
                    false
                }
                Some(_) => true,
                // culled before crediting; nothing owed
                None => false,
            }
        });
        self.value += gained;
        gained
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Integer score shown on screen.
    pub fn display(&self) -> u32 {
        self.value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Assets;
    use crate::config;
    use crate::pipes::{PipeKind, PipeSpawner};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pair_at(x: f64) -> Vec<Pipe> {
        let assets = Assets::build();
        let mut spawner = PipeSpawner::new();
        let mut pipes = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        while spawner.tick(&mut pipes, &mut rng, &assets).is_none() {}
        for pipe in pipes.iter_mut() {
            pipe.rect.x = x;
        }
        pipes
    }

    #[test]
    fn test_pair_scores_exactly_one_point() {
        let mut tracker = ScoreTracker::new();
        let mut pipes = pair_at(300.0);
        for pipe in &pipes {
            tracker.watch(pipe.id);
        }
        let player_left = 215.0;

        // still ahead of the player: no credit
        assert_eq!(tracker.on_tick(player_left, &pipes), 0.0);
        assert_eq!(tracker.value(), 0.0);

        // scroll the pair behind the player's leading edge
        for pipe in pipes.iter_mut() {
            pipe.rect.x = player_left - config::SPEED;
        }
        assert_eq!(tracker.on_tick(player_left, &pipes), 1.0);
        assert_eq!(tracker.value(), 1.0);

        // never credited again
        assert_eq!(tracker.on_tick(player_left, &pipes), 0.0);
        assert_eq!(tracker.value(), 1.0);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut tracker = ScoreTracker::new();
        let mut last = tracker.value();
        let mut pipes = pair_at(230.0);
        for pipe in &pipes {
            tracker.watch(pipe.id);
        }
        for _ in 0..10 {
            for pipe in pipes.iter_mut() {
                pipe.rect.x -= config::SPEED;
            }
            tracker.on_tick(215.0, &pipes);
            assert!(tracker.value() >= last);
            last = tracker.value();
        }
        assert_eq!(tracker.value(), 1.0);
    }

    #[test]
    fn test_exact_edge_is_not_a_pass() {
        let mut tracker = ScoreTracker::new();
        let pipes = pair_at(215.0);
        for pipe in &pipes {
            tracker.watch(pipe.id);
        }
        // equal leading edges: strictly-greater is required
        assert_eq!(tracker.on_tick(215.0, &pipes), 0.0);
    }

    #[test]
    fn test_culled_pipe_is_forgotten_without_credit() {
        let mut tracker = ScoreTracker::new();
        let pipes = pair_at(300.0);
        for pipe in &pipes {
            tracker.watch(pipe.id);
        }
        // the pipes vanish (culled) before ever being passed
        assert_eq!(tracker.on_tick(215.0, &[]), 0.0);
        // and reappearing later cannot resurrect them
        let behind = pair_at(100.0);
        assert_eq!(tracker.on_tick(215.0, &behind), 0.0);
    }

    #[test]
    fn test_display_floors_half_points() {
        let mut tracker = ScoreTracker::new();
        let mut pipes = pair_at(300.0);
        // watch only the top member, as if its partner were already gone
        let top = pipes
            .iter()
            .find(|p| p.kind == PipeKind::Top)
            .map(|p| p.id)
            .unwrap();
        tracker.watch(top);
        for pipe in pipes.iter_mut() {
            pipe.rect.x = 100.0;
        }
        tracker.on_tick(215.0, &pipes);
        assert_eq!(tracker.value(), 0.5);
        assert_eq!(tracker.display(), 0);
    }
}
