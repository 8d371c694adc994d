// ── Collision & bounds ──────────────────────────────────────────────────────

use crate::assets::Assets;
use crate::config;
use crate::pipes::Pipe;
use crate::player::Player;
use crate::sprite::masks_collide;

/// One positive test ends the game: the player's current-frame mask against
/// every active pipe's mask, plus the ground and ceiling rules. The ground
/// rule is strictly-greater; the ceiling rule counts touching as a hit.
pub fn check(player: &Player, pipes: &[Pipe], assets: &Assets) -> bool {
    if player.rect.bottom() > config::GROUND_TOP {
        return true;
    }
    if player.rect.top() <= 0.0 {
        return true;
    }
    let mask = assets.bird_frame(player.frame());
    pipes
        .iter()
        .any(|pipe| masks_collide(&player.rect, mask, &pipe.rect, &pipe.sprite))
}
