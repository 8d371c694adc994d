// ── Bitmaps ─────────────────────────────────────────────────────────────────
//
// Every sprite the game draws is built here at startup: bird frames and
// digits from pixel-art tables, pipes/background/ground generated from the
// palette. Transparent pixels double as the collision mask.

use crate::config;
use crate::sprite::{Rgb, Sprite};

const SKY_TOP: Rgb = Rgb(70, 180, 200);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const HILL_FAR: Rgb = Rgb(120, 195, 75);
const HILL_NEAR: Rgb = Rgb(95, 175, 55);
const GRASS: Rgb = Rgb(84, 168, 55);
const GRASS_LIGHT: Rgb = Rgb(110, 200, 70);
const DIRT: Rgb = Rgb(210, 185, 110);
const DIRT_DARK: Rgb = Rgb(185, 160, 90);
const PANEL_FILL: Rgb = Rgb(220, 195, 120);
const PIPE_DARK: Rgb = Rgb(74, 122, 26);
const PIPE_MID: Rgb = Rgb(100, 170, 40);
const PIPE_LIGHT: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_BODY: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const BIRD_BEAK_HI: Rgb = Rgb(240, 110, 50);
const WHITE: Rgb = Rgb(255, 255, 255);
const SHADOW: Rgb = Rgb(30, 30, 30);

// Bird frames, 10x7, facing right. '.' is transparent; the letters map to
// palette entries below. Wing position is the only difference between
// frames.
const BIRD_ART: [[&str; 7]; config::PLAYER_FRAMES] = [
    // wing up
    [
        "....YYYY..",
        "...yyyyee.",
        ".yywwyyyep",
        "yyywwyyyBB",
        ".yyyyyyybb",
        ".yyyyyyyb.",
        "..yyyyy...",
    ],
    // wing mid
    [
        "....YYYY..",
        "...yyyyee.",
        ".yyyyyyyep",
        "yywwwyyyBB",
        ".ywwyyyybb",
        ".yyyyyyyb.",
        "..yyyyy...",
    ],
    // wing down
    [
        "....YYYY..",
        "...yyyyee.",
        ".yyyyyyyep",
        "yyyyyyyyBB",
        ".ywwwyyybb",
        ".yywwyyyb.",
        "..yyyyy...",
    ],
];

// 3x5 digit glyphs.
const DIGIT_ART: [[&str; 5]; 10] = [
    ["###", "#.#", "#.#", "#.#", "###"],
    [".#.", "##.", ".#.", ".#.", "###"],
    ["###", "..#", "###", "#..", "###"],
    ["###", "..#", ".##", "..#", "###"],
    ["#.#", "#.#", "###", "..#", "..#"],
    ["###", "#..", "###", "..#", "###"],
    ["###", "#..", "###", "#.#", "###"],
    ["###", "..#", ".#.", ".#.", ".#."],
    ["###", "#.#", "###", "#.#", "###"],
    ["###", "#.#", "###", "..#", "###"],
];

fn bird_color(ch: u8) -> Option<Rgb> {
    match ch {
        b'y' => Some(BIRD_BODY),
        b'Y' => Some(BIRD_HI),
        b'w' => Some(BIRD_WING),
        b'e' => Some(BIRD_EYE),
        b'p' => Some(BIRD_PUPIL),
        b'b' => Some(BIRD_BEAK),
        b'B' => Some(BIRD_BEAK_HI),
        _ => None,
    }
}

fn from_art(rows: &[&str], color: impl Fn(u8) -> Option<Rgb>) -> Sprite {
    let mut s = Sprite::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if let Some(c) = color(ch) {
                s.set(x, y, c);
            }
        }
    }
    s
}

/// Digit glyphs get a one-pixel drop shadow baked in, so the sprite is one
/// pixel wider and taller than the glyph.
fn digit_sprite(rows: &[&str; 5]) -> Sprite {
    let mut s = Sprite::new(4, 6);
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if ch == b'#' {
                s.set(x + 1, y + 1, SHADOW);
            }
        }
    }
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.bytes().enumerate() {
            if ch == b'#' {
                s.set(x, y, WHITE);
            }
        }
    }
    s
}

/// Horizontal pipe shading: dark left edge, highlight band, darker right
/// edge.
fn pipe_shade(x: usize, w: usize) -> Rgb {
    if w <= 1 {
        return PIPE_MID;
    }
    let t = (x * 256 / (w - 1)) as u16;
    if t < 96 {
        Rgb::lerp(PIPE_DARK, PIPE_MID, t.saturating_mul(8).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_MID, PIPE_LIGHT, (t - 96).saturating_mul(4).min(256))
    } else {
        Rgb::lerp(PIPE_LIGHT, PIPE_DARK, (t - 160).saturating_mul(3).min(256))
    }
}

// Background and ground are authored at 1/8 playfield resolution and
// stretched by the presenter.
const BG_W: usize = 150;
const BG_H: usize = 112;
const GROUND_BASE_H: usize = 17;
const PIPE_CAP_H: usize = 20;

pub struct Assets {
    bird: [Sprite; config::PLAYER_FRAMES],
    digits: [Sprite; 10],
    background: Sprite,
    ground: Sprite,
    panel: Sprite,
}

impl Assets {
    pub fn build() -> Assets {
        Assets {
            bird: BIRD_ART.map(|rows| from_art(&rows, bird_color)),
            digits: DIGIT_ART.map(|rows| digit_sprite(&rows)),
            background: build_background(),
            ground: build_ground(),
            panel: build_panel(),
        }
    }

    pub fn bird_frame(&self, i: usize) -> &Sprite {
        &self.bird[i % self.bird.len()]
    }

    pub fn digit(&self, d: u8) -> &Sprite {
        &self.digits[d as usize % 10]
    }

    pub fn background(&self) -> &Sprite {
        &self.background
    }

    pub fn ground(&self) -> &Sprite {
        &self.ground
    }

    pub fn panel(&self) -> &Sprite {
        &self.panel
    }

    /// Builds a pipe column at the requested height. `mirrored` flips the
    /// sprite for top pipes so the cap faces the gap.
    pub fn pipe(&self, height: f64, mirrored: bool) -> Sprite {
        let w = config::PIPE_W as usize;
        let h = (height.round() as usize).max(PIPE_CAP_H + 2);
        let mut s = Sprite::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let mut c = pipe_shade(x, w);
                if y < PIPE_CAP_H {
                    // cap band, with darkened rims
                    if y == 0 || y == PIPE_CAP_H - 1 {
                        c = CAP_DARK;
                    } else {
                        c = Rgb::lerp(c, PIPE_LIGHT, 64);
                    }
                }
                s.set(x, y, c);
            }
        }
        if mirrored { s.flipped_vertical() } else { s }
    }
}

fn build_background() -> Sprite {
    let mut s = Sprite::new(BG_W, BG_H);
    let horizon = (BG_H as f64 * (config::GROUND_TOP / config::WINDOW_H)) as usize;
    for y in 0..BG_H {
        let t = (y * 256 / BG_H) as u16;
        let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
        for x in 0..BG_W {
            s.set(x, y, c);
        }
    }
    // two layered hill bands above the horizon
    for x in 0..BG_W {
        let fx = x as f64 * 0.3;
        let far = (fx.sin() * 5.0 + (fx * 1.7).sin() * 2.5 + 6.0).max(0.0) as usize;
        for y in horizon.saturating_sub(far)..horizon {
            s.set(x, y, HILL_FAR);
        }
        let fx = x as f64 * 0.45;
        let near = (fx.sin() * 3.5 + (fx * 2.3).sin() * 1.8 + 3.0).max(0.0) as usize;
        for y in horizon.saturating_sub(near)..horizon {
            s.set(x, y, HILL_NEAR);
        }
    }
    for y in horizon..BG_H {
        for x in 0..BG_W {
            s.set(x, y, DIRT);
        }
    }
    s
}

fn build_ground() -> Sprite {
    let mut s = Sprite::new(BG_W, GROUND_BASE_H);
    for x in 0..BG_W {
        s.set(x, 0, if (x / 3) % 2 == 0 { GRASS } else { GRASS_LIGHT });
        s.set(x, 1, GRASS);
    }
    for y in 2..GROUND_BASE_H {
        for x in 0..BG_W {
            let stripe = (x + (y - 2) * 2) % 12 < 6;
            s.set(x, y, if stripe { DIRT } else { DIRT_DARK });
        }
    }
    s
}

fn build_panel() -> Sprite {
    let (w, h) = (40, 22);
    let mut s = Sprite::filled(w, h, SHADOW);
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            s.set(x, y, DIRT);
        }
    }
    for y in 2..h - 2 {
        for x in 2..w - 2 {
            s.set(x, y, PANEL_FILL);
        }
    }
    s
}
