// ── Terminal presenter ──────────────────────────────────────────────────────
//
// The game hands over a list of draw commands in logical playfield
// coordinates; this module rasterizes them into a pixel buffer sized to the
// terminal (two pixels per cell row) and emits half-block cells, changing
// colors only when a cell actually needs a different pair.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::config;
use crate::sprite::{Rect, Rgb, Sprite};

pub struct DrawCmd<'a> {
    pub sprite: &'a Sprite,
    /// Destination in logical playfield coordinates.
    pub dest: Rect,
}

pub struct Frame<'a> {
    pub cmds: Vec<DrawCmd<'a>>,
    /// Halve every pixel after rasterizing (game-over shroud).
    pub dim: bool,
}

const CLEAR: Rgb = Rgb(70, 180, 200);

pub struct Presenter {
    w: usize,
    /// Pixel height: two pixels per terminal row.
    h: usize,
    px: Vec<Rgb>,
}

impl Presenter {
    pub fn new(cols: u16, rows: u16) -> Presenter {
        let w = (cols as usize).max(1);
        let h = (rows as usize).max(1) * 2;
        Presenter {
            w,
            h,
            px: vec![CLEAR; w * h],
        }
    }

    /// Called on terminal resize. Only the view changes; the simulation
    /// keeps its fixed logical coordinates.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.w = (cols as usize).max(1);
        self.h = (rows as usize).max(1) * 2;
        self.px.clear();
        self.px.resize(self.w * self.h, CLEAR);
    }

    pub fn present(&mut self, frame: &Frame, out: &mut impl Write) -> io::Result<()> {
        self.rasterize(frame);
        self.flush_cells(out)
    }

    fn set(&mut self, x: usize, y: usize, c: Rgb) {
        if x < self.w && y < self.h {
            self.px[y * self.w + x] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn rasterize(&mut self, frame: &Frame) {
        let sx = self.w as f64 / config::WINDOW_W;
        let sy = self.h as f64 / config::WINDOW_H;

        for cmd in &frame.cmds {
            let x0 = (cmd.dest.left() * sx).floor().max(0.0) as usize;
            let x1 = ((cmd.dest.right() * sx).ceil().max(0.0) as usize).min(self.w);
            let y0 = (cmd.dest.top() * sy).floor().max(0.0) as usize;
            let y1 = ((cmd.dest.bottom() * sy).ceil().max(0.0) as usize).min(self.h);
            for py in y0..y1 {
                let wy = (py as f64 + 0.5) / sy;
                for px in x0..x1 {
                    let wx = (px as f64 + 0.5) / sx;
                    if let Some(c) = cmd.sprite.sample(&cmd.dest, wx, wy) {
                        self.set(px, py, c);
                    }
                }
            }
        }

        if frame.dim {
            for p in self.px.iter_mut() {
                *p = p.dimmed();
            }
        }
    }

    fn flush_cells(&self, out: &mut impl Write) -> io::Result<()> {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        for row in 0..self.h / 2 {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);
                if top == bot {
                    if bg != Some(top) {
                        queue!(out, style::SetBackgroundColor(term_color(top)))?;
                        bg = Some(top);
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        queue!(out, style::SetForegroundColor(term_color(top)))?;
                        fg = Some(top);
                    }
                    if bg != Some(bot) {
                        queue!(out, style::SetBackgroundColor(term_color(bot)))?;
                        bg = Some(bot);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // upper half block
                }
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}
