//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The core works in playfield pixels; the view picks a scale of at least
//! `min_px_per_col` pixels per column (rows are twice as tall, matching the
//! usual glyph aspect) and grows it until the bordered field fits.

use crate::core::{EntitySnapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprites::SpriteSheet;
use crate::types::Phase;

const FIELD_BG: Rgb = Rgb::new(245, 245, 240);
const TEXT: Rgb = Rgb::new(20, 20, 20);
const MIN_COLS: u16 = 30;
const MIN_ROWS: u16 = 10;

const MENU_LINES: [&str; 6] = [
    "Catch fruits for +10 points",
    "Avoid bombs: -5 points",
    "Use LEFT/RIGHT to move",
    "Press ESC to pause",
    "Press ENTER to start",
    "Press Q to quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the playfield lands in the viewport, and at what scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Top-left cell of the field interior (inside the border).
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub px_per_col: u16,
    pub px_per_row: u16,
}

impl FieldLayout {
    /// Smallest scale that fits `screen_w x screen_h` pixels plus a border
    /// into `viewport`, or `None` when the viewport is too small.
    pub fn fit(screen_w: i32, screen_h: i32, viewport: Viewport, min_px_per_col: u16) -> Option<Self> {
        let avail_w = viewport.width.saturating_sub(2) as u32;
        let avail_h = viewport.height.saturating_sub(2) as u32;
        if avail_w < MIN_COLS as u32 || avail_h < MIN_ROWS as u32 {
            return None;
        }
        let sw = screen_w.max(1) as u32;
        let sh = screen_h.max(1) as u32;

        let ppc = (min_px_per_col.max(1) as u32)
            .max(sw.div_ceil(avail_w))
            .max(sh.div_ceil(avail_h * 2));
        let ppr = ppc * 2;
        let cols = sw.div_ceil(ppc) as u16;
        let rows = sh.div_ceil(ppr) as u16;
        if cols < MIN_COLS || rows < MIN_ROWS {
            return None;
        }

        Some(Self {
            x: (viewport.width - (cols + 2)) / 2 + 1,
            y: (viewport.height - (rows + 2)) / 2 + 1,
            cols,
            rows,
            px_per_col: ppc as u16,
            px_per_row: ppr as u16,
        })
    }

    pub fn center_x(&self) -> u16 {
        self.x + self.cols / 2
    }

    /// Viewport cell containing playfield pixel `(px, py)`, if on the field.
    pub fn cell_at(&self, px: i32, py: i32) -> Option<(u16, u16)> {
        if px < 0 || py < 0 {
            return None;
        }
        let cx = px / self.px_per_col as i32;
        let cy = py / self.px_per_row as i32;
        if cx >= self.cols as i32 || cy >= self.rows as i32 {
            return None;
        }
        Some((self.x + cx as u16, self.y + cy as u16))
    }
}

/// Draws menu, play field, pause overlay and game-over screen.
pub struct GameView {
    sheet: SpriteSheet,
    min_px_per_col: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(SpriteSheet::fallback())
    }
}

impl GameView {
    pub fn new(sheet: SpriteSheet) -> Self {
        Self {
            sheet,
            min_px_per_col: 8,
        }
    }

    pub fn with_min_px_per_col(mut self, px: u16) -> Self {
        self.min_px_per_col = px.max(1);
        self
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<FieldLayout> {
        FieldLayout::fit(
            snap.screen_width,
            snap.screen_height,
            viewport,
            self.min_px_per_col,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(layout) = self.layout(snap, viewport) else {
            let style = CellStyle::default().bold();
            fb.put_str_centered(viewport.width / 2, viewport.height / 2, "Terminal too small", style);
            return;
        };

        let field = CellStyle::plain(TEXT, FIELD_BG);
        fb.fill_rect(layout.x, layout.y, layout.cols, layout.rows, ' ', field);
        draw_border(
            fb,
            layout.x - 1,
            layout.y - 1,
            layout.cols + 2,
            layout.rows + 2,
            CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        match snap.phase {
            Phase::Menu => self.draw_menu(fb, &layout),
            Phase::Playing => self.draw_play(fb, snap, &layout),
            Phase::Paused => {
                self.draw_play(fb, snap, &layout);
                self.draw_pause_overlay(fb, &layout);
            }
            Phase::GameOver => self.draw_game_over(fb, snap, &layout),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        let cx = layout.center_x();
        let text = CellStyle::plain(TEXT, FIELD_BG);
        fb.put_str_centered(cx, layout.y + layout.rows / 4, "Fruit Catcher", text.bold());

        let mut y = layout.y + (layout.rows / 2).saturating_sub(2);
        for line in MENU_LINES {
            fb.put_str_centered(cx, y, line, text);
            y += 1;
        }
    }

    fn draw_play(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        for obj in &snap.objects {
            self.draw_entity(fb, layout, obj);
        }
        if let Some(player) = &snap.player {
            self.draw_entity(fb, layout, player);
        }

        // HUD goes on top of the sprites.
        let text = CellStyle::plain(TEXT, FIELD_BG).bold();
        let left = layout.x + 1;
        let right = layout.x + layout.cols - 2;

        fb.put_str(left, layout.y, "Score: ", text);
        fb.put_u32(left + 7, layout.y, snap.score, text);
        fb.put_str(left, layout.y + 1, "Speed: ", text);
        fb.put_u32(left + 7, layout.y + 1, snap.fall_speed.max(0) as u32, text);

        let secs = snap.remaining_secs;
        let time_x = (right + 1).saturating_sub(6 + digit_count(secs));
        fb.put_str(time_x, layout.y, "Time: ", text);
        fb.put_u32(time_x + 6, layout.y, secs, text);
        fb.put_str_right(right, layout.y + 1, "Press ESC to pause", text);
    }

    fn draw_pause_overlay(&self, fb: &mut FrameBuffer, layout: &FieldLayout) {
        fb.shade_rect(layout.x, layout.y, layout.cols, layout.rows);
        let text = CellStyle::plain(Rgb::new(255, 255, 255), FIELD_BG.darken(128));
        let mid = layout.y + layout.rows / 2;
        fb.put_str_centered(layout.center_x(), mid, "PAUSED", text.bold());
        fb.put_str_centered(layout.center_x(), mid + 2, "Press ESC to resume", text);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let cx = layout.center_x();
        let text = CellStyle::plain(TEXT, FIELD_BG);
        let mid = layout.y + layout.rows / 2;

        fb.put_str_centered(cx, layout.y + layout.rows / 3, "GAME OVER", text.bold());

        let label = "Final Score: ";
        let w = label.len() as u16 + digit_count(snap.score);
        let x = cx.saturating_sub(w / 2);
        fb.put_str(x, mid, label, text);
        fb.put_u32(x + label.len() as u16, mid, snap.score, text);

        fb.put_str_centered(cx, mid + 2, "Press ENTER to play again", text);
        fb.put_str_centered(cx, mid + 3, "Press Q to quit", text);
    }

    /// Sample the sprite at the centre of every covered cell. Sprites that
    /// fall between cell centres still get one cell so nothing disappears
    /// at coarse scales.
    fn draw_entity(&self, fb: &mut FrameBuffer, layout: &FieldLayout, ent: &EntitySnapshot) {
        let r = ent.rect;
        if r.w <= 0 || r.h <= 0 {
            return;
        }
        let art = self.sheet.art(ent.sprite);
        let ppc = layout.px_per_col as i32;
        let ppr = layout.px_per_row as i32;

        let c0 = r.x.div_euclid(ppc).max(0);
        let c1 = (r.right() + ppc - 1).div_euclid(ppc).min(layout.cols as i32);
        let r0 = r.y.div_euclid(ppr).max(0);
        let r1 = (r.bottom() + ppr - 1).div_euclid(ppr).min(layout.rows as i32);

        let mut drawn = false;
        for cy in r0..r1 {
            let v = (cy * ppr + ppr / 2 - r.y) as f32 / r.h as f32;
            for cx in c0..c1 {
                let u = (cx * ppc + ppc / 2 - r.x) as f32 / r.w as f32;
                if let Some(cell) = art.sample(u, v, FIELD_BG) {
                    fb.set(layout.x + cx as u16, layout.y + cy as u16, cell);
                    drawn = true;
                }
            }
        }

        if !drawn {
            if let (Some((x, y)), Some(cell)) = (
                layout.cell_at(r.center_x(), r.y + r.h / 2),
                art.sample(0.5, 0.5, FIELD_BG),
            ) {
                fb.set(x, y, cell);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
