//! Sprite resolution: text-art files with procedural fallbacks.
//!
//! For every [`SpriteId`] the sheet looks for `<name>.txt` in the asset
//! directory (`basket.txt`, `bomb.txt`, `strawberry.txt`, ...). A readable,
//! non-blank file becomes the sprite's artwork; anything else (missing
//! directory, missing file, unreadable or empty file) silently falls back to
//! a procedurally drawn shape. Callers never see an error.
//!
//! Artwork is sampled in normalized coordinates, so the same sprite scales to
//! whatever number of terminal cells its bounding box covers.

use std::fs;
use std::path::Path;

use crate::core::SpriteSizes;
use crate::fb::{Cell, CellStyle, Rgb};
use crate::types::{FruitKind, SpriteId};

const OUTLINE: Rgb = Rgb::new(20, 20, 20);
const BOMB_BODY: Rgb = Rgb::new(45, 45, 50);
const BOMB_MARK: Rgb = Rgb::new(230, 30, 30);
const BASKET_BROWN: Rgb = Rgb::new(139, 69, 19);

pub fn fruit_color(kind: FruitKind) -> Rgb {
    match kind {
        FruitKind::Strawberry => Rgb::new(230, 30, 30),
        FruitKind::Kiwi => Rgb::new(40, 200, 40),
        FruitKind::Banana => Rgb::new(235, 215, 0),
        FruitKind::Orange => Rgb::new(255, 165, 0),
    }
}

fn default_color(id: SpriteId) -> Rgb {
    match id {
        SpriteId::Basket => BASKET_BROWN,
        SpriteId::Fruit(kind) => fruit_color(kind),
        SpriteId::Bomb => BOMB_BODY,
    }
}

/// Artwork for one sprite.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteArt {
    /// Loaded from a file; spaces are transparent.
    Text { rows: Vec<Vec<char>>, color: Rgb },
    /// Filled circle with a dark rim.
    Disc { color: Rgb },
    /// Dark circle crossed by a red X.
    Bomb,
    /// Brown box with a handle arc on top.
    Basket,
}

impl SpriteArt {
    pub fn fallback(id: SpriteId) -> Self {
        match id {
            SpriteId::Basket => SpriteArt::Basket,
            SpriteId::Fruit(kind) => SpriteArt::Disc {
                color: fruit_color(kind),
            },
            SpriteId::Bomb => SpriteArt::Bomb,
        }
    }

    pub fn is_procedural(&self) -> bool {
        !matches!(self, SpriteArt::Text { .. })
    }

    /// Sample the artwork at `(u, v)` in `[0, 1)`; `None` means transparent.
    pub fn sample(&self, u: f32, v: f32, bg: Rgb) -> Option<Cell> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        match self {
            SpriteArt::Text { rows, color } => {
                let row = rows.get((v * rows.len() as f32) as usize)?;
                let width = rows.iter().map(Vec::len).max().unwrap_or(0);
                let ch = *row.get((u * width as f32) as usize)?;
                if ch == ' ' {
                    return None;
                }
                Some(CellStyle::plain(*color, bg).bold().into_cell(ch))
            }
            SpriteArt::Disc { color } => {
                // r = 20/45 of the box, 2px rim.
                let d = dist(u, v, 0.5, 0.5);
                if d > 0.445 {
                    None
                } else if d > 0.40 {
                    Some(CellStyle::plain(OUTLINE, bg).into_cell('▓'))
                } else {
                    Some(CellStyle::plain(*color, bg).into_cell('█'))
                }
            }
            SpriteArt::Bomb => {
                let d = dist(u, v, 0.5, 0.5);
                if d > 0.445 {
                    return None;
                }
                let (dx, dy) = (u - 0.5, v - 0.5);
                let on_cross = dx.abs() < 0.28
                    && dy.abs() < 0.28
                    && ((dx - dy).abs() < 0.09 || (dx + dy).abs() < 0.09);
                if on_cross {
                    Some(CellStyle::plain(BOMB_MARK, BOMB_BODY).bold().into_cell('x'))
                } else {
                    Some(CellStyle::plain(BOMB_BODY, bg).into_cell('█'))
                }
            }
            SpriteArt::Basket => {
                // Box occupies the lower 44/54, handle arc the top 10/54.
                let top = 10.0 / 54.0;
                if v >= top {
                    let edge = u < 0.04 || u > 0.96 || v > 0.96 || v < top + 0.04;
                    if edge {
                        Some(CellStyle::plain(OUTLINE, BASKET_BROWN).into_cell('▒'))
                    } else {
                        Some(CellStyle::plain(BASKET_BROWN, bg).into_cell('█'))
                    }
                } else {
                    let nx = (u - 0.5) / (16.0 / 72.0);
                    let ny = (v - top) / top;
                    let r = (nx * nx + ny * ny).sqrt();
                    if (r - 1.0).abs() < 0.35 {
                        Some(CellStyle::plain(OUTLINE, bg).bold().into_cell('▄'))
                    } else {
                        None
                    }
                }
            }
        }
    }
}

fn dist(u: f32, v: f32, cx: f32, cy: f32) -> f32 {
    ((u - cx) * (u - cx) + (v - cy) * (v - cy)).sqrt()
}

/// Resolved artwork for every sprite the game uses.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    basket: SpriteArt,
    bomb: SpriteArt,
    fruits: [SpriteArt; 4],
    sizes: SpriteSizes,
    loaded: usize,
}

impl SpriteSheet {
    /// Procedural artwork only.
    pub fn fallback() -> Self {
        Self {
            basket: SpriteArt::fallback(SpriteId::Basket),
            bomb: SpriteArt::fallback(SpriteId::Bomb),
            fruits: FruitKind::ALL.map(|k| SpriteArt::fallback(SpriteId::Fruit(k))),
            sizes: SpriteSizes::default(),
            loaded: 0,
        }
    }

    /// Resolve every sprite from `dir`, falling back per sprite.
    pub fn load(dir: Option<&Path>) -> Self {
        let mut sheet = Self::fallback();
        let Some(dir) = dir else {
            return sheet;
        };

        let resolve = |id: SpriteId| -> SpriteArt {
            match load_text_art(&dir.join(format!("{}.txt", id.name()))) {
                Some(rows) => SpriteArt::Text {
                    rows,
                    color: default_color(id),
                },
                None => SpriteArt::fallback(id),
            }
        };

        sheet.basket = resolve(SpriteId::Basket);
        sheet.bomb = resolve(SpriteId::Bomb);
        sheet.fruits = FruitKind::ALL.map(|k| resolve(SpriteId::Fruit(k)));
        sheet.loaded = [&sheet.basket, &sheet.bomb]
            .into_iter()
            .chain(sheet.fruits.iter())
            .filter(|a| !a.is_procedural())
            .count();
        sheet
    }

    pub fn art(&self, id: SpriteId) -> &SpriteArt {
        match id {
            SpriteId::Basket => &self.basket,
            SpriteId::Bomb => &self.bomb,
            SpriteId::Fruit(kind) => {
                let i = FruitKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                &self.fruits[i]
            }
        }
    }

    /// Bounding sizes handed to the core. Fixed regardless of artwork source,
    /// so gameplay is identical with and without asset files.
    pub fn sizes(&self) -> SpriteSizes {
        self.sizes
    }

    /// Number of sprites that came from files.
    pub fn loaded_count(&self) -> usize {
        self.loaded
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::fallback()
    }
}

fn load_text_art(path: &Path) -> Option<Vec<Vec<char>>> {
    let text = fs::read_to_string(path).ok()?;
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|l| l.trim_end().chars().collect())
        .collect();
    if rows.iter().all(|r: &Vec<char>| r.iter().all(|c| *c == ' ')) {
        return None;
    }
    Some(rows)
}
