//! Colour palettes for the light and dark themes.

use crate::fb::{CellStyle, Rgb};
use crate::types::{Theme, Tile};

/// Every colour the game view needs for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub board: Rgb,
    pub empty: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub selection: Rgb,
    pub overlay: Rgb,
    /// Tile backgrounds for 2, 4, ..., 2048; larger tiles reuse `super_tile`.
    pub tiles: [Rgb; 11],
    pub super_tile: Rgb,
    pub dark_digits: Rgb,
    pub light_digits: Rgb,
}

const LIGHT: Palette = Palette {
    background: Rgb::new(250, 248, 239),
    board: Rgb::new(187, 173, 160),
    empty: Rgb::new(205, 193, 180),
    text: Rgb::new(119, 110, 101),
    muted: Rgb::new(160, 150, 140),
    accent: Rgb::new(143, 122, 102),
    selection: Rgb::new(52, 152, 219),
    overlay: Rgb::new(238, 228, 218),
    tiles: [
        Rgb::new(238, 228, 218),
        Rgb::new(237, 224, 200),
        Rgb::new(242, 177, 121),
        Rgb::new(245, 149, 99),
        Rgb::new(246, 124, 95),
        Rgb::new(246, 94, 59),
        Rgb::new(237, 207, 114),
        Rgb::new(237, 204, 97),
        Rgb::new(237, 200, 80),
        Rgb::new(237, 197, 63),
        Rgb::new(237, 194, 46),
    ],
    super_tile: Rgb::new(60, 58, 50),
    dark_digits: Rgb::new(119, 110, 101),
    light_digits: Rgb::new(249, 246, 242),
};

const DARK: Palette = Palette {
    background: Rgb::new(30, 30, 36),
    board: Rgb::new(58, 54, 51),
    empty: Rgb::new(74, 69, 65),
    text: Rgb::new(230, 225, 215),
    muted: Rgb::new(140, 135, 128),
    accent: Rgb::new(200, 170, 120),
    selection: Rgb::new(93, 173, 226),
    overlay: Rgb::new(45, 42, 40),
    tiles: [
        Rgb::new(110, 102, 94),
        Rgb::new(125, 112, 96),
        Rgb::new(176, 118, 72),
        Rgb::new(184, 98, 60),
        Rgb::new(186, 80, 60),
        Rgb::new(186, 58, 34),
        Rgb::new(180, 150, 70),
        Rgb::new(180, 146, 56),
        Rgb::new(180, 142, 44),
        Rgb::new(180, 138, 32),
        Rgb::new(185, 135, 20),
    ],
    super_tile: Rgb::new(20, 20, 24),
    dark_digits: Rgb::new(30, 28, 26),
    light_digits: Rgb::new(249, 246, 242),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Background colour for a tile value; `0` gives the empty-cell colour.
    pub fn tile_bg(&self, value: Tile) -> Rgb {
        if value == 0 {
            return self.empty;
        }
        let exp = value.trailing_zeros() as usize;
        match exp {
            1..=11 => self.tiles[exp - 1],
            _ => self.super_tile,
        }
    }

    /// Style for a tile: small values get dark digits, larger ones light digits.
    pub fn tile_style(&self, value: Tile) -> CellStyle {
        let fg = if value <= 4 {
            self.dark_digits
        } else {
            self.light_digits
        };
        CellStyle::new(fg, self.tile_bg(value)).bold()
    }

    pub fn text_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.background)
    }

    pub fn label_style(&self) -> CellStyle {
        CellStyle::new(self.accent, self.background).bold()
    }

    pub fn muted_style(&self) -> CellStyle {
        CellStyle::new(self.muted, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_map_to_palette_slots() {
        let p = Palette::for_theme(Theme::Light);
        assert_eq!(p.tile_bg(0), p.empty);
        assert_eq!(p.tile_bg(2), p.tiles[0]);
        assert_eq!(p.tile_bg(2048), p.tiles[10]);
        assert_eq!(p.tile_bg(4096), p.super_tile);
    }

    #[test]
    fn test_digits_switch_to_light_above_four() {
        let p = Palette::for_theme(Theme::Dark);
        assert_eq!(p.tile_style(4).fg, p.dark_digits);
        assert_eq!(p.tile_style(8).fg, p.light_digits);
    }

    #[test]
    fn test_themes_differ() {
        assert_ne!(
            Palette::for_theme(Theme::Light).background,
            Palette::for_theme(Theme::Dark).background
        );
    }
}
