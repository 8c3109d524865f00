//! GameView: maps a `core::ViewSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::ViewSnapshot;
use crate::fb::{digit_count, CellStyle, FrameBuffer};
use crate::theme::Palette;
use crate::types::{Theme, GRID_SIZE};

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

/// Session-level values drawn next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView<'a> {
    pub best_score: u32,
    pub theme: Theme,
    pub sound_enabled: bool,
    /// Transient message shown under the board.
    pub notice: Option<&'a str>,
    /// Show the win overlay (until the player acts again).
    pub win_banner: bool,
    pub games_played: u64,
    pub games_won: u64,
}

impl Default for SessionView<'_> {
    fn default() -> Self {
        Self {
            best_score: 0,
            theme: Theme::Light,
            sound_enabled: true,
            notice: None,
            win_banner: false,
            games_played: 0,
            games_won: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board origin and size in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    board_x: u16,
    board_y: u16,
    board_w: u16,
    board_h: u16,
}

const PANEL_GAP: u16 = 3;
const PANEL_W: u16 = 18;
/// Rows above the board (title) and below it (notice + help).
const HEADER_H: u16 = 2;
const FOOTER_H: u16 = 3;

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Gap between tiles, in columns (rows use half of it, at least 1).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits six digits and looks roughly square in most terminals.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n * self.tile_w + (n + 1) * self.gap,
            n * self.tile_h + (n + 1) * self.gap,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (board_w, board_h) = self.board_size();
        let total_w = board_w + PANEL_GAP + PANEL_W;
        let total_h = HEADER_H + board_h + FOOTER_H;

        let board_x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(board_w) / 2
        };
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            board_x,
            board_y: top + HEADER_H,
            board_w,
            board_h,
        }
    }

    fn tile_origin(&self, layout: &Layout, row: usize, col: usize) -> (u16, u16) {
        let x = layout.board_x + self.gap + (col as u16) * (self.tile_w + self.gap);
        let y = layout.board_y + self.gap + (row as u16) * (self.tile_h + self.gap);
        (x, y)
    }

    /// Map a terminal cell to the board cell under it, if any.
    ///
    /// Gaps between tiles and everything outside the board return `None`.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<(usize, usize)> {
        let layout = self.layout(viewport);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (tx, ty) = self.tile_origin(&layout, row, col);
                if x >= tx && x < tx + self.tile_w && y >= ty && y < ty + self.tile_h {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Render the current state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &ViewSnapshot,
        session: &SessionView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let palette = Palette::for_theme(session.theme);
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette.text_style().into_cell(' '));

        let layout = self.layout(viewport);

        // Title.
        let title_y = layout.board_y.saturating_sub(HEADER_H);
        fb.put_str(layout.board_x, title_y, "2048", palette.label_style());
        if snap.swap_mode {
            let hint = CellStyle::new(palette.selection, palette.background).bold();
            let x = layout.board_x + layout.board_w;
            fb.put_str(x.saturating_sub(9), title_y, "SWAP MODE", hint);
        }

        // Board background.
        let board_style = CellStyle::new(palette.text, palette.board);
        fb.fill_rect(
            layout.board_x,
            layout.board_y,
            layout.board_w,
            layout.board_h,
            ' ',
            board_style,
        );

        let cells = snap.state.grid.rows();
        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let selected = snap.selected == Some((row, col));
                self.draw_tile(fb, palette, &layout, row, col, value, selected);
            }
        }

        self.draw_side_panel(fb, palette, snap, session, viewport, &layout);
        self.draw_footer(fb, palette, snap, session, viewport, &layout);

        // Overlays.
        if snap.state.game_over {
            self.draw_overlay_text(fb, palette, &layout, "GAME OVER", "press N for a new game");
        } else if session.win_banner {
            self.draw_overlay_text(fb, palette, &layout, "YOU WIN!", "keep going");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ViewSnapshot, session: &SessionView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, session, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        palette: &Palette,
        layout: &Layout,
        row: usize,
        col: usize,
        value: u32,
        selected: bool,
    ) {
        let (x, y) = self.tile_origin(layout, row, col);
        let mut style = palette.tile_style(value);
        if selected {
            style = CellStyle::new(palette.light_digits, palette.selection).bold();
        }
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        if selected && self.tile_w >= 3 {
            fb.put_char(x, y, '┌', style);
            fb.put_char(x + self.tile_w - 1, y, '┐', style);
            fb.put_char(x, y + self.tile_h - 1, '└', style);
            fb.put_char(x + self.tile_w - 1, y + self.tile_h - 1, '┘', style);
        }

        let mid_y = y + self.tile_h / 2;
        if value == 0 {
            if !selected {
                fb.put_char(x + self.tile_w / 2, mid_y, '·', style.dim());
            }
            return;
        }
        let digits = digit_count(value);
        let tx = x + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(tx, mid_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        palette: &Palette,
        snap: &ViewSnapshot,
        session: &SessionView<'_>,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout.board_x + layout.board_w + PANEL_GAP;
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = palette.label_style();
        let value = palette.text_style().bold();
        let muted = palette.muted_style();

        let mut y = layout.board_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.state.score, value);
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u32(panel_x, y, session.best_score.max(snap.state.score), value);
        y += 2;

        fb.put_str(panel_x, y, "SWAPS", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, snap.swap_tokens, value);
        if snap.swap_tokens == 0 {
            fb.put_str(end + 1, y, "(256 earns 2)", muted);
        }
        y += 2;

        fb.put_str(panel_x, y, "UNDO", label);
        y += 1;
        fb.put_str(panel_x, y, if snap.can_undo { "available" } else { "-" }, value);
        y += 2;

        fb.put_str(panel_x, y, "GAMES", label);
        y += 1;
        let end = fb.put_u32(panel_x, y, session.games_played as u32, value);
        let end = fb.put_str(end + 1, y, "won", muted);
        fb.put_u32(end + 1, y, session.games_won as u32, value);
        y += 2;

        if y < viewport.height {
            let end = fb.put_str(panel_x, y, "sound ", muted);
            let end = fb.put_str(end, y, if session.sound_enabled { "on" } else { "off" }, muted);
            let end = fb.put_str(end, y, "  ", muted);
            fb.put_str(end, y, session.theme.as_str(), muted);
        }
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        palette: &Palette,
        snap: &ViewSnapshot,
        session: &SessionView<'_>,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let notice_y = layout.board_y + layout.board_h + 1;
        if notice_y >= viewport.height {
            return;
        }
        if let Some(text) = session.notice {
            let style = CellStyle::new(palette.accent, palette.background).bold();
            fb.put_str(layout.board_x, notice_y, text, style);
        } else if snap.swap_mode {
            let style = CellStyle::new(palette.selection, palette.background);
            let text = if snap.selected.is_some() {
                "Pick a second tile to swap"
            } else {
                "Pick a tile to swap"
            };
            fb.put_str(layout.board_x, notice_y, text, style);
        }

        let help_y = notice_y + 1;
        fb.put_str(
            layout.board_x,
            help_y,
            "arrows move  u undo  n new  x swap  m t c  q quit",
            palette.muted_style(),
        );
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, palette: &Palette, layout: &Layout, title: &str, hint: &str) {
        let style = CellStyle::new(palette.text, palette.overlay).bold();
        let box_w = layout.board_w.saturating_sub(4);
        let box_x = layout.board_x + 2;
        let mid_y = layout.board_y + layout.board_h / 2;
        fb.fill_rect(box_x, mid_y.saturating_sub(1), box_w, 4, ' ', style);
        fb.put_str_centered(box_x, mid_y.saturating_sub(1) + 1, box_w, title, style);
        fb.put_str_centered(box_x, mid_y + 1, box_w, hint, CellStyle { bold: false, ..style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSnapshot, Grid};

    fn snap(rows: [[u32; 4]; 4]) -> ViewSnapshot {
        ViewSnapshot {
            state: GameSnapshot {
                grid: Grid::from_rows(rows),
                ..GameSnapshot::default()
            },
            swap_tokens: 1,
            ..ViewSnapshot::default()
        }
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn test_hit_test_matches_tile_origins() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let layout = view.layout(vp);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = view.tile_origin(&layout, row, col);
                assert_eq!(view.hit_test(vp, x, y), Some((row, col)));
                assert_eq!(view.hit_test(vp, x + 6, y + 2), Some((row, col)));
            }
        }
        // Gap column left of the first tile and a point far away.
        assert_eq!(view.hit_test(vp, layout.board_x, layout.board_y + 1), None);
        assert_eq!(view.hit_test(vp, 0, 0), None);
    }

    #[test]
    fn test_tiles_and_score_are_drawn() {
        let view = GameView::default();
        let mut s = snap([[2, 0, 0, 0], [0, 2048, 0, 0], [0, 0, 0, 0], [0, 0, 0, 131072]]);
        s.state.score = 4321;
        let fb = view.render(&s, &SessionView::default(), Viewport::new(80, 30));
        let text = screen_text(&fb);
        assert!(text.contains("2048"));
        assert!(text.contains("131072"));
        assert!(text.contains("SCORE"));
        assert!(text.contains("4321"));
    }

    #[test]
    fn test_overlays() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);

        let mut s = snap([[0; 4]; 4]);
        s.state.game_over = true;
        let text = screen_text(&view.render(&s, &SessionView::default(), vp));
        assert!(text.contains("GAME OVER"));

        let s = snap([[0; 4]; 4]);
        let session = SessionView {
            win_banner: true,
            ..SessionView::default()
        };
        let text = screen_text(&view.render(&s, &session, vp));
        assert!(text.contains("YOU WIN!"));
    }

    #[test]
    fn test_selected_tile_uses_selection_colour() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let mut s = snap([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        s.swap_mode = true;
        s.selected = Some((0, 1));
        let fb = view.render(&s, &SessionView::default(), vp);

        let layout = view.layout(vp);
        let (x, y) = view.tile_origin(&layout, 0, 1);
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(fb.get(x + 1, y + 1).map(|c| c.style.bg), Some(palette.selection));
        assert!(screen_text(&fb).contains("Pick a second tile to swap"));
    }

    #[test]
    fn test_notice_is_shown() {
        let view = GameView::default();
        let session = SessionView {
            notice: Some("No swaps left!"),
            ..SessionView::default()
        };
        let fb = view.render(&snap([[0; 4]; 4]), &session, Viewport::new(80, 30));
        assert!(screen_text(&fb).contains("No swaps left!"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&snap([[2; 4]; 4]), &SessionView::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
