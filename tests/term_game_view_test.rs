use tui_2048::core::{Game, Grid, SimpleRng};
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Palette, SessionView, Viewport};
use tui_2048::types::Theme;

fn find(fb: &FrameBuffer, needle: &str) -> Option<(u16, u16)> {
    (0..fb.height()).find_map(|y| {
        let text = fb.row_text(y);
        // Byte offset to column: rows may contain multi-byte glyphs.
        text.find(needle)
            .map(|byte| (text[..byte].chars().count() as u16, y))
    })
}

#[test]
fn test_term_view_draws_every_tile_value() {
    let game = Game::from_grid(
        Grid::from_rows([[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 0, 0], [0, 0, 0, 0]]),
        SimpleRng::new(1),
    );
    let view = GameView::default();
    let fb = view.render(&game.view(), &SessionView::default(), Viewport::new(80, 30));

    for value in ["16", "256", "512", "1024"] {
        assert!(find(&fb, value).is_some(), "missing {}", value);
    }
}

#[test]
fn test_term_view_click_round_trip() {
    // Clicking the centre of a drawn tile maps back to that tile.
    let game = Game::from_grid(
        Grid::from_rows([[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 4096, 0], [0, 0, 0, 0]]),
        SimpleRng::new(1),
    );
    let view = GameView::default();
    let vp = Viewport::new(100, 40);
    let fb = view.render(&game.view(), &SessionView::default(), vp);

    let (x, y) = find(&fb, "4096").expect("tile drawn");
    assert_eq!(view.hit_test(vp, x, y), Some((2, 2)));
}

#[test]
fn test_term_view_top_anchor_puts_title_on_first_row() {
    let game = Game::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.view(), &SessionView::default(), Viewport::new(80, 30));
    assert!(fb.row_text(0).contains("2048"));
}

#[test]
fn test_term_view_uses_theme_background() {
    let game = Game::new(1);
    let view = GameView::default();
    let session = SessionView {
        theme: Theme::Dark,
        ..SessionView::default()
    };
    let fb = view.render(&game.view(), &session, Viewport::new(80, 30));
    let dark = Palette::for_theme(Theme::Dark);
    assert_eq!(fb.get(0, 0).map(|c| c.style.bg), Some(dark.background));
}

#[test]
fn test_term_view_panel_shows_best_and_swaps() {
    let game = Game::new(1);
    let view = GameView::default();
    let session = SessionView {
        best_score: 90210,
        ..SessionView::default()
    };
    let fb = view.render(&game.view(), &session, Viewport::new(80, 30));
    assert!(find(&fb, "BEST").is_some());
    assert!(find(&fb, "90210").is_some());
    assert!(find(&fb, "SWAPS").is_some());
}

#[test]
fn test_term_view_render_into_reuses_buffer() {
    let game = Game::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&game.view(), &SessionView::default(), Viewport::new(60, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 25));
}
