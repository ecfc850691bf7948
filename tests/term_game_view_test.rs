use blockfall::core::{Board, GameConfig, GameSession, GameSnapshot};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::GameAction;

fn snapshot() -> GameSnapshot {
    GameSession::with_seed(GameConfig::default(), 1)
        .unwrap()
        .snapshot()
}

fn text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the 10x20 board is 20x20 glyphs, 22x22 with
    // the border.
    let fb = view.render(&snapshot(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_follows_board_size() {
    let game = GameSession::with_seed(GameConfig::new(6, 8), 1).unwrap();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), Viewport::new(14, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[19][0] = 5;
    let rows: Vec<&[u8]> = rows.iter().map(|r| r.as_slice()).collect();
    let board = Board::from_rows(&rows).unwrap();
    let game = GameSession::with_board(GameConfig::default(), board, 1).unwrap();

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_and_ghost() {
    let snap = snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (x, y, _) in snap.active_cells() {
        let glyph = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '█');
    }
    for (x, y) in snap.ghost_cells() {
        let glyph = fb.get(1 + x as u16 * 2, 1 + y as u16).unwrap();
        assert_eq!(glyph.ch, '░');
        assert!(glyph.style.dim);
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = snapshot();
    snap.score = 1234;
    snap.best_score = 1234;
    snap.new_best = true;
    snap.level = 2;
    snap.lines = 13;
    snap.lines_to_next_level = 7;
    snap.elapsed_seconds = 125;

    let fb = GameView::default().render(&snap, Viewport::new(60, 30));
    let all = text(&fb);

    for needle in ["SCORE", "1234", "BEST", "NEW!", "LEVEL", "LINES", "(7 to go)", "TIME", "2:05", "NEXT", "HOLD"] {
        assert!(all.contains(needle), "missing {:?}", needle);
    }
}

#[test]
fn term_view_hides_panel_when_narrow() {
    let fb = GameView::default().render(&snapshot(), Viewport::new(30, 22));
    assert!(!text(&fb).contains("SCORE"));
}

#[test]
fn term_view_overlays() {
    let mut game = GameSession::with_seed(GameConfig::default(), 1).unwrap();
    game.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));
    assert!(text(&fb).contains("PAUSED"));

    let mut snap = game.snapshot();
    snap.paused = false;
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(60, 24));
    let all = text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("PAUSED"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let view = GameView::default();
    let snap = snapshot();
    let mut fb = FrameBuffer::new(1, 1);
    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 24)));
}

#[test]
fn term_view_handles_largest_board_and_scale() {
    let max = blockfall::types::MAX_BOARD_SIDE;
    let game = GameSession::with_seed(GameConfig::new(max, max), 1).unwrap();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));

    // 10 cells x 7000 columns does not fit in u16; the frame saturates.
    let fb = GameView::new(7000, 1).render(&snapshot(), Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));
}
