use fruit_catcher::core::{GameConfig, GameState};
use fruit_catcher::term::{FrameBuffer, GameView, SpriteSheet, Viewport};
use fruit_catcher::types::{GameAction, HeldInput, Phase};

fn text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn every_phase_renders_its_screen() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let mut game = GameState::new(GameConfig::default(), 11);

    let menu = text(&view.render(&game.snapshot(0), vp));
    assert!(menu.contains("Fruit Catcher"));
    assert!(menu.contains("Press ENTER to start"));

    game.apply_action(GameAction::Confirm, 0);
    let play = text(&view.render(&game.snapshot(0), vp));
    assert!(play.contains("Score: 0"));
    assert!(play.contains("Time: 60"));
    assert!(play.contains("Speed: 3"));

    game.apply_action(GameAction::Pause, 10);
    let paused = text(&view.render(&game.snapshot(1_500), vp));
    assert!(paused.contains("PAUSED"));
    assert!(paused.contains("Time: 59"));

    game.apply_action(GameAction::Pause, 2_000);
    game.update(HeldInput::NONE, 60_000);
    assert_eq!(game.phase(), Phase::GameOver);
    let over = text(&view.render(&game.snapshot(90_000), vp));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("Final Score: 0"));
    assert!(over.contains("Press Q to quit"));
}

#[test]
fn basket_is_drawn_near_the_bottom_of_the_field() {
    let view = GameView::default();
    let vp = Viewport::new(220, 60);
    let mut game = GameState::new(GameConfig::default(), 11);
    game.apply_action(GameAction::Confirm, 0);
    let snap = game.snapshot(0);

    let layout = view.layout(&snap, vp).unwrap();
    let fb = view.render(&snap, vp);
    // Basket body centre: pixel (400, 570).
    let (x, y) = layout.cell_at(400, 570).unwrap();
    assert_ne!(fb.get(x, y).unwrap().ch, ' ');
    assert!(y >= layout.y + layout.rows - 4);
}

#[test]
fn render_into_reuses_and_resizes_the_buffer() {
    let view = GameView::default();
    let snap = GameState::new(GameConfig::default(), 1).snapshot(0);
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    let first = fb.clone();

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!(fb, first);

    view.render_into(&snap, Viewport::new(120, 40), &mut fb);
    assert_eq!((fb.width(), fb.height()), (120, 40));
}

#[test]
fn file_sprites_are_used_when_present() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("basket.txt"), "UUUUUU\nUUUUUU\n").unwrap();

    let view = GameView::new(SpriteSheet::load(Some(dir.path())));
    assert_eq!(view.sheet().loaded_count(), 1);

    let vp = Viewport::new(220, 60);
    let mut game = GameState::new(GameConfig::default(), 11);
    game.apply_action(GameAction::Confirm, 0);
    let snap = game.snapshot(0);
    let layout = view.layout(&snap, vp).unwrap();
    let fb = view.render(&snap, vp);
    let (x, y) = layout.cell_at(400, 570).unwrap();
    assert_eq!(fb.get(x, y).unwrap().ch, 'U');
}
