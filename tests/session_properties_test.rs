use fruit_catcher::core::{FallingObject, GameConfig, GameState};
use fruit_catcher::types::{AudioCue, FruitKind, GameAction, HeldInput, ObjectKind, Size, Phase};

const OBJ: Size = Size::new(45, 45);
const APPLE: ObjectKind = ObjectKind::Fruit(FruitKind::Strawberry);

fn playing() -> GameState {
    let config = GameConfig {
        spawn_chance: 0.0,
        ..GameConfig::default()
    };
    let mut game = GameState::new(config, 1);
    game.apply_action(GameAction::Confirm, 0);
    game
}

fn drop_object(game: &mut GameState, kind: ObjectKind, x: i32, y: i32) {
    let obj = FallingObject::new(kind, x, y, OBJ, 3);
    game.session_mut().unwrap().insert_object(obj);
}

#[test]
fn basket_rests_centred_above_bottom_margin() {
    let game = playing();
    let p = game.session().unwrap().player();
    assert_eq!((p.x, p.y), (364, 536));
    assert_eq!(p.rect().bottom(), 600 - 10);
}

#[test]
fn catching_a_fruit_scores_and_cues() {
    let mut game = playing();
    drop_object(&mut game, APPLE, 380, 490);

    let events = game.update(HeldInput::NONE, 16);
    assert_eq!(events.caught, 1);
    assert_eq!(events.cues.as_slice(), &[AudioCue::Catch]);
    assert_eq!(game.score(), 10);
    assert!(game.session().unwrap().objects().is_empty());
}

#[test]
fn bomb_penalty_never_goes_below_zero() {
    let mut game = playing();
    drop_object(&mut game, ObjectKind::Bomb, 380, 490);

    let events = game.update(HeldInput::NONE, 16);
    assert_eq!(events.exploded, 1);
    assert_eq!(events.cues.as_slice(), &[AudioCue::Explosion]);
    assert_eq!(game.score(), 0);
}

#[test]
fn collisions_resolve_in_order_with_one_cue_per_kind() {
    let mut game = playing();
    drop_object(&mut game, APPLE, 370, 490);
    drop_object(&mut game, ObjectKind::Fruit(FruitKind::Kiwi), 390, 490);
    drop_object(&mut game, ObjectKind::Bomb, 380, 495);

    let events = game.update(HeldInput::NONE, 16);
    assert_eq!((events.caught, events.exploded), (2, 1));
    assert_eq!(events.cues.len(), 2);
    assert!(events.cues.contains(&AudioCue::Catch));
    assert!(events.cues.contains(&AudioCue::Explosion));
    assert_eq!(game.score(), 15);
}

#[test]
fn touching_edges_do_not_collide() {
    let mut game = playing();
    // After falling 3 px the bottom edge sits exactly on the basket top.
    drop_object(&mut game, APPLE, 380, 536 - 45 - 3);
    // Right edge exactly on the basket's left edge.
    drop_object(&mut game, APPLE, 364 - 45, 540);

    let events = game.update(HeldInput::NONE, 16);
    assert_eq!(events.caught, 0);
    assert_eq!(game.session().unwrap().objects().len(), 2);
}

#[test]
fn objects_below_the_screen_are_dropped_without_scoring() {
    let mut game = playing();
    drop_object(&mut game, APPLE, 0, 598);
    drop_object(&mut game, APPLE, 0, 596);

    let events = game.update(HeldInput::NONE, 16);
    assert_eq!(events.missed, 1);
    let left: Vec<i32> = game.session().unwrap().objects().iter().map(|o| o.y).collect();
    assert_eq!(left, vec![599]);

    let events = game.update(HeldInput::NONE, 32);
    assert_eq!(events.missed, 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn objects_fall_at_their_spawn_speed() {
    let mut game = playing();
    drop_object(&mut game, APPLE, 10, 0);
    for i in 1..=20u64 {
        game.update(HeldInput::NONE, i * 16);
    }
    assert_eq!(game.session().unwrap().objects()[0].y, 60);
    // The ramp only affects what spawns next.
    assert_eq!(game.current_speed(25_000), 5);
}

#[test]
fn basket_is_clamped_to_the_screen() {
    let mut game = playing();
    let left = HeldInput { left: true, right: false };
    let right = HeldInput { left: false, right: true };

    for i in 1..=100u64 {
        game.update(left, i * 16);
    }
    assert_eq!(game.session().unwrap().player().x, 0);

    for i in 101..=300u64 {
        game.update(right, i * 16);
    }
    assert_eq!(game.session().unwrap().player().x, 800 - 72);

    let both = HeldInput { left: true, right: true };
    game.update(both, 301 * 16);
    assert_eq!(game.session().unwrap().player().x, 800 - 72);
}

#[test]
fn long_random_session_keeps_invariants() {
    let mut game = GameState::new(GameConfig::default(), 4242);
    game.apply_action(GameAction::Confirm, 0);

    let mut now = 0;
    let mut prev_score = 0;
    let mut frame = 0u32;
    while game.phase() == Phase::Playing {
        now += 16;
        frame += 1;
        // Sweep back and forth.
        let held = if (frame / 90) % 2 == 0 {
            HeldInput { left: true, right: false }
        } else {
            HeldInput { left: false, right: true }
        };
        let events = game.update(held, now);
        let Some(session) = game.session() else { break };

        let score = session.score();
        if events.caught == 0 && events.exploded == 0 {
            assert_eq!(score, prev_score);
        }
        assert!(score <= prev_score + 10 * events.caught);
        assert_eq!(score % 5, 0);
        prev_score = score;

        let p = session.player();
        assert!(p.x >= 0 && p.x + p.size.w <= 800);
        for obj in session.objects() {
            assert!(obj.y <= 600);
            assert!(obj.x >= 0 && obj.x + obj.size.w <= 800);
            assert!(!obj.rect().intersects(&p.rect()));
        }
    }

    let stats = game.session().unwrap().stats();
    assert_eq!(
        stats.spawned,
        stats.caught + stats.exploded + stats.missed + game.session().unwrap().objects().len() as u32
    );
}
