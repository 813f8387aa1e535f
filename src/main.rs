//! Fruit Catcher terminal runner (default binary).
//!
//! `fruit-catcher` plays in the terminal; `fruit-catcher simulate ...` runs a
//! headless session and prints JSON lines instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use fruit_catcher::config::AppConfig;
use fruit_catcher::core::{GameSnapshot, GameState};
use fruit_catcher::event_log::{EventLog, LogEvent};
use fruit_catcher::input::{handle_key_event, should_quit, InputHandler};
use fruit_catcher::simulate::{parse_simulate_args, run_simulation};
use fruit_catcher::term::{
    AudioSink, BellAudio, FrameBuffer, FramePacer, GameView, NullAudio, RenderThrottle,
    SpriteSheet, TerminalRenderer, Viewport,
};
use fruit_catcher::types::{GameAction, Phase};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(cfg) = parse_simulate_args(&args)? {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run_simulation(&cfg, &mut out)?;
        return Ok(());
    }
    if let Some(arg) = args.first() {
        return Err(anyhow!("unknown argument: {} (expected `simulate`)", arg));
    }

    let app = AppConfig::from_env();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &AppConfig) -> Result<()> {
    let sheet = SpriteSheet::load(app.asset_dir.as_deref());
    let config = app.game_config(sheet.sizes());
    let view = GameView::new(sheet);

    let mut game = GameState::new(config, app.seed);
    let mut input = InputHandler::new().with_release_events(term.release_events());
    let mut audio: Box<dyn AudioSink> = if app.bell {
        Box::new(BellAudio::new(io::stdout()))
    } else {
        Box::new(NullAudio)
    };
    let mut log = EventLog::open(app.log_path.as_deref());

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut pacer = FramePacer::new(config.target_fps, now_ms());
    let mut throttle = RenderThrottle::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    loop {
        // Sleep in poll until the next frame is due, then drain the queue.
        let timeout = Duration::from_millis(pacer.timeout_ms(now_ms()));
        if event::poll(timeout)? {
            loop {
                match event::read()? {
                    Event::Key(key) => match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => {
                            on_key(&mut game, &mut input, &mut log, app, key, now_ms());
                        }
                        KeyEventKind::Release => input.handle_key_release(key.code),
                    },
                    Event::Resize(w, h) => {
                        viewport = Viewport::new(w, h);
                        term.invalidate();
                        throttle.force();
                    }
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if game.should_quit() {
            log.record(now_ms(), game.session_id(), game.score(), &LogEvent::Quit);
            return Ok(());
        }

        let t = now_ms();
        if !pacer.tick(t) {
            continue;
        }

        let events = game.update(input.held(t), t);
        audio.play_frame(&events);
        log.record_frame(t, &game, &events);

        game.snapshot_into(t, &mut snap);
        if throttle.should_render_snapshot(t, &snap) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

fn on_key(
    game: &mut GameState,
    input: &mut InputHandler,
    log: &mut EventLog,
    app: &AppConfig,
    key: KeyEvent,
    now_ms: u64,
) {
    if should_quit(key) {
        game.apply_action(GameAction::Quit, now_ms);
        return;
    }
    if input.handle_key_press(key.code, now_ms) {
        return;
    }
    // Auto-repeat of Enter/Esc must not toggle anything.
    if key.kind != KeyEventKind::Press {
        return;
    }
    let Some(action) = handle_key_event(key) else {
        return;
    };

    let before = game.phase();
    if !game.apply_action(action, now_ms) {
        return;
    }
    match (before, game.phase()) {
        (Phase::Menu, Phase::Playing) => {
            input.reset();
            log.record(
                now_ms,
                game.session_id(),
                0,
                &LogEvent::SessionStarted { seed: app.seed },
            );
        }
        (Phase::GameOver, Phase::Menu) => {
            log.record(now_ms, game.session_id(), 0, &LogEvent::ReturnedToMenu);
        }
        _ => {}
    }
}
