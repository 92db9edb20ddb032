use anyhow::anyhow;
use log::{info, warn};
use menu_overlay::gui::{MenuCommand, MenuOverlay, SceneRoot};
use menu_overlay::render::render_overlay;
use menu_overlay::text::draw_text;
use menu_overlay::OverlayConfig;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

// Logical resolution; SDL scales mouse coordinates to match
const GAME_WIDTH: u32 = 800;
const GAME_HEIGHT: u32 = 600;

/// What the stand-in game loop is doing
#[derive(Debug, Clone, Copy, PartialEq)]
enum GameState {
    Playing,
    Paused,
    GameOver,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OverlayConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load overlay config, using defaults: {}", e);
        OverlayConfig::default()
    });

    let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
    let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

    let window = video_subsystem
        .window("Menu Overlay", GAME_WIDTH, GAME_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| anyhow!(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| anyhow!(e.to_string()))?;
    canvas
        .set_logical_size(GAME_WIDTH, GAME_HEIGHT)
        .map_err(|e| anyhow!(e.to_string()))?;

    let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

    // Menu buttons push commands here; the loop drains them after input
    let commands: Rc<RefCell<VecDeque<MenuCommand>>> = Rc::new(RefCell::new(VecDeque::new()));
    let queue = || {
        let sink = Rc::clone(&commands);
        move |command: MenuCommand| sink.borrow_mut().push_back(command)
    };

    let mut overlay = MenuOverlay::new(SceneRoot::new(
        (GAME_WIDTH, GAME_HEIGHT),
        config.style.layout.clone(),
    ));
    let mut game_state = GameState::Playing;
    let mut score: i64 = 0;

    println!("Controls:");
    println!("P / ESC - Pause");
    println!("G - End the run (game over screen)");
    println!("Menus: Up/W, Down/S, Enter/Space, ESC, or the mouse");

    'running: loop {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }

            if overlay.is_visible() {
                if let Some(input) = config.key_bindings.translate_event(&event) {
                    overlay.handle_input(input);
                }
                continue;
            }

            match event {
                Event::KeyDown {
                    keycode: Some(Keycode::Escape | Keycode::P),
                    repeat: false,
                    ..
                } => {
                    game_state = GameState::Paused;
                    overlay.show_pause_menu(queue());
                }
                Event::KeyDown {
                    keycode: Some(Keycode::G),
                    repeat: false,
                    ..
                } => {
                    game_state = GameState::GameOver;
                    overlay.show_game_over_menu(queue(), score);
                }
                _ => {}
            }
        }

        let pending: Vec<MenuCommand> = commands.borrow_mut().drain(..).collect();
        for command in pending {
            match command {
                MenuCommand::Resume => game_state = GameState::Playing,
                MenuCommand::Restart => {
                    info!("Restarting (score was {})", score);
                    score = 0;
                    game_state = GameState::Playing;
                }
                MenuCommand::Settings => overlay.show_settings_menu(queue()),
                MenuCommand::MainMenu => {
                    // No title screen in this demo; start over instead
                    info!("Main menu requested");
                    score = 0;
                    game_state = GameState::Playing;
                }
                MenuCommand::Exit => break 'running,
            }
        }

        if game_state == GameState::Playing {
            score += 7;
        }

        canvas.set_draw_color(Color::RGB(40, 60, 90));
        canvas.clear();
        draw_text(
            &mut canvas,
            &format!("Score: {}", score),
            16,
            16,
            Color::RGB(255, 255, 255),
            3,
        )
        .map_err(|e| anyhow!(e))?;
        render_overlay(&mut canvas, overlay.root(), &config.style).map_err(|e| anyhow!(e))?;
        canvas.present();

        std::thread::sleep(Duration::from_millis(16));
    }

    info!("Exiting with score {}", score);
    Ok(())
}
