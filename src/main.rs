use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, GameInput, InputManager};
use engine::physics::{body::presets, PhysicsWorld};
use game::player::{CharacterTuning, PlayerController};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Brawler...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Brawler")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // World setup: flat ground at y=0 and the player standing on it
    let mut physics = PhysicsWorld::new();
    physics.add_static_collider(presets::ground_collider(0.0, 100.0, 0.5));

    let tuning = CharacterTuning::default();
    let spawn_y = tuning.height / 2.0 + 0.02;
    let mut player = PlayerController::new(&mut physics, 0.0, spawn_y, tuning)
        .map_err(|e| anyhow::anyhow!("player state machine setup failed: {e}"))?;

    let mut input_manager = InputManager::new(1);
    let mut game_input = GameInput::new();
    let mut game_loop = GameLoop::new();

    player
        .start(&mut physics, &game_input, game_loop.now_secs())
        .map_err(|e| anyhow::anyhow!("player state machine start failed: {e}"))?;

    let mut last_state = player.current_state();

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::KeyboardInput { event, .. },
                    ..
                } => {
                    input_manager.process_keyboard_event(&event);
                }
                Event::WindowEvent {
                    event: WindowEvent::MouseInput { button, state, .. },
                    ..
                } => {
                    input_manager.process_mouse_button(button, state);
                }
                Event::WindowEvent {
                    event: WindowEvent::Focused(false),
                    ..
                } => {
                    // Drop stale presses so nothing stays "held" while unfocused
                    input_manager.reset_all();
                    game_input.reset();
                }
                Event::AboutToWait => {
                    if input_manager.any_player_just_pressed(Action::Menu) {
                        info!("Menu requested, shutting down...");
                        elwt.exit();
                        return;
                    }
                    if input_manager.any_player_just_pressed(Action::Pause) {
                        game_loop.toggle_pause();
                    }

                    let updates = game_loop.begin_frame();
                    let now = game_loop.now_secs();

                    if let Some(raw) = input_manager.player(0) {
                        game_input.update(raw, now);
                    }

                    for _ in 0..updates {
                        player.fixed_update(
                            &mut physics,
                            &game_input,
                            now,
                            game_loop.fixed_timestep(),
                        );
                        physics.step();
                    }

                    if !game_loop.is_paused() {
                        player.update(&mut physics, &game_input, now, game_loop.frame_delta());
                    }

                    let state = player.current_state();
                    if state != last_state {
                        info!("player state: {:?} -> {:?}", last_state, state);
                        last_state = state;
                    }

                    input_manager.update();
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
