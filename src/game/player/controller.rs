// Player controller
//
// Owns the character's state machine, physics body, and animation player,
// and wires them to the shared physics world and input service each tick.
// Animation events from the host engine enter here, either typed or by the
// string name authored on the clip.

use log::{info, warn};

use crate::engine::input::GameInput;
use crate::engine::physics::PhysicsWorld;
use crate::game::player::animation::AnimationPlayer;
use crate::game::player::body::CharacterBody;
use crate::game::player::events::AnimationEventType;
use crate::game::player::fsm::{FsmError, PlayerFsm};
use crate::game::player::owner::PlayerView;
use crate::game::player::states::{build_player_fsm, PlayerStateId};
use crate::game::player::tuning::CharacterTuning;

pub struct PlayerController {
    fsm: PlayerFsm,
    body: CharacterBody,
    animation: AnimationPlayer,
}

impl PlayerController {
    /// Spawn the player at (x, y). The machine is built but not started;
    /// call `start` once the first input snapshot exists.
    pub fn new(
        world: &mut PhysicsWorld,
        x: f32,
        y: f32,
        tuning: CharacterTuning,
    ) -> Result<Self, FsmError> {
        Ok(Self {
            fsm: build_player_fsm()?,
            body: CharacterBody::spawn(world, x, y, tuning),
            animation: AnimationPlayer::with_player_animations(),
        })
    }

    /// Start the state machine, in Idle when standing on ground and in
    /// JumpFall when spawned in the air.
    pub fn start(
        &mut self,
        world: &mut PhysicsWorld,
        input: &GameInput,
        now: f32,
    ) -> Result<(), FsmError> {
        let initial = if self.body.check_grounded(world) {
            PlayerStateId::Idle
        } else {
            PlayerStateId::JumpFall
        };
        info!("player spawned in state {:?}", initial);

        let mut view = PlayerView {
            world,
            body: &mut self.body,
            animation: &mut self.animation,
            input,
            now,
        };
        self.fsm.start(initial, &mut view)
    }

    /// Per-frame tick: state transitions and animation playback.
    pub fn update(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32, dt: f32) {
        let mut view = PlayerView {
            world,
            body: &mut self.body,
            animation: &mut self.animation,
            input,
            now,
        };
        self.fsm.update(&mut view);
        self.animation.update(dt);
    }

    /// Per-physics-step tick: ground probe refresh, state movement, and the
    /// kinematic depth axis.
    pub fn fixed_update(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32, dt: f32) {
        self.body.check_grounded(world);
        let mut view = PlayerView {
            world,
            body: &mut self.body,
            animation: &mut self.animation,
            input,
            now,
        };
        self.fsm.fixed_update(&mut view);
        self.body.integrate_depth(dt);
    }

    /// Route a typed animation event to the current state. Returns true if
    /// the state consumed it.
    pub fn handle_animation_event(
        &mut self,
        world: &mut PhysicsWorld,
        input: &GameInput,
        now: f32,
        event: AnimationEventType,
    ) -> bool {
        let mut view = PlayerView {
            world,
            body: &mut self.body,
            animation: &mut self.animation,
            input,
            now,
        };
        self.fsm.dispatch(&mut view, event)
    }

    /// Route an animation event by its authored name (case-insensitive).
    /// Unknown names are logged and dropped.
    pub fn handle_animation_event_name(
        &mut self,
        world: &mut PhysicsWorld,
        input: &GameInput,
        now: f32,
        name: &str,
    ) -> bool {
        match AnimationEventType::from_name(name) {
            Some(event) => self.handle_animation_event(world, input, now, event),
            None => {
                warn!("unknown animation event {name:?} dropped");
                false
            }
        }
    }

    // Named callbacks matching how older clip data addresses the receiver.
    // Each is an alias for a typed event.

    pub fn on_combo_window_open(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32) {
        self.handle_animation_event(world, input, now, AnimationEventType::WindowOpen);
    }

    pub fn on_combo_window_close(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32) {
        self.handle_animation_event(world, input, now, AnimationEventType::WindowClose);
    }

    pub fn on_attack_animation_end(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32) {
        self.handle_animation_event(world, input, now, AnimationEventType::SkillEnd);
    }

    pub fn on_jump_attack_end(&mut self, world: &mut PhysicsWorld, input: &GameInput, now: f32) {
        self.handle_animation_event(world, input, now, AnimationEventType::SkillEnd);
    }

    pub fn current_state(&self) -> Option<PlayerStateId> {
        self.fsm.current_state_id()
    }

    pub fn body(&self) -> &CharacterBody {
        &self.body
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }
}
