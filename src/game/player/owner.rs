// The seam between states and the character they drive
//
// States never touch the physics world, animation player, or input service
// directly; they see their owner through this trait. That keeps the state
// structs free of borrows (the machine's context is `dyn PlayerOwner`) and
// lets the transition logic be tested against a mock owner.

use glam::{Vec2, Vec3};

use crate::engine::input::{Action, GameInput};
use crate::engine::physics::PhysicsWorld;
use crate::game::player::animation::AnimationPlayer;
use crate::game::player::body::{AttackKind, CharacterBody};

/// Everything a player state can observe or do to its character.
pub trait PlayerOwner {
    // ---- animation ----

    /// Play a clip, restarting only if it differs from the current one
    fn play_animation(&mut self, name: &str);

    /// Play a clip from frame zero regardless of what is playing
    fn restart_animation(&mut self, name: &str);

    // ---- movement ----

    fn move_grounded(&mut self, input: Vec2);
    fn air_move(&mut self, input: Vec2);
    fn stop_moving(&mut self);
    fn attack_move(&mut self, input_x: f32, kind: AttackKind);
    fn jump(&mut self);
    fn fast_fall(&mut self);

    // ---- queries ----

    /// Velocity as (x, vertical, depth)
    fn velocity(&self) -> Vec3;

    /// Cached grounded flag from the last probe
    fn is_grounded(&self) -> bool;

    /// Probe for ground now and refresh the cached flag
    fn check_grounded(&mut self) -> bool;

    // ---- input ----

    fn action_triggered(&self, action: Action) -> bool;
    fn action_held(&self, action: Action) -> bool;
    fn movement_vector(&self) -> Vec2;
    fn has_move_input(&self) -> bool;

    // ---- time ----

    /// Monotonic game time in seconds
    fn time(&self) -> f32;
}

/// Borrowed view over the real character, built fresh for each tick.
///
/// Movement methods keep the sprite flip in sync with the body's facing, so
/// states never manage facing themselves.
pub struct PlayerView<'a> {
    pub world: &'a mut PhysicsWorld,
    pub body: &'a mut CharacterBody,
    pub animation: &'a mut AnimationPlayer,
    pub input: &'a GameInput,
    pub now: f32,
}

impl PlayerView<'_> {
    fn sync_facing(&mut self) {
        self.animation.set_flip_horizontal(self.body.is_facing_left());
    }
}

impl PlayerOwner for PlayerView<'_> {
    fn play_animation(&mut self, name: &str) {
        self.animation.play(name);
    }

    fn restart_animation(&mut self, name: &str) {
        self.animation.play_from_start(name);
    }

    fn move_grounded(&mut self, input: Vec2) {
        self.body.move_grounded(self.world, input);
        self.sync_facing();
    }

    fn air_move(&mut self, input: Vec2) {
        self.body.air_move(self.world, input);
        self.sync_facing();
    }

    fn stop_moving(&mut self) {
        self.body.stop_moving(self.world);
    }

    fn attack_move(&mut self, input_x: f32, kind: AttackKind) {
        self.body.attack_move(self.world, input_x, kind);
    }

    fn jump(&mut self) {
        self.body.jump(self.world);
    }

    fn fast_fall(&mut self) {
        self.body.fast_fall(self.world);
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity(self.world)
    }

    fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    fn check_grounded(&mut self) -> bool {
        self.body.check_grounded(self.world)
    }

    fn action_triggered(&self, action: Action) -> bool {
        self.input.triggered(action)
    }

    fn action_held(&self, action: Action) -> bool {
        self.input.held(action)
    }

    fn movement_vector(&self) -> Vec2 {
        self.input.movement_vector()
    }

    fn has_move_input(&self) -> bool {
        self.input.has_move_input()
    }

    fn time(&self) -> f32 {
        self.now
    }
}
