// Character movement body
//
// Wraps the player's rigid body and collider and exposes the movement verbs
// the states use. The physics plane is X (screen horizontal) / Y (vertical);
// the beat-em-up depth axis is integrated here kinematically, outside the
// simulation, since depth movement never collides with anything.

use glam::{Vec2, Vec3};
use rapier2d::prelude::*;

use crate::engine::physics::{ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::game::player::tuning::CharacterTuning;

/// Which attack's forward drift is being applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    /// Ground combo swing
    Ground,
    /// Diving attack from the air
    Dive,
}

/// The player's physical presence in the world
pub struct CharacterBody {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    tuning: CharacterTuning,
    /// Facing direction along X: 1.0 = right, -1.0 = left
    facing: f32,
    /// Depth-axis position (toward/away from the camera)
    depth: f32,
    /// Depth-axis velocity, integrated in `integrate_depth`
    depth_vel: f32,
    /// Cached result of the last ground probe
    grounded: bool,
}

impl CharacterBody {
    /// Spawn the character's rigid body and collider into the world
    pub fn spawn(world: &mut PhysicsWorld, x: f32, y: f32, tuning: CharacterTuning) -> Self {
        let body = world.add_rigid_body(crate::engine::physics::body::presets::player_body(x, y));
        let collider = world.add_collider(
            crate::engine::physics::body::presets::player_collider(tuning.width, tuning.height),
            body,
        );

        Self {
            body,
            collider,
            tuning,
            facing: 1.0,
            depth: 0.0,
            depth_vel: 0.0,
            grounded: false,
        }
    }

    pub fn tuning(&self) -> &CharacterTuning {
        &self.tuning
    }

    /// Facing direction along X: 1.0 = right, -1.0 = left
    pub fn facing(&self) -> f32 {
        self.facing
    }

    /// Whether the character reads as facing left (for sprite flipping)
    pub fn is_facing_left(&self) -> bool {
        self.facing < 0.0
    }

    /// Turn to face the direction of horizontal input, if any
    pub fn face_input(&mut self, input_x: f32) {
        let sign = crate::core::math::axis_sign(input_x);
        if sign != 0.0 {
            self.facing = sign;
        }
    }

    /// Cached grounded flag from the last `check_grounded` probe
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Probe for ground below the collider and refresh the cached flag.
    ///
    /// Casts a short ray down from just under the collider's bottom edge,
    /// ignoring the character's own body.
    pub fn check_grounded(&mut self, world: &PhysicsWorld) -> bool {
        let Some(body) = world.get_rigid_body(self.body) else {
            self.grounded = false;
            return false;
        };

        let pos = *body.translation();
        let bottom = pos.y - self.tuning.height / 2.0;
        let filter = QueryFilter::default().exclude_rigid_body(self.body);

        self.grounded = world
            .raycast(
                vector![pos.x, bottom + 0.01],
                vector![0.0, -1.0],
                self.tuning.ground_check_distance + 0.01,
                true,
                filter,
            )
            .is_some();
        self.grounded
    }

    /// World position as (x, y, depth)
    pub fn position(&self, world: &PhysicsWorld) -> Vec3 {
        let pos = world
            .get_rigid_body(self.body)
            .map(|b| *b.translation())
            .unwrap_or_default();
        Vec3::new(pos.x, pos.y, self.depth)
    }

    /// Current velocity as (x, y, depth)
    pub fn velocity(&self, world: &PhysicsWorld) -> Vec3 {
        let vel = world
            .get_rigid_body(self.body)
            .map(|b| *b.linvel())
            .unwrap_or_default();
        Vec3::new(vel.x, vel.y, self.depth_vel)
    }

    /// Ground movement: full speed on both screen axes.
    ///
    /// `input` is the movement vector (x = screen horizontal, y = depth).
    /// Depth speed is scaled up so diagonal travel reads evenly on screen.
    pub fn move_grounded(&mut self, world: &mut PhysicsWorld, input: Vec2) {
        self.face_input(input.x);
        let speed = self.tuning.move_speed;
        self.set_horizontal_velocity(world, input.x * speed);
        self.depth_vel = input.y * speed * self.tuning.depth_speed_factor;
    }

    /// Air control: reduced speed, no turning restrictions
    pub fn air_move(&mut self, world: &mut PhysicsWorld, input: Vec2) {
        self.face_input(input.x);
        let speed = self.tuning.air_move_speed;
        self.set_horizontal_velocity(world, input.x * speed);
        self.depth_vel = input.y * speed * self.tuning.depth_speed_factor;
    }

    /// Zero horizontal and depth velocity, leaving vertical motion alone
    pub fn stop_moving(&mut self, world: &mut PhysicsWorld) {
        self.set_horizontal_velocity(world, 0.0);
        self.depth_vel = 0.0;
    }

    /// Forward drift during an attack, along the facing direction.
    ///
    /// Holding into the swing lengthens the step (x1.5); holding away
    /// plants the character (x0); no input gives the base drift (x1.0).
    /// The facing direction itself never changes mid-attack.
    pub fn attack_move(&mut self, world: &mut PhysicsWorld, input_x: f32, kind: AttackKind) {
        let multiplier = if input_x == 0.0 {
            1.0
        } else if input_x * self.facing > 0.0 {
            1.5
        } else {
            0.0
        };

        let base = match kind {
            AttackKind::Ground => self.tuning.attack_move_speed,
            AttackKind::Dive => {
                self.tuning.attack_move_speed * self.tuning.jump_attack_speed_multiplier
            }
        };

        self.set_horizontal_velocity(world, self.facing * base * multiplier);
        self.depth_vel = 0.0;
    }

    /// Launch straight up at jump velocity, shedding any horizontal motion
    pub fn jump(&mut self, world: &mut PhysicsWorld) {
        if let Some(body) = world.get_rigid_body_mut(self.body) {
            body.set_linvel(vector![0.0, self.tuning.jump_force], true);
        }
        self.depth_vel = 0.0;
    }

    /// Slam downward at the diving attack's fall speed
    pub fn fast_fall(&mut self, world: &mut PhysicsWorld) {
        if let Some(body) = world.get_rigid_body_mut(self.body) {
            let vel = *body.linvel();
            body.set_linvel(vector![vel.x, -self.tuning.jump_attack_fall_speed], true);
        }
    }

    /// Advance the kinematic depth axis by one timestep
    pub fn integrate_depth(&mut self, dt: f32) {
        self.depth += self.depth_vel * dt;
    }

    pub fn body_handle(&self) -> RigidBodyHandle {
        self.body
    }

    pub fn collider_handle(&self) -> ColliderHandle {
        self.collider
    }

    fn set_horizontal_velocity(&mut self, world: &mut PhysicsWorld, vx: f32) {
        if let Some(body) = world.get_rigid_body_mut(self.body) {
            let vel = *body.linvel();
            body.set_linvel(vector![vx, vel.y], true);
        }
    }
}
