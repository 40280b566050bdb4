// Movement and combat tuning for the player character

/// All speeds are world units per second; forces are applied as velocities
/// (the controller writes velocity directly rather than applying impulses).
#[derive(Debug, Clone)]
pub struct CharacterTuning {
    // Movement
    /// Ground movement speed
    pub move_speed: f32,
    /// Air-control movement speed
    pub air_move_speed: f32,
    /// Depth-axis speed compensation so toward/away movement reads the same
    /// on screen as left/right movement
    pub depth_speed_factor: f32,

    // Attack
    /// Base forward drift during ground combo swings
    pub attack_move_speed: f32,
    /// Horizontal multiplier for the diving attack relative to ground swings
    pub jump_attack_speed_multiplier: f32,

    // Jump
    /// Upward velocity applied on jump
    pub jump_force: f32,
    /// Downward velocity applied when the diving attack starts
    pub jump_attack_fall_speed: f32,

    // Ground probe
    /// Raycast length below the collider's bottom edge
    pub ground_check_distance: f32,

    // Dimensions (for the physics collider)
    pub width: f32,
    pub height: f32,
}

pub const BASE_TUNING: CharacterTuning = CharacterTuning {
    move_speed: 5.0,
    air_move_speed: 2.5,
    depth_speed_factor: 1.3,

    attack_move_speed: 0.5,
    jump_attack_speed_multiplier: 5.0,

    jump_force: 10.0,
    jump_attack_fall_speed: 15.0,

    ground_check_distance: 0.1,

    width: 1.0,
    height: 2.0,
};

impl Default for CharacterTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}
