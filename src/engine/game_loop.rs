/// Game loop timing and control
///
/// Fixed timestep updates with variable-rate frames: logic and physics step
/// at a constant rate while frames run as fast as the host allows. Also the
/// crate's monotonic game-time source (`now_secs`), which feeds the input
/// detectors and state timers.
use std::time::{Duration, Instant};

/// Target physics/update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of physics steps per frame to prevent spiral of death
const MAX_PHYSICS_STEPS: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time for fixed timestep updates
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Whether the game is paused
    paused: bool,

    /// Current frame number
    frame_count: u64,

    /// Delta time of the last frame (seconds)
    frame_delta: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            paused: false,
            frame_count: 0,
            frame_delta: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed updates to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.frame_delta = frame_time.as_secs_f32();

        // If paused, don't accumulate time for updates
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }
        updates
    }

    /// Get the fixed timestep for physics updates (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Delta time of the last frame (seconds)
    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    /// Monotonic game time in seconds since the loop started
    pub fn now_secs(&self) -> f32 {
        Instant::now().duration_since(self.start_time).as_secs_f32()
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume the game
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_pause_resume() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();
        assert!(game_loop.is_paused());
        game_loop.resume();
        assert!(!game_loop.is_paused());

        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
    }

    #[test]
    fn test_paused_no_updates() {
        let mut game_loop = GameLoop::new();
        game_loop.pause();

        thread::sleep(Duration::from_millis(50));

        let updates = game_loop.begin_frame();
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new();
        game_loop.begin_frame();
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_now_secs_is_monotonic() {
        let game_loop = GameLoop::new();
        let a = game_loop.now_secs();
        thread::sleep(Duration::from_millis(5));
        let b = game_loop.now_secs();
        assert!(b > a);
    }

    #[test]
    fn test_max_physics_steps_limit() {
        let mut game_loop = GameLoop::new();

        // Simulate a very long frame (300ms would allow 18 updates)
        thread::sleep(Duration::from_millis(300));

        let updates = game_loop.begin_frame();
        assert!(updates <= MAX_PHYSICS_STEPS);
    }
}
