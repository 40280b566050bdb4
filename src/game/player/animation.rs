// Character animation playback
//
// Stands in for the host engine's animator: named clips stepped by frame
// time, plus the horizontal flip flag the states drive. Animation *events*
// (combo windows, clip ends) are authored on clips in the host engine and
// arrive through the controller's event entry points, not from here.

use std::collections::HashMap;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "Idle", "Attack1")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once, holds the last frame)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for a character
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    frame_timer: f32,
    playing: bool,
    /// Whether the sprite should be flipped horizontally (facing left)
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Create an animation player with the player character's clip set
    pub fn with_player_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("Idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("Run", 8, 12.0));
        player.add_animation(AnimationClip::looping("Jump", 4, 10.0));
        player.add_animation(AnimationClip::looping("Fall", 4, 10.0));
        // Combo swings and the dive are one-shots; the combo window events
        // are keyed to their frames on the engine side
        player.add_animation(AnimationClip::one_shot("Attack1", 6, 12.0));
        player.add_animation(AnimationClip::one_shot("Attack2", 6, 12.0));
        player.add_animation(AnimationClip::one_shot("Attack3", 8, 12.0));
        player.add_animation(AnimationClip::one_shot("JumpAttack", 8, 12.0));

        player.play("Idle");
        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name; restarts only when the clip changes
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's already current
    pub fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    /// Set horizontal flip state (true = facing left)
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Update the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Hold the last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                }
            }
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the current animation has finished (non-looping clips only)
    pub fn is_finished(&self) -> bool {
        if let Some(clip) = self.animations.get(&self.current_animation) {
            !clip.looping && self.current_frame >= clip.frame_count - 1 && !self.playing
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_duration() {
        let clip = AnimationClip::looping("Run", 6, 10.0);
        assert_eq!(clip.total_duration(), 0.6); // 6 frames * 0.1s
    }

    #[test]
    fn test_play_restarts_only_on_change() {
        let mut player = AnimationPlayer::with_player_animations();
        assert_eq!(player.current_animation(), "Idle");

        player.update(0.15);
        let frame = player.current_frame();
        assert!(frame > 0);

        // Same clip: no restart
        player.play("Idle");
        assert_eq!(player.current_frame(), frame);

        // Different clip: restart from frame 0
        player.play("Run");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_play_from_start_restarts_same_clip() {
        let mut player = AnimationPlayer::with_player_animations();
        player.play("Attack1");
        player.update(0.2);
        assert!(player.current_frame() > 0);

        player.play_from_start("Attack1");
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 3, 10.0));
        player.play("test");

        player.update(0.35); // 3.5 frames
        assert_eq!(player.current_frame(), 0); // Wrapped around
        assert!(player.is_playing());
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("test", 3, 10.0));
        player.play("test");

        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(!player.is_playing());
        assert!(player.is_finished());
    }

    #[test]
    fn test_flip_horizontal() {
        let mut player = AnimationPlayer::with_player_animations();
        assert!(!player.is_flipped_horizontal());
        player.set_flip_horizontal(true);
        assert!(player.is_flipped_horizontal());
    }
}
