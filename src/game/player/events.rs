// Animation event vocabulary
//
// Events are authored on animation clips in the host engine and fired at
// specific frames. The controller routes them into the state machine, so
// combat timing (combo windows, clip ends, damage frames) lives in
// animation data rather than in hardcoded timers.

use std::fmt;

/// Events fired from animation clip keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationEventType {
    /// Combo input window opens (attack can be buffered)
    WindowOpen,
    /// Combo input window closes (buffered attack resolves or combo drops)
    WindowClose,
    /// An attack or skill clip has reached its end
    SkillEnd,
    /// The frame on which the attack deals damage
    DamageFrame,
    /// Invincibility frames begin
    InvincibleStart,
    /// Invincibility frames end
    InvincibleEnd,
    /// Spawn a visual effect at the character
    SpawnEffect,
    /// Play a sound cue
    PlaySound,
}

impl AnimationEventType {
    /// Canonical name of the event, as authored on clips
    pub fn name(self) -> &'static str {
        match self {
            Self::WindowOpen => "WindowOpen",
            Self::WindowClose => "WindowClose",
            Self::SkillEnd => "SkillEnd",
            Self::DamageFrame => "DamageFrame",
            Self::InvincibleStart => "InvincibleStart",
            Self::InvincibleEnd => "InvincibleEnd",
            Self::SpawnEffect => "SpawnEffect",
            Self::PlaySound => "PlaySound",
        }
    }

    /// Parse an event name as it appears in animation data.
    ///
    /// Case-insensitive so clip authoring tools that lowercase identifiers
    /// still route correctly. Returns `None` for unknown names; the caller
    /// decides whether to warn or drop.
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [AnimationEventType; 8] = [
            AnimationEventType::WindowOpen,
            AnimationEventType::WindowClose,
            AnimationEventType::SkillEnd,
            AnimationEventType::DamageFrame,
            AnimationEventType::InvincibleStart,
            AnimationEventType::InvincibleEnd,
            AnimationEventType::SpawnEffect,
            AnimationEventType::PlaySound,
        ];
        ALL.into_iter().find(|ev| ev.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AnimationEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
