use log::debug;

use crate::engine::input::Action;
use crate::game::player::body::AttackKind;
use crate::game::player::events::AnimationEventType;
use crate::game::player::fsm::{EventResponse, PlayerState};
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::PlayerStateId;

/// Clips for each combo stage, in order.
pub const COMBO_ANIMATIONS: [&str; 3] = ["Attack1", "Attack2", "Attack3"];

/// Ground attack combo, driven by animation events.
///
/// Each swing's clip carries a `WindowOpen`/`WindowClose` pair. An attack
/// press (or a held attack button) inside the window is buffered; when the
/// window closes, a buffered press advances to the next swing, otherwise the
/// combo drops back to idle. `SkillEnd` on the last clip also exits. The
/// state never counts down its own timers; all timing lives in the clips.
pub struct AttackState {
    combo_index: usize,
    window_open: bool,
    buffered: bool,
}

impl AttackState {
    pub fn new() -> Self {
        Self {
            combo_index: 0,
            window_open: false,
            buffered: false,
        }
    }
}

impl Default for AttackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState for AttackState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        self.combo_index = 0;
        self.window_open = false;
        self.buffered = false;
        ctx.restart_animation(COMBO_ANIMATIONS[0]);
    }

    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        if self.window_open {
            // Jump cancels the combo during the window
            if ctx.action_triggered(Action::Jump) {
                return Some(PlayerStateId::JumpUp);
            }
            if ctx.action_triggered(Action::Attack) || ctx.action_held(Action::Attack) {
                self.buffered = true;
            }
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        let input_x = ctx.movement_vector().x;
        ctx.attack_move(input_x, AttackKind::Ground);
        None
    }

    fn on_exit(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.stop_moving();
    }

    fn on_event(
        &mut self,
        ctx: &mut dyn PlayerOwner,
        event: AnimationEventType,
    ) -> EventResponse {
        match event {
            AnimationEventType::WindowOpen => {
                self.window_open = true;
                EventResponse::Handled
            }
            AnimationEventType::WindowClose => {
                self.window_open = false;
                if self.buffered && self.combo_index < COMBO_ANIMATIONS.len() - 1 {
                    self.combo_index += 1;
                    self.buffered = false;
                    debug!("combo advances to stage {}", self.combo_index + 1);
                    ctx.restart_animation(COMBO_ANIMATIONS[self.combo_index]);
                    EventResponse::Handled
                } else {
                    EventResponse::Transition(PlayerStateId::Idle)
                }
            }
            AnimationEventType::SkillEnd => EventResponse::Transition(PlayerStateId::Idle),
            _ => EventResponse::Unhandled,
        }
    }
}
