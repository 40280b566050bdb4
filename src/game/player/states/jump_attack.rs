use crate::game::player::body::AttackKind;
use crate::game::player::events::AnimationEventType;
use crate::game::player::fsm::{EventResponse, PlayerState};
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::PlayerStateId;

/// Minimum time in the state before the landing fallback may fire.
///
/// The primary exit is the clip's `SkillEnd` event; the timer only rescues
/// the character if that event never arrives (e.g. the dive starts so close
/// to the ground that the clip gets interrupted).
pub const MIN_STATE_DURATION: f32 = 1.0;

/// Diving attack: slams straight down and strikes on landing.
pub struct JumpAttackState {
    entered_at: f32,
}

impl JumpAttackState {
    pub fn new() -> Self {
        Self { entered_at: 0.0 }
    }
}

impl Default for JumpAttackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState for JumpAttackState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        self.entered_at = ctx.time();
        ctx.restart_animation("JumpAttack");
        ctx.fast_fall();
    }

    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        if ctx.is_grounded() && ctx.time() - self.entered_at >= MIN_STATE_DURATION {
            return Some(PlayerStateId::Idle);
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        let input_x = ctx.movement_vector().x;
        ctx.attack_move(input_x, AttackKind::Dive);
        None
    }

    fn on_exit(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.stop_moving();
    }

    fn on_event(
        &mut self,
        _ctx: &mut dyn PlayerOwner,
        event: AnimationEventType,
    ) -> EventResponse {
        match event {
            AnimationEventType::SkillEnd => EventResponse::Transition(PlayerStateId::Idle),
            _ => EventResponse::Unhandled,
        }
    }
}
