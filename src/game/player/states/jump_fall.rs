use crate::engine::input::Action;
use crate::game::player::fsm::PlayerState;
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::PlayerStateId;

/// Falling, whether from a jump apex or from walking off a ledge.
pub struct JumpFallState;

impl PlayerState for JumpFallState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.play_animation("Fall");
    }

    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        // Attack wins over landing when both happen on the same frame
        if ctx.action_triggered(Action::Attack) {
            return Some(PlayerStateId::JumpAttack);
        }
        if ctx.is_grounded() {
            return Some(PlayerStateId::Idle);
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        let input = ctx.movement_vector();
        ctx.air_move(input);
        None
    }
}
