use crate::game::player::fsm::PlayerState;
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::PlayerStateId;

/// Rising phase of a jump. Hands off to `JumpFall` at the apex.
pub struct JumpUpState;

impl PlayerState for JumpUpState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.play_animation("Jump");
        // Refresh the probe before leaving the ground so a stale grounded
        // flag can't linger through the whole airborne arc
        ctx.check_grounded();
        ctx.jump();
    }

    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        if ctx.velocity().y < 0.0 {
            return Some(PlayerStateId::JumpFall);
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        let input = ctx.movement_vector();
        ctx.air_move(input);
        None
    }
}
