use crate::engine::input::Action;
use crate::game::player::fsm::PlayerState;
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::{is_falling, PlayerStateId};

/// Standing still on the ground.
pub struct IdleState;

impl PlayerState for IdleState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.play_animation("Idle");
        ctx.stop_moving();
    }

    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        if is_falling(ctx) {
            return Some(PlayerStateId::JumpFall);
        }
        if ctx.action_triggered(Action::Jump) {
            return Some(PlayerStateId::JumpUp);
        }
        if ctx.action_triggered(Action::Attack) {
            return Some(PlayerStateId::Attack);
        }
        if ctx.has_move_input() {
            return Some(PlayerStateId::Run);
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        // Hold the character planted every physics step, not just on entry
        ctx.stop_moving();
        None
    }
}
