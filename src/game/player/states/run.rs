use crate::engine::input::Action;
use crate::game::player::fsm::PlayerState;
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::{is_falling, PlayerStateId};

/// Ground movement. Velocity is applied on the fixed step so it stays in
/// lockstep with the physics simulation.
pub struct RunState;

impl PlayerState for RunState {
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
        ctx.play_animation("Run");
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
        if !ctx.has_move_input() {
            return Some(PlayerStateId::Idle);
        }
        None
    }

    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        let input = ctx.movement_vector();
        ctx.move_grounded(input);
        None
    }

    fn on_exit(&mut self, ctx: &mut dyn PlayerOwner) {
        // Don't carry run velocity into whatever comes next
        ctx.stop_moving();
    }
}
