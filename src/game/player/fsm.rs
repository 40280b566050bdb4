// Player state machine core
//
// States are registered once at setup and live for the machine's whole
// lifetime; transitions enter/exit them but never recreate them. Lifecycle
// callbacks see the character through `&mut dyn PlayerOwner`, borrowed only
// for the duration of the call, and request transitions by return value;
// the machine applies them synchronously in Exit-then-Enter order.

use log::{debug, warn};
use std::collections::HashMap;
use thiserror::Error;

use crate::game::player::events::AnimationEventType;
use crate::game::player::owner::PlayerOwner;
use crate::game::player::states::PlayerStateId;

/// Errors raised while wiring up the state machine.
/// These are configuration mistakes and should be treated as fatal at setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("state {0:?} is already registered")]
    DuplicateState(PlayerStateId),
    #[error("state {0:?} is not registered")]
    UnknownState(PlayerStateId),
    #[error("state machine was already started")]
    AlreadyStarted,
}

/// What a state did with a dispatched animation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The state does not recognize this event; the machine logs and drops it.
    Unhandled,
    /// The event was consumed without a state change.
    Handled,
    /// The event was consumed and requests a transition.
    Transition(PlayerStateId),
}

/// A state in the machine.
///
/// All callbacks default to no-ops so states only implement what they need.
/// `on_update`/`on_fixed_update` return `Some(id)` to request a transition;
/// `on_exit` deliberately has no transition channel, so a state cannot
/// re-enter the machine while being torn down.
#[allow(unused_variables)]
pub trait PlayerState {
    /// Called once when the state becomes current.
    fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {}

    /// Called once per variable-rate tick while current.
    fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        None
    }

    /// Called once per fixed-rate (physics) tick while current.
    fn on_fixed_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
        None
    }

    /// Called once when the state stops being current.
    fn on_exit(&mut self, ctx: &mut dyn PlayerOwner) {}

    /// Called when an animation event is dispatched while current.
    fn on_event(&mut self, ctx: &mut dyn PlayerOwner, event: AnimationEventType) -> EventResponse {
        EventResponse::Unhandled
    }
}

/// The state machine proper: an id -> state mapping plus a current pointer.
///
/// Invariant: if a current id is set, it has an entry in the mapping. Before
/// `start` the machine is unstarted and `update`/`fixed_update`/`dispatch`
/// are deterministic no-ops (logged at warn).
pub struct PlayerFsm {
    states: HashMap<PlayerStateId, Box<dyn PlayerState>>,
    current: Option<PlayerStateId>,
}

impl PlayerFsm {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
        }
    }

    /// Register a state under an identifier. Registering the same identifier
    /// twice is a configuration error.
    pub fn add_state(
        &mut self,
        id: PlayerStateId,
        state: Box<dyn PlayerState>,
    ) -> Result<(), FsmError> {
        if self.states.contains_key(&id) {
            return Err(FsmError::DuplicateState(id));
        }
        self.states.insert(id, state);
        Ok(())
    }

    /// Set the initial state and invoke its Enter callback. Must be called
    /// exactly once, before any update.
    pub fn start(&mut self, id: PlayerStateId, ctx: &mut dyn PlayerOwner) -> Result<(), FsmError> {
        if self.current.is_some() {
            return Err(FsmError::AlreadyStarted);
        }
        let state = self.states.get_mut(&id).ok_or(FsmError::UnknownState(id))?;
        self.current = Some(id);
        state.on_enter(ctx);
        debug!("fsm started in state {:?}", id);
        Ok(())
    }

    /// Transition to another state: current's Exit, then the target's Enter,
    /// synchronously. Transitioning to the current state is a no-op so a
    /// condition that keeps firing cannot enter/exit-loop the state.
    pub fn change_state(&mut self, id: PlayerStateId, ctx: &mut dyn PlayerOwner) {
        let Some(current) = self.current else {
            warn!("change_state({:?}) on unstarted state machine", id);
            return;
        };
        if current == id {
            return;
        }
        if !self.states.contains_key(&id) {
            warn!("change_state to unregistered state {:?}", id);
            return;
        }
        if let Some(state) = self.states.get_mut(&current) {
            state.on_exit(ctx);
        }
        self.current = Some(id);
        debug!("state {:?} -> {:?}", current, id);
        if let Some(state) = self.states.get_mut(&id) {
            state.on_enter(ctx);
        }
    }

    /// Run the current state's per-frame update, applying any requested
    /// transition immediately afterwards.
    pub fn update(&mut self, ctx: &mut dyn PlayerOwner) {
        let Some(id) = self.current else {
            warn!("update on unstarted state machine");
            return;
        };
        let next = match self.states.get_mut(&id) {
            Some(state) => state.on_update(ctx),
            None => None,
        };
        if let Some(next) = next {
            self.change_state(next, ctx);
        }
    }

    /// Run the current state's per-physics-step update.
    pub fn fixed_update(&mut self, ctx: &mut dyn PlayerOwner) {
        let Some(id) = self.current else {
            warn!("fixed_update on unstarted state machine");
            return;
        };
        let next = match self.states.get_mut(&id) {
            Some(state) => state.on_fixed_update(ctx),
            None => None,
        };
        if let Some(next) = next {
            self.change_state(next, ctx);
        }
    }

    /// Forward an animation event to the current state. Returns true if the
    /// state consumed it; an unrecognized event is logged at warn and
    /// dropped, never an error.
    pub fn dispatch(&mut self, ctx: &mut dyn PlayerOwner, event: AnimationEventType) -> bool {
        let Some(id) = self.current else {
            warn!("event {:?} dispatched to unstarted state machine", event);
            return false;
        };
        let response = match self.states.get_mut(&id) {
            Some(state) => state.on_event(ctx, event),
            None => EventResponse::Unhandled,
        };
        match response {
            EventResponse::Unhandled => {
                warn!("event {:?} not handled by state {:?}", event, id);
                false
            }
            EventResponse::Handled => true,
            EventResponse::Transition(next) => {
                self.change_state(next, ctx);
                true
            }
        }
    }

    /// Identifier of the current state, if started.
    pub fn current_state_id(&self) -> Option<PlayerStateId> {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for PlayerFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Action;
    use crate::game::player::body::AttackKind;
    use glam::{Vec2, Vec3};

    /// Minimal owner whose played-clip log doubles as a lifecycle trace.
    #[derive(Default)]
    struct TraceOwner {
        log: Vec<String>,
    }

    impl PlayerOwner for TraceOwner {
        fn play_animation(&mut self, name: &str) {
            self.log.push(name.to_string());
        }
        fn restart_animation(&mut self, name: &str) {
            self.log.push(name.to_string());
        }
        fn move_grounded(&mut self, _input: Vec2) {}
        fn air_move(&mut self, _input: Vec2) {}
        fn stop_moving(&mut self) {}
        fn attack_move(&mut self, _input_x: f32, _kind: AttackKind) {}
        fn jump(&mut self) {}
        fn fast_fall(&mut self) {}
        fn velocity(&self) -> Vec3 {
            Vec3::ZERO
        }
        fn is_grounded(&self) -> bool {
            true
        }
        fn check_grounded(&mut self) -> bool {
            true
        }
        fn action_triggered(&self, _action: Action) -> bool {
            false
        }
        fn action_held(&self, _action: Action) -> bool {
            false
        }
        fn movement_vector(&self) -> Vec2 {
            Vec2::ZERO
        }
        fn has_move_input(&self) -> bool {
            false
        }
        fn time(&self) -> f32 {
            0.0
        }
    }

    /// Toy state that records its lifecycle through the owner's clip log.
    struct Recorder {
        name: &'static str,
        update_goes_to: Option<PlayerStateId>,
        event_goes_to: Option<PlayerStateId>,
    }

    impl Recorder {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                update_goes_to: None,
                event_goes_to: None,
            }
        }
    }

    impl PlayerState for Recorder {
        fn on_enter(&mut self, ctx: &mut dyn PlayerOwner) {
            ctx.play_animation(&format!("{}:enter", self.name));
        }

        fn on_update(&mut self, ctx: &mut dyn PlayerOwner) -> Option<PlayerStateId> {
            ctx.play_animation(&format!("{}:update", self.name));
            self.update_goes_to
        }

        fn on_exit(&mut self, ctx: &mut dyn PlayerOwner) {
            ctx.play_animation(&format!("{}:exit", self.name));
        }

        fn on_event(
            &mut self,
            ctx: &mut dyn PlayerOwner,
            event: AnimationEventType,
        ) -> EventResponse {
            match event {
                AnimationEventType::WindowOpen => {
                    ctx.play_animation(&format!("{}:event", self.name));
                    match self.event_goes_to {
                        Some(id) => EventResponse::Transition(id),
                        None => EventResponse::Handled,
                    }
                }
                _ => EventResponse::Unhandled,
            }
        }
    }

    const A: PlayerStateId = PlayerStateId::Idle;
    const B: PlayerStateId = PlayerStateId::Run;

    fn two_state_machine() -> PlayerFsm {
        let mut fsm = PlayerFsm::new();
        fsm.add_state(A, Box::new(Recorder::new("a"))).unwrap();
        fsm.add_state(B, Box::new(Recorder::new("b"))).unwrap();
        fsm
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut fsm = two_state_machine();
        let err = fsm.add_state(A, Box::new(Recorder::new("a2"))).unwrap_err();
        assert_eq!(err, FsmError::DuplicateState(A));
    }

    #[test]
    fn start_enters_initial_state() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        assert_eq!(owner.log, vec!["a:enter"]);
        assert_eq!(fsm.current_state_id(), Some(A));
    }

    #[test]
    fn start_twice_is_an_error() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        assert_eq!(fsm.start(B, &mut owner), Err(FsmError::AlreadyStarted));
    }

    #[test]
    fn start_unknown_state_is_an_error() {
        let mut fsm = PlayerFsm::new();
        let mut owner = TraceOwner::default();
        assert_eq!(fsm.start(A, &mut owner), Err(FsmError::UnknownState(A)));
        assert!(!fsm.is_started());
    }

    #[test]
    fn update_before_start_is_a_no_op() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.update(&mut owner);
        fsm.fixed_update(&mut owner);
        assert!(owner.log.is_empty());
        assert_eq!(fsm.current_state_id(), None);
    }

    #[test]
    fn change_state_runs_exit_then_enter_exactly_once() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        owner.log.clear();

        fsm.change_state(B, &mut owner);
        assert_eq!(owner.log, vec!["a:exit", "b:enter"]);
        assert_eq!(fsm.current_state_id(), Some(B));
    }

    #[test]
    fn self_transition_is_a_no_op() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        owner.log.clear();

        fsm.change_state(A, &mut owner);
        assert!(
            owner.log.is_empty(),
            "self-transition must not re-enter: {:?}",
            owner.log
        );
        assert_eq!(fsm.current_state_id(), Some(A));
    }

    #[test]
    fn transition_requested_from_update() {
        let mut fsm = PlayerFsm::new();
        let mut a = Recorder::new("a");
        a.update_goes_to = Some(B);
        fsm.add_state(A, Box::new(a)).unwrap();
        fsm.add_state(B, Box::new(Recorder::new("b"))).unwrap();

        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        owner.log.clear();

        fsm.update(&mut owner);
        assert_eq!(owner.log, vec!["a:update", "a:exit", "b:enter"]);
        assert_eq!(fsm.current_state_id(), Some(B));
    }

    #[test]
    fn transition_requested_from_event() {
        let mut fsm = PlayerFsm::new();
        let mut a = Recorder::new("a");
        a.event_goes_to = Some(B);
        fsm.add_state(A, Box::new(a)).unwrap();
        fsm.add_state(B, Box::new(Recorder::new("b"))).unwrap();

        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        owner.log.clear();

        assert!(fsm.dispatch(&mut owner, AnimationEventType::WindowOpen));
        assert_eq!(owner.log, vec!["a:event", "a:exit", "b:enter"]);
        assert_eq!(fsm.current_state_id(), Some(B));
    }

    #[test]
    fn unhandled_event_is_dropped_without_state_change() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        fsm.start(A, &mut owner).unwrap();
        owner.log.clear();

        assert!(!fsm.dispatch(&mut owner, AnimationEventType::DamageFrame));
        assert!(owner.log.is_empty());
        assert_eq!(fsm.current_state_id(), Some(A));
    }

    #[test]
    fn event_before_start_is_dropped() {
        let mut fsm = two_state_machine();
        let mut owner = TraceOwner::default();
        assert!(!fsm.dispatch(&mut owner, AnimationEventType::WindowOpen));
        assert!(owner.log.is_empty());
    }
}
