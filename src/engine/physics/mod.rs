// Physics simulation (rapier2d) behind a narrow façade
//
// Game code never touches rapier types directly outside this module and the
// character body that wraps its handles.

pub mod body;
pub mod world;

pub use body::{BodyBuilder, ColliderHandle, RigidBodyHandle};
pub use world::PhysicsWorld;
