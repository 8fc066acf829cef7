//! Render adapter
//!
//! Turns simulation state into a flat list of instances. How those instances
//! are shaded and drawn is up to the host.

pub mod instance;
pub mod scene;

pub use instance::{Instance, PrimitiveKind, ShipTransform};
pub use scene::collect_instances;
