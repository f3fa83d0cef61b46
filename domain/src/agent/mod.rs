//! Agent domain module
//!
//! An agent owns its avowed commitments, its private inference and
//! incompatibility rules, and the challenges it has issued.

pub mod entities;
pub mod value_objects;

pub use entities::{Agent, DEFAULT_INTELLIGENCE};
pub use value_objects::{AgentId, Challenge};
