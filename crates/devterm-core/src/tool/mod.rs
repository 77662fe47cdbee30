//! Tool system
//!
//! Each developer utility is a stateless tool behind a common trait,
//! dispatched by name through the registry.

pub mod registry;
pub mod traits;

pub use registry::ToolRegistry;
pub use traits::{Tool, ToolResult};
