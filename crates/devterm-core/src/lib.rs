//! devterm-core: DevTerm Web Core Library
//!
//! Provides the error type, configuration, and the tool system shared by
//! the transformation tools and the HTTP surface.

pub mod config;
pub mod error;
pub mod tool;

pub use config::{ApiConfig, Config, HttpToolConfig};
pub use error::{Error, Result};
pub use tool::{Tool, ToolRegistry, ToolResult};
