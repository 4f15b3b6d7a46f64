pub mod config;
pub mod core;
pub mod domain;
pub mod patterns;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::config::ShowcaseConfig;
pub use crate::core::console::{StdoutConsole, Transcript};
pub use crate::core::engine::ShowcaseEngine;
pub use crate::core::{Console, Demonstration, PatternKind, RunReport};
pub use crate::utils::error::{Result, ShowcaseError};
