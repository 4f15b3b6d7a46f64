pub mod console;
pub mod engine;

pub use crate::domain::model::{DemoOutput, PatternKind, RunReport};
pub use crate::domain::ports::{Console, Demonstration};
pub use crate::utils::error::Result;
