pub mod config;
pub mod error;
pub mod stage;

pub use config::{LogLevel, LoggingConfig, NeuroForgeConfig};
pub use error::{NeuroForgeError, Result};
pub use stage::{Stage, StageContext, StageFuture};
