//! NeuroForge
//!
//! Command-line bootstrap and application host. The binary parses the
//! invocation, builds a [`NeuroForge`] from it, runs [`NeuroForge::execute`]
//! once and maps the outcome to the process exit status.

pub mod cli;
pub mod observability;
pub mod runner;
mod runtime;
mod status;

#[doc(hidden)]
pub use neuroforge_core;

pub use runtime::prelude;
pub use runtime::{NeuroForge, NeuroForgeBuilder, RunReport};
pub use status::ExitStatus;
