//! NeuroForge application host.
//!
//! A [`NeuroForge`] owns its configuration and an ordered pipeline of
//! [`Stage`]s. [`NeuroForge::execute`] runs that pipeline once.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::Instrument;
use uuid::Uuid;

use neuroforge_core::config::NeuroForgeConfig;
use neuroforge_core::error::{NeuroForgeError, Result};
use neuroforge_core::stage::{Stage, StageContext};

/// Prelude module for common imports.
pub mod prelude {
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;

    pub use neuroforge_core::config::{LogLevel, LoggingConfig, NeuroForgeConfig};
    pub use neuroforge_core::error::{NeuroForgeError, Result};
    pub use neuroforge_core::stage::{Stage, StageContext, StageFuture};

    pub use crate::{NeuroForge, NeuroForgeBuilder, RunReport};
}

/// Summary of one `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Identifier of the run.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Number of stages that completed.
    pub stages_completed: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// The NeuroForge application.
pub struct NeuroForge {
    config: NeuroForgeConfig,
    stages: Vec<Box<dyn Stage>>,
}

impl NeuroForge {
    /// Create an application with no stages.
    pub fn new(config: NeuroForgeConfig) -> Self {
        Self {
            config,
            stages: Vec::new(),
        }
    }

    /// Create a new builder for configuring NeuroForge.
    pub fn builder() -> NeuroForgeBuilder {
        NeuroForgeBuilder::new()
    }

    /// Get the configuration.
    pub fn config(&self) -> &NeuroForgeConfig {
        &self.config
    }

    /// Whether verbose mode is on.
    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    /// Names of the registered stages, in run order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every registered stage once, in order.
    ///
    /// Stops at the first failing stage and returns its error. There is no
    /// retry, timeout or cancellation at this level.
    pub async fn execute(&self) -> Result<RunReport> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("execute", %run_id);

        self.run_stages(run_id).instrument(span).await
    }

    async fn run_stages(&self, run_id: Uuid) -> Result<RunReport> {
        let started_at = Utc::now();
        let start = Instant::now();

        tracing::info!(stages = self.stages.len(), "NeuroForge starting");
        if self.stages.is_empty() {
            tracing::debug!("No stages registered");
        }

        for (index, stage) in self.stages.iter().enumerate() {
            let ctx = StageContext::new(run_id, index, self.config.verbose);
            tracing::debug!(stage = stage.name(), index, "Running stage");

            if let Err(e) = stage.run(&ctx).await {
                tracing::error!(stage = stage.name(), index, error = %e, "Stage failed");
                return Err(match e {
                    NeuroForgeError::Stage { .. } => e,
                    other => NeuroForgeError::stage(stage.name(), other),
                });
            }
        }

        let report = RunReport {
            run_id,
            started_at,
            stages_completed: self.stages.len(),
            elapsed: start.elapsed(),
        };

        tracing::info!(
            stages_completed = report.stages_completed,
            elapsed = ?report.elapsed,
            "NeuroForge finished"
        );

        Ok(report)
    }
}

/// Builder for configuring NeuroForge.
pub struct NeuroForgeBuilder {
    config: NeuroForgeConfig,
    stages: Vec<Box<dyn Stage>>,
}

impl NeuroForgeBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: NeuroForgeConfig::default(),
            stages: Vec::new(),
        }
    }

    /// Set the configuration.
    pub fn config(mut self, config: NeuroForgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Append a stage to the pipeline.
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Build the NeuroForge application.
    pub fn build(self) -> NeuroForge {
        NeuroForge {
            config: self.config,
            stages: self.stages,
        }
    }
}

impl Default for NeuroForgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
