use std::future::Future;
use std::pin::Pin;

use uuid::Uuid;

use crate::Result;

/// Boxed future returned by a stage.
pub type StageFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// A unit of work run by `NeuroForge::execute`.
///
/// Stages run one after another in the order they were registered. The first
/// stage to return an error stops the run.
pub trait Stage: Send + Sync {
    /// Stage name, used in logs and error messages.
    fn name(&self) -> &str;

    /// Run the stage.
    fn run<'a>(&'a self, ctx: &'a StageContext) -> StageFuture<'a>;
}

/// Per-stage execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageContext {
    /// Identifier shared by every stage of one run.
    pub run_id: Uuid,
    /// Zero-based position of the stage in the pipeline.
    pub index: usize,
    /// Whether verbose mode is on.
    pub verbose: bool,
}

impl StageContext {
    /// Context for the stage at `index` of run `run_id`.
    pub fn new(run_id: Uuid, index: usize, verbose: bool) -> Self {
        Self {
            run_id,
            index,
            verbose,
        }
    }
}
