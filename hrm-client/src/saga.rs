//! Sequential multi-step submission
//!
//! The create-then-assign screens issue dependent calls against a
//! backend with no transaction spanning them. A saga names each step,
//! runs them strictly in order, and halts at the first failure so the
//! caller can report exactly which step failed rather than a generic
//! "creation failed". Compensations are carried on the completed steps
//! but only run when the caller explicitly unwinds.

use async_trait::async_trait;
use thiserror::Error;

use crate::{ClientError, ClientResult};

/// One step of a multi-step submission, operating on the workflow's
/// mutable context.
#[async_trait]
pub trait SagaStep<C: Send>: Send {
    /// Step name surfaced in failure notifications
    fn name(&self) -> &'static str;

    async fn run(&mut self, ctx: &mut C) -> ClientResult<()>;

    /// Undo a completed step during an unwind. Steps without a
    /// meaningful undo keep the default no-op.
    async fn compensate(&mut self, _ctx: &mut C) -> ClientResult<()> {
        Ok(())
    }
}

/// A halted saga, identifying the failed step
#[derive(Debug, Error)]
#[error("step '{step}' (#{index}) failed: {source}")]
pub struct SagaError {
    /// Zero-based position of the failed step
    pub index: usize,
    pub step: &'static str,
    #[source]
    pub source: ClientError,
}

/// Ordered steps executed strictly sequentially
pub struct Saga<C> {
    steps: Vec<Box<dyn SagaStep<C>>>,
}

impl<C: Send> Saga<C> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step(mut self, step: impl SagaStep<C> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run the steps in order, each awaiting the previous. Halts at
    /// the first failure; the completed steps travel with the failure
    /// for an optional unwind.
    pub async fn execute(self, ctx: &mut C) -> Result<(), SagaFailure<C>> {
        let mut completed: Vec<Box<dyn SagaStep<C>>> = Vec::new();

        for (index, mut step) in self.steps.into_iter().enumerate() {
            let name = step.name();
            tracing::debug!(step = name, index, "running saga step");

            match step.run(ctx).await {
                Ok(()) => completed.push(step),
                Err(source) => {
                    tracing::warn!(step = name, index, error = %source, "saga halted");
                    return Err(SagaFailure {
                        error: SagaError { index, step: name, source },
                        completed,
                    });
                }
            }
        }

        Ok(())
    }
}

impl<C: Send> Default for Saga<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// A failed execution: the error plus the unwind path over the steps
/// that completed before the halt.
pub struct SagaFailure<C> {
    pub error: SagaError,
    completed: Vec<Box<dyn SagaStep<C>>>,
}

impl<C: Send> SagaFailure<C> {
    /// Run the compensations of the completed steps, most recent
    /// first. Stops at the first compensation error; on success the
    /// original step error is handed back for reporting.
    pub async fn unwind(mut self, ctx: &mut C) -> Result<SagaError, ClientError> {
        while let Some(mut step) = self.completed.pop() {
            tracing::debug!(step = step.name(), "compensating saga step");
            step.compensate(ctx).await?;
        }
        Ok(self.error)
    }

    /// Discard the unwind path and keep only the error, leaving any
    /// partial state on the server.
    pub fn into_error(self) -> SagaError {
        self.error
    }
}

impl<C> std::fmt::Debug for SagaFailure<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SagaFailure")
            .field("error", &self.error)
            .field("completed", &self.completed.len())
            .finish()
    }
}
