//! Interface for the logic run by dashboard actions.
use anyhow::Result;

use dashgate_context::Context;

use crate::ActionInputs;
use crate::ActionReturn;

/// Logic executed when a dashboard action is triggered by an allowed caller.
///
/// Implementations receive the values of the action's declared inputs and return values
/// for the action's declared outputs (without denial slots, which are handled by the
/// [`ProtectedAction`](crate::ProtectedAction) wrapping the function).
///
/// Long running work is the implementation's responsibility: dispatch does not apply
/// timeouts or cancellation.
#[async_trait::async_trait]
pub trait ActionFunction: Send + Sync {
    /// Compute the values of the action outputs.
    async fn call(&self, context: &Context, inputs: ActionInputs) -> Result<ActionReturn>;
}

#[async_trait::async_trait]
impl<F> ActionFunction for F
where
    F: Fn(ActionInputs) -> Result<ActionReturn> + Send + Sync,
{
    async fn call(&self, _: &Context, inputs: ActionInputs) -> Result<ActionReturn> {
        self(inputs)
    }
}
