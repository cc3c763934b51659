//! Declare protected actions and dispatch them on behalf of callers.
use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use dashgate_auth::decide;
use dashgate_auth::PermissionRequirement;
use dashgate_auth::MISSING_PERMISSION_MODAL_ID;
use dashgate_auth::UNAUTHENTICATED_MODAL_ID;
use dashgate_conf::Conf;
use dashgate_conf::ModalsConf;
use dashgate_context::Context;

use crate::metrics::DISPATCH_COUNT;
use crate::metrics::DISPATCH_ERR;
use crate::ActionFunction;
use crate::ActionInputs;
use crate::ActionOutputs;
use crate::DeclaredInputs;
use crate::DeclaredOutputs;
use crate::OutputSlots;

/// Incrementally declare a [`ProtectedAction`].
pub struct ActionDeclaration {
    function: Arc<dyn ActionFunction>,
    id: String,
    inputs: DeclaredInputs,
    missing_permission_modal: Option<String>,
    outputs: DeclaredOutputs,
    requirement: PermissionRequirement,
    unauthenticated_modal: Option<String>,
}

impl ActionDeclaration {
    /// Begin declaring an action with the given ID and function.
    ///
    /// By default actions have no inputs, no outputs, no denial modals
    /// and only require callers to be authenticated.
    pub fn build<S, F>(id: S, function: F) -> ActionDeclaration
    where
        S: Into<String>,
        F: ActionFunction + 'static,
    {
        ActionDeclaration {
            function: Arc::new(function),
            id: id.into(),
            inputs: DeclaredInputs::default(),
            missing_permission_modal: None,
            outputs: DeclaredOutputs::default(),
            requirement: PermissionRequirement::authenticated(),
            unauthenticated_modal: None,
        }
    }

    /// Open the dashboard wide modals when callers are denied access.
    pub fn dashboard_modals(self) -> Self {
        self.unauthenticated_modal(UNAUTHENTICATED_MODAL_ID)
            .missing_permission_modal(MISSING_PERMISSION_MODAL_ID)
    }

    /// Complete the declaration and compute the action's output slots.
    ///
    /// The output slots are fixed from this point on.
    pub fn finish(self) -> Result<ProtectedAction> {
        let slots = OutputSlots::new(
            self.outputs,
            self.unauthenticated_modal.as_deref(),
            self.missing_permission_modal.as_deref(),
        )?;
        Ok(ProtectedAction {
            function: self.function,
            id: self.id,
            inputs: self.inputs,
            requirement: self.requirement,
            slots,
        })
    }

    /// Set the component properties passed to the action function.
    pub fn inputs(mut self, inputs: DeclaredInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Open the configured modals when callers are denied access.
    ///
    /// Modals set to `null` in the configuration are not opened.
    pub fn modals(mut self, modals: &ModalsConf) -> Self {
        self.unauthenticated_modal = modals.unauthenticated.clone();
        self.missing_permission_modal = modals.missing_permission.clone();
        self
    }

    /// Open the modal with the given ID when callers are missing required groups.
    pub fn missing_permission_modal<S: Into<String>>(mut self, modal_id: S) -> Self {
        self.missing_permission_modal = Some(modal_id.into());
        self
    }

    /// Set the component properties updated with the action function's return value.
    pub fn outputs(mut self, outputs: DeclaredOutputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Require callers to satisfy the named permission policy from the configuration.
    pub fn policy(self, conf: &Conf, name: &str) -> Result<Self> {
        let requirement = conf.policy(name)?.clone();
        Ok(self.requirement(requirement))
    }

    /// Set the requirement callers must satisfy to run the action.
    pub fn requirement(mut self, requirement: PermissionRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Open the modal with the given ID when callers are not signed in.
    pub fn unauthenticated_modal<S: Into<String>>(mut self, modal_id: S) -> Self {
        self.unauthenticated_modal = Some(modal_id.into());
        self
    }
}

/// A dashboard action guarded by a [`PermissionRequirement`].
pub struct ProtectedAction {
    function: Arc<dyn ActionFunction>,
    id: String,
    inputs: DeclaredInputs,
    requirement: PermissionRequirement,
    slots: OutputSlots,
}

impl ProtectedAction {
    /// Run the action for the caller of the given [`Context`], if they are allowed to.
    ///
    /// - Allowed callers run the action function and receive its checked return value,
    ///   with all denial slots cleared.
    /// - Denied callers receive unchanged markers for all declared outputs and the
    ///   denial slots matching the reason access was denied.
    ///
    /// Access denials are not errors. Errors are only returned when the inputs or the
    /// function return value do not match the action declaration, or the function fails.
    pub async fn dispatch(&self, context: &Context, inputs: ActionInputs) -> Result<ActionOutputs> {
        let context = context.derive_with(|builder| {
            builder.log_values(slog::o!("action" => self.id.clone()))
        });
        let outputs: Vec<String> = self
            .slots
            .references()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        slog::debug!(
            context.logger,
            "Dispatching protected action";
            "inputs" => ?inputs,
            "outputs" => ?outputs,
        );

        let verdict = decide(&context.session, &self.requirement);
        slog::debug!(
            context.logger,
            "Evaluated protected action access";
            "audit" => true,
            "verdict" => verdict.as_str(),
        );
        DISPATCH_COUNT
            .with_label_values(&[self.id.as_str(), verdict.as_str()])
            .inc();
        if !verdict.is_allowed() {
            return Ok(self.slots.denied(verdict));
        }

        let result = self.invoke(&context, inputs).await;
        if let Err(error) = &result {
            DISPATCH_ERR.with_label_values(&[self.id.as_str()]).inc();
            slog::error!(
                context.logger,
                "Protected action failed";
                replisdk::utils::error::slog::ErrorAttributes::from(error),
            );
        }
        result
    }

    /// ID of the action, unique within a dashboard.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Component properties passed to the action function.
    pub fn inputs(&self) -> &DeclaredInputs {
        &self.inputs
    }

    /// Requirement callers must satisfy to run the action.
    pub fn requirement(&self) -> &PermissionRequirement {
        &self.requirement
    }

    /// Output slots of the action, denial slots included.
    pub fn slots(&self) -> &OutputSlots {
        &self.slots
    }
}

impl ProtectedAction {
    /// Run the action function for an allowed caller and check its return value.
    async fn invoke(&self, context: &Context, inputs: ActionInputs) -> Result<ActionOutputs> {
        self.inputs.check(&self.id, &inputs)?;
        let returned = self.function.call(context, inputs).await?;
        self.slots.granted(&self.id, returned)
    }
}

impl fmt::Debug for ProtectedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectedAction")
            .field("id", &self.id)
            .field("inputs", &self.inputs)
            .field("requirement", &self.requirement)
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
