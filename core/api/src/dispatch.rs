//! Handle requests to trigger dashboard actions.
use std::collections::BTreeMap;

use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Path;
use actix_web::HttpResponse;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use dashgate_action::ActionInputs;
use dashgate_action::ActionOutputs;
use dashgate_action::ActionRegistry;
use dashgate_action::OutputSlots;
use dashgate_action::OutputValue;
use dashgate_context::Context;

use super::error::dispatch_error;
use super::Error;

/// Payload of action dispatch requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Values of the action's declared inputs.
    #[serde(default)]
    pub inputs: ActionInputs,
}

/// Payload of action dispatch responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchResponse {
    /// New property values to apply, indexed by component ID and property name.
    pub response: BTreeMap<String, BTreeMap<String, Value>>,
}

impl DispatchResponse {
    /// Collect the property updates for all slots not left unchanged.
    pub fn from_outputs(slots: &OutputSlots, outputs: ActionOutputs) -> DispatchResponse {
        let mut response: BTreeMap<String, BTreeMap<String, Value>> = BTreeMap::new();
        for (slot, value) in slots.pair(outputs) {
            if let OutputValue::Value(value) = value {
                response
                    .entry(slot.component_id().to_string())
                    .or_default()
                    .insert(slot.property().to_string(), value);
            }
        }
        DispatchResponse { response }
    }
}

/// Dispatch an action on behalf of the caller and return the property updates.
#[actix_web::post("/actions/{action}")]
pub async fn dispatch(
    context: Context,
    registry: Data<ActionRegistry>,
    action: Path<String>,
    request: Json<DispatchRequest>,
) -> Result<HttpResponse, Error> {
    let action = match registry.lookup(&action) {
        Ok(action) => action,
        Err(error) => {
            slog::warn!(
                context.logger,
                "Unable to dispatch unknown action";
                replisdk::utils::error::slog::ErrorAttributes::from(&error),
            );
            return Err(dispatch_error(error));
        }
    };

    let request = request.into_inner();
    let outputs = action
        .dispatch(&context, request.inputs)
        .await
        .map_err(dispatch_error)?;
    let response = DispatchResponse::from_outputs(action.slots(), outputs);
    Ok(HttpResponse::Ok().json(response))
}
