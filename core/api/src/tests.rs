use actix_web::dev::Service;
use actix_web::http::StatusCode;
use actix_web::test::init_service;
use actix_web::test::read_body_json;
use actix_web::test::TestRequest;
use actix_web::web::Data;
use actix_web::HttpMessage;
use anyhow::Result;
use serde_json::json;
use serde_json::Value;

use dashgate_action::ActionDeclaration;
use dashgate_action::ActionInputs;
use dashgate_action::ActionRegistry;
use dashgate_action::ActionReturn;
use dashgate_action::DeclaredInputs;
use dashgate_action::DeclaredOutputs;
use dashgate_auth::PermissionRequirement;
use dashgate_auth::Session;
use dashgate_context::Context;
use dashgate_context::ContextMiddleware;

fn plot(inputs: ActionInputs) -> Result<ActionReturn> {
    match inputs {
        ActionInputs::Positional(values) => Ok(ActionReturn::List(vec![
            json!({"data": values[0]}),
            Value::Null,
        ])),
        ActionInputs::Named(_) => anyhow::bail!("expected positional inputs"),
    }
}

fn broken(_: ActionInputs) -> Result<ActionReturn> {
    Ok(ActionReturn::Value(json!("not a list")))
}

fn registry() -> ActionRegistry {
    let requirement = PermissionRequirement::build().group("admin").finish();
    let plot = ActionDeclaration::build("plot", plot)
        .inputs(DeclaredInputs::list(["species.value"]).unwrap())
        .outputs(DeclaredOutputs::list(["chart.figure", "chart.title"]).unwrap())
        .requirement(requirement)
        .dashboard_modals()
        .finish()
        .unwrap();
    let broken = ActionDeclaration::build("broken", broken)
        .outputs(DeclaredOutputs::list(["chart.figure", "chart.title"]).unwrap())
        .finish()
        .unwrap();

    let mut builder = ActionRegistry::build();
    builder.register(plot).register(broken);
    builder.finish()
}

fn session(roles: &[&str]) -> Session {
    match json!({"roles": roles}) {
        Value::Object(user) => Session::user(user),
        _ => unreachable!(),
    }
}

async fn post(action: &str, body: Value, session: Option<Session>) -> (StatusCode, Value) {
    let app = actix_web::App::new()
        .app_data(Data::new(registry()))
        .configure(crate::configure)
        .wrap(ContextMiddleware::new(Context::fixture()));
    let app = init_service(app).await;

    let request = TestRequest::post()
        .uri(&format!("/actions/{}", action))
        .set_json(body)
        .to_request();
    if let Some(session) = session {
        request.extensions_mut().insert(session);
    }
    let response = app.call(request).await.unwrap();
    let status = response.status();
    let body = read_body_json(response).await;
    (status, body)
}

#[actix_web::test]
async fn allowed_caller_receives_updates() {
    let body = json!({"inputs": [["setosa"]]});
    let (status, body) = post("plot", body, Some(session(&["admin"]))).await;
    assert_eq!(status, StatusCode::OK);
    let expected = json!({"response": {
        "chart": {"figure": {"data": ["setosa"]}, "title": null},
        "unauthenticated-modal": {"is_open": false},
        "missing-permission-modal": {"is_open": false},
    }});
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn forbidden_caller_opens_modal_only() {
    let body = json!({"inputs": [["setosa"]]});
    let (status, body) = post("plot", body, Some(session(&["viewer"]))).await;
    assert_eq!(status, StatusCode::OK);
    let expected = json!({"response": {
        "unauthenticated-modal": {"is_open": false},
        "missing-permission-modal": {"is_open": true},
    }});
    assert_eq!(body, expected);
}

#[actix_web::test]
async fn anonymous_caller_opens_login_modal() {
    let (status, body) = post("plot", json!({"inputs": [null]}), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"]["unauthenticated-modal"]["is_open"], json!(true));
    assert!(body["response"].get("chart").is_none());
}

#[actix_web::test]
async fn unknown_action() {
    let (status, body) = post("missing", json!({}), Some(session(&[]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));
    let message = body["error_msg"].as_str().unwrap();
    assert!(message.contains("action 'missing' not found"), "got: {message}");
}

#[actix_web::test]
async fn inputs_mismatch() {
    let body = json!({"inputs": {"species": "setosa"}});
    let (status, body) = post("plot", body, Some(session(&["admin"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
}

#[actix_web::test]
async fn invalid_return_value() {
    let (status, body) = post("broken", json!({}), Some(session(&[]))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!(true));
}
