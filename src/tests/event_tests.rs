//! tests/event_tests.rs
//! Webhook de ingestión y normalizador de eventos.

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use super::support;
use crate::config::app_config::AppConfig;

#[actix_rt::test]
async fn order_created_generates_pending_payment_email() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({
            "event_type": "order_created",
            "order": { "id": "PED-1001", "value": 150.0 },
            "customer": { "name": "Maria Silva", "email": "maria@example.com" },
            "product": { "name": "Curso de Fotografia" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Order event processed");
    assert_eq!(body["event_type"], "order_created");
    let email_id = body["email_id"].as_str().expect("email_id ausente");

    let emails = store.read("emails");
    assert_eq!(emails.len(), 1);
    let record = &emails[0];
    assert_eq!(record["id"], email_id);
    assert_eq!(record["type"], "aguardando_pagamento");
    assert_eq!(record["status"], "sent");
    assert_eq!(record["subject"], "Aguardando seu pagamento");
    assert_eq!(record["customer_name"], "Maria Silva");
    assert_eq!(record["customer_email"], "maria@example.com");
    assert_eq!(record["order_id"], "PED-1001");
    assert_eq!(record["order_value"], 150.0);
    assert_eq!(record["product_name"], "Curso de Fotografia");
    // tracking ausente en el payload => pasa como lista vacía
    assert_eq!(record["tracking"], json!([]));

    let logs = store.read("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["type"], "event");
    assert_eq!(logs[0]["level"], "info");
    assert_eq!(logs[0]["message"], "Event received: order_created");
    assert_eq!(logs[0]["source"], "remarketing-receive");
    assert_eq!(logs[0]["response"]["email_id"], email_id);
    assert_eq!(logs[0]["data"]["event_type"], "order_created");
}

#[actix_rt::test]
async fn order_paid_generates_approved_email() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({
            "event_type": "order_paid",
            "order": { "id": 42, "value": 99.9 },
            "customer": { "name": "João", "email": "joao@example.com" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let emails = store.read("emails");
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0]["type"], "pedido_aprovado");
    assert_eq!(emails[0]["subject"], "Seu pedido foi aprovado! 🎉");
    // El id del pedido pasa tal cual, numérico incluido
    assert_eq!(emails[0]["order_id"], 42);
}

#[actix_rt::test]
async fn cart_abandoned_carries_cart_fields() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let items = json!([{ "name": "Tripé", "qty": 1 }, { "name": "Lente 50mm", "qty": 2 }]);
    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({
            "event_type": "cart_abandoned",
            "customer": { "name": "Ana", "email": "ana@example.com" },
            "cart": { "value": 89.9, "items": items.clone() }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Cart abandoned event processed");
    // La respuesta de carrito no trae event_type (comportamiento original)
    assert!(body.get("event_type").is_none());

    let emails = store.read("emails");
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0]["type"], "recuperacao_carrinho");
    assert_eq!(emails[0]["subject"], "Você esqueceu algo no carrinho!");
    assert_eq!(emails[0]["cart_value"], 89.9);
    assert_eq!(emails[0]["cart_items"], items);
}

#[actix_rt::test]
async fn cart_abandoned_applies_defaults() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({ "event_type": "cart_abandoned" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let emails = store.read("emails");
    assert_eq!(emails[0]["customer_name"], "Cliente");
    assert_eq!(emails[0]["customer_email"], "");
    assert_eq!(emails[0]["cart_value"], 0.0);
    assert_eq!(emails[0]["cart_items"], json!([]));
}

#[actix_rt::test]
async fn missing_event_type_is_rejected_without_side_effects() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({ "customer": { "name": "Maria" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing event_type.");

    // Ni email ni entrada de log
    assert!(store.read("emails").is_empty());
    assert!(store.read("logs").is_empty());
}

#[actix_rt::test]
async fn invalid_json_body_is_rejected() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("isto não é json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid JSON format.");
    assert!(store.read("emails").is_empty());
}

#[actix_rt::test]
async fn unknown_event_is_logged_but_not_processed() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({ "event_type": "refund_issued", "order": { "id": 7 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Event received but not processed");
    assert_eq!(body["event_type"], "refund_issued");

    assert!(store.read("emails").is_empty());
    // Pero el evento sí queda en el log
    let logs = store.read("logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["event_type"], "refund_issued");
}

#[actix_rt::test]
async fn malformed_nested_shape_is_rejected() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    // `order` debería ser un objeto; el decode cerrado rechaza el evento
    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(json!({ "event_type": "order_created", "order": "PED-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(store.read("emails").is_empty());
    assert!(store.read("logs").is_empty());
}

#[actix_rt::test]
async fn webhook_key_is_enforced_when_configured() {
    let store = support::memory_store();
    let config = AppConfig {
        webhook_api_key: Some("rmk_secret".to_string()),
        ..support::test_config()
    };
    let app = test::init_service(support::build_app(&store, config)).await;

    let payload = json!({ "event_type": "order_paid" });

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized. Invalid API Key.");
    assert!(store.read("emails").is_empty());

    let req = test::TestRequest::post()
        .uri("/api/remarketing-receive")
        .insert_header(("X-API-Key", "rmk_secret"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(store.read("emails").len(), 1);
}

#[actix_rt::test]
async fn webhook_rejects_non_post() {
    let store = support::memory_store();
    let app = test::init_service(support::build_app(&store, support::test_config())).await;

    let req = test::TestRequest::get()
        .uri("/api/remarketing-receive")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Method not allowed. Use POST.");
}
