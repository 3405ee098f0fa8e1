//! End-to-end API tests over an in-memory database
//!
//! Builds the full router (middleware included) and drives it with
//! `tower::ServiceExt::oneshot`, no network involved.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::models::{Operator, OperatorCreate};
use ustam_server::auth::{JwtConfig, password};
use ustam_server::core::{Config, ServerState};
use ustam_server::db::repository::operator;

fn test_config() -> Config {
    Config {
        database_path: ":memory:".into(),
        http_port: 0,
        base_url: "https://adanaustam.example".into(),
        jwt: JwtConfig {
            secret: "integration-test-secret-key-32-chars!!".into(),
            expiration_minutes: 60,
            issuer: "ustam-server".into(),
            audience: "ustam-admin".into(),
        },
        environment: "development".into(),
        admin_username: "admin".into(),
        admin_email: "admin@adanaustam.example".into(),
        admin_password: None,
    }
}

async fn setup() -> (Router, ServerState) {
    let state = ServerState::in_memory(test_config()).await.unwrap();
    let app = ustam_server::api::build_app(&state).with_state(state.clone());
    (app, state)
}

async fn create_operator(
    state: &ServerState,
    username: &str,
    pw: &str,
    is_superuser: bool,
    branch_id: Option<i64>,
) -> Operator {
    let hashed = password::hash_password(pw).unwrap();
    operator::create_with_hash(
        &state.pool,
        OperatorCreate {
            username: username.to_string(),
            email: format!("{username}@adanaustam.example"),
            password: String::new(),
            is_active: true,
            is_superuser,
            branch_id,
        },
        hashed,
    )
    .await
    .unwrap()
}

fn token_for(state: &ServerState, op: &Operator) -> String {
    state.jwt_service.generate_token(op).unwrap()
}

fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Creates a branch as superuser and returns its id and slug
async fn create_branch(app: &Router, su_token: &str, name: &str, slug: &str) -> i64 {
    let (status, body) = send(
        app,
        request(
            "POST",
            "/api/branches",
            Some(su_token),
            Some(json!({
                "name": name,
                "slug": slug,
                "display_whatsapp_number": "+90 555 111 22 33",
                "default_links": {
                    "order": format!("https://order.example/{slug}"),
                    "instagram": "https://instagram.com/adanaustam"
                },
                "link_order": ["order", "instagram"]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "branch create failed: {body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let (app, _state) = setup().await;
    let (status, body) = send(&app, request("GET", "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn login_and_me_roundtrip() {
    let (app, state) = setup().await;
    create_operator(&state, "chef", "gizli-parola-1", false, None).await;

    // Wrong password: unified 401
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "chef", "password": "wrong"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);

    // Unknown user: same code, no enumeration
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "nobody", "password": "wrong"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);

    // Correct credentials
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "chef", "password": "gizli-parola-1"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["username"], "chef");

    let (status, body) = send(&app, request("GET", "/api/auth/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "chef");
    // The password hash must never appear in API output
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn protected_routes_require_token() {
    let (app, _state) = setup().await;

    let (status, _) = send(&app, request("GET", "/api/branches", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request("GET", "/api/tables", Some("not-a-jwt"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn branch_create_requires_superuser() {
    let (app, state) = setup().await;
    let op = create_operator(&state, "op", "parola-123", false, None).await;
    let token = token_for(&state, &op);

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/branches",
            Some(&token),
            Some(json!({"name": "X", "slug": "x"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn duplicate_slug_conflicts() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);

    create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/branches",
            Some(&su_token),
            Some(json!({"name": "Other", "slug": "kurttepe"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn branch_save_validates_link_order() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    // Unknown key
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/branches/{id}"),
            Some(&su_token),
            Some(json!({
                "name": "Kurttepe",
                "display_whatsapp_number": null,
                "default_links": {},
                "link_order": ["order", "myspace"]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3003);

    // Duplicate key
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/branches/{id}"),
            Some(&su_token),
            Some(json!({
                "name": "Kurttepe",
                "display_whatsapp_number": null,
                "default_links": {},
                "link_order": ["order", "order"]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3004);
}

#[tokio::test]
async fn branch_save_prunes_empty_urls() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/branches/{id}"),
            Some(&su_token),
            Some(json!({
                "name": "Kurttepe",
                "display_whatsapp_number": null,
                "default_links": {"order": "https://order.example/k", "feedback": "  "},
                "link_order": ["order", "feedback"]
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["default_links"].get("feedback").is_none());
    assert_eq!(body["default_links"]["order"], "https://order.example/k");
}

#[tokio::test]
async fn bulk_provisioning_and_conflict() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let branch_id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    // Provision tables 1..=5
    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 1, "end_number": 5})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "bulk create failed: {body}");
    let created = body.as_array().unwrap();
    assert_eq!(created.len(), 5);
    assert_eq!(
        created[0]["link"],
        "https://adanaustam.example/musteri/sube/kurttepe/table/1"
    );

    // Overlapping range: all-or-nothing, nothing gets written
    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 4, "end_number": 8})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);

    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables?branch_id={branch_id}"),
            Some(&su_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // Still exactly five: 6, 7 and 8 must not have been created
    assert_eq!(body.as_array().unwrap().len(), 5);

    // Bad range
    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 9, "end_number": 3})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4003);

    // Bulk-deleting unknown ids is not an error, just a zero count
    let (status, body) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"table_ids": [9998, 9999]})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 0);

    // Deleting real ids reports how many went away
    let (_, tables) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables?branch_id={branch_id}"),
            Some(&su_token),
            None,
        ),
    )
    .await;
    let ids: Vec<i64> = tables
        .as_array()
        .unwrap()
        .iter()
        .take(2)
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    let (status, body) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"table_ids": ids})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], 2);
}

#[tokio::test]
async fn table_update_rejects_number_edits() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let branch_id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    let (_, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 1, "end_number": 1})),
        ),
    )
    .await;
    let table_id = body[0]["id"].as_i64().unwrap();

    // table_number is not an editable field
    let (status, _) = send(
        &app,
        request(
            "PUT",
            &format!("/api/tables/{table_id}"),
            Some(&su_token),
            Some(json!({"table_number": 99})),
        ),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn table_override_lifecycle() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let branch_id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    let (_, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 7, "end_number": 7})),
        ),
    )
    .await;
    let table_id = body[0]["id"].as_i64().unwrap();

    // Set an override and a per-table link
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/tables/{table_id}"),
            Some(&su_token),
            Some(json!({
                "override_main_qr_link": "https://menu.example/special",
                "overridden_links": {"order": "https://order.example/table-7"}
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["override_main_qr_link"], "https://menu.example/special");

    // Admin preview renders the same payload the customer page gets
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables/{table_id}/view"),
            Some(&su_token),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["main_qr_link"], "https://menu.example/special");

    // Unknown override key is rejected
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/tables/{table_id}"),
            Some(&su_token),
            Some(json!({"overridden_links": {"myspace": "https://myspace.com"}})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3003);

    // Empty string clears the main override; the per-table link stays
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/tables/{table_id}"),
            Some(&su_token),
            Some(json!({"override_main_qr_link": ""})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["override_main_qr_link"].is_null());
    assert_eq!(
        body["overridden_links"]["order"],
        "https://order.example/table-7"
    );
}

#[tokio::test]
async fn customer_view_resolves_overrides() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let branch_id = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;

    send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_id}"),
            Some(&su_token),
            Some(json!({"start_number": 1, "end_number": 2})),
        ),
    )
    .await;

    // Table 2 gets a per-table order link
    let (_, tables) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables?branch_id={branch_id}"),
            Some(&su_token),
            None,
        ),
    )
    .await;
    let table2_id = tables[1]["id"].as_i64().unwrap();
    send(
        &app,
        request(
            "PUT",
            &format!("/api/tables/{table2_id}"),
            Some(&su_token),
            Some(json!({"overridden_links": {"order": "https://order.example/t2"}})),
        ),
    )
    .await;

    // Public, no token
    let (status, body) = send(
        &app,
        request("GET", "/api/musteri/sube/kurttepe/table/2", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let links = body["ordered_links"].as_array().unwrap();
    assert_eq!(links[0]["key"], "order");
    assert_eq!(links[0]["url"], "https://order.example/t2");
    assert_eq!(links[0]["label"], "Bir Tıkla Sipariş Ver!");
    assert_eq!(links[1]["key"], "instagram");
    assert_eq!(
        body["main_qr_link"],
        "https://adanaustam.example/musteri/sube/kurttepe/table/2"
    );
    assert_eq!(body["display_whatsapp_number"], "+90 555 111 22 33");

    // Table 1 has no overrides: branch default wins
    let (status, body) = send(
        &app,
        request("GET", "/api/musteri/sube/kurttepe/table/1", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["ordered_links"][0]["url"],
        "https://order.example/kurttepe"
    );

    // Unknown table and branch are 404
    let (status, body) = send(
        &app,
        request("GET", "/api/musteri/sube/kurttepe/table/99", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, body) = send(
        &app,
        request("GET", "/api/musteri/sube/nowhere/table/1", None, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn operator_scope_is_enforced() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);

    let branch_a = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;
    let branch_b = create_branch(&app, &su_token, "Barajyolu", "barajyolu").await;

    let op_a = create_operator(&state, "op-a", "parola-123", false, Some(branch_a)).await;
    let token_a = token_for(&state, &op_a);

    // Own branch is readable, the other is not
    let (status, _) = send(
        &app,
        request("GET", &format!("/api/branches/{branch_a}"), Some(&token_a), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request("GET", &format!("/api/branches/{branch_b}"), Some(&token_a), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2001);

    // List shows only the own branch
    let (_, body) = send(&app, request("GET", "/api/branches", Some(&token_a), None)).await;
    let branches = body.as_array().unwrap();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0]["slug"], "kurttepe");

    // Tables of another branch cannot be listed or provisioned
    let (status, _) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables?branch_id={branch_b}"),
            Some(&token_a),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A table id in another branch reads as missing, not forbidden
    let (_, body) = send(
        &app,
        request(
            "POST",
            &format!("/api/tables/bulk?branch_id={branch_b}"),
            Some(&su_token),
            Some(json!({"start_number": 1, "end_number": 1})),
        ),
    )
    .await;
    let foreign_table = body[0]["id"].as_i64().unwrap();
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/api/tables/{foreign_table}"),
            Some(&token_a),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    // Superuser must name a branch explicitly
    let (status, _) = send(&app, request("GET", "/api/tables", Some(&su_token), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Operator without ?branch_id falls back to their own branch
    let (status, _) = send(&app, request("GET", "/api/tables", Some(&token_a), None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn public_forms_flow() {
    let (app, state) = setup().await;
    let su = create_operator(&state, "root", "parola-123", true, None).await;
    let su_token = token_for(&state, &su);
    let branch_a = create_branch(&app, &su_token, "Kurttepe", "kurttepe").await;
    create_branch(&app, &su_token, "Barajyolu", "barajyolu").await;

    // Unknown branch key rejected
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/reservations",
            None,
            Some(json!({
                "name": "Ayşe", "email": "ayse@example.com", "phone": "+90 555 000 11 22",
                "reservation_date": "2024-06-01", "reservation_time": "19:30",
                "guest_count": 4, "branch_key": "nowhere", "message": null, "consent": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Valid submission, no token needed
    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/reservations",
            None,
            Some(json!({
                "name": "Ayşe", "email": "ayse@example.com", "phone": "+90 555 000 11 22",
                "reservation_date": "2024-06-01", "reservation_time": "19:30",
                "guest_count": 4, "branch_key": "kurttepe", "message": "Pencere kenarı",
                "consent": true
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reservation failed: {body}");
    assert_eq!(body["status"], "pending");
    let reservation_id = body["id"].as_i64().unwrap();

    // Second one for the other branch
    send(
        &app,
        request(
            "POST",
            "/api/reservations",
            None,
            Some(json!({
                "name": "Mehmet", "email": "mehmet@example.com", "phone": "+90 555 333 44 55",
                "reservation_date": "2024-06-02", "reservation_time": "20:00",
                "guest_count": 2, "branch_key": "barajyolu", "message": null, "consent": true
            })),
        ),
    )
    .await;

    // Reading the inbox requires auth
    let (status, _) = send(&app, request("GET", "/api/reservations", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Branch operator sees only their own branch's entries
    let op_a = create_operator(&state, "op-a", "parola-123", false, Some(branch_a)).await;
    let token_a = token_for(&state, &op_a);
    let (status, body) = send(&app, request("GET", "/api/reservations", Some(&token_a), None)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["branch_key"], "kurttepe");

    // Superuser sees everything
    let (_, body) = send(&app, request("GET", "/api/reservations", Some(&su_token), None)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Status transition
    let (status, body) = send(
        &app,
        request(
            "PUT",
            &format!("/api/reservations/{reservation_id}/status"),
            Some(&token_a),
            Some(json!({"status": "confirmed"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");

    // Contact message and application submissions are also public
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/messages",
            None,
            Some(json!({
                "name": "Ali", "email": "ali@example.com", "phone": null,
                "subject": "Teşekkür", "message": "Harika!", "branch_key": "kurttepe"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/applications",
            None,
            Some(json!({
                "name": "Zeynep", "email": "zeynep@example.com", "phone": "+90 555 777 88 99",
                "birthdate": "1998-03-12", "branch_key": "kurttepe", "department": "Servis",
                "experience_years": 3, "message": null, "privacy_policy_accepted": true,
                "cv_url": "https://files.example/cv/zeynep.pdf"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn link_types_catalog_endpoint() {
    let (app, state) = setup().await;
    let op = create_operator(&state, "op", "parola-123", false, None).await;
    let token = token_for(&state, &op);

    let (status, body) = send(&app, request("GET", "/api/link-types", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert!(entries.iter().any(|e| e["key"] == "order"));
    assert!(entries.iter().any(|e| e["key"] == "tiktok"));
}
