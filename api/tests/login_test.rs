//! Integration tests for the login endpoint

use actix_web::{test, web};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use gate_api::app::create_app;
use gate_api::routes::auth::AppState;
use gate_core::domain::entities::{Account, AuthEvent, AuthEventType};
use gate_core::domain::value_objects::Rights;
use gate_core::repositories::{MockAccountRepository, MockAuthEventRepository};
use gate_core::services::auth::AuthService;
use gate_core::services::lockout::SuspiciousActivityDetector;
use gate_core::services::password::BcryptPasswordHasher;
use gate_core::services::provisioning::ProvisioningService;
use gate_core::services::token::{TokenService, TokenServiceConfig};
use gate_shared::config::JwtConfig;

const TEST_SECRET: &str = "integration-test-secret";

/// Lowest cost bcrypt accepts, to keep the suite fast.
const TEST_COST: u32 = 4;

type TestState = AppState<MockAccountRepository, MockAuthEventRepository, BcryptPasswordHasher>;

struct Harness {
    accounts: Arc<MockAccountRepository>,
    events: Arc<MockAuthEventRepository>,
    state: web::Data<TestState>,
}

fn harness() -> Harness {
    let accounts = Arc::new(MockAccountRepository::new());
    let events = Arc::new(MockAuthEventRepository::new());
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(TEST_COST));
    let detector = SuspiciousActivityDetector::with_defaults(events.clone());

    let auth_service = Arc::new(AuthService::new(
        accounts.clone(),
        events.clone(),
        detector,
        hasher.clone(),
    ));
    let provisioning_service = Arc::new(ProvisioningService::new(
        accounts.clone(),
        events.clone(),
        hasher,
    ));

    let jwt = JwtConfig::new(TEST_SECRET);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&jwt)));

    let state = web::Data::new(AppState {
        auth_service,
        provisioning_service,
        token_service,
        jwt,
    });

    Harness {
        accounts,
        events,
        state,
    }
}

async fn seed_account(harness: &Harness, email: &str, password: &str) -> Account {
    let hash = bcrypt::hash(password, TEST_COST).unwrap();
    let account = Account::new(
        email.to_string(),
        hash,
        "Ada".to_string(),
        "Lovelace".to_string(),
        36,
        Rights::new(),
        json!({"theme": "dark"}),
    );
    harness.accounts.insert(account.clone()).await;
    account
}

#[actix_web::test]
async fn test_login_success_returns_token() {
    let harness = harness();
    let account = seed_account(&harness, "ada@example.com", "correct-horse-battery").await;

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "ada@example.com",
            "userPassword": "correct-horse-battery"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let jwt = body["jwt"].as_str().unwrap();
    assert!(!jwt.is_empty());

    // The token verifies against the same secret and names the account
    let token_service = TokenService::new(TokenServiceConfig::from(&JwtConfig::new(TEST_SECRET)));
    let claims = token_service.verify(jwt).unwrap();
    assert_eq!(claims.account_id().unwrap(), account.id);
    assert_eq!(claims.email, "ada@example.com");

    // The success is on the audit trail
    let successes: Vec<AuthEvent> = harness
        .events
        .events_for(account.id)
        .into_iter()
        .filter(|e| e.event_type == AuthEventType::SuccessfulAuthentication)
        .collect();
    assert_eq!(successes.len(), 1);
}

#[actix_web::test]
async fn test_login_wrong_password_is_unauthorized() {
    let harness = harness();
    let account = seed_account(&harness, "ada@example.com", "correct-horse-battery").await;

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "ada@example.com",
            "userPassword": "wrong-horse-battery"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AuthenticationFailure");

    // The failed attempt is on the audit trail
    let failures: Vec<AuthEvent> = harness
        .events
        .events_for(account.id)
        .into_iter()
        .filter(|e| e.event_type == AuthEventType::FailedLoginAttempt)
        .collect();
    assert_eq!(failures.len(), 1);
}

#[actix_web::test]
async fn test_login_unknown_email_is_unauthorized() {
    let harness = harness();

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "nobody@example.com",
            "userPassword": "any-password"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AuthenticationFailure");

    // No account, so nothing to attach an event to
    assert!(harness.events.all_events().is_empty());
}

#[actix_web::test]
async fn test_login_empty_credentials_is_unauthorized() {
    let harness = harness();
    seed_account(&harness, "ada@example.com", "correct-horse-battery").await;

    let app = test::init_service(create_app(harness.state.clone())).await;

    // Present but empty fields are a credential failure, not a validation one
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "",
            "userPassword": ""
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AuthenticationFailure");
}

#[actix_web::test]
async fn test_login_locked_account_is_blocked() {
    let harness = harness();
    let account = seed_account(&harness, "mallory@example.com", "correct-horse-battery").await;

    // Eleven recent failures put the account past the lockout threshold
    let base = Utc::now().timestamp() - 1000;
    for i in 0..11 {
        harness.events.seed(
            AuthEvent::new(account.id, AuthEventType::FailedLoginAttempt).with_timestamp(base + i),
        );
    }

    let app = test::init_service(create_app(harness.state.clone())).await;

    // Even the correct password does not get through
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "mallory@example.com",
            "userPassword": "correct-horse-battery"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "AuthenticationBlocked-AccountLocked");

    // The blocked attempt is itself recorded as a failure
    let failures: Vec<AuthEvent> = harness
        .events
        .events_for(account.id)
        .into_iter()
        .filter(|e| e.event_type == AuthEventType::FailedLoginAttempt)
        .collect();
    assert_eq!(failures.len(), 12);
}

#[actix_web::test]
async fn test_login_missing_field_is_bad_request() {
    let harness = harness();

    let app = test::init_service(create_app(harness.state.clone())).await;

    // A body that does not deserialize never reaches the engine
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "userEmail": "ada@example.com"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let harness = harness();

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gatehouse-api");
}

#[actix_web::test]
async fn test_service_info_at_root() {
    let harness = harness();

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Authentication Service API");
    assert!(body["endpoints"]["login"].is_object());
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let harness = harness();

    let app = test::init_service(create_app(harness.state.clone())).await;

    let req = test::TestRequest::get().uri("/no/such/route").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Endpoint not found");
}
