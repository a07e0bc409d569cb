//! Integration tests for the Sportiva backend client

use serde_json::json;
use sportiva_client::{
    ClientError, PublicClient, SignUpOutcome, SignUpRequest, TypedClientBuilder,
};
use sportiva_core::{GymUser, NewGym, RequestFailure, Role};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "anon-key";
const TOKEN: &str = "user-jwt";

fn public_client(server: &MockServer) -> PublicClient {
    TypedClientBuilder::new()
        .base_url(server.uri())
        .anon_key(ANON_KEY)
        .build_public()
        .unwrap()
}

#[tokio::test]
async fn test_builder_requires_base_url_and_key() {
    let result = TypedClientBuilder::new().anon_key(ANON_KEY).build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = TypedClientBuilder::new()
        .base_url("http://localhost:54321")
        .build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:54321/")
        .anon_key(ANON_KEY)
        .build_authenticated(TOKEN)
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:54321");
}

#[tokio::test]
async fn test_sign_in_with_password() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", ANON_KEY))
        .and(body_json(json!({"email": "ada@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1_700_003_600,
            "refresh_token": "refresh",
            "user": {"id": "u1", "email": "ada@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = public_client(&server)
        .sign_in_with_password("ada@example.com", "secret")
        .await
        .unwrap();
    let session = token.into_session(1_700_000_000);

    assert_eq!(session.access_token, TOKEN);
    assert_eq!(session.user.id, "u1");
    assert_eq!(session.expires_at, Some(1_700_003_600));
}

#[tokio::test]
async fn test_sign_in_rejected_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let error = public_client(&server)
        .sign_in_with_password("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(
        RequestFailure::from(error).display_message(),
        "Invalid login credentials"
    );
}

#[tokio::test]
async fn test_sign_up_requiring_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "secret",
            "data": {"first_name": "Ada", "last_name": "Lovelace"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "ada@example.com",
            "user_metadata": {"first_name": "Ada", "last_name": "Lovelace"}
        })))
        .mount(&server)
        .await;

    let outcome = public_client(&server)
        .sign_up(&SignUpRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        })
        .await
        .unwrap();
    assert!(matches!(outcome, SignUpOutcome::ConfirmationRequired(user) if user.id == "u1"));
}

#[tokio::test]
async fn test_get_user_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("select", "first_name,last_name"))
        .and(query_param("id", "eq.u1"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"first_name": "Ada", "last_name": "Lovelace"}])),
        )
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let name = client.get_user_name("u1").await.unwrap();
    assert_eq!(name.full_name(), "Ada Lovelace");
}

#[tokio::test]
async fn test_get_user_name_missing_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let result = client.get_user_name("u1").await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn test_get_user_gyms_flattens_join() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/gym_users"))
        .and(query_param("select", "gym_id,gyms(name,city)"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"gym_id": "g1", "gyms": {"name": "Iron House", "city": "Lisbon"}},
            {"gym_id": "g2", "gyms": {"name": "Core Club", "city": null}},
            {"gym_id": "g3", "gyms": null}
        ])))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let gyms = client.get_user_gyms("u1").await.unwrap();

    assert_eq!(gyms.len(), 2);
    assert_eq!(gyms[0].gym_id, "g1");
    assert_eq!(gyms[0].gym_name, "Iron House");
    assert_eq!(gyms[0].gym_city.as_deref(), Some("Lisbon"));
    assert_eq!(gyms[1].gym_city, None);
}

#[tokio::test]
async fn test_get_gyms_by_manager() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/gyms"))
        .and(query_param("select", "id,name,city"))
        .and(query_param("owner_user_id", "eq.m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "g1", "name": "Iron House", "city": "Lisbon"}
        ])))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let gyms = client.get_gyms_by_manager("m1").await.unwrap();
    assert_eq!(gyms.len(), 1);
    assert_eq!(gyms[0].name, "Iron House");
}

#[tokio::test]
async fn test_get_user_session_with_roles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "u1", "email": "a@b.c"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/get_user_roles"))
        .and(body_json(json!({"p_user_id": "u1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Member", "Trainer"])))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let session = client.get_user_session_with_roles().await.unwrap();

    assert_eq!(session.user_id, "u1");
    assert!(session.roles.contains(Role::Member));
    assert!(session.roles.contains(Role::Trainer));
    assert!(!session.roles.contains(Role::GymManager));
}

#[tokio::test]
async fn test_expired_token_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "msg": "invalid JWT: token is expired"
        })))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let error = client.get_user_session_with_roles().await.unwrap_err();
    assert!(error.is_auth_expired());
}

#[tokio::test]
async fn test_register_trainer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/trainers"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(json!({
            "user_id": "u1",
            "experience": "3",
            "specialty": "Crossfit"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    client.register_trainer("u1", "3", "Crossfit").await.unwrap();
}

#[tokio::test]
async fn test_register_trainer_duplicate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/trainers"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "details": null,
            "hint": null,
            "message": "duplicate"
        })))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let error = client
        .register_trainer("u1", "3", "Crossfit")
        .await
        .unwrap_err();
    assert_eq!(RequestFailure::from(error).display_message(), "duplicate");
}

#[tokio::test]
async fn test_register_gym_manager() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/gym_managers"))
        .and(body_json(json!({
            "user_id": "u1",
            "gym_name": "Iron House",
            "city": "Lisbon"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    client
        .register_gym_manager("u1", "Iron House", "Lisbon")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_gym_returns_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/gyms"))
        .and(query_param("select", "id"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({
            "name": "Iron House",
            "address": "1 Main St",
            "phone": "555-0100",
            "owner_user_id": "m1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{"id": "g1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let id = client
        .create_gym(&NewGym {
            name: "Iron House".into(),
            address: "1 Main St".into(),
            phone: "555-0100".into(),
            owner_user_id: "m1".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, "g1");
}

#[tokio::test]
async fn test_add_user_to_gym() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/gym_users"))
        .and(body_json(json!({
            "user_id": "u2",
            "gym_id": "g1",
            "role": "Trainer",
            "added_by": "m1"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    client
        .add_user_to_gym(&GymUser {
            user_id: "u2".into(),
            gym_id: "g1".into(),
            role: Role::Trainer,
            added_by: "m1".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_forbidden_insert_without_message_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/gym_users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    let error = client
        .add_user_to_gym(&GymUser {
            user_id: "u2".into(),
            gym_id: "g1".into(),
            role: Role::Member,
            added_by: "m1".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, ClientError::Backend { status: 403, message: None }));
    assert_eq!(RequestFailure::from(error), RequestFailure::Unspecified);
}

#[tokio::test]
async fn test_sign_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer user-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server).authenticate(TOKEN);
    client.sign_out().await.unwrap();
}
