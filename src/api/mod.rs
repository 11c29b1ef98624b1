//! HTTP transport for the registration workflow.
//!
//! - `GET /` serves the registration page
//! - `GET /api/users` lists every user as a JSON array
//! - `POST /api/users` registers a user from a `{name, email}` body

mod error;
mod page;

pub use error::*;

use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use crate::domain::{User, UserCreate};
use crate::service::{UserCommandService, UserQueryService, UserService};

pub const USER_CREATED_MESSAGE: &str = "User registered successfully";

/// Shared router state. Each handler extracts only the half it needs, so the
/// list route cannot write and the create route cannot read.
#[derive(Clone)]
pub struct AppState {
    pub queries: UserQueryService,
    pub commands: UserCommandService,
}

impl From<&UserService> for AppState {
    fn from(service: &UserService) -> Self {
        Self {
            queries: service.queries().clone(),
            commands: service.commands().clone(),
        }
    }
}

impl FromRef<AppState> for UserQueryService {
    fn from_ref(state: &AppState) -> Self {
        state.queries.clone()
    }
}

impl FromRef<AppState> for UserCommandService {
    fn from_ref(state: &AppState) -> Self {
        state.commands.clone()
    }
}

/// Body of every non-list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/users", get(list_users_handler).post(create_user_handler))
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

#[instrument(skip(queries))]
async fn list_users_handler(State(queries): State<UserQueryService>) -> Result<Json<Vec<User>>, ApiError> {
    let users = queries.list_users().await.map_err(ApiError::List)?;
    Ok(Json(users))
}

#[instrument(skip(commands, payload))]
async fn create_user_handler(
    State(commands): State<UserCommandService>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(UserCreate { name, email }) =
        payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    commands.create_user(name, email).await.map_err(ApiError::Create)?;
    Ok(Json(MessageResponse::new(USER_CREATED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use std::sync::Arc;
    use tower::util::ServiceExt; // for `oneshot`
    use crate::mock_framework::create_mock_store_client;
    use crate::error::StoreError;
    use crate::service::IdGenerator;
    use crate::store::{UserReader, UserStoreActor, UserWriter};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn test_router() -> Router {
        let (actor, client) = UserStoreActor::new(10);
        tokio::spawn(actor.run());
        let service = UserService::new(Arc::new(client), IdGenerator::sequential());
        create_router(AppState::from(&service))
    }

    fn post_users(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_users() -> Request<Body> {
        Request::builder().uri("/api/users").body(Body::empty()).unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_endpoint_starts_empty() {
        let response = test_router().oneshot(get_users()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let users: Vec<User> = json_body(response).await;
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(post_users(r#"{"name":"Ana","email":"ana@x.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body, MessageResponse::new(USER_CREATED_MESSAGE));

        let response = app.oneshot(get_users()).await.unwrap();
        let users: serde_json::Value = json_body(response).await;
        assert_eq!(users, serde_json::json!([{ "id": 1, "name": "Ana", "email": "ana@x.com" }]));
    }

    #[tokio::test]
    async fn test_create_response_does_not_expose_id() {
        let response = test_router()
            .oneshot(post_users(r#"{"name":"Ana","email":"ana@x.com"}"#))
            .await
            .unwrap();
        let body: serde_json::Value = json_body(response).await;
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_empty_strings_pass_through() {
        let app = test_router();
        let response = app.clone().oneshot(post_users(r#"{"name":"","email":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let users: Vec<User> = json_body(app.oneshot(get_users()).await.unwrap()).await;
        assert_eq!(users, vec![User::new(1, "", "")]);
    }

    #[tokio::test]
    async fn test_malformed_body_gets_generic_error() {
        let app = test_router();
        for body in ["not json", r#"{"name":"Ana"}"#, r#"{"name":1,"email":"a"}"#] {
            let response = app.clone().oneshot(post_users(body)).await.unwrap();
            assert!(response.status().is_client_error(), "body {:?}", body);
            let body: MessageResponse = json_body(response).await;
            assert_eq!(body.message, "error creating user");
        }

        let users: Vec<User> = json_body(app.oneshot(get_users()).await.unwrap()).await;
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_server_error() {
        let (client, receiver) = create_mock_store_client(1);
        drop(receiver);
        let service = UserService::new(Arc::new(client), IdGenerator::sequential());
        let app = create_router(AppState::from(&service));

        let response = app
            .clone()
            .oneshot(post_users(r#"{"name":"Ana","email":"ana@x.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "error creating user");

        let response = app.oneshot(get_users()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_index_serves_registration_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<form"));
        assert!(html.contains("/api/users"));
        assert!(html.contains(r#"id="count""#));
        assert!(html.contains(r#"id="refresh""#));
        assert!(html.contains("No users registered yet."));
    }

    struct FixedReader(Vec<User>);

    #[async_trait]
    impl UserReader for FixedReader {
        async fn get_all(&self) -> Result<Vec<User>, StoreError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingWriter(Mutex<Vec<User>>);

    #[async_trait]
    impl UserWriter for RecordingWriter {
        async fn add(&self, user: User) -> Result<(), StoreError> {
            self.0.lock().unwrap().push(user);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_routes_use_separate_read_and_write_backends() {
        let writer = Arc::new(RecordingWriter::default());
        let state = AppState {
            queries: UserQueryService::new(Arc::new(FixedReader(vec![User::new(7, "Bo", "bo@x.com")]))),
            commands: UserCommandService::new(writer.clone(), IdGenerator::new(|| 3)),
        };
        let app = create_router(state);

        let response = app
            .clone()
            .oneshot(post_users(r#"{"name":"Ana","email":"ana@x.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(*writer.0.lock().unwrap(), vec![User::new(3, "Ana", "ana@x.com")]);

        let users: Vec<User> = json_body(app.oneshot(get_users()).await.unwrap()).await;
        assert_eq!(users, vec![User::new(7, "Bo", "bo@x.com")]);
    }
}
