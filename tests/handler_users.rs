mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{ScriptedUserRepository, ninjas, scripted_state};
use serde_json::json;
use std::sync::Arc;
use user_service::api::dto::envelope::Envelope;
use user_service::api::dto::user::UserResponse;
use user_service::domain::entities::User;
use user_service::routes::api_router;

fn make_server(repo: Arc<ScriptedUserRepository>) -> TestServer {
    TestServer::new(api_router(scripted_state(repo))).unwrap()
}

fn response(id: i64, name: &str, age: i64, is_of_age: bool) -> UserResponse {
    UserResponse {
        id,
        name: name.to_string(),
        age,
        is_of_age,
    }
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_users_presents_each_user() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        users: ninjas(),
        ..Default::default()
    }));

    let res = server.get("/users").await;

    res.assert_status_ok();
    let body = res.json::<Envelope<Vec<UserResponse>>>();
    assert!(body.success);
    assert_eq!(
        body.data,
        vec![
            response(1, "Naruto", 10, false),
            response(2, "Sasuke", 18, true),
            response(3, "Kakashi", 50, true),
        ]
    );
}

#[tokio::test]
async fn test_list_users_empty() {
    let server = make_server(Arc::new(ScriptedUserRepository::default()));

    let res = server.get("/users").await;

    res.assert_status_ok();
    assert_eq!(
        res.json::<serde_json::Value>(),
        json!({ "success": true, "data": [] })
    );
}

#[tokio::test]
async fn test_list_users_wire_format() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        users: vec![User::new(2, "Sasuke".to_string(), 18)],
        ..Default::default()
    }));

    let body = server.get("/users").await.json::<serde_json::Value>();

    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [{ "id": 2, "name": "Sasuke", "age": 18, "isOfAge": true }]
        })
    );
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_user_success() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        found: Some(User::new(1, "Naruto".to_string(), 10)),
        ..Default::default()
    }));

    let res = server.get("/users/1").await;

    res.assert_status_ok();
    let body = res.json::<Envelope<UserResponse>>();
    assert!(body.success);
    assert_eq!(body.data, response(1, "Naruto", 10, false));
}

#[tokio::test]
async fn test_get_user_not_found() {
    let server = make_server(Arc::new(ScriptedUserRepository::default()));

    let res = server.get("/users/999").await;

    res.assert_status(StatusCode::NOT_FOUND);
    let body = res.json::<Envelope<String>>();
    assert!(!body.success);
    assert_eq!(body.data, "Usuário não encontrado");
}

#[tokio::test]
async fn test_get_user_non_integer_id() {
    let server = make_server(Arc::new(ScriptedUserRepository::default()));

    let res = server.get("/users/abc").await;

    res.assert_status(StatusCode::NOT_FOUND);
    let body = res.json::<Envelope<String>>();
    assert!(!body.success);
    assert_eq!(body.data, "Usuário não encontrado");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_user_success() {
    let repo = Arc::new(ScriptedUserRepository {
        accept_save: true,
        ..Default::default()
    });
    let server = make_server(repo.clone());

    let res = server
        .post("/users")
        .json(&json!({ "id": 4, "name": "Sakura", "age": 16 }))
        .await;

    res.assert_status(StatusCode::CREATED);
    let body = res.json::<Envelope<String>>();
    assert!(body.success);
    assert_eq!(body.data, "Usuário criado com sucesso");
    assert_eq!(
        *repo.saved.lock().unwrap(),
        vec![User::new(4, "Sakura".to_string(), 16)]
    );
}

#[tokio::test]
async fn test_create_user_rejected_by_repository() {
    let server = make_server(Arc::new(ScriptedUserRepository::default()));

    let res = server
        .post("/users")
        .json(&json!({ "id": 4, "name": "Sakura", "age": 16 }))
        .await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Envelope<String>>();
    assert!(!body.success);
    assert_eq!(body.data, "Falha ao criar o usuário");
}

#[tokio::test]
async fn test_create_user_invalid_data() {
    let repo = Arc::new(ScriptedUserRepository::default());
    let server = make_server(repo.clone());

    let res = server
        .post("/users")
        .json(&json!({ "name": "", "age": -5 }))
        .await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Envelope<String>>();
    assert!(!body.success);
    assert_eq!(body.data, "Falha ao criar o usuário");
    assert!(repo.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_malformed_body() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        accept_save: true,
        ..Default::default()
    }));

    let res = server.post("/users").text("{not json").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<serde_json::Value>(),
        json!({ "success": false, "data": "Falha ao criar o usuário" })
    );
}

#[tokio::test]
async fn test_create_user_wrong_field_types() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        accept_save: true,
        ..Default::default()
    }));

    let res = server
        .post("/users")
        .json(&json!({ "id": "four", "name": "Sakura", "age": 16 }))
        .await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Envelope<String>>();
    assert_eq!(body.data, "Falha ao criar o usuário");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_user_success() {
    let repo = Arc::new(ScriptedUserRepository {
        confirm_delete: true,
        ..Default::default()
    });
    let server = make_server(repo.clone());

    let res = server.delete("/users/1").await;

    res.assert_status_ok();
    let body = res.json::<Envelope<String>>();
    assert!(body.success);
    assert_eq!(body.data, "Usuário excluído com sucesso");
    assert_eq!(*repo.deleted.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn test_delete_user_missing() {
    let server = make_server(Arc::new(ScriptedUserRepository::default()));

    let res = server.delete("/users/999").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Envelope<String>>();
    assert!(!body.success);
    assert_eq!(body.data, "Falha ao remover o usuário");
}

#[tokio::test]
async fn test_delete_user_non_integer_id() {
    let repo = Arc::new(ScriptedUserRepository {
        confirm_delete: true,
        ..Default::default()
    });
    let server = make_server(repo.clone());

    let res = server.delete("/users/abc").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<Envelope<String>>().data,
        "Falha ao remover o usuário"
    );
    assert!(repo.deleted.lock().unwrap().is_empty());
}

// ─── FAULTS ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_repository_fault_on_list() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        fault: true,
        ..Default::default()
    }));

    let res = server.get("/users").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<serde_json::Value>(),
        json!({ "success": false, "data": "Erro interno do servidor" })
    );
}

#[tokio::test]
async fn test_repository_fault_on_delete() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        fault: true,
        ..Default::default()
    }));

    let res = server.delete("/users/1").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<Envelope<String>>().data,
        "Falha ao remover o usuário"
    );
}

#[tokio::test]
async fn test_handler_panic_becomes_failure_envelope() {
    let server = make_server(Arc::new(ScriptedUserRepository {
        panic: true,
        ..Default::default()
    }));

    let res = server.get("/users/1").await;

    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        res.json::<serde_json::Value>(),
        json!({ "success": false, "data": "Erro interno do servidor" })
    );
}
