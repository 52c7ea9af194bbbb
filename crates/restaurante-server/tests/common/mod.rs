#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use r2d2_sqlite::SqliteConnectionManager;
use restaurante_db::{create_pool, run_migrations, DbConnection, DbPool, DbRuntimeSettings};
use restaurante_server::{app, AppState};
use serde_json::Value;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    _dir: TempDir,
}

pub fn setup_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("restaurante.db");
    let pool = create_pool(
        path.to_str().expect("temp path should be utf-8"),
        DbRuntimeSettings {
            busy_timeout_ms: 5_000,
            pool_max_size: 4,
        },
    )
    .expect("failed to create pool");
    {
        let conn = pool.get().expect("failed to get connection");
        run_migrations(&conn).expect("failed to run migrations");
    }

    let state = AppState {
        pool: pool.clone(),
        static_dir: dir.path().join("static").to_string_lossy().into_owned(),
    };

    TestApp {
        router: app(state),
        pool,
        _dir: dir,
    }
}

/// Builds an app whose single pooled connection is already checked out.
///
/// Every request then fails to acquire a connection once the short pool
/// timeout elapses. The returned connection must stay alive for the test.
pub fn setup_app_without_connections() -> (TestApp, DbConnection) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("restaurante.db");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(200))
        .build(SqliteConnectionManager::file(&path))
        .expect("failed to create pool");

    let held = pool.get().expect("failed to get connection");
    run_migrations(&held).expect("failed to run migrations");

    let state = AppState {
        pool: pool.clone(),
        static_dir: dir.path().join("static").to_string_lossy().into_owned(),
    };

    let app = TestApp {
        router: app(state),
        pool,
        _dir: dir,
    };
    (app, held)
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router should not fail")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method("DELETE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method(method)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send_form(&self, uri: &str, body: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).expect("body should be json")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
