//! In-process test server fixture
//!
//! Builds the full router against temporary upload/asset directories so
//! filesystem effects are observable and isolated per test.

use std::path::Path;
use std::sync::Arc;

use axum_test::TestServer;
use sqlx::PgPool;
use tempfile::TempDir;

use waylog::routes::create_router;
use waylog::server::{AppConfig, AppState};

pub const TEST_BASE_URL: &str = "http://localhost:8000";
pub const TEST_JWT_SECRET: &str = "test-secret";

/// A running application plus its temporary directories
pub struct TestApp {
    pub server: TestServer,
    pub uploads: TempDir,
    pub assets: TempDir,
}

impl TestApp {
    pub fn uploads_dir(&self) -> &Path {
        self.uploads.path()
    }
}

/// Spawn the application on top of the given pool
pub fn spawn_app(pool: PgPool) -> TestApp {
    let uploads = tempfile::tempdir().expect("Failed to create uploads tempdir");
    let assets = tempfile::tempdir().expect("Failed to create assets tempdir");

    let config = Arc::new(AppConfig {
        port: 8000,
        public_base_url: TEST_BASE_URL.to_string(),
        uploads_dir: uploads.path().to_path_buf(),
        assets_dir: assets.path().to_path_buf(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
    });

    let state = AppState {
        db_pool: pool,
        config,
    };

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        uploads,
        assets,
    }
}
