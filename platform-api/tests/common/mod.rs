use platform_api::config::ApiConfig;
use platform_api::services::Database;
use platform_api::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: Database,
}

impl TestApp {
    /// Spawn the application on a random port against the configured
    /// PostgreSQL instance (DATABASE_URL, dev default localhost).
    pub async fn spawn() -> Self {
        let mut config = ApiConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port, db }
    }

    /// Look up a registered user's id by email, straight from the store.
    pub async fn user_id_by_email(&self, email: &str) -> i32 {
        sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(self.db.pool())
            .await
            .expect("User not found in database")
    }

    /// Remove a test user so repeated runs stay clean.
    pub async fn remove_user(&self, email: &str) {
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(self.db.pool())
            .await
            .ok();
    }
}

/// Unique email per test run so tests never collide in a shared database.
pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, uuid::Uuid::new_v4().simple())
}
