use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};

use crate::{
    config::Config,
    db::Database,
    web::{create_score, list_scores, predict_scores, scores_by_date},
};

/// Application state injected into every handler: the connection pool plus
/// the loaded configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self { db, config }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Build the HTTP router. Trailing slashes are part of the public contract,
/// so the routes keep them verbatim.
pub fn create_app_router(db: Database, config: Config) -> Router {
    let app_state = AppState::new(db, config);
    Router::new()
        .route("/scores/", post(create_score).get(list_scores))
        .route("/scores/{score_date}/", get(scores_by_date))
        .route("/predict/", post(predict_scores))
        .route("/health", get(health_check))
        .with_state(app_state)
}

/// Health check endpoint for monitoring and load balancer probes.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let result = health_check().await;
        assert_eq!(result, "OK");
    }
}
