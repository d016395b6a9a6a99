use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, get_service, post},
};
use sea_orm::DatabaseConnection;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::routes::activities::{get_activities, signup_for_activity, unregister_from_activity};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn create_router(db: DatabaseConnection) -> Router {
    let state = AppState { db };

    Router::new()
        .route("/", get(index))
        .route("/activities", get(get_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        .with_state(state)
        .nest_service("/static", get_service(ServeDir::new("static")))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Redirect {
    Redirect::to("/static/index.html")
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
