use crate::appointment_manager::BookingOutcome;
use crate::provider::SmsProvider;
use crate::store::AppointmentBackend;
use crate::types::BookingRequest;
use crate::verification::{self, VerificationOutcome};
use crate::views::{self, FormModel};
use crate::AppState;
use axum::response::Html;
use axum::{
    extract::State,
    routing::{get, post},
    Form, Router,
};
use chrono::Local;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Clone, Deserialize)]
struct VerifyRequest {
    id: String,
    token: String,
}

pub fn router<P: SmsProvider, S: AppointmentBackend>(state: AppState<P, S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(get_form))
        .route("/book", post(book_appointment))
        .route("/step3", post(verify_token))
        .with_state(state)
        .layer(cors)
}

pub async fn start_server<P: SmsProvider, S: AppointmentBackend>(
    state: AppState<P, S>,
    port: u16,
) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .unwrap();
    tracing::info!("listening on 127.0.0.1:{port}");
    axum::serve(listener, app).await.unwrap();
}

async fn get_form() -> Html<String> {
    let model = FormModel::suggested(Local::now().naive_local());
    Html(views::form_page(&model))
}

async fn book_appointment<P: SmsProvider, S: AppointmentBackend>(
    State(state): State<AppState<P, S>>,
    Form(request): Form<BookingRequest>,
) -> Html<String> {
    let now = Local::now().naive_local();
    match state.manager.book(request, now).await {
        BookingOutcome::Confirmed(appointment) => Html(views::confirmation_page(&appointment)),
        BookingOutcome::Rejected { request, errors } => {
            Html(views::form_page(&FormModel::echo(request, errors)))
        }
    }
}

async fn verify_token<P: SmsProvider, S: AppointmentBackend>(
    State(state): State<AppState<P, S>>,
    Form(request): Form<VerifyRequest>,
) -> Html<String> {
    match verification::verify(&state.provider, &request.id, &request.token).await {
        VerificationOutcome::Verified => Html(views::verify_success_page()),
        VerificationOutcome::Retry { errors } => Html(views::verify_retry_page(&errors)),
    }
}
