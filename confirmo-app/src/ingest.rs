use axum::http::StatusCode;
use axum::routing::post;
use axum::{Extension, Json, Router};
use confirmo_core::booking::BookingRecord;
use confirmo_core::queue::SenderChannel;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub(crate) struct HttpExtensions {
    pub sender: Arc<dyn SenderChannel>,
}

#[derive(OpenApi)]
#[openapi(info(description = "Confirmo Booking Ingest API"), paths(create_booking))]
struct ApiDoc;

pub(crate) async fn start(serviceapi_bind: SocketAddr, ext: HttpExtensions) {
    // Bind everything now to catch any errors before spinning up the coroutines
    let listener = TcpListener::bind(serviceapi_bind).await.unwrap();

    // Service API
    let app = Router::new()
        .route("/v1/bookings", post(create_booking))
        .layer(Extension(ext));

    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    tokio::spawn(async { axum::serve(listener, app).await.unwrap() });
}

#[utoipa::path(
    post,
    path = "/v1/bookings",
    request_body = BookingRecord,
    responses(
        (status = StatusCode::ACCEPTED, description = "Booking record accepted for confirmation"),
    ),
)]
async fn create_booking(
    Extension(ext): Extension<HttpExtensions>,
    Json(payload): Json<BookingRecord>,
) -> StatusCode {
    let record = serde_json::to_string(&payload).unwrap();
    ext.sender.send(record).await.unwrap();

    StatusCode::ACCEPTED
}
