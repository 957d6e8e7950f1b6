use std::time::Instant;

use axum::{extract, middleware::Next, response::Response};

/// Logs method, path, status and duration of every request.
pub async fn request_log_middleware(req: extract::Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let now = Instant::now();

    let response = next.run(req).await;

    log::info!(
        "{} {} -> {} in {:.3}s",
        method,
        path,
        response.status().as_u16(),
        now.elapsed().as_secs_f64()
    );
    response
}
