use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Liveness probe used by the front end before enabling the pipeline UI.
/// Reports an error when the upstream credential is unconfigured.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    if !state.config().has_api_key() {
        return HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "message": "OpenAI API key not configured"
        }));
    }

    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
