use crate::api::APIError;
use crate::models::*;
use actix_web::{post, web};
use tracing_batteries::prelude::*;

#[tracing::instrument(err, skip(event), fields(otel.kind = "internal", http.request.uri = %event.request.uri))]
#[post("/api/v1/rewrite")]
pub async fn rewrite_request_v1(event: web::Json<EventV1>) -> Result<RequestV1, APIError> {
    let request = event.into_inner().request;

    if !request.uri.starts_with('/') {
        return Err(APIError::new(
            400,
            "Bad Request",
            "The request descriptor's uri must be an absolute path beginning with '/'.",
        ));
    }

    Ok(request.normalize())
}
