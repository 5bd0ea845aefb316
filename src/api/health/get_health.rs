use crate::models::*;
use actix_web::get;
use tracing_batteries::prelude::*;

#[tracing::instrument(fields(otel.kind = "internal"))]
#[get("/api/v1/health")]
pub async fn get_health_v1() -> HealthV1 {
    HealthV1 { ok: true }
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::models::*;

    #[actix_rt::test]
    async fn get_health_v1() {
        test_log_init();

        let content: HealthV1 = test_request!(GET "/api/v1/health" => OK with content);
        assert!(content.ok, "the service should report itself healthy");
    }
}
