use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::features::offices::dtos::{OfficeListResponseDto, OfficeQuery, OfficeResponseDto};
use crate::features::offices::services::OfficeDirectory;
use crate::shared::types::ResponseStatus;

/// List PGN offices
///
/// Without `region` every office is returned in directory order. An unknown
/// region yields an empty list.
#[utoipa::path(
    get,
    path = "/api/offices",
    params(OfficeQuery),
    responses(
        (status = 200, description = "List of offices", body = OfficeListResponseDto),
    ),
    tag = "offices"
)]
pub async fn list_offices(
    State(directory): State<Arc<OfficeDirectory>>,
    Query(query): Query<OfficeQuery>,
) -> Json<OfficeListResponseDto> {
    let offices: Vec<OfficeResponseDto> = directory
        .list(query.region.as_deref())
        .into_iter()
        .map(Into::into)
        .collect();

    Json(OfficeListResponseDto {
        status: ResponseStatus::Ok,
        offices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::offices::routes;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes::routes(Arc::new(OfficeDirectory::default()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_all_offices() {
        let response = server().get("/api/offices").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["offices"].as_array().unwrap().len(), 3);
        assert_eq!(body["offices"][0]["siteName"], "Sede Central PGN");
        assert_eq!(body["offices"][2]["region"], "Huehuetenango");
    }

    #[tokio::test]
    async fn test_filter_by_region_query() {
        let response = server()
            .get("/api/offices")
            .add_query_param("region", "quetzaltenango")
            .await;
        response.assert_status_ok();

        let body: OfficeListResponseDto = response.json();
        assert_eq!(body.offices.len(), 1);
        assert_eq!(body.offices[0].region, "Quetzaltenango");
        assert_eq!(body.offices[0].latitude, Some(14.8347));
    }

    #[tokio::test]
    async fn test_unknown_region_is_empty_not_error() {
        let response = server()
            .get("/api/offices")
            .add_query_param("region", "Peten")
            .await;
        response.assert_status_ok();

        let body: OfficeListResponseDto = response.json();
        assert!(body.offices.is_empty());
    }
}
