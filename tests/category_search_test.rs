use anyhow::Result;
use dashboard_api::{ApiClient, ApiError, ApiServices, SearchService};
use httpmock::prelude::*;
use serde_json::json;

fn alimentos() -> serde_json::Value {
    json!([
        {"id": 10, "nombre": "Arroz Diana 500g", "categoria": "alimento"},
        {"id": 11, "nombre": "Aceite de girasol", "categoria": "alimento"},
        {"id": 12, "nombre": "ARROZ integral", "categoria": "alimento"},
        {"id": 13, "nombre": "Lentejas", "categoria": "alimento"},
        {"id": 14, "categoria": "alimento"}
    ])
}

#[tokio::test]
async fn test_by_category_hits_category_endpoint() -> Result<()> {
    let server = MockServer::start();

    let category_mock = server.mock(|when, then| {
        when.method(GET).path("/api/productos/categoria/alimento");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(alimentos());
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let result = services.productos.by_category("alimento").await?;

    category_mock.assert();
    assert_eq!(result, alimentos());
    Ok(())
}

#[tokio::test]
async fn test_search_in_category_filters_and_keeps_order() -> Result<()> {
    let server = MockServer::start();

    let category_mock = server.mock(|when, then| {
        when.method(GET).path("/api/productos/categoria/alimento");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(alimentos());
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let matches = services
        .productos
        .search_in_category("alimento", "arroz")
        .await?;

    category_mock.assert_hits(1);
    let ids: Vec<i64> = matches.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, vec![10, 12]);
    Ok(())
}

#[tokio::test]
async fn test_search_in_category_without_matches_is_empty() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/productos/categoria/alimento");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(alimentos());
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let matches = services
        .productos
        .search_in_category("alimento", "detergente")
        .await?;

    assert!(matches.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_in_category_rejects_non_list_payload() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/productos/categoria/alimento");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"content": alimentos(), "totalPages": 1}));
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let err = services
        .productos
        .search_in_category("alimento", "arroz")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedPayload { .. }));
    Ok(())
}

#[tokio::test]
async fn test_local_client_search_filters_full_listing() -> Result<()> {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/clientes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"id": 1, "nombre": "Marisol López"},
                {"id": 2, "nombre": "Juan Ruiz"},
                {"id": 3, "nombre": "Mariana Gómez"}
            ]));
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let matches = services.clientes.search_local("mari").await?;

    list_mock.assert();
    let ids: Vec<i64> = matches.iter().filter_map(|c| c["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 3]);
    Ok(())
}

#[tokio::test]
async fn test_by_category_without_content_is_unexpected_payload() -> Result<()> {
    let server = MockServer::start();

    let category_mock = server.mock(|when, then| {
        when.method(GET).path("/api/productos/categoria/bebidas");
        then.status(204);
    });

    let services = ApiServices::new(ApiClient::new(server.base_url())?);
    let err = services.productos.by_category("bebidas").await.unwrap_err();

    category_mock.assert();
    match err {
        ApiError::UnexpectedPayload { message } => {
            assert_eq!(message, "productos by_category returned no content");
        }
        other => panic!("expected UnexpectedPayload, got {other:?}"),
    }
    Ok(())
}
