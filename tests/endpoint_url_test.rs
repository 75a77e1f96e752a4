use dashboard_api::config::toml_config::DEFAULT_BASE_URL;
use dashboard_api::{
    build_api_url, ApiClient, ApiError, ApiServices, ClientConfig, CrudService, Endpoints,
    Operation, Resource,
};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_category_url_matches_origin_plus_path() {
    let client = ApiClient::new("http://localhost:8091").unwrap();
    let endpoint = Endpoints::lookup(Resource::Productos, Operation::ByCategory).unwrap();

    let url = client
        .url_for(&endpoint, &[("categoria", "alimento")])
        .unwrap();

    assert_eq!(url, "http://localhost:8091/api/productos/categoria/alimento");
    assert_eq!(
        url,
        build_api_url(
            "http://localhost:8091",
            "/api/productos/categoria/alimento"
        )
        .unwrap()
    );
}

#[test]
fn test_lookup_by_name_resolves_item_urls() {
    let client = ApiClient::new("https://erp.example.com/").unwrap();
    let endpoint = Endpoints::lookup_by_name("proveedores", "delete").unwrap();

    assert_eq!(endpoint.method, reqwest::Method::DELETE);
    assert_eq!(
        client.url_for(&endpoint, &[("id", "17")]).unwrap(),
        "https://erp.example.com/api/proveedores/17"
    );
}

#[test]
fn test_item_ids_stay_inside_their_collection() {
    let client = ApiClient::new("http://localhost:8091").unwrap();
    let endpoint = Endpoints::lookup(Resource::Clientes, Operation::Delete).unwrap();

    for id in ["1\\..\\..\\roles", "../roles", "7/../../roles", "%2e%2e", "a?b#c"] {
        let url = client.url_for(&endpoint, &[("id", id)]).unwrap();
        assert!(
            url.starts_with("http://localhost:8091/api/clientes/"),
            "{id} resolved to {url}"
        );
        assert_eq!(url.matches('/').count(), 5, "{id} resolved to {url}");
    }

    for id in [".", ".."] {
        assert!(matches!(
            client.url_for(&endpoint, &[("id", id)]),
            Err(ApiError::InvalidPathValue { .. })
        ));
    }
}

#[tokio::test]
async fn test_dot_segment_id_never_reaches_the_server() {
    let server = MockServer::start();

    let any_mock = server.mock(|when, then| {
        when.any_request();
        then.status(204);
    });

    let services = ApiServices::new(ApiClient::new(server.base_url()).unwrap());
    let err = services.clientes.delete("..").await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidPathValue { .. }));
    any_mock.assert_hits(0);
}

#[tokio::test]
async fn test_unresolved_placeholder_never_reaches_the_server() {
    let server = MockServer::start();

    let any_mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(serde_json::json!([]));
    });

    let client = ApiClient::new(server.base_url()).unwrap();
    let endpoint = Endpoints::lookup(Resource::Productos, Operation::ByCategory).unwrap();
    let err = client
        .execute::<serde_json::Value>(&endpoint, &[], None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnresolvedPlaceholder { .. }));
    any_mock.assert_hits(0);
}

#[tokio::test]
async fn test_client_from_config_sends_configured_headers() {
    let server = MockServer::start();

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
[api]
base_url = "{}"
timeout_seconds = 5

[api.headers]
X-Tenant = "sucursal-norte"
"#,
        server.base_url()
    )
    .unwrap();

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/colores")
            .header("X-Tenant", "sucursal-norte");
        then.status(200).json_body(serde_json::json!([{"id": 1, "nombre": "Rojo"}]));
    });

    let config = ClientConfig::from_file(config_file.path()).unwrap();
    let services = ApiServices::from_config(&config).unwrap();

    let colores = services.colores.list_all().await.unwrap();

    list_mock.assert();
    assert_eq!(colores[0]["nombre"], "Rojo");
}

#[test]
fn test_default_config_points_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
}
