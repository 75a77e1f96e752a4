use crate::core::http::ApiClient;
use crate::core::service::{expect_json, filter_by_substring, CrudService, SearchService};
use crate::domain::model::{Operation, Record, Resource};
use crate::utils::error::Result;
use serde_json::Value;

/// Products. Besides the shared operations, products can be listed per
/// category and searched inside one category.
#[derive(Debug, Clone)]
pub struct ProductoService {
    client: ApiClient,
}

impl ProductoService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn by_category(&self, categoria: &str) -> Result<Value> {
        let response = self
            .call(Operation::ByCategory, &[("categoria", categoria)], None)
            .await?;
        expect_json(self.resource(), Operation::ByCategory, response)
    }

    /// Products of `categoria` whose `nombre` contains `term` (any case),
    /// in the order the backend returned them.
    pub async fn search_in_category(&self, categoria: &str, term: &str) -> Result<Vec<Record>> {
        let products = self.by_category(categoria).await?;
        let matches = filter_by_substring(products, "nombre", term)?;
        tracing::debug!(
            "{} products in '{}' match '{}'",
            matches.len(),
            categoria,
            term
        );
        Ok(matches)
    }
}

impl CrudService for ProductoService {
    fn resource(&self) -> Resource {
        Resource::Productos
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl SearchService for ProductoService {}
