use crate::core::http::ApiClient;
use crate::core::service::{CrudService, SearchService};
use crate::domain::model::Resource;

/// Product categories.
#[derive(Debug, Clone)]
pub struct CategoriaService {
    client: ApiClient,
}

impl CategoriaService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for CategoriaService {
    fn resource(&self) -> Resource {
        Resource::Categorias
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl SearchService for CategoriaService {}
