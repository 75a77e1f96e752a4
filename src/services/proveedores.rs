use crate::core::http::ApiClient;
use crate::core::service::{CrudService, SearchService};
use crate::domain::model::Resource;

#[derive(Debug, Clone)]
pub struct ProveedorService {
    client: ApiClient,
}

impl ProveedorService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for ProveedorService {
    fn resource(&self) -> Resource {
        Resource::Proveedores
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl SearchService for ProveedorService {}
