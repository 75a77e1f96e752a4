use crate::core::http::ApiClient;
use crate::core::service::CrudService;
use crate::domain::model::Resource;

/// Purchases from suppliers, with their line items as returned by the backend.
#[derive(Debug, Clone)]
pub struct CompraService {
    client: ApiClient,
}

impl CompraService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for CompraService {
    fn resource(&self) -> Resource {
        Resource::Compras
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

