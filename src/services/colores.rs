use crate::core::http::ApiClient;
use crate::core::service::CrudService;
use crate::domain::model::Resource;

#[derive(Debug, Clone)]
pub struct ColorService {
    client: ApiClient,
}

impl ColorService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for ColorService {
    fn resource(&self) -> Resource {
        Resource::Colores
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

