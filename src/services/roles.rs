use crate::core::http::ApiClient;
use crate::core::service::CrudService;
use crate::domain::model::Resource;

/// User roles.
#[derive(Debug, Clone)]
pub struct RolService {
    client: ApiClient,
}

impl RolService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl CrudService for RolService {
    fn resource(&self) -> Resource {
        Resource::Roles
    }

    fn client(&self) -> &ApiClient {
        &self.client
    }
}

