use crate::modules::registry::application::errors::ApplicationError;
use crate::modules::registry::application::handler::RegistryHandler;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistryHandler<dyn RecordStore>>,
}

impl AppState {
    pub async fn load(store: Arc<dyn RecordStore>) -> Result<Self, ApplicationError> {
        let registry = RegistryHandler::load(store).await?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}
