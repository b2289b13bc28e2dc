use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::activity_store::in_memory::InMemoryActivityRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityRegistry>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityRegistry>>,
}

impl AppState {
    pub fn in_memory(registry: Arc<InMemoryActivityRegistry>) -> Self {
        Self {
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(registry.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(registry.clone())),
            queries: registry,
        }
    }
}
