pub mod dispatch_service;
pub mod pipeline_service;
pub mod stage_registry;
pub mod sync_service;
pub mod template_service;
