pub mod content_service;
pub mod health_service;
pub mod identity_service;
