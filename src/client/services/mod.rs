pub mod api_client;
pub mod auth_service;
pub mod image_store;
