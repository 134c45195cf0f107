pub mod content_client;
pub mod order_service;

pub use content_client::{ContentClient, ContentError};
