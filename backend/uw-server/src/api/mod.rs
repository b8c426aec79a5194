pub mod analytics;
pub mod applications;
pub mod auth;
pub mod error;
pub mod extractors;
pub(crate) mod fields;
pub mod message_response;
pub mod underwriters;
