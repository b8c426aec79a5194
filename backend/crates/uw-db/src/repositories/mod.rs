pub mod application_repository;
pub mod user_repository;

mod decode;
