pub mod application_list_response;
#[allow(clippy::module_inception)]
pub mod applications;
pub mod create_application_request;
pub mod create_application_response;
pub mod update_status_request;
pub mod update_status_response;
