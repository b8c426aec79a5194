pub mod create_underwriter_request;
pub mod insurance_types_field;
pub mod underwriter_dto;
pub mod underwriter_list_response;
pub mod underwriter_response;
#[allow(clippy::module_inception)]
pub mod underwriters;
