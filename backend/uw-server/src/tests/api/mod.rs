mod analytics_client;
mod error;
mod extractors;
mod fields;
mod insurance_types_field;
mod underwriter_dto;
