pub mod configs;
pub mod elastic_dto;
pub mod summary;
pub mod transaction;
