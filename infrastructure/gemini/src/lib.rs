pub mod client;
pub mod dto;
pub mod error_mapper;
pub mod text_generator;
