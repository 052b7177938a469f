//! 고양이 요청 DTO

pub mod create_cat;

pub use create_cat::CreateCatRequest;
