//! 사용자 관리 서비스 모듈
//!
//! 사용자 CRUD와 함께, 요청의 고양이 이름을 저장 ID로 변환하고
//! 조회 시 다시 고양이 레코드로 펼치는 기능을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new(user_repo, cat_service);
//! let jerry = user_service.create(CreateUserRequest {
//!     name: "Jerry".to_string(),
//!     cat_names: vec!["Tom".to_string()],
//! }).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
