//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 두 엔티티 서비스가 공통 검증 헬퍼와 문서 저장소 위에서 동작합니다.
//!
//! ```text
//!   UserService ──find_by_names──▶ CatService
//!       │                              │
//!       ├── BaseService<User>          ├── BaseService<Cat>
//!       ▼                              ▼
//!  DocumentRepository<User>     DocumentRepository<Cat>
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::{cats::CatService, users::UserService};
//!
//! let cat_service = Arc::new(CatService::new(cat_repo));
//! let user_service = UserService::new(user_repo, cat_service.clone());
//! ```

pub mod base_service;
pub mod cats;
pub mod users;

pub use base_service::BaseService;
pub use cats::CatService;
pub use users::UserService;
