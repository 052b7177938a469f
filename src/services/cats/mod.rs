//! 고양이 관리 서비스 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::cats::CatService;
//!
//! let cat_service = CatService::new(cat_repo);
//! let cats = cat_service.find_by_names(&["Tom".to_string(), "Felix".to_string()]).await?;
//! ```

pub mod cat_service;

pub use cat_service::CatService;
