//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (`NotFound` / `ValidationError` 중심)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `validator`, `mongodb` 에러에서 `?` 연산자로 변환
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(name: &str) -> AppResult<Cat> {
//!     repo.find_one_by_name(name)
//!         .await?
//!         .ok_or_else(|| AppError::not_found("Cat", name))
//! }
//! ```

pub mod errors;

pub use errors::*;
