//! # Domain Layer
//!
//! 엔티티(저장 문서)와 DTO(검증된 입력)를 정의합니다.
//!
//! ```text
//! CreateCatRequest ──validate──▶ Cat ─────────────────────▶ cats
//! CreateUserRequest ─validate──▶ catNames → Cat ids ─▶ User ─▶ users
//!                                                     └─populate─▶ PopulatedUser
//! ```

pub mod entities;
pub mod dto;

pub use entities::{Cat, NamedDocument, PopulatedUser, User};
pub use dto::{CreateCatRequest, CreateUserRequest};
