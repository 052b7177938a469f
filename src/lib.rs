//! Cattery 백엔드
//!
//! 고양이(Cat)와 사용자(User) 두 엔티티를 MongoDB 문서 저장소 위에서 관리하는
//! 서비스 계층입니다. 사용자는 고양이를 이름으로 참조하며, 이름은 저장 전에
//! 고양이 문서 ID로 변환됩니다.
//!
//! # Features
//!
//! - **검증된 DTO**: `validator` 기반 입력 검증
//! - **공통 사전 조건**: 이름 형식, 중복, 존재 여부 검사
//! - **참조 변환**: 고양이 이름 → ObjectId (쓰기), ObjectId → 고양이 레코드 (읽기)
//! - **MongoDB**: 이름 unique 인덱스 기반 컬렉션 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │      DTOs       │ ← 검증된 입력
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CatService, UserService (+ BaseService)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← DocumentRepository<T>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← cats, users 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cattery_backend::repositories::InMemoryRepository;
//! use cattery_backend::services::{CatService, UserService};
//!
//! let cat_service = Arc::new(CatService::new(Arc::new(InMemoryRepository::new())));
//! let user_service = UserService::new(Arc::new(InMemoryRepository::new()), cat_service.clone());
//!
//! cat_service.create(CreateCatRequest { name: "Tom".into(), tail_length: 5.0 }).await?;
//! let jerry = user_service.create(CreateUserRequest {
//!     name: "Jerry".into(),
//!     cat_names: vec!["Tom".into()],
//! }).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
