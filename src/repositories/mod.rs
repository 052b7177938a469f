//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`DocumentRepository`]는 서비스 계층이 사용하는 문서 저장소 계약입니다.
//! 이름을 식별 키로 갖는 모든 엔티티([`NamedDocument`])에 대해 같은 연산을 제공합니다.
//!
//! | 저장소 연산 | 메서드 |
//! |-------------|--------|
//! | `find` | [`find_all`], [`find_by_names`], [`find_by_ids`] |
//! | `findOne` | [`find_one_by_name`], [`exists_by_name`] |
//! | `create` | [`create`] |
//! | `findOneAndUpdate` | [`find_one_and_replace_by_name`] |
//! | `findOneAndDelete` | [`find_one_and_delete_by_name`] |
//!
//! # 구현체
//!
//! - [`MongoRepository`]: MongoDB 컬렉션 기반 (운영)
//! - [`InMemoryRepository`]: 프로세스 메모리 기반 (테스트, 로컬 실행)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{DocumentRepository, MongoRepository};
//!
//! let cat_repo: Arc<dyn DocumentRepository<Cat>> = Arc::new(MongoRepository::new(&database));
//! let tom = cat_repo.find_one_by_name("Tom").await?;
//! ```
//!
//! [`find_all`]: DocumentRepository::find_all
//! [`find_by_names`]: DocumentRepository::find_by_names
//! [`find_by_ids`]: DocumentRepository::find_by_ids
//! [`find_one_by_name`]: DocumentRepository::find_one_by_name
//! [`exists_by_name`]: DocumentRepository::exists_by_name
//! [`create`]: DocumentRepository::create
//! [`find_one_and_replace_by_name`]: DocumentRepository::find_one_and_replace_by_name
//! [`find_one_and_delete_by_name`]: DocumentRepository::find_one_and_delete_by_name

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppResult;
use crate::domain::entities::NamedDocument;

pub mod memory_repo;
pub mod mongo_repo;

pub use memory_repo::InMemoryRepository;
pub use mongo_repo::MongoRepository;

/// 이름 키 문서 저장소 계약
///
/// 모든 연산은 단일 문서 단위로 원자적이며, 여러 연산 사이의 일관성은
/// 보장하지 않습니다. 이름 유일성은 unique 인덱스(또는 이에 준하는 검사)로
/// 보장되어, 위반 시 `AppError::ValidationError`를 반환합니다.
#[async_trait]
pub trait DocumentRepository<T: NamedDocument>: Send + Sync {
    /// 컬렉션의 모든 문서를 저장 순서로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_one_by_name(&self, name: &str) -> AppResult<Option<T>>;

    /// 이름이 `names` 중 하나인 문서들을 반환합니다. 없는 이름은 무시됩니다.
    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<T>>;

    /// ID가 `ids` 중 하나인 문서들을 반환합니다. 없는 ID는 무시됩니다.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<T>>;

    /// 문서를 저장하고, 할당된 `_id`가 채워진 문서를 반환합니다.
    async fn create(&self, document: T) -> AppResult<T>;

    /// `name`으로 찾은 문서를 `replacement`로 전체 교체합니다.
    ///
    /// `_id`는 유지되며, 교체 후의 문서를 반환합니다. 대상이 없으면 `None`.
    async fn find_one_and_replace_by_name(&self, name: &str, replacement: T)
        -> AppResult<Option<T>>;

    /// `name`으로 찾은 문서를 삭제하고 삭제된 문서를 반환합니다.
    async fn find_one_and_delete_by_name(&self, name: &str) -> AppResult<Option<T>>;

    /// 이름 unique 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    async fn ensure_indexes(&self) -> AppResult<()>;

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(self.find_one_by_name(name).await?.is_some())
    }
}
