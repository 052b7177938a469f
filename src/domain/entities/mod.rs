//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (Cat, User)
//! └── dto/          ← 검증된 입력 DTO
//! ```
//!
//! ## 문서 규칙
//!
//! - `_id`: 저장소가 할당하는 `ObjectId` (생성 전에는 `None`, 직렬화 생략)
//! - `name`: 컬렉션 내 유일한 식별 키 (unique 인덱스)
//! - 필드명은 camelCase로 저장 (`tailLength`)
//!
//! 두 엔티티 모두 [`NamedDocument`]를 구현하므로 리포지토리 구현체를 공유합니다.
//!
//! ```rust,ignore
//! use crate::repositories::{DocumentRepository, InMemoryRepository};
//!
//! let repo = InMemoryRepository::<Cat>::new();
//! let tom = repo.create(Cat::new("Tom", 5.0)).await?;
//! assert!(tom.id.is_some());
//! ```

use mongodb::bson::oid::ObjectId;
use serde::{Serialize, de::DeserializeOwned};

pub mod cats;
pub mod users;

pub use cats::Cat;
pub use users::{PopulatedUser, User};

/// 이름을 식별 키로 갖는 저장 문서
///
/// 리포지토리는 이 트레이트만으로 컬렉션 이름, 식별자, 이름 키에 접근합니다.
pub trait NamedDocument:
    Serialize + DeserializeOwned + Clone + Unpin + Send + Sync + 'static
{
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 에러 메시지에 사용할 엔티티 라벨 (예: "Cat")
    const LABEL: &'static str;

    fn id(&self) -> Option<ObjectId>;

    fn set_id(&mut self, id: ObjectId);

    fn name(&self) -> &str;
}
