//! # 인메모리 리포지토리 구현
//!
//! 프로세스 메모리에 문서를 보관하는 [`DocumentRepository`] 구현체입니다.
//! 서비스 테스트와 DB 없는 로컬 실행에 사용합니다.
//!
//! MongoDB 구현과 같은 규칙을 따릅니다.
//!
//! - 생성 시 새 `ObjectId` 할당
//! - `name` 유일성 위반 시 `ValidationError` (unique 인덱스와 동일)
//! - 전체 교체 시 `_id` 유지
//! - 목록 조회는 저장 순서

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::NamedDocument;
use crate::repositories::DocumentRepository;

/// 인메모리 문서 리포지토리
///
/// 연산마다 한 번 잠금을 잡으므로 단일 문서 연산은 원자적입니다.
pub struct InMemoryRepository<T: NamedDocument> {
    documents: RwLock<Vec<T>>,
}

impl<T: NamedDocument> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<T>>> {
        self.documents
            .read()
            .map_err(|_| AppError::InternalError(format!("{}: store lock poisoned", T::COLLECTION)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.documents
            .write()
            .map_err(|_| AppError::InternalError(format!("{}: store lock poisoned", T::COLLECTION)))
    }

    fn duplicate(name: &str) -> AppError {
        AppError::ValidationError(format!("duplicate name: {} {} already exists", T::LABEL, name))
    }
}

impl<T: NamedDocument> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: NamedDocument> DocumentRepository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    async fn find_one_by_name(&self, name: &str) -> AppResult<Option<T>> {
        Ok(self.read()?.iter().find(|doc| doc.name() == name).cloned())
    }

    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|doc| names.iter().any(|name| name == doc.name()))
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|doc| doc.id().is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect())
    }

    async fn create(&self, mut document: T) -> AppResult<T> {
        let mut documents = self.write()?;

        if documents.iter().any(|doc| doc.name() == document.name()) {
            return Err(Self::duplicate(document.name()));
        }

        document.set_id(ObjectId::new());
        documents.push(document.clone());

        debug!("{}: created '{}' in memory", T::COLLECTION, document.name());
        Ok(document)
    }

    async fn find_one_and_replace_by_name(
        &self,
        name: &str,
        mut replacement: T,
    ) -> AppResult<Option<T>> {
        let mut documents = self.write()?;

        let Some(index) = documents.iter().position(|doc| doc.name() == name) else {
            return Ok(None);
        };

        let collides = documents
            .iter()
            .enumerate()
            .any(|(i, doc)| i != index && doc.name() == replacement.name());
        if collides {
            return Err(Self::duplicate(replacement.name()));
        }

        if let Some(id) = documents[index].id() {
            replacement.set_id(id);
        }
        documents[index] = replacement.clone();

        Ok(Some(replacement))
    }

    async fn find_one_and_delete_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let mut documents = self.write()?;

        Ok(documents
            .iter()
            .position(|doc| doc.name() == name)
            .map(|index| documents.remove(index)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}
