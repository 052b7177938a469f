//! # MongoDB 리포지토리 구현
//!
//! [`NamedDocument`]를 구현한 엔티티를 `T::COLLECTION` 컬렉션에 저장합니다.
//!
//! ## 특징
//!
//! - **이름 키 조회**: 모든 조회/수정/삭제는 `name` 필드 기준
//! - **전체 교체 수정**: `findOneAndReplace` + `ReturnDocument::After`
//! - **유일성 보장**: `name` unique 인덱스, 위반 시 `ValidationError`로 변환
//! - **저장 순서 유지**: 목록 조회는 `_id` 오름차순

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::{FindOneAndReplaceOptions, IndexOptions, ReturnDocument},
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::NamedDocument;
use crate::repositories::DocumentRepository;

/// MongoDB 컬렉션 기반 문서 리포지토리
///
/// ```rust,ignore
/// let cat_repo = MongoRepository::<Cat>::new(&database);
/// cat_repo.ensure_indexes().await?;
///
/// let tom = cat_repo.create(Cat::new("Tom", 5.0)).await?;
/// let found = cat_repo.find_one_by_name("Tom").await?;
/// ```
pub struct MongoRepository<T: NamedDocument> {
    collection: Collection<T>,
}

impl<T: NamedDocument> MongoRepository<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<T>(T::COLLECTION),
        }
    }

    pub fn collection_name(&self) -> &str {
        T::COLLECTION
    }

    fn unique_name_index() -> IndexModel {
        IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(format!("{}_name_unique", T::COLLECTION))
                    .build(),
            )
            .build()
    }
}

#[async_trait]
impl<T: NamedDocument> DocumentRepository<T> for MongoRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let cursor = self.collection.find(doc! {}).sort(doc! { "_id": 1 }).await?;
        let documents: Vec<T> = cursor.try_collect().await?;

        debug!("{}: {} documents loaded", T::COLLECTION, documents.len());
        Ok(documents)
    }

    async fn find_one_by_name(&self, name: &str) -> AppResult<Option<T>> {
        Ok(self.collection.find_one(doc! { "name": name }).await?)
    }

    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<T>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! { "name": { "$in": names.to_vec() } })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<T>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn create(&self, mut document: T) -> AppResult<T> {
        let result = self.collection.insert_one(&document).await?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(format!(
                "{}: inserted id is not an ObjectId",
                T::COLLECTION
            ))
        })?;
        document.set_id(id);

        info!("{}: created '{}' ({})", T::COLLECTION, document.name(), id.to_hex());
        Ok(document)
    }

    async fn find_one_and_replace_by_name(
        &self,
        name: &str,
        replacement: T,
    ) -> AppResult<Option<T>> {
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let replaced = self
            .collection
            .find_one_and_replace(doc! { "name": name }, &replacement)
            .with_options(options)
            .await?;

        if replaced.is_some() {
            info!("{}: replaced '{}' with '{}'", T::COLLECTION, name, replacement.name());
        }
        Ok(replaced)
    }

    async fn find_one_and_delete_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "name": name })
            .await?;

        if deleted.is_some() {
            info!("{}: deleted '{}'", T::COLLECTION, name);
        }
        Ok(deleted)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        self.collection
            .create_index(Self::unique_name_index())
            .await?;

        info!("{}: name unique index ready", T::COLLECTION);
        Ok(())
    }
}
