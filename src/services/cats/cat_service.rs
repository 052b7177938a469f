//! # 고양이 관리 서비스 구현
//!
//! 고양이 엔티티의 조회/생성/수정/삭제 비즈니스 로직입니다.
//!
//! ```text
//! CreateCatRequest ─▶ validate() ─▶ BaseService 사전 조건 ─▶ DocumentRepository<Cat>
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::cats::request::CreateCatRequest, entities::Cat},
    repositories::DocumentRepository,
    services::base_service::BaseService,
};

/// 고양이 관리 비즈니스 로직 서비스
///
/// `UserService`는 이 서비스의 [`find_by_names`](CatService::find_by_names)를 통해
/// 고양이 이름을 저장 ID로 변환합니다.
///
/// ## 에러 처리
///
/// - **ValidationError**: DTO 검증 실패, 잘못된 이름, 이름 중복
/// - **NotFound**: 이름에 해당하는 고양이가 없음
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let cat_service = CatService::new(Arc::new(MongoRepository::<Cat>::new(&database)));
///
/// let tom = cat_service.create(CreateCatRequest {
///     name: "Tom".to_string(),
///     tail_length: 5.0,
/// }).await?;
///
/// let found = cat_service.find_by_name("Tom").await?;
/// assert_eq!(found.tail_length, 5.0);
/// ```
pub struct CatService {
    cat_repo: Arc<dyn DocumentRepository<Cat>>,
    base: BaseService<Cat>,
}

impl CatService {
    pub fn new(cat_repo: Arc<dyn DocumentRepository<Cat>>) -> Self {
        Self {
            base: BaseService::new(cat_repo.clone()),
            cat_repo,
        }
    }

    /// 모든 고양이를 반환합니다.
    pub async fn find_all(&self) -> AppResult<Vec<Cat>> {
        self.cat_repo.find_all().await
    }

    /// 이름으로 고양이 한 마리를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이름의 고양이가 없음
    pub async fn find_by_name(&self, name: &str) -> AppResult<Cat> {
        self.cat_repo
            .find_one_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Cat", name))
    }

    /// 여러 이름에 해당하는 고양이들을 한 번에 조회합니다.
    ///
    /// 결과는 요청한 이름 순서를 따르며, 같은 이름이 여러 번 요청되면
    /// 첫 번째 위치에 한 번만 포함됩니다. 빈 요청은 빈 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 요청한 이름 중 하나라도 없으면 전체 실패
    ///   (요청 순서상 첫 번째로 없는 이름을 메시지에 포함)
    pub async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Cat>> {
        let mut seen = HashSet::new();
        let requested: Vec<String> = names
            .iter()
            .filter(|name| seen.insert(name.as_str()))
            .cloned()
            .collect();

        let mut found = self.cat_repo.find_by_names(&requested).await?;
        debug!("find_by_names: {} requested, {} found", requested.len(), found.len());

        let mut ordered = Vec::with_capacity(requested.len());
        for name in &requested {
            let position = found
                .iter()
                .position(|cat| &cat.name == name)
                .ok_or_else(|| AppError::not_found("Cat", name))?;
            ordered.push(found.swap_remove(position));
        }

        Ok(ordered)
    }

    /// 저장 ID로 고양이들을 조회합니다. 없는 ID는 무시됩니다.
    ///
    /// 사용자 조회 시 참조 목록을 펼치는 데 사용됩니다.
    pub async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Cat>> {
        self.cat_repo.find_by_ids(ids).await
    }

    /// 새 고양이를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - DTO 검증 실패, 잘못된 이름, 이름 중복
    pub async fn create(&self, request: CreateCatRequest) -> AppResult<Cat> {
        request.validate()?;
        self.base.validate_name_is_legal(&request.name)?;
        self.base.validate_no_duplicates(&request.name).await?;

        let cat = self.cat_repo.create(Cat::from(request)).await?;
        info!("🐱 Cat created: {} (tail {})", cat.name, cat.tail_length);

        Ok(cat)
    }

    /// 이름으로 찾은 고양이를 요청 내용으로 전체 교체합니다.
    ///
    /// 요청의 이름이 기존과 다르면 이름 변경으로 처리되며,
    /// 새 이름은 다른 고양이와 겹칠 수 없습니다. 교체 후의 고양이를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - DTO 검증 실패, 잘못된 새 이름, 새 이름 중복
    /// * `AppError::NotFound` - `name`에 해당하는 고양이가 없음
    pub async fn update_by_name(&self, name: &str, request: CreateCatRequest) -> AppResult<Cat> {
        request.validate()?;
        self.base.validate_name_is_legal(&request.name)?;
        self.base.validate_exists(name).await?;
        if request.name != name {
            self.base.validate_no_duplicates(&request.name).await?;
        }

        let updated = self
            .cat_repo
            .find_one_and_replace_by_name(name, Cat::from(request))
            .await?
            .ok_or_else(|| AppError::not_found("Cat", name))?;
        info!("🐱 Cat updated: {} -> {}", name, updated.name);

        Ok(updated)
    }

    /// 이름으로 고양이를 삭제하고 삭제된 고양이를 반환합니다.
    ///
    /// 이 고양이를 참조하던 사용자의 참조는 조회 시 제외됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 이름
    /// * `AppError::NotFound` - 해당 이름의 고양이가 없음 (무시하지 않음)
    pub async fn remove_by_name(&self, name: &str) -> AppResult<Cat> {
        self.base.validate_name_is_legal(name)?;
        self.base.validate_exists(name).await?;

        let removed = self
            .cat_repo
            .find_one_and_delete_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Cat", name))?;
        info!("🐱 Cat removed: {}", removed.name);

        Ok(removed)
    }
}
