//! # 사용자 관리 서비스 구현
//!
//! 사용자 엔티티의 CRUD와 고양이 참조 변환(relation resolution)을 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! │                                                          │
//! │  create / update_by_name                                 │
//! │   ├─ CreateUserRequest::validate()                       │
//! │   ├─ BaseService<User> 사전 조건 (이름 형식/중복/존재)   │
//! │   ├─ CatService::find_by_names(catNames)  ── 없으면 404  │
//! │   └─ User { name, cats: [ObjectId] } 저장                │
//! │                                                          │
//! │  find_all / find_by_name / find_by_names                 │
//! │   └─ populate: cats ObjectId → Cat 레코드 (배치 조회)    │
//! └──────────────────────────────────────────────────────────┘
//!           │                                │
//!           ▼                                ▼
//!  DocumentRepository<User>        DocumentRepository<Cat>
//! ```
//!
//! ## 참조 규칙
//!
//! - 쓰기 시점에 참조하는 모든 고양이 이름이 존재해야 합니다.
//! - 참조 목록은 요청한 이름 순서로 저장되며, 중복 이름은 한 번만 저장됩니다.
//! - 조회 시점에 이미 삭제된 고양이에 대한 참조는 결과에서 제외됩니다.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, info};
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::CreateUserRequest,
        entities::{Cat, PopulatedUser, User},
    },
    repositories::DocumentRepository,
    services::{base_service::BaseService, cats::CatService},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 고양이 이름을 ID로 변환하기 위해 [`CatService`]에 의존합니다.
///
/// ## 에러 처리
///
/// - **ValidationError**: DTO 검증 실패, 잘못된 이름, 이름 중복
/// - **NotFound**: 사용자 없음, 또는 참조한 고양이 이름 중 하나라도 없음
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let user_service = UserService::new(user_repo, cat_service.clone());
///
/// let jerry = user_service.create(CreateUserRequest {
///     name: "Jerry".to_string(),
///     cat_names: vec!["Tom".to_string()],
/// }).await?;
///
/// assert_eq!(jerry.cat_names(), vec!["Tom"]);
/// ```
pub struct UserService {
    user_repo: Arc<dyn DocumentRepository<User>>,
    cat_service: Arc<CatService>,
    base: BaseService<User>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn DocumentRepository<User>>, cat_service: Arc<CatService>) -> Self {
        Self {
            base: BaseService::new(user_repo.clone()),
            user_repo,
            cat_service,
        }
    }

    /// 모든 사용자를 고양이 레코드가 펼쳐진 형태로 반환합니다.
    pub async fn find_all(&self) -> AppResult<Vec<PopulatedUser>> {
        let users = self.user_repo.find_all().await?;
        self.populate_all(users).await
    }

    /// 이름으로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 이름의 사용자가 없음
    pub async fn find_by_name(&self, name: &str) -> AppResult<PopulatedUser> {
        let user = self
            .user_repo
            .find_one_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("User", name))?;

        self.populate(user).await
    }

    /// 여러 이름에 해당하는 사용자들을 요청 순서대로 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 요청한 이름 중 하나라도 없으면 전체 실패
    pub async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<PopulatedUser>> {
        let mut found = self.user_repo.find_by_names(names).await?;

        let mut seen = HashSet::new();
        let mut ordered = Vec::with_capacity(found.len());
        for name in names.iter().filter(|name| seen.insert(name.as_str())) {
            let position = found
                .iter()
                .position(|user| &user.name == name)
                .ok_or_else(|| AppError::not_found("User", name))?;
            ordered.push(found.swap_remove(position));
        }

        self.populate_all(ordered).await
    }

    /// 새 사용자를 생성합니다.
    ///
    /// `cat_names`는 저장 전에 고양이 ID 목록으로 변환됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - DTO 검증 실패, 잘못된 이름, 이름 중복
    /// * `AppError::NotFound` - 존재하지 않는 고양이 이름 참조
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<PopulatedUser> {
        request.validate()?;
        self.base.validate_name_is_legal(&request.name)?;
        self.base.validate_no_duplicates(&request.name).await?;

        let (user, cats) = self.user_from_request(request).await?;
        let created = self.user_repo.create(user).await?;
        info!("👤 User created: {} ({} cats)", created.name, cats.len());

        Ok(PopulatedUser::from_parts(created, cats))
    }

    /// 이름으로 찾은 사용자를 요청 내용으로 전체 교체합니다.
    ///
    /// 고양이 참조는 요청의 `cat_names`로 다시 변환되어 기존 목록을 대체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - DTO 검증 실패, 잘못된 새 이름, 새 이름 중복
    /// * `AppError::NotFound` - 사용자가 없거나 참조한 고양이가 없음
    pub async fn update_by_name(
        &self,
        name: &str,
        request: CreateUserRequest,
    ) -> AppResult<PopulatedUser> {
        request.validate()?;
        self.base.validate_name_is_legal(&request.name)?;
        self.base.validate_exists(name).await?;
        if request.name != name {
            self.base.validate_no_duplicates(&request.name).await?;
        }

        let (user, cats) = self.user_from_request(request).await?;
        let updated = self
            .user_repo
            .find_one_and_replace_by_name(name, user)
            .await?
            .ok_or_else(|| AppError::not_found("User", name))?;
        info!("👤 User updated: {} -> {} ({} cats)", name, updated.name, cats.len());

        Ok(PopulatedUser::from_parts(updated, cats))
    }

    /// 이름으로 사용자를 삭제하고 삭제된 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 이름
    /// * `AppError::NotFound` - 해당 이름의 사용자가 없음
    pub async fn remove_by_name(&self, name: &str) -> AppResult<PopulatedUser> {
        self.base.validate_name_is_legal(name)?;
        self.base.validate_exists(name).await?;

        let removed = self
            .user_repo
            .find_one_and_delete_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("User", name))?;
        info!("👤 User removed: {}", removed.name);

        self.populate(removed).await
    }

    /// 요청의 고양이 이름을 조회하여 저장할 사용자 문서를 만듭니다.
    ///
    /// 조회된 고양이 목록(요청 순서)도 함께 반환하여 응답 구성에 재사용합니다.
    async fn user_from_request(&self, request: CreateUserRequest) -> AppResult<(User, Vec<Cat>)> {
        let cats = self.cat_service.find_by_names(&request.cat_names).await?;
        let user = User::with_cats(request.name, &cats);

        Ok((user, cats))
    }

    async fn populate(&self, user: User) -> AppResult<PopulatedUser> {
        let mut populated = self.populate_all(vec![user]).await?;
        populated
            .pop()
            .ok_or_else(|| AppError::InternalError("populate returned no user".to_string()))
    }

    /// 모든 사용자의 고양이 참조를 한 번의 배치 조회로 펼칩니다.
    async fn populate_all(&self, users: Vec<User>) -> AppResult<Vec<PopulatedUser>> {
        let ids: Vec<ObjectId> = users
            .iter()
            .flat_map(|user| user.cats.iter().copied())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let lookup: HashMap<ObjectId, Cat> = self
            .cat_service
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .filter_map(|cat| cat.id.map(|id| (id, cat)))
            .collect();
        debug!("populate: {} users, {} cats resolved", users.len(), lookup.len());

        Ok(users
            .into_iter()
            .map(|user| PopulatedUser::populate(user, &lookup))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::cats::request::CreateCatRequest;
    use crate::repositories::InMemoryRepository;

    struct Fixture {
        cats: Arc<CatService>,
        users: UserService,
    }

    async fn fixture(cat_names: &[&str]) -> Fixture {
        let cats = Arc::new(CatService::new(Arc::new(InMemoryRepository::<Cat>::new())));
        for (i, name) in cat_names.iter().enumerate() {
            cats.create(CreateCatRequest {
                name: name.to_string(),
                tail_length: (i + 1) as f64,
            })
            .await
            .unwrap();
        }

        let users = UserService::new(Arc::new(InMemoryRepository::<User>::new()), cats.clone());
        Fixture { cats, users }
    }

    fn request(name: &str, cat_names: &[&str]) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            cat_names: cat_names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[actix_web::test]
    async fn test_create_resolves_cat_names() {
        let f = fixture(&["Tom", "Felix"]).await;

        let jerry = f.users.create(request("Jerry", &["Felix", "Tom"])).await.unwrap();
        assert_eq!(jerry.cat_names(), vec!["Felix", "Tom"]);

        let read = f.users.find_by_name("Jerry").await.unwrap();
        assert_eq!(read, jerry);
    }

    #[actix_web::test]
    async fn test_create_with_unknown_cat_fails_with_not_found() {
        let f = fixture(&["Tom"]).await;

        let error = f.users.create(request("Jerry", &["Tom", "Garfield"])).await.unwrap_err();
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Cat Garfield not found"));
        assert!(f.users.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_create_duplicate_user_fails_with_validation_error() {
        let f = fixture(&["Tom"]).await;
        f.users.create(request("Jerry", &["Tom"])).await.unwrap();

        let error = f.users.create(request("Jerry", &[])).await.unwrap_err();
        assert!(error.is_validation());
    }

    #[actix_web::test]
    async fn test_illegal_user_names_fail_with_validation_error() {
        let f = fixture(&["Tom"]).await;

        let error = f.users.create(request(" Jerry", &[])).await.unwrap_err();
        assert!(error.is_validation());
        assert!(f.users.find_all().await.unwrap().is_empty());

        f.users.create(request("Jerry", &["Tom"])).await.unwrap();

        let error = f.users.update_by_name("Jerry", request("Jerry\t", &[])).await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(f.users.find_by_name("Jerry").await.unwrap().cat_names(), vec!["Tom"]);

        let error = f.users.remove_by_name("Jerry ").await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(f.users.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_re_resolves_cat_references() {
        let f = fixture(&["Tom", "Felix"]).await;
        f.users.create(request("Jerry", &["Tom"])).await.unwrap();

        let updated = f.users.update_by_name("Jerry", request("Jerry", &["Felix"])).await.unwrap();
        assert_eq!(updated.cat_names(), vec!["Felix"]);

        let read = f.users.find_by_name("Jerry").await.unwrap();
        assert_eq!(read.cat_names(), vec!["Felix"]);
    }

    #[actix_web::test]
    async fn test_update_with_unknown_cat_keeps_previous_state() {
        let f = fixture(&["Tom"]).await;
        f.users.create(request("Jerry", &["Tom"])).await.unwrap();

        let error = f
            .users
            .update_by_name("Jerry", request("Jerry", &["Nobody"]))
            .await
            .unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(f.users.find_by_name("Jerry").await.unwrap().cat_names(), vec!["Tom"]);
    }

    #[actix_web::test]
    async fn test_update_missing_user_fails_with_not_found() {
        let f = fixture(&["Tom"]).await;

        let error = f.users.update_by_name("Ghost", request("Ghost", &["Tom"])).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[actix_web::test]
    async fn test_rename_into_existing_user_is_rejected() {
        let f = fixture(&[]).await;
        f.users.create(request("Jerry", &[])).await.unwrap();
        f.users.create(request("Spike", &[])).await.unwrap();

        let error = f.users.update_by_name("Jerry", request("Spike", &[])).await.unwrap_err();
        assert!(error.is_validation());
    }

    #[actix_web::test]
    async fn test_remove_by_name() {
        let f = fixture(&["Tom"]).await;
        f.users.create(request("Jerry", &["Tom"])).await.unwrap();

        let removed = f.users.remove_by_name("Jerry").await.unwrap();
        assert_eq!(removed.cat_names(), vec!["Tom"]);
        assert!(f.users.find_by_name("Jerry").await.unwrap_err().is_not_found());

        let again = f.users.remove_by_name("Jerry").await.unwrap_err();
        assert!(again.is_not_found());
    }

    #[actix_web::test]
    async fn test_removed_cat_disappears_from_populated_users() {
        let f = fixture(&["Tom", "Felix"]).await;
        f.users.create(request("Jerry", &["Tom", "Felix"])).await.unwrap();

        f.cats.remove_by_name("Tom").await.unwrap();

        let users = f.users.find_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].cat_names(), vec!["Felix"]);
    }

    #[actix_web::test]
    async fn test_find_by_names_is_all_or_nothing() {
        let f = fixture(&["Tom"]).await;
        f.users.create(request("Jerry", &["Tom"])).await.unwrap();
        f.users.create(request("Spike", &[])).await.unwrap();

        let names = vec!["Spike".to_string(), "Jerry".to_string()];
        let found = f.users.find_by_names(&names).await.unwrap();
        let ordered: Vec<_> = found.iter().map(|user| user.name.as_str()).collect();
        assert_eq!(ordered, vec!["Spike", "Jerry"]);
        assert_eq!(found[1].cat_names(), vec!["Tom"]);

        let missing = vec!["Jerry".to_string(), "Tyke".to_string()];
        assert!(f.users.find_by_names(&missing).await.unwrap_err().is_not_found());
    }
}
