//! # 공통 이름 검증 헬퍼
//!
//! 고양이/사용자 서비스가 공유하는 사전 조건 검사입니다.
//! 모든 변경 연산은 저장소 호출 전에 이 검사들을 거칩니다.
//!
//! | 검사 | 실패 시 |
//! |------|---------|
//! | [`BaseService::validate_name_is_legal`] | `ValidationError` |
//! | [`BaseService::validate_no_duplicates`] | `ValidationError` |
//! | [`BaseService::validate_exists`] | `NotFound` |

use std::sync::Arc;

use log::warn;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::NamedDocument;
use crate::repositories::DocumentRepository;

/// 이름 최대 길이 (유니코드 문자 수)
pub const MAX_NAME_LENGTH: usize = 50;

/// 엔티티 공통 사전 조건 검사기
pub struct BaseService<T: NamedDocument> {
    repo: Arc<dyn DocumentRepository<T>>,
}

impl<T: NamedDocument> BaseService<T> {
    pub fn new(repo: Arc<dyn DocumentRepository<T>>) -> Self {
        Self { repo }
    }

    /// 이름 형식을 검사합니다.
    ///
    /// - 비어 있거나 공백만으로 이루어지면 안 됨
    /// - 앞뒤 공백 불가
    /// - 최대 [`MAX_NAME_LENGTH`]자
    /// - 제어 문자 불가
    pub fn validate_name_is_legal(&self, name: &str) -> AppResult<()> {
        let problem = if name.trim().is_empty() {
            Some("must not be empty")
        } else if name.trim() != name {
            Some("must not start or end with whitespace")
        } else if name.chars().count() > MAX_NAME_LENGTH {
            Some("must be at most 50 characters")
        } else if name.chars().any(char::is_control) {
            Some("must not contain control characters")
        } else {
            None
        };

        match problem {
            Some(reason) => {
                warn!("⚠️ {} name rejected: {:?} {}", T::LABEL, name, reason);
                Err(AppError::ValidationError(format!(
                    "{} name {:?} {}",
                    T::LABEL,
                    name,
                    reason
                )))
            }
            None => Ok(()),
        }
    }

    /// 같은 이름의 엔티티가 이미 있으면 실패합니다.
    pub async fn validate_no_duplicates(&self, name: &str) -> AppResult<()> {
        if self.repo.exists_by_name(name).await? {
            warn!("⚠️ {} {} already exists", T::LABEL, name);
            return Err(AppError::ValidationError(format!(
                "{} {} already exists",
                T::LABEL,
                name
            )));
        }
        Ok(())
    }

    /// 해당 이름의 엔티티가 없으면 `NotFound`로 실패합니다.
    pub async fn validate_exists(&self, name: &str) -> AppResult<()> {
        if !self.repo.exists_by_name(name).await? {
            return Err(AppError::not_found(T::LABEL, name));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Cat;
    use crate::repositories::InMemoryRepository;

    fn base() -> (Arc<InMemoryRepository<Cat>>, BaseService<Cat>) {
        let repo = Arc::new(InMemoryRepository::<Cat>::new());
        let base = BaseService::new(repo.clone() as Arc<dyn DocumentRepository<Cat>>);
        (repo, base)
    }

    #[test]
    fn test_legal_names() {
        let (_, base) = base();

        assert!(base.validate_name_is_legal("Tom").is_ok());
        assert!(base.validate_name_is_legal("Mr. Whiskers").is_ok());
        assert!(base.validate_name_is_legal("냥이").is_ok());
        assert!(base.validate_name_is_legal(&"가".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_illegal_names() {
        let (_, base) = base();

        for name in ["", "   ", " Tom", "Tom ", "To\nm"] {
            let error = base.validate_name_is_legal(name).unwrap_err();
            assert!(error.is_validation(), "{:?} should be rejected", name);
        }
        assert!(base
            .validate_name_is_legal(&"a".repeat(MAX_NAME_LENGTH + 1))
            .is_err());
    }

    #[actix_web::test]
    async fn test_validate_no_duplicates() {
        let (repo, base) = base();
        repo.create(Cat::new("Tom", 5.0)).await.unwrap();

        assert!(base.validate_no_duplicates("Felix").await.is_ok());
        assert!(base.validate_no_duplicates("Tom").await.unwrap_err().is_validation());
    }

    #[actix_web::test]
    async fn test_validate_exists() {
        let (repo, base) = base();
        repo.create(Cat::new("Tom", 5.0)).await.unwrap();

        assert!(base.validate_exists("Tom").await.is_ok());

        let error = base.validate_exists("Felix").await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: Cat Felix not found");
    }
}
