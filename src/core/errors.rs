//! # 애플리케이션 에러 타입
//!
//! 서비스/리포지토리 계층 전체에서 사용하는 통합 에러 타입입니다.
//! 호출자에게 노출되는 분류는 두 가지입니다.
//!
//! - **NotFound**: 참조한 엔티티가 존재하지 않음
//! - **ValidationError**: DTO 검증 실패, 잘못된 이름, 이름 중복
//!
//! 드라이버 오류와 내부 불변식 위반은 각각 `DatabaseError`, `InternalError`로 구분됩니다.
//! 모든 에러는 해당 호출에 대해 종료 실패이며, 로컬에서 재시도하지 않습니다.
//!
//! ## HTTP 연동
//!
//! 서비스를 HTTP로 노출하는 쪽에서는 `AppError`를 그대로 반환하면
//! `actix_web::ResponseError` 구현을 통해 상태 코드가 결정됩니다.
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | 그 외 | 500 Internal Server Error |

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;
use validator::ValidationErrors;

/// MongoDB 중복 키 에러 코드 (unique 인덱스 위반)
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 엔티티 라벨과 이름으로 NotFound 에러를 생성합니다.
    ///
    /// ```rust,ignore
    /// AppError::not_found("Cat", "Tom"); // "Not found: Cat Tom not found"
    /// ```
    pub fn not_found(entity: &str, name: &str) -> Self {
        AppError::NotFound(format!("{} {} not found", entity, name))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        if is_duplicate_key(&error) {
            return AppError::ValidationError(format!("duplicate name: {}", error));
        }
        AppError::DatabaseError(error.to_string())
    }
}

/// unique 인덱스 위반 여부를 확인합니다.
///
/// insert는 `WriteError`, findAndModify 계열은 `CommandError`로 보고됩니다.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

pub type AppResult<T> = Result<T, AppError>;
