//! 사용자 생성/수정 요청 DTO
//!
//! 고양이는 이름으로 참조하며, 저장 전에 서비스 계층에서 ID로 변환됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 고양이 이름 최대 길이 (고양이 DTO와 동일)
const MAX_CAT_NAME_LENGTH: usize = 50;

/// 사용자 생성/수정 요청
///
/// ```json
/// { "name": "Jerry", "catNames": ["Tom", "Felix"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_cat_names"))]
pub struct CreateUserRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "사용자 이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 참조할 고양이 이름 목록 (순서 유지)
    #[serde(default)]
    pub cat_names: Vec<String>,
}

/// 각 고양이 이름이 비어 있지 않고 길이 제한 안에 있는지 검증
fn validate_cat_names(req: &CreateUserRequest) -> Result<(), ValidationError> {
    let invalid = req
        .cat_names
        .iter()
        .any(|name| name.trim().is_empty() || name.chars().count() > MAX_CAT_NAME_LENGTH);

    if invalid {
        return Err(ValidationError::new("invalid_cat_name")
            .with_message("고양이 이름은 비어 있을 수 없으며 50자 이하여야 합니다".into()));
    }
    Ok(())
}
