//! 고양이 생성/수정 요청 DTO
//!
//! 생성과 수정(이름 기준 전체 교체)에 같은 입력 형태를 사용합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 고양이 생성/수정 요청
///
/// ```json
/// { "name": "Tom", "tailLength": 5 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_tail_length_is_finite"))]
pub struct CreateCatRequest {
    /// 고양이 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "고양이 이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 꼬리 길이 (1 이상)
    #[validate(range(min = 1.0, message = "꼬리 길이는 1 이상이어야 합니다"))]
    pub tail_length: f64,
}

/// NaN은 범위 비교를 통과하므로 유한한 값인지 별도로 검증
fn validate_tail_length_is_finite(req: &CreateCatRequest) -> Result<(), ValidationError> {
    if !req.tail_length.is_finite() {
        return Err(ValidationError::new("non_finite_tail_length")
            .with_message("꼬리 길이는 유한한 숫자여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, tail_length: f64) -> CreateCatRequest {
        CreateCatRequest {
            name: name.to_string(),
            tail_length,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("Tom", 5.0).validate().is_ok());
        assert!(request("Tom", 1.0).validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let errors = request("", 5.0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_name_longer_than_fifty_chars_is_rejected() {
        assert!(request(&"a".repeat(50), 5.0).validate().is_ok());

        let errors = request(&"a".repeat(51), 5.0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_tail_length_below_one_is_rejected() {
        let errors = request("Tom", 0.5).validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(!errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_non_finite_tail_length_is_rejected() {
        assert!(request("Tom", f64::NAN).validate().is_err());
        assert!(request("Tom", f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserializes_camel_case_payload() {
        let parsed: CreateCatRequest =
            serde_json::from_str(r#"{ "name": "Tom", "tailLength": 5 }"#).unwrap();

        assert_eq!(parsed.name, "Tom");
        assert_eq!(parsed.tail_length, 5.0);
    }
}
