//! # Data Transfer Objects
//!
//! 서비스 계층에 들어오는 입력 형태를 정의합니다.
//! 모든 요청 DTO는 `validator::Validate`를 구현하며, 서비스는 처리 전에
//! `validate()`를 호출해 실패 시 `AppError::ValidationError`로 변환합니다.
//!
//! | DTO | 제약 |
//! |-----|------|
//! | [`CreateCatRequest`] | `name` 1-50자, `tailLength` 유한한 값, ≥ 1 |
//! | [`CreateUserRequest`] | `name` 1-50자, `catNames` 각 항목 비어 있지 않음, 50자 이하 |

pub mod cats;
pub mod users;

pub use cats::CreateCatRequest;
pub use users::CreateUserRequest;
