//! 사용자 관련 DTO 모듈
//!
//! 사용자는 고양이를 이름으로 참조하며, 서비스 계층에서 ID로 변환됩니다.

pub mod request;

pub use request::*;
