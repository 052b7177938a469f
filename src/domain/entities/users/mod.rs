//! Users Entity Module
//!
//! 사용자 문서(`users` 컬렉션)와, 고양이 참조를 전체 레코드로 펼친
//! 조회 결과 타입을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, PopulatedUser};
//!
//! // 저장 형태: 고양이는 ObjectId 목록
//! let user = User::new("Jerry", vec![tom_id]);
//!
//! // 조회 형태: 고양이 전체 레코드
//! let populated = PopulatedUser::from_parts(user, vec![tom]);
//! ```

pub mod user;

pub use user::{PopulatedUser, User};
