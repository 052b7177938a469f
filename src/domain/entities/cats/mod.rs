//! Cats Entity Module
//!
//! 고양이 문서(`cats` 컬렉션)를 표현하는 엔티티를 정의합니다.

pub mod cat;

pub use cat::Cat;
