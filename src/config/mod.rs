//! # Configuration Module
//!
//! 환경 변수 기반 설정을 제공합니다. `.env` 파일 로드는 바이너리 시작 시
//! `PROFILE` 값(`dev` / `prod`)에 따라 수행됩니다.
//!
//! ```bash
//! # .env.dev
//! ENVIRONMENT=development
//! MONGODB_URI=mongodb://localhost:27017
//! DATABASE_NAME=cattery_dev
//! RUST_LOG=info,cattery_backend=debug
//! ```

pub mod data_config;

pub use data_config::*;
