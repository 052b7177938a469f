//! 데이터 및 실행 환경 설정 관리 모듈
//!
//! 실행 환경 감지와 MongoDB 연결 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `APP_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Development`를 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        Self::parse(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: 환경별 이름, [`DatabaseConfig::default_database_name`])
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 모니터링/로그에 표시되는 애플리케이션 이름
    pub const APP_NAME: &'static str = "cattery";

    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME")
            .unwrap_or_else(|_| Self::default_database_name(&Environment::current()).to_string())
    }

    /// 환경별 기본 데이터베이스 이름
    pub fn default_database_name(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "cattery_dev",
            Environment::Test => "cattery_test",
            Environment::Staging => "cattery_staging",
            Environment::Production => "cattery",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" DEV "), Environment::Development);
        assert_eq!(Environment::parse("test"), Environment::Test);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("unknown"), Environment::Production);
    }

    #[test]
    fn test_database_name_for_each_environment() {
        assert_eq!(
            DatabaseConfig::default_database_name(&Environment::Development),
            "cattery_dev"
        );
        assert_eq!(
            DatabaseConfig::default_database_name(&Environment::Test),
            "cattery_test"
        );
        assert_eq!(
            DatabaseConfig::default_database_name(&Environment::Staging),
            "cattery_staging"
        );
        assert_eq!(
            DatabaseConfig::default_database_name(&Environment::Production),
            "cattery"
        );
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("MONGODB_URI").is_err() {
            assert_eq!(DatabaseConfig::uri(), "mongodb://localhost:27017");
        }
    }
}
