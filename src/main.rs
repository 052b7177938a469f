//! Cattery 부트스트랩 애플리케이션
//!
//! MongoDB에 연결하여 고양이/사용자 컬렉션의 unique 인덱스를 준비하고,
//! 서비스 계층을 구성한 뒤 컬렉션 현황을 출력합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use cattery_backend::core::errors::AppResult;
use cattery_backend::db::Database;
use cattery_backend::domain::entities::{Cat, User};
use cattery_backend::repositories::{DocumentRepository, MongoRepository};
use cattery_backend::services::{CatService, UserService};
use cattery_backend::utils::display_terminal::{
    print_boxed_title, print_collection_summary, print_step_complete, print_step_start,
    print_sub_task,
};

#[actix_web::main]
async fn main() -> AppResult<()> {
    load_env_file();
    init_logging();

    info!("🚀 Cattery 부트스트랩 시작중...");
    print_boxed_title("🔄 BOOTSTRAPPING CATTERY");

    print_step_start(1, "Connecting to MongoDB");
    let database = Arc::new(Database::new().await.inspect_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
    })?);
    print_sub_task("database", database.database_name());
    print_step_complete(1, "MongoDB connected");

    let cat_repo = Arc::new(MongoRepository::<Cat>::new(&database));
    let user_repo = Arc::new(MongoRepository::<User>::new(&database));

    print_step_start(2, "Ensuring unique name indexes");
    cat_repo.ensure_indexes().await?;
    print_sub_task(cat_repo.collection_name(), "✓ name_unique");
    user_repo.ensure_indexes().await?;
    print_sub_task(user_repo.collection_name(), "✓ name_unique");
    print_step_complete(2, "Indexes ready");

    let cat_service = Arc::new(CatService::new(cat_repo));
    let user_service = UserService::new(user_repo, cat_service.clone());

    let cats = cat_service.find_all().await?;
    let users = user_service.find_all().await?;

    print_collection_summary(&[("cats", cats.len()), ("users", users.len())]);
    info!("✅ 부트스트랩 완료: {} cats, {} users", cats.len(), users.len());

    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
