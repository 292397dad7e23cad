use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_management_backend::config::{PasswordConfig, ServerConfig, StorageBackend, StorageConfig};
use user_management_backend::core::AppError;
use user_management_backend::db::Database;
use user_management_backend::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserDao,
};
use user_management_backend::routes::{configure_all_routes, route_groups};
use user_management_backend::state::AppState;
use user_management_backend::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_route_group, print_step_complete,
    print_step_start, print_sub_task,
};

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    print_boxed_title("User Management Backend");
    info!("🚀 사용자 관리 서비스 시작중...");

    let state = match build_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 저장소를 선택하고 연결한 뒤 공유 상태를 만듭니다.
async fn build_app_state() -> Result<AppState, AppError> {
    let storage = StorageConfig::backend();
    let bcrypt_cost = PasswordConfig::bcrypt_cost();

    print_step_start(1, "Initializing storage");
    print_sub_task("Storage", storage.as_str());
    print_sub_task("Bcrypt cost", &bcrypt_cost.to_string());

    let dao: Arc<dyn UserDao> = match storage {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::connect_with_retry().await?;
            print_sub_task("Database", database.database_name());

            let repo = MongoUserRepository::new(&database);
            repo.create_indexes().await?;
            Arc::new(repo)
        }
        StorageBackend::Memory => {
            info!("💾 인메모리 저장소 사용 (재시작 시 데이터 유실)");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    print_step_complete(1, "Storage ready", 1);
    Ok(AppState::new(dao, bcrypt_cost, storage))
}

async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    let groups = route_groups();
    print_step_start(2, "Configuring routes");
    for group in &groups {
        print_route_group(group.name(), group.endpoints());
    }
    print_step_complete(2, "Routes configured", groups.len());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    print_final_summary(&bind_address, state.storage.as_str(), workers);

    let data = web::Data::new(state);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .app_data(data.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

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

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
