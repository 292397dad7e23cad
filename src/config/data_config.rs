//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 저장소 백엔드, 서버, 페이지네이션 및 보안 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 누락되거나 파싱할 수 없는 값은 기본값으로 대체됩니다.

use std::env;
use std::time::Duration;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 실행 환경을 결정합니다. (기본값: production)
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost 값을 반환합니다.
    ///
    /// `BCRYPT_COST`가 4~15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
///
/// ## 환경 변수
/// - `MONGODB_URI`: 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "api-db")
/// - `MONGODB_RETRY_SECONDS`: 시작 시 연결 실패 후 재시도 간격 (기본값: 5)
/// - `MONGODB_MAX_CONNECT_ATTEMPTS`: 최대 연결 시도 횟수 (미설정 또는 0이면 무제한)
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "api-db".to_string())
    }

    pub fn retry_interval() -> Duration {
        let seconds = env::var("MONGODB_RETRY_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);
        Duration::from_secs(seconds)
    }

    pub fn max_connect_attempts() -> Option<u32> {
        env::var("MONGODB_MAX_CONNECT_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|attempts| *attempts > 0)
    }

    /// 서버 선택 타임아웃
    ///
    /// 드라이버 기본값(30초) 대신 5초를 사용해 MongoDB가 떠 있지 않을 때 빠르게 재시도합니다.
    pub fn server_selection_timeout() -> Duration {
        Duration::from_secs(5)
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }
}

pub struct StorageConfig;

impl StorageConfig {
    /// `STORAGE_BACKEND` 환경 변수 (기본값: mongodb)
    pub fn backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|v| StorageBackend::from_str(&v))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

/// 목록 조회 페이지네이션 설정
pub struct PaginationConfig;

impl PaginationConfig {
    /// 요청에서 허용하는 최대 `limit`
    pub const MAX_LIMIT: u64 = 1000;

    /// `limit` 쿼리 파라미터가 없을 때 사용하는 값 (`DEFAULT_PAGE_LIMIT`, 기본값: 100)
    pub fn default_limit() -> u64 {
        env::var("DEFAULT_PAGE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|limit| (1..=Self::MAX_LIMIT).contains(limit))
            .unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_database_config_defaults() {
        if env::var("DATABASE_NAME").is_err() {
            assert_eq!(DatabaseConfig::database_name(), "api-db");
        }

        if env::var("MONGODB_RETRY_SECONDS").is_err() {
            assert_eq!(DatabaseConfig::retry_interval(), Duration::from_secs(5));
        }
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str("anything"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::Memory.as_str(), "memory");
    }

    #[test]
    fn test_default_page_limit() {
        if env::var("DEFAULT_PAGE_LIMIT").is_err() {
            assert_eq!(PaginationConfig::default_limit(), 100);
        }
    }
}
