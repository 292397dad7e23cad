//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 저장소, 서버, 페이지네이션, 비밀번호 해싱 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORAGE_BACKEND="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="api-db"
//! export MONGODB_RETRY_SECONDS="5"
//! export MONGODB_MAX_CONNECT_ATTEMPTS="0"   # 0 또는 미설정 = 무제한
//!
//! # 환경 설정
//! export ENVIRONMENT="production"           # development, test, staging, production
//! export BCRYPT_COST="12"                   # 4-15 범위
//! export DEFAULT_PAGE_LIMIT="100"
//! ```
//!
//! `.env.dev`, `.env.prod` 파일은 `PROFILE` 값에 따라 `main`에서 로드됩니다.

pub mod data_config;

pub use data_config::*;
