//! 사용자 관리 백엔드
//!
//! `users` 리소스에 대한 CRUD REST API를 제공하는 Rust 서비스입니다.
//! MongoDB를 주 저장소로 사용하며, 비밀번호는 bcrypt로 단방향 해싱합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 목록, 조회, 전체 교체, 부분 수정, 삭제
//! - **요청 검증**: 필드 단위 검증 에러, 이메일 중복 방지, 존재 확인 미들웨어
//! - **저장소 선택**: MongoDB 또는 인메모리 (`STORAGE_BACKEND`)
//! - **운영 기능**: Rate limiting, CORS, 접근 로그, 헬스 체크
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← Route Table (RoutesConfig)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 존재 확인, 이메일 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 검증, 해싱, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 저장소 위임
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserDao (MongoDB | InMemory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//! use user_management_backend::{routes::configure_all_routes, state::AppState};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(AppState::in_memory(4)))
//!     .configure(configure_all_routes);
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
