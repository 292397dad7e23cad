//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 사용자 문서와 생성/교체/부분 수정 입력
//! ├── DTOs      - HTTP 요청/응답 계약 (검증 규칙 포함)
//! └── Models    - 요청 처리 중 미들웨어와 핸들러가 공유하는 값
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
