//! # Core Module
//!
//! 계층 전반에서 공유되는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 상태 코드/JSON 본문 자동 매핑
//! - **필드 검증**: `validator::ValidationErrors` → `AppError::InvalidFields` 자동 변환
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn read(&self, id: &str) -> AppResult<User> {
//!     self.dao
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
//! }
//! ```

pub mod errors;

pub use errors::*;
