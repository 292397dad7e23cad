//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//! 응답 DTO 변환 시 비밀번호 해시는 제외됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(dao);
//! let id = user_service.create(new_user).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
