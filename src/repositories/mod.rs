//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserDao`](users::UserDao) trait 객체(`Arc<dyn UserDao>`)를 통해
//! 저장소에 접근합니다. MongoDB가 주 저장소이며, 인메모리 구현은 로컬 실행과 테스트용입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserDao};
//!
//! let dao: Arc<dyn UserDao> = Arc::new(InMemoryUserRepository::new());
//! ```

pub mod users;

pub use users::*;
