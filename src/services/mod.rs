//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `AppState`에 `Arc`로 보관되어 핸들러와 미들웨어가 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let users = state.user_service.list(100, 0).await?;
//! ```

pub mod users;
