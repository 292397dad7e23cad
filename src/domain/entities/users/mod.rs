//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티와 저장소 입력 모델을 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, UserPatch};
//!
//! let new_user = NewUser {
//!     email: "user@example.com".to_string(),
//!     password_hash,
//!     first_name: None,
//!     last_name: None,
//!     permission_flags: 0,
//! };
//!
//! let patch = UserPatch { last_name: Some("Silva".to_string()), ..Default::default() };
//! ```

pub mod user;

pub use user::{NewUser, User, UserPatch, UserReplacement};
