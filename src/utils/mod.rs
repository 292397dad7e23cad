//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 이메일 정규화
//! - [`short_id`] - 사용자 ID 생성
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let email = normalize_email("  Ana@Example.com ");
//! print_boxed_title("User Management Backend");
//! ```

pub mod display_terminal;
pub mod short_id;
pub mod string_utils;
