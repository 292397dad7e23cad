//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 요청 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - 필수, 이메일 형식
//! - 검증 전에 앞뒤 공백 제거 및 소문자 변환
//! - 중복 여부는 이메일 가드(`ensure_email_available`)에서 별도 검증
//!
//! ### 비밀번호 (`password`)
//! - 필수, 5-20자, 72바이트 이하 (bcrypt 입력 한도)
//!
//! ### 이름 (`firstName`, `lastName`)
//! - 선택, 문자열
//!
//! ### 권한 (`permissionFlags`)
//! - 선택, 0 이상의 정수 (생략 시 0)
//!
//! 필드를 `Option`으로 받는 이유는 누락된 필드를 역직렬화 실패가 아닌
//! 필드 단위 검증 에러(`fields` 목록)로 보고하기 위함입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::entities::users::NewUser;
use crate::utils::string_utils::normalize_email;

use super::{required, validate_password_bytes};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "secret1",
///   "firstName": "Ana",
///   "lastName": "Silva",
///   "permissionFlags": 1
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Field is required"),
        email(message = "Must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Must include password (5+ characters)"),
        length(min = 5, max = 20, message = "Must include password (5+ characters)"),
        custom(function = "validate_password_bytes")
    )]
    pub password: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(range(min = 0, message = "Must be a non-negative integer"))]
    pub permission_flags: Option<i64>,
}

impl CreateUserRequest {
    /// 이메일을 정규화한 요청을 반환합니다.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.map(|email| normalize_email(&email));
        self
    }

    /// 해싱 전 평문 비밀번호
    pub fn plain_password(&self) -> AppResult<&str> {
        self.password
            .as_deref()
            .ok_or_else(|| crate::core::errors::AppError::missing_field("password"))
    }

    /// 검증된 요청을 저장소 입력으로 변환합니다.
    pub fn into_new_user(self, password_hash: String) -> AppResult<NewUser> {
        Ok(NewUser {
            email: required(self.email, "email")?,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            permission_flags: self.permission_flags.unwrap_or(0),
        })
    }
}
