//! # 사용자 부분 수정 요청 DTO
//!
//! `PATCH /users/{userId}` 요청 본문입니다.
//! 수정 가능한 필드는 `email`, `password`, `firstName`, `lastName`, `permissionFlags`뿐이며,
//! 그 밖의 필드(`id` 포함)는 역직렬화 단계에서 버려집니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::UserPatch;
use crate::utils::string_utils::normalize_email;

use super::validate_password_bytes;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: Option<String>,

    #[validate(
        length(min = 5, message = "Must include password (5+ characters)"),
        custom(function = "validate_password_bytes")
    )]
    pub password: Option<String>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(range(min = 0, message = "Must be a non-negative integer"))]
    pub permission_flags: Option<i64>,
}

impl PatchUserRequest {
    pub fn normalized(mut self) -> Self {
        self.email = self.email.map(|email| normalize_email(&email));
        self
    }

    /// 비밀번호를 해싱한 뒤 병합 입력으로 변환합니다.
    pub fn into_patch(self, password_hash: Option<String>) -> UserPatch {
        UserPatch {
            email: self.email,
            password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            permission_flags: self.permission_flags,
        }
    }
}
