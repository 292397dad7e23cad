//! # 사용자 전체 교체 요청 DTO
//!
//! `PUT /users/{userId}` 요청 본문입니다. 허용된 모든 필드가 필수이며,
//! 누락된 필드는 모두 한 번에 `fields` 목록으로 보고됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserReplacement;
use crate::utils::string_utils::normalize_email;

use super::{required, validate_password_bytes};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PutUserRequest {
    #[validate(
        required(message = "Field is required"),
        email(message = "Must be a valid email address")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Must include password (5+ characters)"),
        length(min = 5, message = "Must include password (5+ characters)"),
        custom(function = "validate_password_bytes")
    )]
    pub password: Option<String>,

    #[validate(required(message = "Field is required"))]
    pub first_name: Option<String>,

    #[validate(required(message = "Field is required"))]
    pub last_name: Option<String>,

    #[validate(
        required(message = "Field is required"),
        range(min = 0, message = "Must be a non-negative integer")
    )]
    pub permission_flags: Option<i64>,
}

impl PutUserRequest {
    pub fn normalized(mut self) -> Self {
        self.email = self.email.map(|email| normalize_email(&email));
        self
    }

    pub fn plain_password(&self) -> AppResult<&str> {
        self.password
            .as_deref()
            .ok_or_else(|| AppError::missing_field("password"))
    }

    /// 검증된 요청을 전체 교체 입력으로 변환합니다.
    pub fn into_replacement(self, password_hash: String) -> AppResult<UserReplacement> {
        Ok(UserReplacement {
            email: required(self.email, "email")?,
            password_hash,
            first_name: required(self.first_name, "firstName")?,
            last_name: required(self.last_name, "lastName")?,
            permission_flags: required(self.permission_flags, "permissionFlags")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PutUserRequest {
        PutUserRequest {
            email: Some("ana@example.com".to_string()),
            password: Some("secret1".to_string()),
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            permission_flags: Some(1),
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_missing_field_is_named() {
        let request = PutUserRequest {
            last_name: None,
            ..complete()
        };

        match AppError::from(request.validate().unwrap_err()) {
            AppError::InvalidFields(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "lastName");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_long_password_is_accepted() {
        let request = PutUserRequest {
            password: Some("x".repeat(40)),
            ..complete()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_password_beyond_bcrypt_limit_is_rejected() {
        let request = PutUserRequest {
            password: Some("x".repeat(73)),
            ..complete()
        };

        match AppError::from(request.validate().unwrap_err()) {
            AppError::InvalidFields(fields) => assert_eq!(fields[0].field, "password"),
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_into_replacement() {
        let replacement = complete().into_replacement("hash".to_string()).unwrap();

        assert_eq!(replacement.first_name, "Ana");
        assert_eq!(replacement.permission_flags, 1);
        assert_eq!(replacement.password_hash, "hash");
    }
}
