//! User Entity Implementation
//!
//! 사용자 엔티티와 생성/교체/부분 수정 입력 모델을 정의합니다.
//! 엔티티는 MongoDB 문서 형태(`_id`, camelCase 필드)로 직렬화되며,
//! HTTP 응답에는 직접 노출되지 않습니다 (응답은 [`UserResponse`](crate::domain::dto::users::response::UserResponse) 사용).

use mongodb::bson::{Bson, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나에 대응합니다.
/// `password`에는 항상 bcrypt 해시가 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 저장소 계층이 할당하는 짧은 식별자
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일 (unique, 정규화된 형태)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// 권한 레벨 (정수 비트마스크)
    #[serde(default)]
    pub permission_flags: i64,
    /// 생성 시각. 목록 조회의 정렬 키이며 교체/수정 시에도 바뀌지 않습니다.
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 입력과 할당된 ID로 엔티티를 만듭니다.
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            email: new_user.email,
            password: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            permission_flags: new_user.permission_flags,
            created_at: DateTime::now(),
        }
    }

    /// 전체 교체 입력으로 엔티티를 만듭니다. ID와 생성 시각은 유지됩니다.
    pub fn from_replacement(id: String, created_at: DateTime, replacement: UserReplacement) -> Self {
        Self {
            id,
            email: replacement.email,
            password: replacement.password_hash,
            first_name: Some(replacement.first_name),
            last_name: Some(replacement.last_name),
            permission_flags: replacement.permission_flags,
            created_at,
        }
    }
}

/// 사용자 생성 입력 (비밀번호는 이미 해시된 상태)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_flags: i64,
}

/// 사용자 전체 교체(PUT) 입력
///
/// 모든 필드가 필수입니다.
#[derive(Debug, Clone)]
pub struct UserReplacement {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub permission_flags: i64,
}

impl UserReplacement {
    /// 교체 가능한 모든 필드를 담은 `$set` 문서. `_id`와 `createdAt`은 포함하지 않습니다.
    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();
        set.insert("email", self.email);
        set.insert("password", self.password_hash);
        set.insert("firstName", self.first_name);
        set.insert("lastName", self.last_name);
        set.insert("permissionFlags", Bson::Int64(self.permission_flags));
        set
    }
}

/// 사용자 부분 수정(PATCH) 입력
///
/// 수정 가능한 필드만 담을 수 있는 허용 목록입니다.
/// `Some`인 필드만 기존 값에 병합되고, `None`은 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub permission_flags: Option<i64>,
}

impl UserPatch {
    /// 병합할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 기존 엔티티에 허용된 필드만 병합합니다. `id`는 변경되지 않습니다.
    pub fn apply_to(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password_hash) = self.password_hash {
            user.password = password_hash;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = self.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(permission_flags) = self.permission_flags {
            user.permission_flags = permission_flags;
        }
    }

    /// MongoDB `$set` 연산에 사용할 문서를 만듭니다.
    ///
    /// 키 이름은 [`User`]의 직렬화 형태와 동일합니다.
    pub fn into_set_document(self) -> Document {
        let mut set = Document::new();

        if let Some(email) = self.email {
            set.insert("email", email);
        }
        if let Some(password_hash) = self.password_hash {
            set.insert("password", password_hash);
        }
        if let Some(first_name) = self.first_name {
            set.insert("firstName", first_name);
        }
        if let Some(last_name) = self.last_name {
            set.insert("lastName", last_name);
        }
        if let Some(permission_flags) = self.permission_flags {
            set.insert("permissionFlags", Bson::Int64(permission_flags));
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "abc123".to_string(),
            email: "ana@example.com".to_string(),
            password: "hash-1".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: None,
            permission_flags: 1,
            created_at: DateTime::from_millis(1_700_000_000_000),
        }
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut user = sample_user();
        let patch = UserPatch {
            last_name: Some("Silva".to_string()),
            permission_flags: Some(7),
            ..Default::default()
        };

        patch.apply_to(&mut user);

        assert_eq!(user.id, "abc123");
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.password, "hash-1");
        assert_eq!(user.first_name.as_deref(), Some("Ana"));
        assert_eq!(user.last_name.as_deref(), Some("Silva"));
        assert_eq!(user.permission_flags, 7);
    }

    #[test]
    fn test_empty_patch() {
        assert!(UserPatch::default().is_empty());
        assert!(
            !UserPatch {
                email: Some("x@example.com".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_set_document_uses_stored_field_names() {
        let patch = UserPatch {
            password_hash: Some("hash-2".to_string()),
            first_name: Some("Bea".to_string()),
            permission_flags: Some(3),
            ..Default::default()
        };

        let set = patch.into_set_document();

        assert_eq!(set.len(), 3);
        assert_eq!(set.get_str("password").unwrap(), "hash-2");
        assert_eq!(set.get_str("firstName").unwrap(), "Bea");
        assert_eq!(set.get_i64("permissionFlags").unwrap(), 3);
        assert!(!set.contains_key("email"));
    }

    #[test]
    fn test_user_serializes_as_document_shape() {
        let value = serde_json::to_value(sample_user()).unwrap();

        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(value["permissionFlags"], 1);
        assert!(value.get("lastName").is_none());
    }

    #[test]
    fn test_replacement_keeps_id_and_creation_time() {
        let created_at = DateTime::from_millis(1_700_000_000_000);
        let user = User::from_replacement(
            "abc123".to_string(),
            created_at,
            UserReplacement {
                email: "new@example.com".to_string(),
                password_hash: "hash-3".to_string(),
                first_name: "Ana".to_string(),
                last_name: "Lima".to_string(),
                permission_flags: 2,
            },
        );

        assert_eq!(user.id, "abc123");
        assert_eq!(user.created_at, created_at);
        assert_eq!(user.last_name.as_deref(), Some("Lima"));
    }

    #[test]
    fn test_replacement_set_document_covers_every_field() {
        let set = UserReplacement {
            email: "new@example.com".to_string(),
            password_hash: "hash-3".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Lima".to_string(),
            permission_flags: 2,
        }
        .into_set_document();

        assert_eq!(set.len(), 5);
        assert_eq!(set.get_str("lastName").unwrap(), "Lima");
        assert_eq!(set.get_i64("permissionFlags").unwrap(), 2);
        assert!(!set.contains_key("_id"));
        assert!(!set.contains_key("createdAt"));
    }
}
