//! 짧은 사용자 ID 생성
//!
//! UUID v4의 앞 9바이트를 URL-safe Base64(패딩 없음)로 인코딩하여
//! 12자 길이의 ID를 만듭니다. URL 경로에 그대로 넣을 수 있는 문자만 사용합니다.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use uuid::Uuid;

const ID_BYTES: usize = 9;

/// 새 짧은 ID를 생성합니다.
///
/// ```rust,ignore
/// let id = generate_short_id(); // 예: "q3Jk1x_9aZbT"
/// ```
pub fn generate_short_id() -> String {
    let uuid = Uuid::new_v4();
    URL_SAFE_NO_PAD.encode(&uuid.as_bytes()[..ID_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_short_id_shape() {
        let id = generate_short_id();

        assert_eq!(id.len(), 12);
        assert!(
            id.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_short_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_short_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
