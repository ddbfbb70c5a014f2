use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Local, Utc};

/// 位置历史对外展示的时间格式
const DISPLAY_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

// 客户端上报的时间戳是毫秒
pub fn timestamp_from_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(DISPLAY_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies_matching_input_only() {
        let hashed = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hashed).unwrap());
        assert!(!verify_password("secret2", &hashed).unwrap());
    }

    #[test]
    fn hashes_are_salted_per_user() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn millis_conversion_round_trips() {
        let ts = timestamp_from_millis(1_700_000_000_000).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn millis_out_of_range_is_rejected() {
        assert!(timestamp_from_millis(i64::MAX).is_none());
    }

    #[test]
    fn display_format_uses_twelve_hour_clock() {
        let ts = timestamp_from_millis(1_700_000_000_000).unwrap();
        let formatted = format_timestamp(&ts);
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }
}
