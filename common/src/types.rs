//! 顧客・セッションの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Customer: `customers` テーブルの1行
//! - CustomerStatus: 診断ステータス（未知の値はそのまま保持）
//! - Session: 認証済みユーザーのセッション

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 顧客ID（システム採番、文字列・数値どちらでも受け付ける）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => CustomerId(s),
            RawId::Number(n) => CustomerId(n.to_string()),
        })
    }
}

/// 診断ステータス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerStatus {
    New,
    InProgress,
    Completed,
    /// 未知のステータス（表示時はそのまま出す）
    Other(String),
}

impl CustomerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CustomerStatus::New => "new",
            CustomerStatus::InProgress => "in_progress",
            CustomerStatus::Completed => "completed",
            CustomerStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for CustomerStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "new" => CustomerStatus::New,
            "in_progress" => CustomerStatus::InProgress,
            "completed" => CustomerStatus::Completed,
            _ => CustomerStatus::Other(raw),
        }
    }
}

impl From<&str> for CustomerStatus {
    fn from(raw: &str) -> Self {
        CustomerStatus::from(raw.to_string())
    }
}

impl Serialize for CustomerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CustomerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(CustomerStatus::from(raw.unwrap_or_default()))
    }
}

/// 職業区分
///
/// `null` と「項目なし」で表示が異なるため3状態で持つ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Occupation {
    #[default]
    Absent,
    Null,
    Value(String),
}

impl Occupation {
    pub fn is_absent(&self) -> bool {
        matches!(self, Occupation::Absent)
    }
}

impl Serialize for Occupation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Occupation::Value(v) => serializer.serialize_str(v),
            Occupation::Absent | Occupation::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Occupation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(v) => Occupation::Value(v),
            None => Occupation::Null,
        })
    }
}

/// 顧客（`customers` テーブルの1行）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub external_id: String,      // 受付番号

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    pub status: CustomerStatus,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub nailist_experience: Option<String>,   // ネイリスト歴

    #[serde(default, skip_serializing_if = "Occupation::is_absent")]
    pub occupation_type: Occupation,

    #[serde(default)]
    pub prefecture: Option<String>,

    /// RFC3339形式のまま保持（表示時に整形）
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

/// `null` の文字列列は空文字として読む（1行のせいで一覧全体を落とさない）
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// セッションのユーザー情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// 認証セッション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// 有効期限（UNIX秒）
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    /// `now` 時点で期限切れかどうか（期限不明なら有効とみなす）
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.map(|exp| exp <= now).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_deserialize_full_row() {
        let json = r#"{
            "id": "7f1c",
            "external_id": "A-0012",
            "name": "山田 花子",
            "status": "in_progress",
            "age": 28,
            "nailist_experience": "3年",
            "occupation_type": "フリーランス",
            "prefecture": "東京都",
            "created_at": "2025-03-01T10:00:00+00:00"
        }"#;

        let customer: Customer = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(customer.id.as_str(), "7f1c");
        assert_eq!(customer.status, CustomerStatus::InProgress);
        assert_eq!(customer.age, Some(28));
        assert_eq!(customer.occupation_type, Occupation::Value("フリーランス".to_string()));
    }

    #[test]
    fn test_occupation_null_and_absent_differ() {
        let with_null: Customer = serde_json::from_str(
            r#"{"id": 1, "status": "new", "occupation_type": null}"#,
        ).unwrap();
        let without: Customer = serde_json::from_str(r#"{"id": 2, "status": "new"}"#).unwrap();

        assert_eq!(with_null.occupation_type, Occupation::Null);
        assert_eq!(without.occupation_type, Occupation::Absent);
        assert_eq!(with_null.id.as_str(), "1");
    }

    #[test]
    fn test_null_text_columns_read_as_empty() {
        let customers: Vec<Customer> = serde_json::from_str(
            r#"[
                {"id": 1, "external_id": null, "name": "A", "status": "new"},
                {"id": 2, "external_id": "N-002", "name": null, "status": "new", "created_at": null}
            ]"#,
        ).expect("null列を含む行も読めるはず");

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].external_id, "");
        assert_eq!(customers[0].name, "A");
        assert_eq!(customers[1].name, "");
        assert_eq!(customers[1].created_at, "");
    }

    #[test]
    fn test_unknown_status_is_preserved() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": "x", "status": "archived"}"#,
        ).unwrap();
        assert_eq!(customer.status, CustomerStatus::Other("archived".to_string()));
        assert_eq!(customer.status.as_str(), "archived");
    }

    #[test]
    fn test_status_serialize_uses_raw_value() {
        let json = serde_json::to_string(&CustomerStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let json = serde_json::to_string(&CustomerStatus::from("paused")).unwrap();
        assert_eq!(json, "\"paused\"");
    }

    #[test]
    fn test_session_expiry() {
        let session = Session {
            access_token: "token".to_string(),
            refresh_token: String::new(),
            expires_at: Some(1_000),
            user: SessionUser::default(),
        };
        assert!(!session.is_expired(999));
        assert!(session.is_expired(1_000));

        let no_expiry = Session { expires_at: None, ..session };
        assert!(!no_expiry.is_expired(i64::MAX));
    }
}
