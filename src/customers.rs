//! 顧客一覧の表示（CLI版）
//!
//! Web版と同じ読み込みフロー・検索・表示ルールを使う。

use crate::backend::RestClient;
use crate::error::{CrmError, Result};
use nailist_crm_common::{
    age_label, filter_customers, format_created_at, load_directory, occupation_label,
    submit_auth, text_or_dash, AuthMode, AuthOutcome, Credentials, Customer, DirectoryLoad,
};

/// 1行分の表示用文字列
pub fn customer_row(customer: &Customer) -> Vec<String> {
    vec![
        customer.external_id.clone(),
        customer.name.clone(),
        customer.status.display_label().to_string(),
        age_label(customer.age),
        text_or_dash(customer.nailist_experience.as_deref()).to_string(),
        occupation_label(&customer.occupation_type).to_string(),
        text_or_dash(customer.prefecture.as_deref()).to_string(),
        format_created_at(&customer.created_at),
    ]
}

pub const HEADERS: [&str; 8] = [
    "受付番号", "氏名", "ステータス", "年齢", "ネイリスト歴", "職業", "都道府県", "登録日",
];

/// タブ区切りの表
pub fn render_table(customers: &[&Customer]) -> String {
    let mut out = HEADERS.join("\t");
    out.push('\n');
    for customer in customers {
        out.push_str(&customer_row(customer).join("\t"));
        out.push('\n');
    }
    out
}

/// ログインして一覧を取得・表示
pub async fn list_customers(
    client: &RestClient,
    credentials: &Credentials,
    query: &str,
) -> Result<()> {
    match submit_auth(client, AuthMode::SignIn, credentials, "").await {
        AuthOutcome::SignedIn(session) => {
            tracing::info!(user = session.user.email.as_deref().unwrap_or("-"), "signed in");
        }
        AuthOutcome::Failed(message) => {
            return Err(CrmError::Backend(nailist_crm_common::Error::Backend(message)));
        }
        AuthOutcome::ConfirmationSent => {
            return Err(CrmError::Config("ログインではなく登録確認の応答が返りました".into()));
        }
    }

    let customers = match load_directory(client).await {
        DirectoryLoad::Loaded(customers) => customers,
        DirectoryLoad::RedirectToAuth => {
            return Err(CrmError::Config("セッションが無効です".into()));
        }
        DirectoryLoad::Failed(message) => {
            return Err(CrmError::Backend(nailist_crm_common::Error::Backend(message)));
        }
    };

    let filtered = filter_customers(&customers, query);
    print!("{}", render_table(&filtered));
    println!("\n✔ {} / {}件", filtered.len(), customers.len());

    if let Err(e) = client.sign_out().await {
        tracing::warn!(error = %e, "sign out failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_row_applies_display_rules() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": 5,
                "external_id": "N-005",
                "name": "佐藤 優",
                "status": "waiting",
                "occupation_type": null,
                "created_at": "2025-04-10T16:00:00+00:00"
            }"#,
        )
        .unwrap();

        let row = customer_row(&customer);
        assert_eq!(row[2], "waiting");
        assert_eq!(row[3], "—");
        assert_eq!(row[5], "社員");
        assert_eq!(row[7], "2025/4/11");
    }

    #[test]
    fn test_render_table_has_header_and_rows() {
        let customers: Vec<Customer> = serde_json::from_str(
            r#"[{"id": 1, "external_id": "N-001", "name": "A", "status": "completed"}]"#,
        )
        .unwrap();
        let refs: Vec<&Customer> = customers.iter().collect();
        let table = render_table(&refs);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("受付番号"));
        assert!(lines[1].contains("完了"));
    }
}
