//! 画面のパス

pub const AUTH_PATH: &str = "/auth";
pub const CUSTOMERS_PATH: &str = "/customers";
pub const CUSTOMER_IMPORT_PATH: &str = "/customers/import";

/// 顧客詳細のパス
pub fn customer_detail_path(id: &str) -> String {
    format!("{}/{}", CUSTOMERS_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_detail_path() {
        assert_eq!(customer_detail_path("42"), "/customers/42");
    }
}
