// CORSポリシー
//
// 全レスポンスに付与する固定のCORSヘッダーセットを定義する。
// ロジックではなく静的な設定データとして扱う。

use std::collections::BTreeMap;

/// 固定CORSヘッダーセット
///
/// 入力にかかわらず常にこの3ヘッダーのみをレスポンスに付与する。
pub struct CorsPolicy;

/// Access-Control-Allow-Originの値（固定）
pub const ALLOW_ORIGIN: &str = "*";

/// Access-Control-Allow-Headersの値（固定）
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Access-Control-Allow-Methodsの値（固定）
pub const ALLOW_METHODS: &str = "OPTIONS,HEAD,GET,PUT,POST";

impl CorsPolicy {
    /// CORSヘッダーのマップを生成
    ///
    /// # Returns
    /// 3つの固定CORSヘッダーのみを含むマップ
    pub fn headers() -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();

        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            ALLOW_ORIGIN.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        );

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ヘッダーマップが正確に3エントリのみを持つ
    #[test]
    fn test_headers_contains_exactly_three_entries() {
        let headers = CorsPolicy::headers();
        assert_eq!(headers.len(), 3);
    }

    /// 各CORSヘッダーの値が仕様どおりである
    #[test]
    fn test_headers_values() {
        let headers = CorsPolicy::headers();

        assert_eq!(
            headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").map(String::as_str),
            Some("Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token")
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").map(String::as_str),
            Some("OPTIONS,HEAD,GET,PUT,POST")
        );
    }

    /// 複数回生成しても同一のマップが得られる
    #[test]
    fn test_headers_stable_across_calls() {
        assert_eq!(CorsPolicy::headers(), CorsPolicy::headers());
    }
}
