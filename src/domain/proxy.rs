// API Gatewayプロキシ統合のイベント／レスポンス構造
//
// このモジュールはAPI Gateway（Lambdaプロキシ統合）が受け渡す
// リクエストイベントとレスポンスエンベロープのスキーマを定義する。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// API Gatewayプロキシ統合のリクエストイベント
///
/// ゲートウェイが付与する多数のフィールドのうち、ハンドラーが
/// 参照するものだけを明示的なスキーマとして定義する。
/// 未知のフィールドはデシリアライズ時に無視される。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    /// リクエストのHTTPメソッド（検証せずそのまま透過する）
    pub http_method: String,

    /// リクエストボディ
    ///
    /// - 文字列: JSONテキストとして正規化の対象になる
    /// - それ以外の値: ゲートウェイが構造化済みとみなし、そのまま扱う
    /// - 欠落またはnull: `None`
    #[serde(default)]
    pub body: Option<Value>,
}

impl ProxyEvent {
    /// 新しいリクエストイベントを作成（主にテスト用）
    pub fn new(http_method: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            http_method: http_method.into(),
            body,
        }
    }
}

/// API Gatewayプロキシ統合のレスポンスエンベロープ
///
/// `statusCode`、`headers`、`body`の3フィールドのみをシリアライズする。
/// ヘッダーはBTreeMapで保持し、同一入力に対するシリアライズ結果が
/// バイト単位で一致することを保証する。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    /// HTTPステータスコード
    pub status_code: u16,

    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,

    /// シリアライズ済みJSONボディ
    pub body: String,
}

impl ProxyResponse {
    /// 200 OKのレスポンスエンベロープを作成
    pub fn ok(headers: BTreeMap<String, String>, body: String) -> Self {
        Self {
            status_code: 200,
            headers,
            body,
        }
    }
}
