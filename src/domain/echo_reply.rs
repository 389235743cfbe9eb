// エコー応答ドキュメント
//
// レスポンスボディとして返却する `{"shiny": <method>}` 構造を定義する。

use serde::Serialize;

/// エコー応答ドキュメント
///
/// 受信したHTTPメソッドを`shiny`キーでそのまま返すための構造体。
/// メソッド値は既知のHTTP動詞と照合せず、受信値を透過する。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoReply {
    /// 受信したHTTPメソッド（無加工）
    pub shiny: String,
}

impl EchoReply {
    /// 新しいエコー応答を作成
    ///
    /// # Arguments
    /// * `http_method` - 受信イベントのHTTPメソッド
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            shiny: http_method.into(),
        }
    }

    /// エコー応答をJSON文字列にシリアライズ
    ///
    /// 単一の文字列フィールドのみを持つためシリアライズは失敗しない。
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("EchoReplyのシリアライズに失敗")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// shinyキーにHTTPメソッドがそのまま入る
    #[test]
    fn test_new_sets_method_verbatim() {
        let reply = EchoReply::new("GET");
        assert_eq!(reply.shiny, "GET");
    }

    /// JSONシリアライズ結果が期待する形式と完全一致する
    #[test]
    fn test_to_json_exact_form() {
        assert_eq!(EchoReply::new("GET").to_json(), r#"{"shiny":"GET"}"#);
        assert_eq!(EchoReply::new("POST").to_json(), r#"{"shiny":"POST"}"#);
        assert_eq!(EchoReply::new("OPTIONS").to_json(), r#"{"shiny":"OPTIONS"}"#);
    }

    /// 標準外のメソッド文字列も検証せず透過する
    #[test]
    fn test_to_json_passes_through_nonstandard_method() {
        assert_eq!(
            EchoReply::new("PURGE").to_json(),
            r#"{"shiny":"PURGE"}"#
        );
    }
}
