/// エコーハンドラー
///
/// API Gatewayプロキシイベントを受け取り、HTTPメソッドを
/// `{"shiny": <method>}` としてエコーする200レスポンスを構築する。
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::{CorsPolicy, EchoReply, ProxyEvent, ProxyResponse};

/// エコーハンドラーのエラー型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EchoHandlerError {
    /// 文字列bodyが有効なJSONでない
    ///
    /// このエラーはハンドラー内で回復せず、そのまま呼び出し元
    /// （Lambda実行基盤）へ伝播させる。
    #[error("failed to parse JSON body: {0}")]
    InvalidBodyJson(String),
}

/// HTTPメソッドをエコーするリクエストハンドラー
///
/// 状態を一切持たず、1回の呼び出しで完結する純粋な処理のみを行う。
pub struct EchoHandler;

impl EchoHandler {
    /// プロキシイベントを処理してレスポンスエンベロープを生成
    ///
    /// # 処理フロー
    /// 1. bodyが文字列であればJSONとしてパースし構造化値に正規化
    /// 2. httpMethodをそのまま持つエコー応答を構築
    /// 3. 応答をJSON文字列にシリアライズしてボディに設定
    /// 4. 固定CORSヘッダーを付与した200レスポンスを返却
    ///
    /// # 引数
    /// * `event` - API Gatewayプロキシイベント
    ///
    /// # 戻り値
    /// * 成功時は`Ok(ProxyResponse)`
    /// * 文字列bodyが不正なJSONの場合は`Err(EchoHandlerError)`
    pub fn handle(event: &ProxyEvent) -> Result<ProxyResponse, EchoHandlerError> {
        // bodyを正規化する。正規化結果を参照する後続処理は現状存在しないが、
        // 不正なJSONを検出して呼び出しを失敗させる役割は維持する。
        let normalized_body = Self::normalize_body(event.body.as_ref())?;
        if let Some(body) = &normalized_body {
            debug!(body = %body, "リクエストボディを正規化");
        }

        let reply = EchoReply::new(&event.http_method);

        Ok(ProxyResponse::ok(CorsPolicy::headers(), reply.to_json()))
    }

    /// リクエストボディを構造化値に正規化
    ///
    /// - 文字列: JSONテキストとしてパースした結果を返す
    /// - それ以外の値: 構造化済みとしてそのまま返す
    /// - 欠落: `None`を返す
    ///
    /// 空文字列を含む不正なJSONテキストはエラーになる。
    ///
    /// # 引数
    /// * `body` - イベントのbodyフィールド
    ///
    /// # 戻り値
    /// * `Ok(Option<Value>)` - 正規化済みのボディ
    /// * `Err(EchoHandlerError)` - 文字列のパースに失敗した場合
    pub fn normalize_body(body: Option<&Value>) -> Result<Option<Value>, EchoHandlerError> {
        match body {
            Some(Value::String(text)) => {
                let parsed: Value = serde_json::from_str(text)
                    .map_err(|err| EchoHandlerError::InvalidBodyJson(err.to_string()))?;
                Ok(Some(parsed))
            }
            Some(structured) => Ok(Some(structured.clone())),
            None => Ok(None),
        }
    }
}
