/// HTTPメソッドエコーLambdaエントリポイント
///
/// API Gatewayプロキシ統合経由のリクエストを処理し、
/// 受信したHTTPメソッドをエコーするJSONレスポンスを返却する。
use lambda_runtime::{service_fn, Error, LambdaEvent};
use shiny_lambda::application::EchoHandler;
use shiny_lambda::domain::{ProxyEvent, ProxyResponse};
use shiny_lambda::infrastructure::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("エコーLambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. プロキシイベントからHTTPメソッドとbodyを受け取る
/// 2. EchoHandlerでエコー応答を構築
/// 3. 成功時は200レスポンスを返却
///
/// bodyが不正なJSON文字列の場合はエラーを返し、呼び出しの失敗として
/// Lambda実行基盤に伝播させる（基盤側で500系レスポンスに変換される）。
async fn handler(event: LambdaEvent<ProxyEvent>) -> Result<ProxyResponse, Error> {
    info!(http_method = %event.payload.http_method, "リクエスト受信");

    let response = EchoHandler::handle(&event.payload)?;

    info!("レスポンス送信");

    Ok(response)
}
