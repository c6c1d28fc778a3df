use std::env;
use std::io::{self, Read};
use std::sync::Arc;
use tracing::Instrument;

use note_presigner::config::PresignerConfig;
use note_presigner::logging::{init_tracing, InvocationContext};
use note_presigner::service::storage_service::create_storage_service;
use note_presigner::{handle_invocation, PresignerService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let raw_payload = if args.len() > 1 {
        // コマンドライン引数からペイロードを取得
        args[1].clone()
    } else {
        // 標準入力から読み込む
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if raw_payload.trim().is_empty() {
        eprintln!("Usage: invoke-local '<payload json>'  (or pipe the payload on stdin)");
        eprintln!(r#"Example: invoke-local '{{"operation":"generateUploadUrl","noteId":"n1","fileName":"memo.txt"}}'"#);
        std::process::exit(1);
    }

    let payload: serde_json::Value = match serde_json::from_str(&raw_payload) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: payload is not valid JSON: {}", e);
            std::process::exit(1);
        }
    };

    let config = PresignerConfig::from_env()?;
    let storage = create_storage_service(&config).await;
    let service = Arc::new(PresignerService::new(storage));

    let invocation = InvocationContext::local();
    let response = handle_invocation(service, payload)
        .instrument(invocation.span())
        .await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_error() {
        std::process::exit(2);
    }

    Ok(())
}
