// tests/common/mod.rs
#![allow(dead_code)]

pub mod mock_storage;

use note_presigner::PresignerService;
use std::io;
use std::sync::{Arc, Mutex, Once};

use mock_storage::MockStorageService;

// テスト環境の初期化を一度だけ実行
static INIT: Once = Once::new();

/// テスト環境を初期化
pub fn init_test_env() {
    INIT.call_once(|| {
        // .env.testファイルがあれば読み込む
        if std::path::Path::new(".env.test").exists() {
            dotenvy::from_filename(".env.test").ok();
        }

        // テスト用のログ設定
        let _ = tracing_subscriber::fmt()
            .with_env_filter("note_presigner=debug")
            .with_test_writer()
            .try_init();
    });
}

/// モックストレージを使ったサービスを作成
pub fn presigner_with(storage: &MockStorageService) -> Arc<PresignerService> {
    init_test_env();
    Arc::new(PresignerService::new(Arc::new(storage.clone())))
}

/// ログ出力を取り込むバッファ
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// 現在のスレッドの既定サブスクライバとして取り込みを開始
    ///
    /// ガードが生きている間だけ有効。`#[tokio::test]` の単一スレッドランタイムでは
    /// `tokio::spawn` したタスクのログも取り込まれる。
    pub fn capture() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        (logs, tracing::subscriber::set_default(subscriber))
    }

    /// 指定レベル（`"WARN"` など）で出力された行数
    pub fn count_at(&self, level: &str) -> usize {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains(level))
            .count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
