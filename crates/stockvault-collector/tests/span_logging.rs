//! 동시 실행 워커의 로그가 심볼 span으로 구분되는지 확인합니다.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{symbols, Behavior, MockProvider};
use stockvault_collector::BatchRunner;
use stockvault_core::{FetchParameters, Interval};
use tempfile::tempdir;

/// 테스트용 로그 버퍼.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_worker_logs_carry_symbol_span() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let dir = tempdir().unwrap();
    let batch = symbols(&["AAPL", "BAD", "MSFT"]);
    let provider = Arc::new(MockProvider::new(Behavior::Rows(2)).with("BAD", Behavior::Fail));

    BatchRunner::new(provider)
        .with_concurrency(3)
        .run(&batch, dir.path(), &FetchParameters::max(Interval::D1))
        .await;

    let logs = capture.contents();
    let failure = logs
        .lines()
        .find(|line| line.contains("조회 실패"))
        .expect("failure line logged");
    assert!(failure.contains("fetch{symbol=BAD}"), "{failure}");

    let saved: Vec<&str> = logs.lines().filter(|l| l.contains("저장 완료")).collect();
    assert_eq!(saved.len(), 2);
    assert!(saved.iter().any(|l| l.contains("fetch{symbol=AAPL}")));
    assert!(saved.iter().any(|l| l.contains("fetch{symbol=MSFT}")));
}
