//! 그룹 수집 워크플로우 통합 테스트.

mod common;

use std::sync::Arc;

use common::{Behavior, ListSource, MockProvider, UnreachableSource};
use stockvault_collector::modules::write_report;
use stockvault_collector::{BatchRunner, Collector};
use stockvault_core::{ChunkSpec, Group};
use stockvault_data::{GroupResolver, StaticSymbolSource};
use tempfile::tempdir;

fn sp500_like(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("SYM{}", i)).collect()
}

/// MAG7: 7개 모두 성공
#[tokio::test]
async fn test_mag7_all_written() {
    let dir = tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(Behavior::Rows(24)));
    let resolver = GroupResolver::new().with_source(Group::Mag7, StaticSymbolSource::mag7());
    let collector = Collector::new(resolver, BatchRunner::new(provider.clone()), dir.path());

    let summary = collector.collect_group(Group::Mag7, None).await;

    assert_eq!(summary.total, 7);
    assert_eq!(summary.written, 7);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.empty, 0);
    assert_eq!(summary.total_rows, 7 * 24);

    let folder = dir.path().join("MAG7");
    for name in ["AAPL", "AMZN", "GOOGL", "META", "MSFT", "NFLX", "TSLA"] {
        assert!(folder.join(format!("{}.csv", name)).exists(), "{}", name);
    }
    assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 7);
}

/// SP500 503종목 / 10청크: 첫 청크 51개, 마지막 청크 44개
#[tokio::test]
async fn test_sp500_matrix_chunks() {
    let dir = tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(Behavior::Rows(1)));
    let resolver = GroupResolver::new().with_source(Group::Sp500, ListSource(sp500_like(503)));
    let collector = Collector::new(resolver, BatchRunner::new(provider.clone()), dir.path());

    let first = collector
        .collect_group(Group::Sp500, Some(ChunkSpec::new(0, 10).unwrap()))
        .await;
    assert_eq!(first.total, 51);
    assert_eq!(first.written, 51);

    let last = collector
        .collect_group(Group::Sp500, Some(ChunkSpec::new(9, 10).unwrap()))
        .await;
    assert_eq!(last.total, 44);

    let folder = dir.path().join("SP500");
    assert!(folder.join("SYM0.csv").exists());
    assert!(folder.join("SYM50.csv").exists());
    assert!(!folder.join("SYM51.csv").exists());
    assert!(folder.join("SYM459.csv").exists());
    assert!(folder.join("SYM502.csv").exists());
    assert_eq!(provider.calls(), 51 + 44);
}

/// 과잉 할당된 청크는 빈 배치
#[tokio::test]
async fn test_over_provisioned_chunk_is_noop() {
    let dir = tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(Behavior::Rows(1)));
    let resolver = GroupResolver::new().with_source(Group::Mag7, StaticSymbolSource::mag7());
    let collector = Collector::new(resolver, BatchRunner::new(provider.clone()), dir.path());

    // 7개 / 6청크 → 크기 2, 청크 5는 [10, 7) → 빈 구간
    let summary = collector
        .collect_group(Group::Mag7, Some(ChunkSpec::new(5, 6).unwrap()))
        .await;

    assert_eq!(summary.total, 0);
    assert_eq!(provider.calls(), 0);
}

/// 심볼 소스 접속 불가: 배치 없이 보고서만 작성
#[tokio::test]
async fn test_unreachable_source_still_writes_report() {
    let dir = tempdir().unwrap();
    let provider = Arc::new(MockProvider::new(Behavior::Rows(1)));
    let resolver = GroupResolver::new().with_source(Group::Sp500, UnreachableSource);
    let collector = Collector::new(resolver, BatchRunner::new(provider.clone()), dir.path());

    let summary = collector.collect_group(Group::Sp500, None).await;
    assert_eq!(summary.total, 0);
    assert_eq!(provider.calls(), 0);
    assert!(!dir.path().join("SP500").exists());

    let report = dir.path().join("README.md");
    assert!(write_report(&report, &[summary]).await);

    let doc = std::fs::read_to_string(report).unwrap();
    assert!(doc.contains("## Last Updated"));
    assert!(doc.contains("| S&P 500 | all | 0 | 0 | 0 | 0 | 0 |"));
}

/// 출력 폴더를 만들 수 없으면 배치를 건너뜀
#[tokio::test]
async fn test_unwritable_data_dir_skips_batch() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let provider = Arc::new(MockProvider::new(Behavior::Rows(1)));
    let resolver = GroupResolver::new().with_source(Group::Mag7, StaticSymbolSource::mag7());
    let collector = Collector::new(resolver, BatchRunner::new(provider.clone()), &blocker);

    let summary = collector.collect_group(Group::Mag7, None).await;
    assert_eq!(summary.total, 0);
    assert_eq!(provider.calls(), 0);
}

/// 전체 실행: 그룹마다 요약 하나, 실패한 그룹이 다른 그룹을 막지 않음
#[tokio::test]
async fn test_run_all_groups() {
    let dir = tempdir().unwrap();
    let provider = Arc::new(
        MockProvider::new(Behavior::Rows(2))
            .with("0700.HK", Behavior::Empty)
            .with("TSLA", Behavior::Fail),
    );
    let resolver = GroupResolver::new()
        .with_source(Group::Sp500, UnreachableSource)
        .with_source(Group::HangSengTech, StaticSymbolSource::hang_seng_tech())
        .with_source(Group::Mag7, StaticSymbolSource::mag7())
        .with_source(
            Group::Nasdaq100,
            ListSource(vec!["AAPL".to_string(), "BRK.B".to_string()]),
        );
    let collector = Collector::new(resolver, BatchRunner::new(provider), dir.path());

    let summaries = collector.run_all().await;
    assert_eq!(summaries.len(), 4);

    let by_group = |g: Group| summaries.iter().find(|s| s.group == g).unwrap();
    assert_eq!(by_group(Group::Sp500).total, 0);

    let hstech = by_group(Group::HangSengTech);
    assert_eq!(hstech.total, 29);
    assert_eq!(hstech.empty, 1);
    assert_eq!(hstech.written, 28);

    let mag7 = by_group(Group::Mag7);
    assert_eq!(mag7.failed, 1);
    assert_eq!(mag7.failed_symbols[0].as_str(), "TSLA");

    assert!(dir.path().join("Nasdaq100").join("BRK-B.csv").exists());
    assert!(dir.path().join("HangSengTech").join("9988.HK.csv").exists());
    assert!(!dir.path().join("HangSengTech").join("0700.HK.csv").exists());
}
