//! 실행 요약 문서 (Markdown).
//!
//! 보고서 작성은 수집 결과에 영향을 주지 않습니다. 쓰기 실패는 로그만 남깁니다.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use stockvault_core::Group;
use tracing::{error, info};

use crate::stats::RunSummary;

/// 보고서 제목.
pub const REPORT_TITLE: &str = "Tech-Stocks-Data";

/// 보고서 본문을 생성합니다.
///
/// `runs`가 비어 있으면 (보고서 전용 실행) "Last Run" 섹션을 생략합니다.
pub fn build_report(runs: &[RunSummary], generated_at: DateTime<Utc>) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# {}\n", REPORT_TITLE);
    doc.push_str(
        "A repository containing historical stock data for major tech indices and companies.\n\n",
    );

    doc.push_str("## Data Collections\n\n");
    for group in Group::ALL {
        let _ = writeln!(
            doc,
            "- **{}** (`{}/`): {}",
            group.display_name(),
            group.folder_name(),
            group.description()
        );
    }

    doc.push_str("\n## Data Update Frequency\n\n");
    doc.push_str(
        "Data is updated daily by a scheduled job. Each update fully refreshes the series of every symbol that was fetched successfully.\n",
    );

    doc.push_str("\n## Last Updated\n\n");
    let _ = writeln!(doc, "{}", generated_at.format("%Y-%m-%d %H:%M:%S UTC"));

    if !runs.is_empty() {
        doc.push_str("\n## Last Run\n\n");
        doc.push_str("| Group | Chunk | Symbols | Written | Empty | Failed | Rows |\n");
        doc.push_str("|---|---|---|---|---|---|---|\n");
        for run in runs {
            let chunk = run
                .chunk
                .map(|c| c.to_string())
                .unwrap_or_else(|| "all".to_string());
            let _ = writeln!(
                doc,
                "| {} | {} | {} | {} | {} | {} | {} |",
                run.group.display_name(),
                chunk,
                run.total,
                run.written,
                run.empty,
                run.failed,
                run.total_rows
            );
        }

        let failed: Vec<&str> = runs
            .iter()
            .flat_map(|r| r.failed_symbols.iter().map(|s| s.as_str()))
            .collect();
        if !failed.is_empty() {
            let _ = writeln!(doc, "\nFailed symbols: {}", failed.join(", "));
        }
    }

    doc.push_str("\n## Data Source\n\n");
    doc.push_str("All stock data is fetched from the Yahoo Finance chart API.\n");

    doc.push_str("\n## Usage\n\n");
    doc.push_str(
        "The data is stored in CSV format (`<Group>/<SYMBOL>.csv`) and can be used for financial analysis, machine learning models, or visualization projects.\n",
    );

    doc
}

/// 보고서를 파일로 씁니다.
///
/// 실패해도 에러를 반환하지 않고 로그만 남깁니다. 성공 여부를 반환합니다.
pub async fn write_report(path: &Path, runs: &[RunSummary]) -> bool {
    info!(path = %path.display(), "실행 요약 문서 갱신");
    let content = build_report(runs, Utc::now());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            error!(path = %path.display(), error = %e, "실행 요약 문서 디렉토리 생성 실패");
            return false;
        }
    }

    match tokio::fs::write(path, content).await {
        Ok(()) => {
            info!(path = %path.display(), "실행 요약 문서 갱신 완료");
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "실행 요약 문서 쓰기 실패");
            false
        }
    }
}
