//! 심볼 하나를 조회하고 저장하는 수집 워커.

use std::path::{Path, PathBuf};

use stockvault_core::{FetchOutcome, FetchParameters, Symbol};
use stockvault_data::{CsvArtifactWriter, TimeSeriesProvider};
use tracing::{error, info, warn};

/// 심볼 하나를 조회해 아티팩트로 저장하고 결과를 분류합니다.
///
/// 어떤 실패도 호출자에게 전파하지 않습니다.
/// - 제공자 에러 → `Failed` (error 로그)
/// - 0행 응답 → `EmptyResult` (warn 로그, 파일 없음)
/// - 그 외 → `folder/<symbol>.csv` 덮어쓰기 후 `Written` (info 로그)
///
/// 실패/빈 결과일 때 이전 실행의 아티팩트는 그대로 남습니다.
pub async fn fetch_one(
    provider: &dyn TimeSeriesProvider,
    writer: CsvArtifactWriter,
    symbol: Symbol,
    folder: &Path,
    params: &FetchParameters,
) -> FetchOutcome {
    let series = match provider.fetch(&symbol, params).await {
        Ok(series) => series,
        Err(e) => {
            error!(symbol = %symbol, provider = provider.name(), error = %e, "조회 실패");
            return FetchOutcome::failed(symbol, e);
        }
    };

    if series.is_empty() {
        warn!(symbol = %symbol, %params, "데이터 없음");
        return FetchOutcome::empty(symbol);
    }

    let rows = series.len();
    let folder: PathBuf = folder.to_path_buf();

    // 파일 쓰기는 블로킹 I/O
    let written = tokio::task::spawn_blocking(move || writer.write(&folder, &series)).await;

    match written {
        Ok(Ok(path)) => {
            info!(symbol = %symbol, rows, path = %path.display(), "저장 완료");
            FetchOutcome::written(symbol, rows)
        }
        Ok(Err(e)) => {
            error!(symbol = %symbol, error = %e, "아티팩트 저장 실패");
            FetchOutcome::failed(symbol, e)
        }
        Err(e) => {
            error!(symbol = %symbol, error = %e, "아티팩트 저장 작업 중단");
            FetchOutcome::failed(symbol, e)
        }
    }
}
