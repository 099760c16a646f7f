//! CSV 아티팩트 작성기.
//!
//! 심볼 하나의 시계열을 `folder/<symbol>.csv`로 저장합니다.
//! 기존 파일은 매번 전체 덮어쓰기됩니다.

use std::fs;
use std::path::{Path, PathBuf};

use stockvault_core::{Symbol, TimeSeries};
use tracing::debug;

use crate::error::DataResult;

/// CSV 헤더.
pub const CSV_HEADER: [&str; 7] = ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

/// 심볼의 아티팩트 경로.
pub fn artifact_path(folder: &Path, symbol: &Symbol) -> PathBuf {
    folder.join(format!("{}.csv", symbol))
}

/// 시계열 CSV 작성기.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvArtifactWriter {
    atomic: bool,
}

impl CsvArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 임시 파일에 쓴 뒤 rename으로 교체합니다.
    pub fn atomic(mut self, enabled: bool) -> Self {
        self.atomic = enabled;
        self
    }

    /// 시계열을 저장하고 작성한 파일 경로를 반환합니다.
    ///
    /// 동기 I/O입니다. 비동기 컨텍스트에서는 `spawn_blocking`으로 호출하세요.
    pub fn write(&self, folder: &Path, series: &TimeSeries) -> DataResult<PathBuf> {
        let path = artifact_path(folder, &series.symbol);

        if self.atomic {
            let tmp = folder.join(format!(".{}.csv.tmp", series.symbol));
            if let Err(e) = write_csv(&tmp, series) {
                let _ = fs::remove_file(&tmp);
                return Err(e);
            }
            fs::rename(&tmp, &path)?;
        } else {
            write_csv(&path, series)?;
        }

        debug!(path = %path.display(), rows = series.len(), "CSV 저장 완료");
        Ok(path)
    }
}

fn write_csv(path: &Path, series: &TimeSeries) -> DataResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;

    let format = series.timestamp_format();
    for bar in series.bars() {
        wtr.write_record([
            bar.timestamp.format(format).to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.adj_close.map(|d| d.to_string()).unwrap_or_default(),
            bar.volume.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
