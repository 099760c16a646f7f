//! # StockVault Data
//!
//! 외부 협력자를 trait 뒤에 둡니다.
//!
//! - [`provider`]: 과거 가격 시계열 제공자 (Yahoo Finance chart API)
//! - [`symbols`]: 그룹별 심볼 소스와 리졸버 (Wikipedia, 고정 목록)
//! - [`storage`]: 심볼별 CSV 아티팩트

pub mod error;
pub mod provider;
pub mod storage;
pub mod symbols;

pub use error::{DataError, DataResult};
pub use provider::{TimeSeriesProvider, YahooChartProvider};
pub use storage::{artifact_path, CsvArtifactWriter};
pub use symbols::{GroupResolver, StaticSymbolSource, SymbolSource, WikipediaTableSource};
