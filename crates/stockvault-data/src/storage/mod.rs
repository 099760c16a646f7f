//! 심볼별 아티팩트 저장.

pub mod csv_artifact;

pub use csv_artifact::{artifact_path, CsvArtifactWriter, CSV_HEADER};
