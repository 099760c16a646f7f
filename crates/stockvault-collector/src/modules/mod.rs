//! 수집 모듈.

pub mod batch;
pub mod report;
pub mod run;
pub mod worker;

pub use batch::BatchRunner;
pub use report::{build_report, write_report};
pub use run::Collector;
pub use worker::fetch_one;
