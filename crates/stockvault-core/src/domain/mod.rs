//! 도메인 모델.

pub mod outcome;

pub use outcome::{FetchOutcome, OutcomeKind};
