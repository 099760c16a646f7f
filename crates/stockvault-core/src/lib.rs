//! # StockVault Core
//!
//! 주가 아카이버의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 워크스페이스 전반에서 사용되는 기본 타입을 제공합니다:
//! - 심볼 및 심볼 정규화
//! - 종목 그룹 정의 (S&P 500, Hang Seng Tech, MAG7, Nasdaq-100)
//! - 조회 파라미터 (기간, 간격)
//! - 청크 분할 (매트릭스 작업용)
//! - 시계열 데이터와 심볼별 수집 결과
//! - 로깅 인프라

pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
