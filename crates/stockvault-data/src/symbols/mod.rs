//! 그룹별 심볼 목록.
//!
//! - [`SymbolSource`]: 원본 티커 문자열 목록을 가져오는 외부 소스
//! - [`WikipediaTableSource`]: 위키피디아 구성 종목 표 스크래핑
//! - [`StaticSymbolSource`]: 고정 목록 (HangSengTech, MAG7)
//! - [`GroupResolver`]: 그룹 → 정규화/중복 제거된 심볼 목록

pub mod resolver;
pub mod static_list;
pub mod wikipedia;

use async_trait::async_trait;

use crate::error::DataResult;

pub use resolver::GroupResolver;
pub use static_list::StaticSymbolSource;
pub use wikipedia::WikipediaTableSource;

/// 원본 티커 목록 소스 trait.
#[async_trait]
pub trait SymbolSource: Send + Sync {
    /// 소스 이름 (로그용).
    fn name(&self) -> &str;

    /// 원본 티커 문자열을 소스 순서대로 반환합니다.
    ///
    /// 정규화와 중복 제거는 [`GroupResolver`]가 담당합니다.
    async fn fetch_raw(&self) -> DataResult<Vec<String>>;
}
