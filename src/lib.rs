//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 그대로 쓸 수 있게 한다.
//!
//! 모든 계산은 입력만으로 결정되는 순수 함수이며, 테이블은 읽기 전용 상수라 여러 스레드에서
//! 동시에 호출해도 안전하다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod dose;
pub mod input;
pub mod legacy;
pub mod products;
pub mod quantity;
pub mod report;
pub mod salt_mix;
pub mod substrate;
pub mod ui_cli;
pub mod units;
pub mod water_change;
