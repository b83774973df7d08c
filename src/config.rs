use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "dosing.toml";

/// 입력값 기본 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub volume: WaterVolumeUnit,
    pub dimension: DimensionUnit,
    pub concentration: ConcentrationScale,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            volume: WaterVolumeUnit::Liter,
            dimension: DimensionUnit::Centimeter,
            concentration: ConcentrationScale::Eq,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 읽기 전용이며 프로그램이 파일을 쓰지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_units: DefaultUnits,
    /// CLI 에서 순도를 생략했을 때 쓰는 KHCO₃ 순도
    pub kh_purity: f64,
    /// 결과 소수점 자리수
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_units: DefaultUnits::default(),
            kh_purity: 1.0,
            decimals: 2,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
}

/// 주어진 경로의 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// 경로(없으면 dosing.toml)의 설정을 로드하거나, 파일이 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    if path.exists() {
        load_from(path)
    } else {
        Ok(Config::default())
    }
}
