use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{self, Config};
use crate::conversion::{self, ConversionError};
use crate::input;
use crate::legacy;
use crate::products::{self, ProductGroup};
use crate::quantity::QuantityKind;
use crate::report::{self, DosingInputs, ValidationError};
use crate::substrate;
use crate::ui_cli;
use crate::units::{to_liters, ConcentrationScale, DimensionUnit};
use crate::water_change;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 검증 오류
    #[error("입력 오류: {0}")]
    Validation(#[from] ValidationError),
    /// 보고서 입력 검증 오류
    #[error("보고서 오류: {0}")]
    Report(#[from] report::ReportError),
    /// 보고서 입력 파일 파싱 오류
    #[error("입력 파일 파싱 오류: {0}")]
    InputParse(#[from] toml::de::Error),
    /// 보고서 직렬화 오류
    #[error("직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 알 수 없는 제품 분류
    #[error("알 수 없는 제품 분류: {0}")]
    UnknownGroup(String),
}

/// 수족관 수처리제 투약 계산기.
#[derive(Debug, Parser)]
#[command(name = "aqua_dosing_toolbox", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (기본: dosing.toml, 없으면 기본값)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 제품 목록 (분류 지정 시 공용 제품 포함)
    Products {
        #[arg(long)]
        group: Option<String>,
    },
    /// 범용 엔진 제품 투약량. 측정값을 해석할 수 없으면 0 으로 본다.
    Dose {
        product: String,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = reading)]
        current: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, value_parser = reading)]
        target: f64,
        #[command(flatten)]
        volume: VolumeArgs,
        /// 측정값 스케일 (meq/L, dKH, ppm)
        #[arg(long)]
        scale: Option<String>,
    },
    /// 단위 변환 (concentration, volume, dimension, hardness)
    Convert {
        kind: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 바닥재 제품 목록
    Substrates,
    /// 바닥재 포대 수
    Substrate {
        product: String,
        length: f64,
        width: f64,
        depth: f64,
        /// 치수 단위 (cm, in, ft)
        #[arg(long)]
        unit: Option<String>,
    },
    /// 환수량
    WaterChange {
        #[command(flatten)]
        volume: VolumeArgs,
        #[arg(long)]
        percent: f64,
    },
    /// 단일 목적 처방식
    Legacy {
        #[command(subcommand)]
        kind: LegacyCommand,
    },
    /// TOML 입력 파일로 전체 투약 보고서
    Report {
        file: PathBuf,
        /// 결과를 TOML 로 출력
        #[arg(long)]
        toml: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct VolumeArgs {
    /// 수조 물량
    #[arg(long)]
    pub volume: f64,
    /// 물량 단위 (L, US, UK). 생략 시 설정값
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum LegacyCommand {
    /// KH 부스터 (KHCO₃)
    KhBooster {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        target: f64,
        #[arg(long)]
        purity: Option<f64>,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// GH 부스터 (Equilibrium)
    GhBooster {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        target: f64,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// pH 하강 (Neutral Regulator)
    PhDown {
        #[arg(long)]
        current_ph: f64,
        #[arg(long)]
        target_ph: f64,
        #[arg(long)]
        kh: f64,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// KH 하강 (Acid Buffer)
    AcidBuffer {
        #[arg(long)]
        current: f64,
        #[arg(long)]
        target: f64,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// pH 상승 (Gold Buffer)
    PhUp {
        #[arg(long)]
        current_ph: f64,
        #[arg(long)]
        target_ph: f64,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// 수돗물 컨디셔너 (Safe)
    Conditioner {
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// 비료 (APT Complete)
    Fertilizer {
        #[arg(long, default_value_t = 0.0)]
        nitrate: f64,
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// 암모니아/아질산 해독 (Prime)
    Detox {
        #[command(flatten)]
        volume: VolumeArgs,
    },
    /// 박테리아 보강 (Stability)
    BioBoost {
        #[command(flatten)]
        volume: VolumeArgs,
    },
}

impl VolumeArgs {
    fn liters(&self, cfg: &Config) -> Result<f64, AppError> {
        let unit = match self.unit.as_deref() {
            Some(s) => conversion::parse_volume_unit(s)?,
            None => cfg.default_units.volume,
        };
        Ok(to_liters(self.volume, unit))
    }
}

fn reading(s: &str) -> Result<f64, Infallible> {
    Ok(input::parse_or_zero(s))
}

fn dimension_unit(arg: Option<&str>, fallback: DimensionUnit) -> Result<DimensionUnit, AppError> {
    match arg {
        Some(s) => Ok(conversion::parse_dimension_unit(s)?),
        None => Ok(fallback),
    }
}

/// CLI 인자를 받아 설정을 로드한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(cli.config.as_deref())?;
    execute(cli.command, &cfg)
}

/// 하나의 명령을 실행한다.
pub fn execute(command: Command, cfg: &Config) -> Result<(), AppError> {
    match command {
        Command::Products { group } => {
            let list = match group.as_deref() {
                Some(g) => {
                    let group = ProductGroup::parse(g)
                        .ok_or_else(|| AppError::UnknownGroup(g.to_string()))?;
                    products::products_for_group(group)
                }
                None => products::descriptors().iter().collect(),
            };
            ui_cli::print_products(&list);
        }
        Command::Dose {
            product,
            current,
            target,
            volume,
            scale,
        } => {
            let liters = volume.liters(cfg)?;
            let scale: Option<ConcentrationScale> = match scale.as_deref() {
                Some(s) => Some(conversion::parse_concentration_scale(s)?),
                None => products::find_descriptor(&product)
                    .map(|d| d.native_unit)
                    .or(Some(cfg.default_units.concentration)),
            };
            let dose = products::calculate(&product, current, target, liters, scale);
            ui_cli::print_dose(&product, &dose, cfg.decimals);
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let quantity = QuantityKind::parse(&kind)
                .ok_or_else(|| ConversionError::UnsupportedQuantity(kind.clone()))?;
            let result = conversion::convert(quantity, value, from.trim(), to.trim())?;
            ui_cli::print_conversion(value, from.trim(), result, to.trim());
        }
        Command::Substrates => ui_cli::print_substrates(substrate::substrate_products()),
        Command::Substrate {
            product,
            length,
            width,
            depth,
            unit,
        } => {
            let unit = dimension_unit(unit.as_deref(), cfg.default_units.dimension)?;
            let result = substrate::calculate_substrate(&product, length, width, depth, unit);
            ui_cli::print_substrate(&product, &result);
        }
        Command::WaterChange { volume, percent } => {
            let liters = volume.liters(cfg)?;
            let result = water_change::water_change(liters, percent);
            ui_cli::print_water_change(&result, cfg.decimals);
        }
        Command::Legacy { kind } => run_legacy(kind, cfg)?,
        Command::Report { file, toml } => {
            let content = std::fs::read_to_string(&file)?;
            let inputs: DosingInputs = ::toml::from_str(&content)?;
            let report = report::build_report(&inputs, None)?;
            if toml {
                println!("{}", ::toml::to_string_pretty(&report)?);
            } else {
                ui_cli::print_report(&report, inputs.salt_mix.is_some(), cfg.decimals);
            }
        }
    }
    Ok(())
}

fn run_legacy(kind: LegacyCommand, cfg: &Config) -> Result<(), AppError> {
    let d = cfg.decimals;
    match kind {
        LegacyCommand::KhBooster {
            current,
            target,
            purity,
            volume,
        } => {
            let purity = purity.unwrap_or(cfg.kh_purity);
            if !(legacy::KHCO3_PURITY_MIN..=legacy::KHCO3_PURITY_MAX).contains(&purity) {
                return Err(ValidationError::PurityOutOfRange(purity).into());
            }
            let grams = legacy::khco3_grams(current, target, volume.liters(cfg)?, purity);
            ui_cli::print_amount("KHCO₃", grams, "g", d);
        }
        LegacyCommand::GhBooster {
            current,
            target,
            volume,
        } => {
            let result = legacy::gh_booster(current, target, volume.liters(cfg)?);
            ui_cli::print_gh_booster(&result, d);
        }
        LegacyCommand::PhDown {
            current_ph,
            target_ph,
            kh,
            volume,
        } => {
            let liters = volume.liters(cfg)?;
            let grams = legacy::neutral_regulator_grams(liters, current_ph, target_ph, kh);
            ui_cli::print_amount("Neutral Regulator", grams, "g", d);
        }
        LegacyCommand::AcidBuffer {
            current,
            target,
            volume,
        } => {
            let grams = legacy::acid_buffer_grams(volume.liters(cfg)?, current, target);
            ui_cli::print_amount("Acid Buffer", grams, "g", d);
        }
        LegacyCommand::PhUp {
            current_ph,
            target_ph,
            volume,
        } => {
            let result = legacy::gold_buffer(volume.liters(cfg)?, current_ph, target_ph);
            ui_cli::print_gold_buffer(&result, d);
        }
        LegacyCommand::Conditioner { volume } => {
            ui_cli::print_amount("Safe", legacy::safe_grams(volume.liters(cfg)?), "g", d);
        }
        LegacyCommand::Fertilizer { nitrate, volume } => {
            let result = legacy::apt_complete_dose(volume.liters(cfg)?, nitrate);
            ui_cli::print_fertilizer(&result, d);
        }
        LegacyCommand::Detox { volume } => {
            ui_cli::print_amount("Prime", legacy::prime_ml(volume.liters(cfg)?), "mL", d);
        }
        LegacyCommand::BioBoost { volume } => {
            ui_cli::print_amount("Stability", legacy::stability_ml(volume.liters(cfg)?), "mL", d);
        }
    }
    Ok(())
}
