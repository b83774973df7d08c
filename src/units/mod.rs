//! 단위 정의 및 변환 모듈 모음.

pub mod concentration;
pub mod hardness;
pub mod length;
pub mod volume;

pub use concentration::{convert_concentration, ConcentrationScale, MEQ_L_TO_DEGREE, MEQ_L_TO_PPM};
pub use hardness::{degrees_to_ppm, ppm_to_degrees};
pub use length::{convert_dimension, DimensionUnit};
pub use volume::{
    convert_water_volume, dimensions_to_liters, from_liters, liters_to_us_gal, to_liters,
    WaterVolumeUnit,
};
