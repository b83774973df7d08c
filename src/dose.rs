use serde::Serialize;

/// 투약량 표기 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DoseUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "tsp")]
    Teaspoon,
    #[serde(rename = "tbsp")]
    Tablespoon,
    #[serde(rename = "mL")]
    Milliliter,
    #[serde(rename = "caps")]
    Cap,
    /// 알 수 없는 제품을 나타내는 표식. `?` 로 표시된다.
    #[serde(rename = "?")]
    Unknown,
}

impl DoseUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DoseUnit::Gram => "g",
            DoseUnit::Teaspoon => "tsp",
            DoseUnit::Tablespoon => "tbsp",
            DoseUnit::Milliliter => "mL",
            DoseUnit::Cap => "caps",
            DoseUnit::Unknown => "?",
        }
    }
}

impl std::fmt::Display for DoseUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 음수 또는 유한하지 않은 값을 0 으로 자른다.
///
/// 이 엔진은 수치를 올리는 방향의 투약만 다루므로 "제거" 를 뜻하는 음수 투약량은 0 으로 보고한다.
pub fn clamp_dose(value: f64) -> f64 {
    if value < 0.0 || !value.is_finite() {
        0.0
    } else {
        value
    }
}

/// 한 물리량을 두 단위로 표시한 투약 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoseResult {
    pub primary_amount: f64,
    pub primary_unit: DoseUnit,
    pub secondary_amount: f64,
    pub secondary_unit: DoseUnit,
}

impl DoseResult {
    /// 두 값을 모두 0 이상 유한값으로 잘라 결과를 만든다.
    pub fn new(
        primary_amount: f64,
        primary_unit: DoseUnit,
        secondary_amount: f64,
        secondary_unit: DoseUnit,
    ) -> Self {
        Self {
            primary_amount: clamp_dose(primary_amount),
            primary_unit,
            secondary_amount: clamp_dose(secondary_amount),
            secondary_unit,
        }
    }

    /// 등록되지 않은 제품에 대한 결과 `{0, ?, 0, ?}`.
    pub fn unknown_product() -> Self {
        Self::new(0.0, DoseUnit::Unknown, 0.0, DoseUnit::Unknown)
    }

    /// 물량이 0 이하일 때의 결과 `{0, g, 0, g}`. 단위는 제품과 무관하다.
    pub fn no_volume() -> Self {
        Self::new(0.0, DoseUnit::Gram, 0.0, DoseUnit::Gram)
    }

    pub fn is_unknown(&self) -> bool {
        self.primary_unit == DoseUnit::Unknown
    }

    pub fn is_zero(&self) -> bool {
        self.primary_amount == 0.0 && self.secondary_amount == 0.0
    }
}
