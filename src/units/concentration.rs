use serde::{Deserialize, Serialize};

/// 농도 스케일. 내부 기준(피벗)은 meq/L 이다.
///
/// pH 는 당량 기준 표현이 없으므로 어떤 스케일로도 변환되지 않고 값을 그대로 통과시킨다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcentrationScale {
    /// meq/L (당량 기준)
    #[serde(rename = "meq/L", alias = "EQ", alias = "eq")]
    Eq,
    /// dKH / dGH (경도 도수)
    #[serde(rename = "dKH", alias = "DEGREE", alias = "degree", alias = "dGH")]
    Degree,
    /// ppm
    #[serde(rename = "PPM", alias = "ppm")]
    Ppm,
    /// pH (변환 없음)
    #[serde(rename = "pH", alias = "PH", alias = "ph")]
    Ph,
}

/// 1 meq/L 에 해당하는 경도 도수.
pub const MEQ_L_TO_DEGREE: f64 = 2.8;
/// 1 meq/L 에 해당하는 ppm.
pub const MEQ_L_TO_PPM: f64 = 50.0;

impl ConcentrationScale {
    pub const ALL: [ConcentrationScale; 4] = [
        ConcentrationScale::Eq,
        ConcentrationScale::Degree,
        ConcentrationScale::Ppm,
        ConcentrationScale::Ph,
    ];

    /// 화면/CSV 에 쓰이는 표기.
    pub fn label(&self) -> &'static str {
        match self {
            ConcentrationScale::Eq => "meq/L",
            ConcentrationScale::Degree => "dKH",
            ConcentrationScale::Ppm => "PPM",
            ConcentrationScale::Ph => "pH",
        }
    }

    /// 스케일 문자열을 해석한다. 알 수 없는 값은 `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "meq/l" | "meq" | "eq" => Some(ConcentrationScale::Eq),
            "dkh" | "dgh" | "dh" | "degree" | "deg" => Some(ConcentrationScale::Degree),
            "ppm" | "mg/l" => Some(ConcentrationScale::Ppm),
            "ph" => Some(ConcentrationScale::Ph),
            _ => None,
        }
    }

    /// 스케일 문자열을 해석하되 알 수 없는 값은 meq/L 로 간주한다.
    ///
    /// 투약 계산 경로에서 예외를 만들지 않기 위한 무음 폴백 정책이다.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or(ConcentrationScale::Eq)
    }
}

impl std::fmt::Display for ConcentrationScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn to_meq_per_l(value: f64, scale: ConcentrationScale) -> f64 {
    match scale {
        ConcentrationScale::Eq => value,
        ConcentrationScale::Degree => value / MEQ_L_TO_DEGREE,
        ConcentrationScale::Ppm => value / MEQ_L_TO_PPM,
        // 호출부에서 걸러지므로 도달하지 않지만 전역 정의를 위해 항등으로 둔다.
        ConcentrationScale::Ph => value,
    }
}

fn from_meq_per_l(value_meq: f64, scale: ConcentrationScale) -> f64 {
    match scale {
        ConcentrationScale::Eq => value_meq,
        ConcentrationScale::Degree => value_meq * MEQ_L_TO_DEGREE,
        ConcentrationScale::Ppm => value_meq * MEQ_L_TO_PPM,
        ConcentrationScale::Ph => value_meq,
    }
}

/// 농도 값을 다른 스케일로 변환한다.
///
/// 같은 스케일이거나 어느 한쪽이 pH 이면 값을 그대로 돌려준다. 그 외에는 meq/L 을
/// 거쳐 변환한다.
pub fn convert_concentration(value: f64, from: ConcentrationScale, to: ConcentrationScale) -> f64 {
    if from == to {
        return value;
    }
    if from == ConcentrationScale::Ph || to == ConcentrationScale::Ph {
        return value;
    }
    let meq = to_meq_per_l(value, from);
    from_meq_per_l(meq, to)
}
