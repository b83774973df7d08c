/// 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 농도(meq/L, dKH, ppm, pH 통과)
    Concentration,
    /// 수조 물량(L, US gal, UK gal)
    WaterVolume,
    /// 수조 치수(cm, in, ft)
    Dimension,
    /// 취미가용 경도 표기(dH ↔ ppm, 17.86 배율)
    Hardness,
}

impl QuantityKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "concentration" | "conc" | "c" => Some(QuantityKind::Concentration),
            "volume" | "vol" | "v" => Some(QuantityKind::WaterVolume),
            "dimension" | "length" | "dim" | "d" => Some(QuantityKind::Dimension),
            "hardness" | "h" => Some(QuantityKind::Hardness),
            _ => None,
        }
    }
}
