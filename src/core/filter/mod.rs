pub mod kaiser;
pub mod resample;

use num_enum::TryFromPrimitive;

/// Resampling filter used to synthesize missing mip levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
#[repr(u32)]
pub enum MipFilter {
    Nearest = 0,
    Bilinear = 1,
    Kaiser = 2,
}

impl Default for MipFilter {
    fn default() -> Self {
        MipFilter::Bilinear
    }
}

impl MipFilter {
    /// Unknown identifiers fall back to bilinear.
    pub fn from_id(id: u32) -> Self {
        Self::try_from(id).unwrap_or(MipFilter::Bilinear)
    }

    /// Accepts the lowercase names, the labels and numeric ids; anything else
    /// falls back to bilinear.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if let Ok(id) = name.parse::<u32>() {
            return Self::from_id(id);
        }
        match name.to_ascii_lowercase().as_str() {
            "nearest" | "nearest-neighbor" => MipFilter::Nearest,
            "kaiser" => MipFilter::Kaiser,
            _ => MipFilter::Bilinear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MipFilter::Nearest => "nearest-neighbor",
            MipFilter::Bilinear => "bilinear",
            MipFilter::Kaiser => "kaiser",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MipFilter;

    #[test]
    fn ids_map_to_filters() {
        assert_eq!(MipFilter::from_id(0), MipFilter::Nearest);
        assert_eq!(MipFilter::from_id(1), MipFilter::Bilinear);
        assert_eq!(MipFilter::from_id(2), MipFilter::Kaiser);
        assert_eq!(MipFilter::from_id(7), MipFilter::Bilinear);
    }

    #[test]
    fn names_map_to_filters() {
        assert_eq!(MipFilter::from_name("nearest"), MipFilter::Nearest);
        assert_eq!(MipFilter::from_name("Nearest-Neighbor"), MipFilter::Nearest);
        assert_eq!(MipFilter::from_name("kaiser"), MipFilter::Kaiser);
        assert_eq!(MipFilter::from_name("2"), MipFilter::Kaiser);
        assert_eq!(MipFilter::from_name("lanczos"), MipFilter::Bilinear);
        assert_eq!(MipFilter::from_name("9"), MipFilter::Bilinear);
    }
}
