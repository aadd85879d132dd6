//! False-color palettes for depth maps.

use crate::error::DepthError;
use opencv::imgproc;
use std::fmt;
use std::str::FromStr;

/// OpenCV colormaps selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    Autumn,
    Bone,
    Jet,
    Winter,
    Rainbow,
    Ocean,
    Summer,
    Spring,
    Cool,
    Hsv,
    Pink,
    #[default]
    Hot,
    Parula,
    Magma,
    Inferno,
    Plasma,
    Viridis,
    Cividis,
    Twilight,
    Turbo,
}

impl Colormap {
    pub const ALL: [Colormap; 20] = [
        Colormap::Autumn,
        Colormap::Bone,
        Colormap::Jet,
        Colormap::Winter,
        Colormap::Rainbow,
        Colormap::Ocean,
        Colormap::Summer,
        Colormap::Spring,
        Colormap::Cool,
        Colormap::Hsv,
        Colormap::Pink,
        Colormap::Hot,
        Colormap::Parula,
        Colormap::Magma,
        Colormap::Inferno,
        Colormap::Plasma,
        Colormap::Viridis,
        Colormap::Cividis,
        Colormap::Twilight,
        Colormap::Turbo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Colormap::Autumn => "autumn",
            Colormap::Bone => "bone",
            Colormap::Jet => "jet",
            Colormap::Winter => "winter",
            Colormap::Rainbow => "rainbow",
            Colormap::Ocean => "ocean",
            Colormap::Summer => "summer",
            Colormap::Spring => "spring",
            Colormap::Cool => "cool",
            Colormap::Hsv => "hsv",
            Colormap::Pink => "pink",
            Colormap::Hot => "hot",
            Colormap::Parula => "parula",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
            Colormap::Cividis => "cividis",
            Colormap::Twilight => "twilight",
            Colormap::Turbo => "turbo",
        }
    }

    /// OpenCV `COLORMAP_*` code for `apply_color_map`.
    pub fn code(&self) -> i32 {
        match self {
            Colormap::Autumn => imgproc::COLORMAP_AUTUMN,
            Colormap::Bone => imgproc::COLORMAP_BONE,
            Colormap::Jet => imgproc::COLORMAP_JET,
            Colormap::Winter => imgproc::COLORMAP_WINTER,
            Colormap::Rainbow => imgproc::COLORMAP_RAINBOW,
            Colormap::Ocean => imgproc::COLORMAP_OCEAN,
            Colormap::Summer => imgproc::COLORMAP_SUMMER,
            Colormap::Spring => imgproc::COLORMAP_SPRING,
            Colormap::Cool => imgproc::COLORMAP_COOL,
            Colormap::Hsv => imgproc::COLORMAP_HSV,
            Colormap::Pink => imgproc::COLORMAP_PINK,
            Colormap::Hot => imgproc::COLORMAP_HOT,
            Colormap::Parula => imgproc::COLORMAP_PARULA,
            Colormap::Magma => imgproc::COLORMAP_MAGMA,
            Colormap::Inferno => imgproc::COLORMAP_INFERNO,
            Colormap::Plasma => imgproc::COLORMAP_PLASMA,
            Colormap::Viridis => imgproc::COLORMAP_VIRIDIS,
            Colormap::Cividis => imgproc::COLORMAP_CIVIDIS,
            Colormap::Twilight => imgproc::COLORMAP_TWILIGHT,
            Colormap::Turbo => imgproc::COLORMAP_TURBO,
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Colormap {
    type Err = DepthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|map| map.label() == wanted)
            .ok_or_else(|| DepthError::UnknownColormap(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hot() {
        assert_eq!(Colormap::default(), Colormap::Hot);
        assert_eq!(Colormap::Hot.code(), imgproc::COLORMAP_HOT);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Magma".parse::<Colormap>().unwrap(), Colormap::Magma);
        assert_eq!("TURBO".parse::<Colormap>().unwrap(), Colormap::Turbo);
    }

    #[test]
    fn test_unknown_colormap() {
        assert!(matches!(
            "sepia".parse::<Colormap>(),
            Err(DepthError::UnknownColormap(label)) if label == "sepia"
        ));
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<i32> = Colormap::ALL.iter().map(Colormap::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Colormap::ALL.len());
    }
}
