//! Nakshatra (lunar mansion) and pada placement.
//!
//! 360° is split into 27 nakshatras of 13°20′ (800 arc-minutes), each split
//! into 4 padas of 3°20′. Nakshatras are numbered 1–27 and padas 1–4.
//!
//! Placement is half-open on the left: a longitude exactly on a boundary
//! belongs to the segment that starts there, so 0° is (1, 1) and 13°20′ is
//! (2, 1). Longitudes within [`BOUNDARY_SNAP_DEG`] of a boundary are treated
//! as lying on it, which keeps four-decimal inputs such as 13.3333° on the
//! intended side. The boundary at 360° is 0°, so 359.9999° is Ashwini pada 1.
//!
//! Every rasi boundary is a pada boundary (nine padas per rasi), and
//! [`snap_to_pada_boundary`] is the single rule both placements use.

use crate::angle::normalize_360;
use crate::rasi::RASI_SPAN;

/// Span of one nakshatra: 360/27 = 13.3333…°.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333…°.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Arc-minutes per nakshatra.
pub const ARCMIN_PER_NAKSHATRA: f64 = 800.0;

/// Half an arc-second.
pub const BOUNDARY_SNAP_DEG: f64 = 0.5 / 3600.0;

/// Padas in one rasi.
pub const PADAS_PER_RASI: u32 = 9;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 1-based number (Ashwini = 1, Revati = 27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 27 {
            Some(ALL_NAKSHATRAS[(n - 1) as usize])
        } else {
            None
        }
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1–4.
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fraction: f64,
}

/// Index (0..108) of the pada boundary within [`BOUNDARY_SNAP_DEG`] of `lon`.
fn boundary_near(lon: f64) -> Option<u32> {
    let nearest = (lon / PADA_SPAN).round();
    ((lon - nearest * PADA_SPAN).abs() < BOUNDARY_SNAP_DEG).then_some(nearest as u32 % 108)
}

/// Normalize a sidereal longitude and pull it onto a pada boundary lying
/// within [`BOUNDARY_SNAP_DEG`]. Rasi boundaries come out as exact multiples of 30°.
pub fn snap_to_pada_boundary(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    match boundary_near(lon) {
        Some(b) => {
            f64::from(b / PADAS_PER_RASI) * RASI_SPAN + f64::from(b % PADAS_PER_RASI) * PADA_SPAN
        }
        None => lon,
    }
}

/// Nakshatra and pada of a sidereal longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);

    // Work in pada units (0..108) so nakshatra and pada share one boundary rule.
    let padas = match boundary_near(lon) {
        Some(b) => f64::from(b),
        None => lon / PADA_SPAN,
    };
    let pada_index = (padas.floor() as usize).min(107);
    let nak_index = pada_index / 4;

    let fraction = ((padas / 4.0) - nak_index as f64).clamp(0.0, 1.0 - f64::EPSILON);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_index],
        pada: (pada_index % 4) as u8 + 1,
        fraction,
    }
}
