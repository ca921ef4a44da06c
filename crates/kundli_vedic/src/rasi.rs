//! Rasi (zodiac sign) placement and house rotation.
//!
//! The sidereal ecliptic is divided into 12 signs of 30° each, Mesha first.
//! Rasis are numbered 1–12. Houses are the same twelve cells counted forward
//! from the ascendant's rasi, so house 1 is always the ascendant's rasi.

use crate::angle::{Dms, deg_to_dms};
use crate::nakshatra::snap_to_pada_boundary;
use crate::planet::Planet;

/// The 12 rasis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rasi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rasis in order (index 0 = Mesha).
pub const ALL_RASIS: [Rasi; 12] = [
    Rasi::Mesha,
    Rasi::Vrishabha,
    Rasi::Mithuna,
    Rasi::Karka,
    Rasi::Simha,
    Rasi::Kanya,
    Rasi::Tula,
    Rasi::Vrischika,
    Rasi::Dhanu,
    Rasi::Makara,
    Rasi::Kumbha,
    Rasi::Meena,
];

/// Width of one rasi in degrees.
pub const RASI_SPAN: f64 = 30.0;

impl Rasi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based rasi number (Mesha = 1, Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rasi from its 1-based number.
    pub const fn from_number(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 {
            Some(ALL_RASIS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Rasi containing a sidereal longitude: floor(lon / 30) + 1, wrapping 360 to Mesha.
    ///
    /// The longitude first goes through [`snap_to_pada_boundary`], so rasi and
    /// pada never disagree near an edge.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let lon = snap_to_pada_boundary(sidereal_lon_deg);
        let idx = ((lon / RASI_SPAN).floor() as usize).min(11);
        ALL_RASIS[idx]
    }

    /// The rasi `n` steps forward (n = 0 is `self`), wrapping after Meena.
    pub const fn nth_from(self, n: u8) -> Self {
        ALL_RASIS[((self as u8 as usize) + n as usize) % 12]
    }

    /// Ruling planet (BPHS lordship).
    pub const fn lord(self) -> Planet {
        match self {
            Self::Mesha | Self::Vrischika => Planet::Mars,
            Self::Vrishabha | Self::Tula => Planet::Venus,
            Self::Mithuna | Self::Kanya => Planet::Mercury,
            Self::Karka => Planet::Moon,
            Self::Simha => Planet::Sun,
            Self::Dhanu | Self::Meena => Planet::Jupiter,
            Self::Makara | Self::Kumbha => Planet::Saturn,
        }
    }

    pub const fn all() -> &'static [Rasi; 12] {
        &ALL_RASIS
    }
}

/// House (1–12) occupied by `rasi` when the ascendant sits in `ascendant`.
///
/// house = ((rasi − ascendant) mod 12) + 1
pub const fn house_of(rasi: Rasi, ascendant: Rasi) -> u8 {
    (rasi as u8 + 12 - ascendant as u8) % 12 + 1
}

/// Full rasi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasiInfo {
    pub rasi: Rasi,
    /// Decimal degrees advanced within the rasi, [0, 30).
    pub degrees_in_rasi: f64,
    /// `degrees_in_rasi` as DMS.
    pub dms: Dms,
}

/// Rasi and in-sign offset for a sidereal longitude.
pub fn rasi_from_longitude(sidereal_lon_deg: f64) -> RasiInfo {
    let lon = snap_to_pada_boundary(sidereal_lon_deg);
    let rasi = Rasi::from_longitude(lon);
    let degrees_in_rasi = (lon - f64::from(rasi.index()) * RASI_SPAN).max(0.0);
    RasiInfo {
        rasi,
        degrees_in_rasi,
        dms: deg_to_dms(degrees_in_rasi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_one_based() {
        for (i, r) in ALL_RASIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
            assert_eq!(Rasi::from_number(r.number()), Some(*r));
        }
        assert_eq!(Rasi::from_number(0), None);
        assert_eq!(Rasi::from_number(13), None);
    }

    #[test]
    fn longitude_boundaries() {
        assert_eq!(Rasi::from_longitude(0.0), Rasi::Mesha);
        assert_eq!(Rasi::from_longitude(29.999), Rasi::Mesha);
        assert_eq!(Rasi::from_longitude(30.0), Rasi::Vrishabha);
        assert_eq!(Rasi::from_longitude(359.999), Rasi::Meena);
        assert_eq!(Rasi::from_longitude(360.0), Rasi::Mesha);
        assert_eq!(Rasi::from_longitude(-15.0), Rasi::Meena);
    }

    #[test]
    fn rasi_in_range_for_all_longitudes() {
        for k in 0..3600 {
            let n = Rasi::from_longitude(k as f64 * 0.1).number();
            assert!((1..=12).contains(&n));
        }
    }

    #[test]
    fn house_rotation() {
        assert_eq!(house_of(Rasi::Karka, Rasi::Karka), 1);
        assert_eq!(house_of(Rasi::Simha, Rasi::Karka), 2);
        assert_eq!(house_of(Rasi::Mithuna, Rasi::Karka), 12);
        assert_eq!(house_of(Rasi::Mesha, Rasi::Meena), 2);
    }

    #[test]
    fn nth_from_wraps() {
        assert_eq!(Rasi::Meena.nth_from(1), Rasi::Mesha);
        assert_eq!(Rasi::Karka.nth_from(11), Rasi::Mithuna);
        assert_eq!(Rasi::Tula.nth_from(0), Rasi::Tula);
    }

    #[test]
    fn lordship() {
        assert_eq!(Rasi::Mesha.lord(), Planet::Mars);
        assert_eq!(Rasi::Karka.lord(), Planet::Moon);
        assert_eq!(Rasi::Simha.lord(), Planet::Sun);
        assert_eq!(Rasi::Meena.lord(), Planet::Jupiter);
        assert_eq!(Rasi::Kumbha.lord(), Planet::Saturn);
    }

    #[test]
    fn info_offsets() {
        let info = rasi_from_longitude(95.5);
        assert_eq!(info.rasi, Rasi::Karka);
        assert!((info.degrees_in_rasi - 5.5).abs() < 1e-12);
        assert_eq!(info.dms.degrees, 5);
        assert_eq!(info.dms.minutes, 30);
    }
}
