//! Heliocentric planet positions from Keplerian mean elements.
//!
//! Elements and rates are Table 1 of E. M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL/SSD), fitted to DE405
//! over 1800–2050 and referred to the J2000 ecliptic and equinox.

use std::f64::consts::TAU;

/// Mean orbital elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU) and rate.
    pub a: [f64; 2],
    /// Eccentricity and rate.
    pub e: [f64; 2],
    /// Inclination (deg) and rate.
    pub i: [f64; 2],
    /// Mean longitude (deg) and rate.
    pub l: [f64; 2],
    /// Longitude of perihelion (deg) and rate.
    pub peri: [f64; 2],
    /// Longitude of the ascending node (deg) and rate.
    pub node: [f64; 2],
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

pub const VENUS: OrbitalElements = OrbitalElements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

/// Earth–Moon barycenter.
pub const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

pub const MARS: OrbitalElements = OrbitalElements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

pub const SATURN: OrbitalElements = OrbitalElements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

/// Solve Kepler's equation E − e·sin E = M by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ea = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-13 {
            break;
        }
    }
    ea
}

impl OrbitalElements {
    /// Heliocentric J2000-ecliptic position in AU at `t` Julian centuries (TT) from J2000.
    pub fn heliocentric_position(&self, t: f64) -> [f64; 3] {
        let at = |el: [f64; 2]| el[0] + el[1] * t;
        let a = at(self.a);
        let e = at(self.e);
        let i = at(self.i).to_radians();
        let l = at(self.l);
        let peri = at(self.peri);
        let node = at(self.node);

        let omega = (peri - node).to_radians();
        let node = node.to_radians();
        let m = (l - peri).to_radians();
        let ea = solve_kepler(m, e);

        let xp = a * (ea.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ea.sin();

        let (so, co) = omega.sin_cos();
        let (sn, cn) = node.sin_cos();
        let (si, ci) = i.sin_cos();
        [
            (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
            (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
            (so * si) * xp + (co * si) * yp,
        ]
    }
}
