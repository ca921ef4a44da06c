//! Cartesian ↔ spherical conversion for ecliptic vectors.

/// Spherical coordinates: longitude, latitude, radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90], elevation above the x-y plane.
    pub lat_deg: f64,
    /// Radius in the input's length unit.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).to_degrees().rem_euclid(360.0),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (lon, lat) = (s.lon_deg.to_radians(), s.lat_deg.to_radians());
    [
        s.distance * lat.cos() * lon.cos(),
        s.distance * lat.cos() * lon.sin(),
        s.distance * lat.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_points() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < 1e-12);
        assert!(s.lat_deg.abs() < 1e-12);
        assert!((s.distance - 2.0).abs() < 1e-12);

        let s = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert!((s.lon_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance, 0.0);
    }

    #[test]
    fn roundtrip() {
        let v = [0.3, -1.2, 0.4];
        let back = spherical_to_cartesian(&cartesian_to_spherical(&v));
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-12);
        }
    }
}
