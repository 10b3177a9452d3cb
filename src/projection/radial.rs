use glam::DVec2;

use super::Masked;

/// Squeeze the radius around `centre`, keeping the azimuth.
///
/// `r' = r * (1 - (rs/r)^pow0)^pow1`. Points at or inside `rs`, or mapped to a
/// negative or undefined radius, are masked.
pub fn radial_transform(point: DVec2, centre: DVec2, rs: f64, pow0: f64, pow1: f64) -> Masked {
    let relative = point - centre;
    let r = relative.length();

    if r <= rs {
        return Masked::Invalid;
    }

    let rnew = r * (1.0 - (rs / r).powf(pow0)).powf(pow1);
    if !(rnew >= 0.0) {
        return Masked::Invalid;
    }

    Masked::Valid(centre + relative * (rnew / r))
}
