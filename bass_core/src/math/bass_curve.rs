//! Closed-form Bass diffusion curves.
//!
//! With `e = exp(-(p + q) t)`:
//!
//! ```text
//! F(t) = (1 - e) / (1 + (q / p) e)                       cumulative share
//! f(t) = ((p + q)^2 / p) e / (1 + (q / p) e)^2           adoption density
//! ```
//!
//! Both are evaluated multiplied through by `p` (`F = p (1 - e) / (p + q e)`,
//! `f = (p + q)^2 p e / (p + q e)^2`) so that a subnormal `p` cannot overflow
//! `q / p`. At `p == 0` the pure-imitation form
//! `F(t) = (1 - exp(-q t)) / (1 + q t)` and its derivative are used instead.

/// Fraction of the market that has adopted by time `t`
pub fn cumulative_fraction(p: f64, q: f64, t: f64) -> f64 {
    if p == 0.0 {
        return imitation_cumulative_fraction(q, t);
    }
    let e = (-(p + q) * t).exp();
    p * (1.0 - e) / (p + q * e)
}

/// Adoption density `f(t) = dF/dt`
pub fn adoption_density(p: f64, q: f64, t: f64) -> f64 {
    if p == 0.0 {
        return imitation_adoption_density(q, t);
    }
    let e = (-(p + q) * t).exp();
    let denom = p + q * e;
    (p + q).powi(2) * p * e / (denom * denom)
}

/// Instantaneous adoption rate at time `t` for coefficients `p` and `q`,
/// independent of any fitted model. Multiply by `m` to get adopters per period.
pub fn calculate_bass_model(p: f64, q: f64, t: f64) -> f64 {
    adoption_density(p, q, t)
}

/// Time at which the adoption rate peaks, `ln(q / p) / (p + q)`.
///
/// `None` unless `0 < p < q`; otherwise the rate is highest at launch.
pub fn peak_time(p: f64, q: f64) -> Option<f64> {
    if p > 0.0 && q > p {
        Some((q / p).ln() / (p + q))
    } else {
        None
    }
}

/// Adoption density at the peak, `(p + q)^2 / (4 q)`
pub fn peak_density(p: f64, q: f64) -> Option<f64> {
    peak_time(p, q).map(|_| (p + q).powi(2) / (4.0 * q))
}

fn imitation_cumulative_fraction(q: f64, t: f64) -> f64 {
    (1.0 - (-q * t).exp()) / (1.0 + q * t)
}

fn imitation_adoption_density(q: f64, t: f64) -> f64 {
    let e = (-q * t).exp();
    let denom = 1.0 + q * t;
    q * (e * (2.0 + q * t) - 1.0) / (denom * denom)
}
