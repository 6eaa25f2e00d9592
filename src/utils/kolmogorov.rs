//! Distributions of the one-sample Kolmogorov-Smirnov statistic.
//!
//! Provides the survival function of the two-sided statistic
//! `Dₙ = sup |Fₙ(x) - F(x)|` both exactly for finite `n` and through the
//! Kolmogorov limit distribution of `√n·Dₙ`, together with the exact one-sided
//! Smirnov tail `P(Dₙ⁺ ≥ d)`.
//!
//! The exact survival function picks, per region of `(n, d)`, the evaluation
//! that keeps full relative precision in the tail:
//! - Ruben-Gambino closed forms near the ends of the support
//! - twice the one-sided Smirnov tail where the two tails cannot overlap
//!   (`d ≥ 0.5`) or overlap negligibly (large `n·d²`)
//! - the Durbin matrix (Marsaglia, Tsang & Wang 2003) for small `n·d²`
//! - the Pelz-Good asymptotic series for large `n` with moderate `n·d²`

use statrs::function::factorial::{ln_binomial, ln_factorial};
use std::f64::consts::PI;

/// Natural log of the smallest positive normal f64.
const MIN_LOG: f64 = -708.396_418_532_264_1;

/// Scaling used by the Durbin matrix power to keep entries representable.
const DURBIN_SCALE: f64 = 1e140;
const DURBIN_SCALE_EXP: i32 = 140;

/// Largest `n` for which the small-sample routing is used.
const SMALL_SAMPLE_MAX: usize = 140;

fn clip_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// One-sided Smirnov tail probability `P(Dₙ⁺ ≥ d)`.
///
/// Evaluated exactly with the Birnbaum-Tingey sum
///
/// `d · Σⱼ C(n, j) (1 - d - j/n)^(n-j) (d + j/n)^(j-1)`, `j = 0..⌊n(1-d)⌋`,
///
/// accumulated in log space so that tails far below `f64::MIN_POSITIVE`
/// relative to individual terms do not cancel.
///
/// # Arguments
/// * `n` - Sample size
/// * `d` - Statistic value
///
/// # Returns
/// Probability in [0, 1]; `NaN` for `n == 0` or a `NaN` statistic.
pub fn smirnov_sf(n: usize, d: f64) -> f64 {
    if n == 0 || d.is_nan() {
        return f64::NAN;
    }
    if d <= 0.0 {
        return 1.0;
    }
    if d >= 1.0 {
        return 0.0;
    }

    let nf = n as f64;
    let j_max = (nf * (1.0 - d)).floor() as usize;
    let log_terms: Vec<f64> = (0..=j_max)
        .filter_map(|j| {
            let jf = j as f64;
            let lower = 1.0 - d - jf / nf;
            if lower <= 0.0 {
                return None;
            }
            let upper = d + jf / nf;
            Some(ln_binomial(n as u64, j as u64) + (nf - jf) * lower.ln() + (jf - 1.0) * upper.ln())
        })
        .collect();

    let Some(max_term) = log_terms.iter().copied().reduce(f64::max) else {
        return 0.0;
    };
    let scaled_sum: f64 = log_terms.iter().map(|t| (t - max_term).exp()).sum();

    clip_probability((d.ln() + max_term + scaled_sum.ln()).exp())
}

/// Exact survival function `P(Dₙ ≥ d)` of the two-sided statistic.
///
/// # Arguments
/// * `n` - Sample size
/// * `d` - Statistic value
///
/// # Returns
/// Probability in [0, 1]; `NaN` for `n == 0` or a `NaN` statistic.
///
/// # Example
/// ```
/// use period_spacing::utils::kolmogorov_sf;
///
/// // Close to the classical 5% critical value for n = 100
/// let p = kolmogorov_sf(100, 0.136);
/// assert!(p > 0.04 && p < 0.05);
/// ```
pub fn kolmogorov_sf(n: usize, d: f64) -> f64 {
    if n == 0 || d.is_nan() {
        return f64::NAN;
    }
    if d >= 1.0 {
        return 0.0;
    }
    if d <= 0.0 {
        return 1.0;
    }

    let nf = n as f64;
    let t = nf * d;

    if t <= 1.0 {
        if t <= 0.5 {
            return 1.0;
        }
        // P(Dₙ < d) = n!/nⁿ · (2t - 1)ⁿ for 1/2n < d ≤ 1/n
        let log_cdf = ln_factorial(n as u64) - nf * nf.ln() + nf * (2.0 * t - 1.0).ln();
        return clip_probability(1.0 - log_cdf.exp());
    }
    if t >= nf - 1.0 {
        return clip_probability(2.0 * (1.0 - d).powf(nf));
    }
    if d >= 0.5 {
        return clip_probability(2.0 * smirnov_sf(n, d));
    }

    let n_d_squared = t * d;
    if n <= SMALL_SAMPLE_MAX {
        if n_d_squared <= 4.0 {
            return clip_probability(1.0 - durbin_matrix_cdf(n, d));
        }
        return clip_probability(2.0 * smirnov_sf(n, d));
    }

    if n_d_squared >= 370.0 {
        return 0.0;
    }
    if n_d_squared >= 2.2 {
        return clip_probability(2.0 * smirnov_sf(n, d));
    }
    if nf * d.powf(1.5) <= 1.4 {
        return clip_probability(1.0 - durbin_matrix_cdf(n, d));
    }
    clip_probability(1.0 - pelz_good_cdf(n, d))
}

/// Survival function of the Kolmogorov limit distribution, `P(K ≥ y)`.
///
/// `K` is the limit in distribution of `√n·Dₙ`. For `y < 1` the theta-function
/// form of the CDF is used, which converges in a handful of terms there; for
/// `y ≥ 1` the alternating series of the survival function is used.
pub fn kolmogorov_asymptotic_sf(y: f64) -> f64 {
    if y.is_nan() {
        return f64::NAN;
    }
    if y <= 0.0 {
        return 1.0;
    }

    if y < 1.0 {
        let coeff = -PI * PI / (8.0 * y * y);
        let mut sum = 0.0;
        for k in 1..=20 {
            let odd = (2 * k - 1) as f64;
            let term = (coeff * odd * odd).exp();
            sum += term;
            if term < 1e-17 * sum {
                break;
            }
        }
        let cdf = (2.0 * PI).sqrt() / y * sum;
        return clip_probability(1.0 - cdf);
    }

    let mut sum = 0.0;
    let mut sign = 1.0;
    for k in 1..=100 {
        let kf = k as f64;
        let term = (-2.0 * kf * kf * y * y).exp();
        sum += sign * term;
        if term < 1e-18 {
            break;
        }
        sign = -sign;
    }
    clip_probability(2.0 * sum)
}

/// Durbin matrix evaluation of `P(Dₙ < d)` (Marsaglia, Tsang & Wang 2003).
///
/// Builds the `(2k-1)×(2k-1)` matrix `H` with `k = ⌊n·d⌋ + 1`, raises it to
/// the n-th power and reads `n!/nⁿ · (Hⁿ)ₖₖ`. Powers are tracked as a
/// mantissa matrix plus a decimal exponent.
fn durbin_matrix_cdf(n: usize, d: f64) -> f64 {
    let nd = n as f64 * d;
    let k = nd.floor() as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nd;

    let mut hm = vec![0.0; m * m];
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                hm[i * m + j] = 1.0;
            }
        }
    }
    for i in 0..m {
        hm[i * m] -= h.powi(i as i32 + 1);
        hm[(m - 1) * m + i] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        hm[(m - 1) * m] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..m {
            if i + 1 > j {
                for g in 1..=(i + 1 - j) {
                    hm[i * m + j] /= g as f64;
                }
            }
        }
    }

    let (power, mut exponent) = matrix_power(&hm, m, n);
    let mut s = power[(k - 1) * m + (k - 1)];
    let nf = n as f64;
    for i in 1..=n {
        s = s * i as f64 / nf;
        if s < 1.0 / DURBIN_SCALE {
            s *= DURBIN_SCALE;
            exponent -= DURBIN_SCALE_EXP;
        }
    }
    clip_probability(s * 10f64.powi(exponent))
}

fn matrix_multiply(a: &[f64], b: &[f64], m: usize) -> Vec<f64> {
    let mut c = vec![0.0; m * m];
    for i in 0..m {
        for t in 0..m {
            let a_it = a[i * m + t];
            if a_it == 0.0 {
                continue;
            }
            for j in 0..m {
                c[i * m + j] += a_it * b[t * m + j];
            }
        }
    }
    c
}

/// Square-and-multiply power returning `(mantissa, decimal exponent)`.
fn matrix_power(a: &[f64], m: usize, n: usize) -> (Vec<f64>, i32) {
    if n == 1 {
        return (a.to_vec(), 0);
    }
    let (half, half_exp) = matrix_power(a, m, n / 2);
    let squared = matrix_multiply(&half, &half, m);
    let (mut v, mut exponent) = if n % 2 == 0 {
        (squared, 2 * half_exp)
    } else {
        (matrix_multiply(a, &squared, m), 2 * half_exp)
    };
    let centre = (m / 2) * m + m / 2;
    if v[centre] > DURBIN_SCALE {
        for x in v.iter_mut() {
            *x /= DURBIN_SCALE;
        }
        exponent += DURBIN_SCALE_EXP;
    }
    (v, exponent)
}

/// Pelz-Good asymptotic series for `P(Dₙ ≤ d)`.
///
/// Li-Chien/Korolyuk expansion `K₀(z) + K₁(z)/√n + K₂(z)/n + K₃(z)/n^1.5` with
/// `z = √n·d`, each term rewritten through Jacobi theta functions so that it
/// converges quickly for small `z`.
fn pelz_good_cdf(n: usize, d: f64) -> f64 {
    if d <= 0.0 {
        return 0.0;
    }
    if d >= 1.0 {
        return 1.0;
    }

    let nf = n as f64;
    let z = nf.sqrt() * d;
    let z2 = z * z;
    let z3 = z2 * z;
    let z4 = z2 * z2;
    let z6 = z4 * z2;
    let pi2 = PI * PI;
    let pi4 = pi2 * pi2;
    let pi6 = pi4 * pi2;
    let sqrt_2pi = (2.0 * PI).sqrt();

    let q_log = -pi2 / 8.0 / z2;
    if q_log < MIN_LOG {
        return 0.0;
    }
    let q = q_log.exp();

    let k1a = -z2;
    let k1b = pi2 / 4.0;
    let k2a = 6.0 * z6 + 2.0 * z4;
    let k2b = (2.0 * z4 - 5.0 * z2) * pi2 / 4.0;
    let k2c = pi4 * (1.0 - 2.0 * z2) / 16.0;
    let k3d = pi6 * (5.0 - 30.0 * z2) / 64.0;
    let k3c = pi4 * (-60.0 * z2 + 212.0 * z4) / 16.0;
    let k3b = pi2 * (135.0 * z4 - 96.0 * z6) / 4.0;
    let k3a = -30.0 * z6 - 90.0 * z4 * z4;

    // Horner evaluation of Σ cᵢ q^((2i-1)²) over odd integers
    let max_k = (16.0 * z / PI).ceil().max(1.0) as usize;
    let mut terms = [0.0_f64; 4];
    for k in (1..=max_k).rev() {
        let m = (2 * k - 1) as f64;
        let m2 = m * m;
        let m4 = m2 * m2;
        let m6 = m4 * m2;
        let q_power = q.powi(8 * k as i32);
        let coeffs = [
            1.0,
            k1a + k1b * m2,
            k2a + k2b * m2 + k2c * m4,
            k3a + k3b * m2 + k3c * m4 + k3d * m6,
        ];
        for (term, coeff) in terms.iter_mut().zip(coeffs) {
            *term = *term * q_power + coeff;
        }
    }
    let denominators = [z, 6.0 * z4, 72.0 * z6 * z, 6480.0 * z6 * z4];
    for (term, denom) in terms.iter_mut().zip(denominators) {
        *term = *term * q * sqrt_2pi / denom;
    }

    // Remaining sums run over all integers
    let q_even = (-pi2 / 2.0 / z2).exp();
    let sqrt3_z = 3f64.sqrt() * z;
    let (mut k2_extra, mut k3_extra) = (0.0, 0.0);
    for k in (1..=max_k).rev() {
        let kf = k as f64;
        let k2 = kf * kf;
        let q_power = q_even.powf(k2);
        let k_pi = PI * kf;
        k2_extra += k2 * q_power;
        k3_extra += (sqrt3_z + k_pi) * (sqrt3_z - k_pi) * k2 * q_power;
    }
    terms[2] += k2_extra * pi2 * sqrt_2pi / (-36.0 * z3);
    terms[3] += k3_extra * pi2 * sqrt_2pi / (216.0 * z6);

    terms
        .iter()
        .enumerate()
        .map(|(i, term)| term / nf.powf(i as f64 / 2.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn smirnov_sf_boundaries() {
        assert_eq!(smirnov_sf(10, 0.0), 1.0);
        assert_eq!(smirnov_sf(10, 1.0), 0.0);
        assert!(smirnov_sf(0, 0.5).is_nan());
        assert!(smirnov_sf(10, f64::NAN).is_nan());
    }

    #[test]
    fn smirnov_sf_single_observation() {
        // With one point, D⁺ = 1 - U, so P(D⁺ ≥ d) = 1 - d
        for d in [0.1, 0.25, 0.5, 0.9] {
            assert_relative_eq!(smirnov_sf(1, d), 1.0 - d, epsilon = 1e-12);
        }
    }

    #[test]
    fn kolmogorov_sf_single_observation() {
        // With one point, D = max(U, 1 - U), so P(D ≥ d) = 2(1 - d) on [0.5, 1]
        for d in [0.5, 0.6, 0.75, 0.99] {
            assert_relative_eq!(kolmogorov_sf(1, d), 2.0 * (1.0 - d), epsilon = 1e-12);
        }
        assert_eq!(kolmogorov_sf(1, 0.4), 1.0);
    }

    #[test]
    fn kolmogorov_sf_boundaries() {
        assert_eq!(kolmogorov_sf(50, 0.0), 1.0);
        assert_eq!(kolmogorov_sf(50, 1.0), 0.0);
        // Below 1/2n the statistic cannot be that small
        assert_eq!(kolmogorov_sf(50, 0.009), 1.0);
        assert!(kolmogorov_sf(0, 0.2).is_nan());
    }

    #[test]
    fn kolmogorov_sf_classical_critical_values() {
        let p = kolmogorov_sf(100, 0.136);
        assert!(p > 0.04 && p < 0.05, "p = {}", p);

        let p = kolmogorov_sf(10, 0.4);
        assert!(p > 0.055 && p < 0.062, "p = {}", p);
    }

    #[test]
    fn kolmogorov_sf_is_monotone_in_d() {
        for n in [2, 7, 50, 140, 141, 300, 2000] {
            let mut prev = 1.0;
            for i in 1..1000 {
                let d = i as f64 / 1000.0;
                let p = kolmogorov_sf(n, d);
                assert!((0.0..=1.0).contains(&p));
                assert!(p <= prev + 1e-9, "n = {}, d = {}: {} > {}", n, d, p, prev);
                prev = p;
            }
        }
    }

    #[test]
    fn kolmogorov_sf_extreme_tail_stays_positive() {
        // All 100 points at one phase
        let p = kolmogorov_sf(100, 0.5);
        assert!(p > 0.0 && p < 1e-20);
    }

    #[test]
    fn durbin_and_pelz_good_agree_in_overlap() {
        let durbin = durbin_matrix_cdf(200, 0.05);
        let pelz = pelz_good_cdf(200, 0.05);
        assert_relative_eq!(durbin, pelz, epsilon = 1e-5);

        let durbin = durbin_matrix_cdf(300, 0.05);
        let pelz = pelz_good_cdf(300, 0.05);
        assert_relative_eq!(durbin, pelz, epsilon = 1e-5);
    }

    #[test]
    fn exact_approaches_limit_for_large_n() {
        let n = 5000;
        let d = 1.0 / (n as f64).sqrt();
        assert_relative_eq!(
            kolmogorov_sf(n, d),
            kolmogorov_asymptotic_sf(1.0),
            epsilon = 0.01
        );
    }

    #[test]
    fn asymptotic_sf_known_quantiles() {
        assert_relative_eq!(kolmogorov_asymptotic_sf(1.3581), 0.05, epsilon = 1e-4);
        assert_relative_eq!(kolmogorov_asymptotic_sf(1.2238), 0.10, epsilon = 1e-4);
        assert_eq!(kolmogorov_asymptotic_sf(0.0), 1.0);
        assert!(kolmogorov_asymptotic_sf(f64::NAN).is_nan());
    }

    #[test]
    fn asymptotic_sf_branches_meet_at_one() {
        let below = kolmogorov_asymptotic_sf(1.0 - 1e-9);
        let above = kolmogorov_asymptotic_sf(1.0 + 1e-9);
        assert_relative_eq!(below, above, epsilon = 1e-8);
        assert_relative_eq!(above, 0.27, epsilon = 1e-4);
    }
}
