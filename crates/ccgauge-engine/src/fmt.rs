//! Fixed numeric formatting for verdict text. These renderings are part of
//! the observable contract and are pinned verbatim by tests.

/// θ with exactly two decimal places.
pub fn fmt_theta(theta: f64) -> String {
    format!("{theta:.2}")
}

/// CC with exactly two decimal places; non-finite values render lowercase.
pub fn fmt_cc(cc: f64) -> String {
    if cc.is_finite() {
        format!("{cc:.2}")
    } else {
        non_finite_tag(cc).to_string()
    }
}

pub(crate) fn non_finite_tag(v: f64) -> &'static str {
    if v.is_nan() {
        "nan"
    } else if v > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

/// Three significant digits with trailing zeros stripped, switching to
/// scientific notation outside [1e-4, 1e3). Matches C's %.3g.
pub fn sig3(v: f64) -> String {
    if !v.is_finite() {
        return non_finite_tag(v).to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let mut exp = v.abs().log10().floor() as i32;
    // Rounding to three digits can carry into the next decade (9.999 -> 10.0).
    let scaled = (v / 10f64.powi(exp)).abs();
    if format!("{scaled:.2}").starts_with("10") {
        exp += 1;
    }

    if !(-4..3).contains(&exp) {
        let mantissa = v / 10f64.powi(exp);
        let m = trim_zeros(&format!("{mantissa:.2}"));
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{m}e{sign}{:02}", exp.abs())
    } else {
        let decimals = (2 - exp).max(0) as usize;
        trim_zeros(&format!("{v:.decimals$}"))
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_has_two_decimals() {
        assert_eq!(fmt_theta(0.3), "0.30");
        assert_eq!(fmt_theta(0.5), "0.50");
        assert_eq!(fmt_theta(1.0), "1.00");
    }

    #[test]
    fn cc_has_two_decimals_or_a_tag() {
        assert_eq!(fmt_cc(0.8), "0.80");
        assert_eq!(fmt_cc(50.0 / 30.0), "1.67");
        assert_eq!(fmt_cc(f64::NAN), "nan");
        assert_eq!(fmt_cc(f64::INFINITY), "inf");
    }

    #[test]
    fn sig3_strips_trailing_zeros() {
        assert_eq!(sig3(1.0), "1");
        assert_eq!(sig3(0.8), "0.8");
        assert_eq!(sig3(30.0), "30");
        assert_eq!(sig3(50.0), "50");
        assert_eq!(sig3(1.234), "1.23");
        assert_eq!(sig3(0.0), "0");
        assert_eq!(sig3(-2.5), "-2.5");
    }

    #[test]
    fn sig3_switches_to_scientific_outside_the_window() {
        assert_eq!(sig3(123_456.0), "1.23e+05");
        assert_eq!(sig3(0.000_012_3), "1.23e-05");
        assert_eq!(sig3(999.9), "1e+03");
        assert_eq!(sig3(0.000_099_99), "0.0001");
    }

    #[test]
    fn sig3_handles_rounding_carry() {
        assert_eq!(sig3(0.9999), "1");
        assert_eq!(sig3(9.999), "10");
    }
}
