//! Log-axis tick placement and labelling.

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Minor subdivisions per decade, as fractions of the decade's upper power.
pub const MINOR_SUBS: [f64; 9] = [0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Labels a tick as a power of ten, e.g. `100.0` -> `"10²"`.
pub fn format_log_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exponent = value.abs().log10().round() as i64;
    let mut out = String::from("10");
    out.push_str(&superscript(exponent));
    out
}

fn superscript(n: i64) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for digit in n.unsigned_abs().to_string().bytes() {
        out.push(SUPERSCRIPT_DIGITS[(digit - b'0') as usize]);
    }
    out
}

pub fn major_ticks(lo: f64, hi: f64) -> Vec<f64> {
    decades(lo, hi)
        .map(|k| 10f64.powi(k))
        .filter(|v| in_range(*v, lo, hi))
        .collect()
}

pub fn minor_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    for k in decades(lo, hi) {
        let decade = 10f64.powi(k);
        for sub in MINOR_SUBS {
            let v = sub * decade;
            if in_range(v, lo, hi) {
                ticks.push(v);
            }
        }
    }
    ticks
}

/// Widens a positive range by `margin` of its span in log10 space.
pub fn padded_log_range(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let lo = min.log10();
    let hi = max.log10();
    let span = hi - lo;
    let pad = if span > 0.0 { span * margin } else { 0.5 };
    (10f64.powf(lo - pad), 10f64.powf(hi + pad))
}

fn decades(lo: f64, hi: f64) -> std::ops::RangeInclusive<i32> {
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32 + 1;
    first..=last
}

fn in_range(v: f64, lo: f64, hi: f64) -> bool {
    v >= lo * (1.0 - 1e-12) && v <= hi * (1.0 + 1e-12)
}
