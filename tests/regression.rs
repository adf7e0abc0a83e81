use apobec_scatter::data::{self, Sample};
use apobec_scatter::math::regression::{compute_regression, fitted_line, linregress, log_series};

#[test]
fn embedded_dataset_fit_is_pinned() {
    let r = compute_regression(&data::samples()).unwrap();
    assert_eq!(r.n, 15);
    assert!((r.slope - 1.2035817452725426).abs() < 1e-9);
    assert!((r.intercept - 7.514898849999808).abs() < 1e-9);
    assert!((r.r_squared - 0.46404997012480476).abs() < 1e-9);
    assert!((r.std_err - 0.3587432111411762).abs() < 1e-9);
    assert!((r.intercept_stderr - 2.02146559121317).abs() < 1e-8);
    assert!((r.p_value - 0.0051708050458329265).abs() < 1e-6);
}

#[test]
fn embedded_dataset_relationship_is_positive() {
    let r = compute_regression(&data::samples()).unwrap();
    assert!(r.slope > 0.0);
    assert!(r.r_value > 0.0);
    assert!(r.r_squared > 0.4 && r.r_squared < 0.5);
    assert!(r.p_value < 0.01);
}

#[test]
fn regression_is_deterministic() {
    let samples = data::samples();
    let a = compute_regression(&samples).unwrap();
    let b = compute_regression(&samples).unwrap();
    assert!((a.slope - b.slope).abs() < 1e-12);
    assert!((a.intercept - b.intercept).abs() < 1e-12);
    assert!((a.r_squared - b.r_squared).abs() < 1e-12);
    assert!((a.p_value - b.p_value).abs() < 1e-12);
    assert!((a.std_err - b.std_err).abs() < 1e-12);
}

#[test]
fn exact_line_has_zero_error() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [3.0, 5.0, 7.0, 9.0];
    let r = linregress(&x, &y).unwrap();
    assert!((r.slope - 2.0).abs() < 1e-12);
    assert!((r.intercept - 1.0).abs() < 1e-12);
    assert!((r.r_squared - 1.0).abs() < 1e-12);
    assert_eq!(r.p_value, 0.0);
    assert!(r.std_err.abs() < 1e-12);
}

#[test]
fn textbook_example() {
    // Hand-checked: Sxx = 10, Sxy = 6, Syy = 6 -> r^2 = 0.6, t = sqrt(4.5).
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [2.0, 4.0, 5.0, 4.0, 5.0];
    let r = linregress(&x, &y).unwrap();
    assert!((r.slope - 0.6).abs() < 1e-12);
    assert!((r.intercept - 2.2).abs() < 1e-12);
    assert!((r.r_squared - 0.6).abs() < 1e-12);
    assert!((r.std_err - (0.08f64).sqrt()).abs() < 1e-12);
    assert!((r.p_value - 0.1240).abs() < 1e-3);
}

#[test]
fn flat_response_is_not_significant() {
    let r = linregress(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap();
    assert_eq!(r.slope, 0.0);
    assert_eq!(r.r_squared, 0.0);
    assert!((r.p_value - 1.0).abs() < 1e-12);
}

#[test]
fn invalid_inputs_rejected() {
    assert!(linregress(&[1.0, 2.0], &[1.0, 2.0]).is_err());
    assert!(linregress(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
    assert!(linregress(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    assert!(linregress(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, 3.0]).is_err());
}

#[test]
fn log_series_keeps_order() {
    let samples = data::samples();
    let (lx, ly) = log_series(&samples);
    assert_eq!(lx.len(), samples.len());
    for (i, s) in samples.iter().enumerate() {
        assert_eq!(lx[i], s.apobec_rate_average.log10());
        assert_eq!(ly[i], s.time_gained.log10());
    }
}

#[test]
fn fitted_line_uses_sample_x_positions() {
    let samples = data::samples();
    let r = compute_regression(&samples).unwrap();
    let line = fitted_line(&samples, &r);
    assert_eq!(line.len(), samples.len());
    for (s, (x, y)) in samples.iter().zip(&line) {
        assert_eq!(*x, s.apobec_rate_average);
        let expected = 10f64.powf(r.slope * x.log10() + r.intercept);
        assert!((y - expected).abs() <= expected * 1e-12);
    }
}

#[test]
fn power_law_is_recovered() {
    let samples: Vec<Sample> = [1e-7, 1e-6, 1e-5, 1e-4]
        .iter()
        .enumerate()
        .map(|(i, x)| Sample {
            patient_id: format!("P{}", i),
            apobec_rate_average: *x,
            time_gained: 1e3 * x.powf(0.5),
        })
        .collect();
    let r = compute_regression(&samples).unwrap();
    assert!((r.slope - 0.5).abs() < 1e-9);
    assert!((r.intercept - 3.0).abs() < 1e-9);
}
