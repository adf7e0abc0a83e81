//! Compiled-in patient dataset.
//!
//! The three series are positionally aligned: entry `i` of each belongs to
//! the same patient.

use std::collections::HashSet;

use anyhow::{Result, bail};

pub const PATIENTS: [&str; 15] = [
    "MGH086",
    "MGH953",
    "TH067_E7",
    "TH29_Post",
    "TH287E2",
    "TH171_E3",
    "TH016E3",
    "TH079E2",
    "TH11_post_2",
    "TH153E3",
    "TH74_2",
    "TH51_A2",
    "TH019E5",
    "MGH987",
    "MGH808",
];

pub const APOBEC_RATE_AVERAGE: [f64; 15] = [
    2.40e-05, // MGH086
    1.77e-06, // MGH953
    7.70e-06, // TH067_E7
    5.34e-06, // TH29_Post
    6.27e-06, // TH287E2
    1.08e-05, // TH171_E3
    3.03e-06, // TH016E3
    6.04e-07, // TH079E2
    1.82e-06, // TH11_post_2
    2.55e-06, // TH153E3
    1.68e-06, // TH74_2
    1.49e-06, // TH51_A2
    1.77e-06, // TH019E5
    1.45e-07, // MGH987
    1.07e-06, // MGH808
];

pub const TIME_GAINED: [f64; 15] = [
    1073.3, 21.5, 50.4, 2.06, 37.5, 30.4, 3.26, 0.1, 0.7, 1.1, 1.7, 5.9, 3.5, 3.6, 3.1,
];

pub const ANNOTATED_PATIENTS: [&str; 4] = ["MGH953", "MGH808", "MGH086", "MGH987"];

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub patient_id: String,
    pub apobec_rate_average: f64,
    pub time_gained: f64,
}

pub fn samples() -> Vec<Sample> {
    PATIENTS
        .iter()
        .zip(APOBEC_RATE_AVERAGE.iter())
        .zip(TIME_GAINED.iter())
        .map(|((id, rate), time)| Sample {
            patient_id: (*id).to_string(),
            apobec_rate_average: *rate,
            time_gained: *time,
        })
        .collect()
}

pub fn annotated_patients() -> Vec<String> {
    ANNOTATED_PATIENTS.iter().map(|s| s.to_string()).collect()
}

/// Checks that the parallel series can be zipped without dropping entries.
pub fn validate_series(ids: &[&str], rates: &[f64], times: &[f64]) -> Result<()> {
    if ids.len() != rates.len() || ids.len() != times.len() {
        bail!(
            "series length mismatch: {} ids, {} rates, {} times",
            ids.len(),
            rates.len(),
            times.len()
        );
    }
    Ok(())
}

pub fn validate_samples(samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        bail!("no samples");
    }
    let mut seen = HashSet::new();
    for s in samples {
        if !seen.insert(s.patient_id.as_str()) {
            bail!("duplicate patient id {}", s.patient_id);
        }
        check_positive(&s.patient_id, "apobec_rate_average", s.apobec_rate_average)?;
        check_positive(&s.patient_id, "time_gained", s.time_gained)?;
    }
    Ok(())
}

fn check_positive(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        bail!(
            "{} for {} must be finite and strictly positive, got {}",
            field,
            id,
            value
        );
    }
    Ok(())
}
