use apobec_scatter::data::{
    self, ANNOTATED_PATIENTS, APOBEC_RATE_AVERAGE, PATIENTS, Sample, TIME_GAINED,
};

#[test]
fn series_are_aligned() {
    assert_eq!(PATIENTS.len(), 15);
    assert_eq!(APOBEC_RATE_AVERAGE.len(), 15);
    assert_eq!(TIME_GAINED.len(), 15);
    data::validate_series(&PATIENTS, &APOBEC_RATE_AVERAGE, &TIME_GAINED).unwrap();
}

#[test]
fn samples_preserve_position() {
    let samples = data::samples();
    assert_eq!(samples.len(), 15);
    for (i, s) in samples.iter().enumerate() {
        assert_eq!(s.patient_id, PATIENTS[i]);
        assert_eq!(s.apobec_rate_average, APOBEC_RATE_AVERAGE[i]);
        assert_eq!(s.time_gained, TIME_GAINED[i]);
    }
    assert_eq!(samples[0].patient_id, "MGH086");
    assert_eq!(samples[0].time_gained, 1073.3);
    assert_eq!(samples[13].patient_id, "MGH987");
    assert_eq!(samples[13].apobec_rate_average, 1.45e-07);
}

#[test]
fn embedded_values_are_strictly_positive() {
    assert!(APOBEC_RATE_AVERAGE.iter().all(|v| *v > 0.0));
    assert!(TIME_GAINED.iter().all(|v| *v > 0.0));
    data::validate_samples(&data::samples()).unwrap();
}

#[test]
fn annotated_patients_are_in_dataset() {
    for id in ANNOTATED_PATIENTS {
        assert!(PATIENTS.contains(&id), "{} missing", id);
    }
}

#[test]
fn mismatched_series_rejected() {
    let err = data::validate_series(&["a", "b"], &[1.0], &[1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("length mismatch"));
}

fn sample(id: &str, rate: f64, time: f64) -> Sample {
    Sample {
        patient_id: id.to_string(),
        apobec_rate_average: rate,
        time_gained: time,
    }
}

#[test]
fn non_positive_values_rejected() {
    let zero_rate = vec![sample("P1", 0.0, 1.0)];
    assert!(data::validate_samples(&zero_rate).is_err());

    let negative_time = vec![sample("P1", 1e-6, -2.0)];
    let err = data::validate_samples(&negative_time).unwrap_err();
    assert!(err.to_string().contains("time_gained"));

    let nan = vec![sample("P1", f64::NAN, 1.0)];
    assert!(data::validate_samples(&nan).is_err());
}

#[test]
fn duplicate_ids_rejected() {
    let dup = vec![sample("P1", 1e-6, 1.0), sample("P1", 2e-6, 2.0)];
    let err = data::validate_samples(&dup).unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn empty_sample_set_rejected() {
    assert!(data::validate_samples(&[]).is_err());
}
