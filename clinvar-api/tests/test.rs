use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;

use clinvar_api::models::sub_payload::VariantShape;
use clinvar_api::models::sub_response::{BatchReleaseStatus, ErrorCode};
use clinvar_api::models::sub_status::ProcessingStatus;
use clinvar_api::models::ConversionError;
use clinvar_api::msg::{codec, Assembly, CodecConfig};

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data/clinvar")
        .join(file_name)
}

#[rstest]
fn test_json_to_model_summary() {
    let raw = std::fs::read_to_string(get_test_path("summary_partial_success.json")).unwrap();
    let wire: clinvar_api::msg::SummaryResponse =
        codec::from_str(&raw, &CodecConfig::strict()).unwrap();
    let summary = clinvar_api::models::sub_response::SummaryResponse::from(wire);

    assert_eq!(summary.total_count(), 3);
    assert_eq!(summary.error_code(), Some(ErrorCode::PartialSuccess));

    let errors = summary.submissions().unwrap()[1].errors().unwrap();
    assert_eq!(errors[0].output().errors()[0].user_message(), "invalid HGVS");
}

#[rstest]
fn test_load_summary_tolerates_unknown_fields() {
    let summary = clinvar_api::load_summary(get_test_path("summary_unknown_fields.json")).unwrap();
    assert_eq!(summary.batch_release_status(), BatchReleaseStatus::NotReleased);
    assert_eq!(summary.submissions().unwrap().len(), 1);
}

#[rstest]
fn test_load_status() {
    let status = clinvar_api::load_status(get_test_path("status_processed.json")).unwrap();
    assert_eq!(status.actions()[0].status(), ProcessingStatus::Processed);
    assert_eq!(
        status.actions()[0].updated().to_rfc3339(),
        "2023-02-01T13:25:32.477+00:00"
    );
}

#[rstest]
fn test_load_missing_file() {
    let err = clinvar_api::load_status(get_test_path("does_not_exist.json")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to decode submission status"));
}

#[rstest]
fn test_load_submission() {
    let container =
        clinvar_api::load_submission(get_test_path("submission_variant_set.json")).unwrap();

    let submission = &container.clinvar_submission().unwrap()[0];
    match submission.variant() {
        VariantShape::VariantSet(set) => {
            let coordinates = set.variant[0].chromosome_coordinates.as_ref().unwrap();
            assert_eq!(coordinates.assembly, Some(Assembly::Grch37));
        }
        other => panic!("expected a variant set, got {}", other.wire_name()),
    }
}

#[rstest]
fn test_load_submission_rejects_two_shapes() {
    let err =
        clinvar_api::load_submission(get_test_path("submission_two_shapes.json")).unwrap_err();

    let conversion = err.downcast_ref::<ConversionError>().unwrap();
    assert!(matches!(
        conversion,
        ConversionError::Submission { index: 1, .. }
    ));
}

#[rstest]
fn test_save_then_load_submission() {
    let container =
        clinvar_api::load_submission(get_test_path("submission_variant_set.json")).unwrap();

    let tempdir = tempfile::tempdir().unwrap();
    let path = tempdir.path().join("payload.json");
    clinvar_api::save_submission(&path, &container).unwrap();

    assert_eq!(clinvar_api::load_submission(&path).unwrap(), container);
}
