//! Infrastructure layer unit tests
//!
//! Tests for the path resolver, the sidecar reader, the exam pair finder and the
//! recovery writer against a real temporary filesystem.

mod common;

use common::{RAW_BYTES, Workspace, jan_second, write_file, write_raw};
use rstest::*;
use std::fs;
use xray_rescue::PatientIdentity;
use xray_rescue::domain::repositories::{
    ExamPairFinder, PatientMetadataReader, RecoveryWriter, StudiesRootResolver,
};
use xray_rescue::infrastructure::file_systems::{CandidatePathResolver, LocalExamPairFinder};
use xray_rescue::infrastructure::metadata::InputDataXmlReader;
use xray_rescue::infrastructure::persistence::LocalRecoveryWriter;
use xray_rescue::{LostXray, RecoveryError};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn jane() -> PatientIdentity {
    PatientIdentity::new("Jane", "Doe").unwrap()
}

// ============================================================================
// CandidatePathResolver Tests
// ============================================================================

#[rstest]
fn test_resolver_skips_missing_candidates(workspace: Workspace) {
    let resolver = CandidatePathResolver::from_config(&workspace.config());
    assert_eq!(resolver.resolve_root().unwrap(), workspace.studies());
}

#[rstest]
fn test_resolver_reports_every_probe(workspace: Workspace) {
    let probes = vec![
        workspace.dir.path().join("a"),
        workspace.dir.path().join("b"),
    ];
    let err = CandidatePathResolver::new(probes.clone())
        .resolve_root()
        .unwrap_err();

    assert_eq!(err.probed, probes);
}

// ============================================================================
// InputDataXmlReader Tests
// ============================================================================

#[rstest]
fn test_reader_extracts_identity(workspace: Workspace) {
    let study = workspace.study("1001", "  Jane ", "Doe");

    let identity = InputDataXmlReader::default()
        .read_identity(&study)
        .unwrap()
        .unwrap();
    assert_eq!(identity, jane());
}

#[rstest]
#[case("<InputData><Patient_LastName>Doe</Patient_LastName></InputData>")]
#[case("<InputData><Patient_FirstName></Patient_FirstName><Patient_LastName>Doe</Patient_LastName></InputData>")]
#[case("<InputData><Patient_FirstName>Jane")]
#[case("")]
fn test_reader_skips_unusable_sidecars(workspace: Workspace, #[case] contents: &str) {
    let study = workspace.bare_study("1002");
    write_file(&study.join("InputData.xml"), contents.as_bytes());

    let identity = InputDataXmlReader::default().read_identity(&study).unwrap();
    assert!(identity.is_none());
}

#[rstest]
fn test_reader_honours_configured_file_name(workspace: Workspace) {
    let study = workspace.bare_study("1003");
    write_file(
        &study.join("Patient.xml"),
        b"<Root><Patient_FirstName>Jane</Patient_FirstName><Patient_LastName>Doe</Patient_LastName></Root>",
    );

    assert!(InputDataXmlReader::default().read_identity(&study).unwrap().is_none());
    assert_eq!(
        InputDataXmlReader::new("Patient.xml")
            .read_identity(&study)
            .unwrap(),
        Some(jane())
    );
}

// ============================================================================
// LocalExamPairFinder Tests
// ============================================================================

#[rstest]
fn test_finder_emits_one_candidate_per_exam(workspace: Workspace) {
    let study = workspace.study("2001", "Jane", "Doe");
    for exam in ["exam_a", "exam_b"] {
        write_raw(&study.join(exam).join("U001.dcm"), jan_second());
        write_file(&study.join(exam).join("preview.jpg"), b"jpeg");
    }
    write_raw(&study.join("exam_c").join("U001.dcm"), jan_second());

    let pairs = LocalExamPairFinder::default()
        .find_pairs(&study, &jane())
        .unwrap();

    assert_eq!(pairs.len(), 2);
    assert!(pairs[0].raw_image_path().starts_with(study.join("exam_a")));
    assert!(pairs[1].raw_image_path().starts_with(study.join("exam_b")));
    assert!(pairs.iter().all(|p| p.date_taken() == jan_second()));
}

#[rstest]
fn test_finder_ignores_files_beside_exams(workspace: Workspace) {
    let study = workspace.study("2002", "Jane", "Doe");
    write_raw(&study.join("U999.dcm"), jan_second());
    write_file(&study.join("preview.jpg"), b"jpeg");

    let pairs = LocalExamPairFinder::default()
        .find_pairs(&study, &jane())
        .unwrap();
    assert!(pairs.is_empty());
}

#[rstest]
fn test_finder_fails_on_missing_study(workspace: Workspace) {
    let result = LocalExamPairFinder::default().find_pairs(&workspace.studies().join("gone"), &jane());
    assert!(result.is_err());
}

// ============================================================================
// LocalRecoveryWriter Tests
// ============================================================================

fn candidate(workspace: &Workspace, first: &str, last: &str) -> LostXray {
    let exam = workspace.studies().join("3001").join("exam");
    write_raw(&exam.join("U001.dcm"), jan_second());
    write_file(&exam.join("preview.jpg"), b"jpeg");

    LostXray::new(
        PatientIdentity::new(first, last).unwrap(),
        jan_second(),
        exam.join("preview.jpg"),
        exam.join("U001.dcm"),
    )
}

#[rstest]
fn test_writer_creates_recovery_root(workspace: Workspace) {
    assert!(!workspace.recovery_root().exists());
    LocalRecoveryWriter::new(&workspace.recovery_root()).unwrap();
    assert!(workspace.recovery_root().is_dir());
}

#[rstest]
fn test_writer_copies_byte_identical(workspace: Workspace) {
    let xray = candidate(&workspace, "Jane", "Doe");
    let writer = LocalRecoveryWriter::new(&workspace.recovery_root()).unwrap();

    let recovered = writer.recover(&xray).unwrap();

    assert_eq!(
        recovered.saved_path,
        workspace
            .recovery_root()
            .join("Jane Doe")
            .join("Jane Doe 2024-01-02 03-04-05.dcm")
    );
    assert_eq!(fs::read(&recovered.saved_path).unwrap(), RAW_BYTES);
    assert_eq!(recovered.saved_size, RAW_BYTES.len() as u64);
    assert_eq!(recovered.sha256.as_deref().map(str::len), Some(64));
}

#[rstest]
fn test_writer_overwrites_previous_copy(workspace: Workspace) {
    let xray = candidate(&workspace, "Jane", "Doe");
    let writer = LocalRecoveryWriter::new(&workspace.recovery_root()).unwrap();

    let destination = writer.destination_for(&xray);
    write_file(&destination, b"stale copy from an earlier run");

    let recovered = writer.recover(&xray).unwrap();
    assert_eq!(recovered.saved_path, destination);
    assert_eq!(fs::read(&destination).unwrap(), RAW_BYTES);

    writer.recover(&xray).unwrap();
    let entries: Vec<_> = fs::read_dir(destination.parent().unwrap())
        .unwrap()
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(writer.files_recovered(), 2);
}

#[rstest]
fn test_writer_reports_vanished_source(workspace: Workspace) {
    let xray = candidate(&workspace, "Jane", "Doe");
    fs::remove_file(xray.raw_image_path()).unwrap();
    let writer = LocalRecoveryWriter::new(&workspace.recovery_root()).unwrap();

    let err = writer.recover(&xray).unwrap_err();
    assert!(matches!(err, RecoveryError::SourceVanished(_)));
}

#[rstest]
fn test_writer_reports_uncreatable_destination(workspace: Workspace) {
    let xray = candidate(&workspace, "Jane", "Doe");
    let writer = LocalRecoveryWriter::new(&workspace.recovery_root()).unwrap();

    // A file where the patient folder should go
    write_file(&workspace.recovery_root().join("Jane Doe"), b"in the way");

    let err = writer.recover(&xray).unwrap_err();
    assert!(matches!(err, RecoveryError::DestinationUncreatable { .. }));
}
