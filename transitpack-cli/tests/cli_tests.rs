use std::fs::File;
use std::io::Write;
use std::path::Path;

use assert_cmd::Command;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;

fn write_package(path: &Path, entries: &[(&str, &[u8])]) {
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn descriptor_subcommand_prints_sections() {
    let dir = tempdir().unwrap();
    let prj = dir.path().join("project.PRJ");
    std::fs::write(&prj, "[Admin]\nProjectName=Demo\n[Languages]\nSourceLanguage=1033\n")
        .unwrap();

    Command::cargo_bin("transitpack")
        .unwrap()
        .args(["descriptor", "--input"])
        .arg(&prj)
        .assert()
        .success()
        .stdout(predicates::str::contains("[Admin]"))
        .stdout(predicates::str::contains("ProjectName = Demo"));
}

#[test]
fn descriptor_subcommand_fails_on_missing_file() {
    Command::cargo_bin("transitpack")
        .unwrap()
        .args(["descriptor", "--input", "no-such-file.PRJ"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn inspect_subcommand_prints_model_summary() {
    let dir = tempdir().unwrap();
    let package = dir.path().join("demo.ppf");
    let destination = dir.path().join("extracted");
    write_package(
        &package,
        &[
            (
                "Demo.PRJ",
                b"[Admin]\nProjectName=Demo\n[Languages]\nSourceLanguage=1033\nTargetLanguages=1036\n"
                    .as_slice(),
            ),
            ("en/doc.enu", b"<Document><Seg>Hello</Seg></Document>".as_slice()),
            ("fr/doc.fra", b"<Document><Seg>Bonjour</Seg></Document>".as_slice()),
        ],
    );

    Command::cargo_bin("transitpack")
        .unwrap()
        .args(["inspect", "--package"])
        .arg(&package)
        .arg("--destination")
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::contains("Project: Demo"))
        .stdout(predicates::str::contains("en-US -> fr-FR"));
}

#[test]
fn inspect_subcommand_emits_json() {
    let dir = tempdir().unwrap();
    let package = dir.path().join("demo.ppf");
    let destination = dir.path().join("extracted");
    write_package(&package, &[("Demo.PRJ", b"[Admin]\nProjectName=Demo\n".as_slice())]);

    Command::cargo_bin("transitpack")
        .unwrap()
        .args(["inspect", "--json", "--package"])
        .arg(&package)
        .arg("--destination")
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicates::str::contains("\"name\": \"Demo\""));
}

#[test]
fn inspect_subcommand_fails_on_package_without_descriptor() {
    let dir = tempdir().unwrap();
    let package = dir.path().join("empty.ppf");
    let destination = dir.path().join("extracted");
    write_package(&package, &[("en/doc.enu", b"<Document/>".as_slice())]);

    Command::cargo_bin("transitpack")
        .unwrap()
        .args(["inspect", "--package"])
        .arg(&package)
        .arg("--destination")
        .arg(&destination)
        .assert()
        .failure()
        .stderr(predicates::str::contains("no project descriptor"));
}
