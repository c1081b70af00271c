//! Integration tests for the nlx binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const VALID_EDITED: &str = "Processo de Origem: 12.345,00\n\
NL: 123/2024\n\
CGM do Sujeito Passivo: 98765432\n\
Matrícula do Imóvel: 4321\n\
\n\
Lançamentos:\n\
ISS - Demolição | R$ 1.200,00 | 240,0 UFIMA(s)\n";

#[test]
fn review_accepts_valid_edited_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_EDITED.as_bytes()).unwrap();

    Command::cargo_bin("nlx")
        .unwrap()
        .arg("review")
        .arg(file.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("123/2024"))
        .stdout(predicate::str::contains("ISS - Demolição"));
}

#[test]
fn review_echoes_canonical_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_EDITED.as_bytes()).unwrap();

    Command::cargo_bin("nlx")
        .unwrap()
        .arg("review")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ISS - Demolição | R$ 1.200,00 | 240,0 UFIMA(s)",
        ));
}

#[test]
fn review_rejects_missing_items() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        "Processo de Origem: 1\n\
         NL: 1/2024\n\
         CGM do Sujeito Passivo: 12345\n"
            .as_bytes(),
    )
    .unwrap();

    Command::cargo_bin("nlx")
        .unwrap()
        .arg("review")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no line items"));
}

#[test]
fn review_rejects_missing_notice_number() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        "Processo de Origem: 1\n\
         CGM do Sujeito Passivo: 12345\n\
         \n\
         Lançamentos:\n\
         ISS - Reforma | R$ 50,00 | 10,0 UFIMA(s)\n"
            .as_bytes(),
    )
    .unwrap();

    Command::cargo_bin("nlx")
        .unwrap()
        .arg("review")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("NL"));
}

#[test]
fn process_rejects_missing_input() {
    Command::cargo_bin("nlx")
        .unwrap()
        .arg("process")
        .arg("nao-existe.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
