//! Menu shell tests driven by scripted input

use std::fs;
use std::io::Cursor;

use lectern::config::StorageConfig;
use lectern::repository::Repository;
use lectern::services::Services;
use lectern::shell::Shell;
use tempfile::TempDir;

fn open_services(dir: &TempDir) -> Services {
    fs::write(dir.path().join("books.txt"), "").unwrap();
    fs::write(dir.path().join("loans.txt"), "").unwrap();
    let storage = StorageConfig {
        books_path: dir.path().join("books.txt").to_string_lossy().into_owned(),
        loans_path: dir.path().join("loans.txt").to_string_lossy().into_owned(),
    };
    Services::open(Repository::open(&storage).unwrap()).unwrap()
}

fn run_script(services: &mut Services, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    Shell::new(&mut input, &mut output)
        .run(services)
        .expect("Shell run failed");
    String::from_utf8(output).expect("Shell output was not UTF-8")
}

#[test]
fn add_then_list_through_the_menu() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(&mut services, "1\nDune\nHerbert\n001\n3\n9\n");

    assert!(output.contains("Book added successfully."));
    assert!(output.contains("Books in the library:"));
    assert!(output.contains("Title: Dune"));
    assert!(output.contains("Author: Herbert"));
    assert!(output.contains("ISBN: 001"));

    // Exiting the shell does not save; shutdown does.
    services.shutdown().unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("books.txt")).unwrap(),
        "Dune Herbert 001\n"
    );
}

#[test]
fn duplicate_add_reports_error_and_loop_continues() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(
        &mut services,
        "1\nDune\nHerbert\n001\n1\nDune2\nHerbert\n001\n3\n9\n",
    );

    assert!(output.contains("Error: Duplicate ISBN: 001"));
    // The loop kept serving after the error.
    assert!(output.contains("Books in the library:"));
    assert!(!output.contains("Title: Dune2"));
}

#[test]
fn lend_and_return_flow() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(
        &mut services,
        "5\nAlice\n111\n7\n7\n6\nAlice\n111\n6\nAlice\n111\n9\n",
    );

    assert!(output.contains("Book lent successfully."));
    assert!(output.contains("Books on loan:"));
    assert!(output.contains("Customer Name: Alice"));
    assert!(output.contains("Book returned successfully."));
    // Second return of the same pair has nothing left to remove.
    assert!(output.contains("Error: Not found:"));
}

#[test]
fn bad_day_count_reports_bad_value_and_lends_nothing() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(&mut services, "5\nAlice\n111\nseven\n7\n9\n");

    assert!(output.contains("Error: Bad value: seven is not a number"));
    assert!(output.contains("No books are currently on loan."));
}

#[test]
fn empty_catalog_and_registry_report_as_such() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(&mut services, "3\n7\n8\nAlice\n4\nDune\n9\n");

    assert!(output.contains("The library is empty."));
    assert!(output.contains("No books are currently on loan."));
    assert!(output.contains("No loans found for the customer."));
    assert!(output.contains("No matching books found."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let mut services = open_services(&dir);

    let output = run_script(&mut services, "");

    assert!(output.contains("9. Exit"));
}
