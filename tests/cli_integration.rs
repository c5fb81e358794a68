use assert_cmd::Command;
use internity::config::InternityConfig;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("data").join("internity.txt")
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// The binary with config and data kept inside the temp dir.
    fn cmd(&self) -> Command {
        let mut cmd = self.cmd_without_data_file();
        cmd.arg("--data-file").arg(self.data_file());
        cmd
    }

    fn cmd_without_data_file(&self) -> Command {
        let mut cmd = Command::cargo_bin("internity").unwrap();
        cmd.env_remove("RUST_LOG")
            .arg("--config-dir")
            .arg(self.config_dir());
        cmd
    }

    fn run(&self, line: &str) -> assert_cmd::assert::Assert {
        self.cmd().args(line.split_whitespace()).assert()
    }

    fn contents(&self) -> String {
        fs::read_to_string(self.data_file()).unwrap()
    }
}

#[test]
fn add_then_list_persists_between_runs() {
    let env = Env::new();

    env.run("add company/Jane Street role/Quant Intern deadline/1-12-2025 pay/9000")
        .success()
        .stdout(predicate::str::contains("Added this internship:"))
        .stdout(predicate::str::contains(
            "Now you have 1 internship(s) in the list.",
        ));

    assert_eq!(
        env.contents(),
        "Username (in line below):\n\nJane Street | Quant Intern | 01-12-2025 | 9000 | Pending\n"
    );

    env.run("list")
        .success()
        .stdout(predicate::str::contains("(in order added):"))
        .stdout(predicate::str::contains("Jane Street"))
        .stdout(predicate::str::contains("01-12-2025"));
}

#[test]
fn empty_list_message() {
    let env = Env::new();
    env.run("list")
        .success()
        .stdout(predicate::str::contains(
            "Your internship list is currently empty.",
        ));
}

#[test]
fn sorted_listing_shows_original_numbers() {
    let env = Env::new();
    env.run("add company/Late role/r deadline/01-06-2026 pay/1").success();
    env.run("add company/Early role/r deadline/01-01-2026 pay/1").success();

    let output = env.run("list sort/asc").success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let early = text.find("    2 Early").unwrap();
    let late = text.find("    1 Late").unwrap();
    assert!(early < late);
}

#[test]
fn update_and_delete() {
    let env = Env::new();
    env.run("add company/Google role/SWE deadline/01-01-2026 pay/8000").success();
    env.run("add company/Meta role/PM deadline/01-02-2026 pay/7000").success();

    env.run("update 2 status/offer pay/7500")
        .success()
        .stdout(predicate::str::contains(
            "Internship at index 2 successfully updated:",
        ));
    assert!(env.contents().contains("Meta | PM | 01-02-2026 | 7500 | Offer"));

    env.run("delete 1")
        .success()
        .stdout(predicate::str::contains("Removed this internship:"));
    assert_eq!(
        env.contents(),
        "Username (in line below):\n\nMeta | PM | 01-02-2026 | 7500 | Offer\n"
    );
}

#[test]
fn one_shot_errors_exit_with_failure() {
    let env = Env::new();
    env.run("frobnicate now")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Unknown command: frobnicate"));

    env.run("delete 3")
        .failure()
        .stderr(predicate::str::contains("Invalid internship index: 3"));
    assert!(!env.data_file().exists());
}

#[test]
fn interactive_session_keeps_going_after_errors() {
    let env = Env::new();
    env.cmd()
        .write_stdin(
            "add company/Acme role/Intern deadline/05-05-2030 pay/100\n\
             delete 9\n\
             bogus\n\
             username Ann\n\
             dashboard\n\
             exit\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, welcome to"))
        .stdout(predicate::str::contains("Hello, Guest!"))
        .stdout(predicate::str::contains("Invalid internship index: 9"))
        .stdout(predicate::str::contains("Unknown command: bogus"))
        .stdout(predicate::str::contains("Username set to Ann"))
        .stdout(predicate::str::contains("User: Ann"))
        .stdout(predicate::str::contains("05-05-2030 | Intern @ Acme"))
        .stdout(predicate::str::contains("Thank you for using Internity! Goodbye!"))
        // Nothing after exit runs.
        .stdout(predicate::str::contains("(in order added)").not());

    assert!(env.contents().starts_with("Username (in line below):\nAnn\n"));
}

#[test]
fn session_ends_cleanly_at_end_of_input() {
    let env = Env::new();
    env.cmd()
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Here are the available commands:"))
        .stdout(predicate::str::contains("Thank you for using Internity! Goodbye!"));
}

#[test]
fn corrupt_header_aborts_startup_and_keeps_file() {
    let env = Env::new();
    fs::create_dir_all(env.data_file().parent().unwrap()).unwrap();
    fs::write(env.data_file(), "garbage\nGoogle | SWE | 01-01-2025 | 1 | Pending\n").unwrap();

    env.run("list")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid storage file format"));
    assert!(env.contents().starts_with("garbage\n"));
}

#[test]
fn malformed_lines_are_skipped_with_a_warning() {
    let env = Env::new();
    fs::create_dir_all(env.data_file().parent().unwrap()).unwrap();
    fs::write(
        env.data_file(),
        "Username (in line below):\nBo\nGoogle | SWE | 01-01-2025 | 1 | Pending\nnot | enough\n",
    )
    .unwrap();

    env.run("list")
        .success()
        .stderr(predicate::str::contains("Warning: Skipped line 4"))
        .stdout(predicate::str::contains("Google"));
}

#[test]
fn loading_removes_other_files_in_the_data_directory() {
    let env = Env::new();
    env.run("add company/A role/B deadline/01-01-2026 pay/0").success();
    let stray = env.data_file().with_file_name("leftover.tmp");
    fs::write(&stray, "junk").unwrap();

    env.run("list").success();
    assert!(!stray.exists());
    assert!(env.data_file().exists());
}

#[test]
fn find_reports_no_matches_and_requires_keyword() {
    let env = Env::new();
    env.run("add company/Google role/SWE deadline/01-01-2026 pay/0").success();

    env.run("find GOOG")
        .success()
        .stdout(predicate::str::contains("Google"));
    env.run("find amazon")
        .success()
        .stdout(predicate::str::contains(
            "No internships with this company or role found.",
        ));
    env.run("find").failure();
}

#[test]
fn config_controls_banner_and_data_file() {
    let env = Env::new();
    let configured = env.dir.path().join("elsewhere").join("mine.txt");
    InternityConfig {
        data_file: Some(configured.clone()),
        show_banner: false,
    }
    .save(env.config_dir())
    .unwrap();

    env.cmd_without_data_file()
        .write_stdin("add company/A role/B deadline/01-01-2026 pay/0\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, welcome to").not())
        .stdout(predicate::str::contains("Hello, Guest!"));

    assert!(configured.exists());
    assert!(!env.data_file().exists());
}
