use serde_json::Value;
use std::collections::HashSet;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let binary_path = assert_cmd::cargo::cargo_bin!("mnemonic-core");
    Command::new(binary_path)
        .args(args)
        .env_remove("MNEMONIC_CORE_WORDLIST")
        .env_remove("MNEMONIC_CORE_BATCH_TRIALS")
        .env_remove("MNEMONIC_CORE_PARALLEL")
        .output()
        .expect("cli run succeeds")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is utf8");
    serde_json::from_str(&stdout).expect("stdout is valid json")
}

#[test]
fn cli_generates_phrase_with_unique_letters() {
    let output = run_cli(&["generate", "--json"]);
    assert!(output.status.success(), "cli exited unsuccessfully: {:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["isValid"], true);

    let words: Vec<&str> = json["mnemonic"]
        .as_array()
        .expect("mnemonic is an array")
        .iter()
        .map(|w| w.as_str().expect("word is a string"))
        .collect();
    assert_eq!(words.len(), 12);

    let letters: HashSet<char> = words.iter().filter_map(|w| w.chars().next()).collect();
    assert_eq!(letters.len(), 12, "starting letters must be unique: {:?}", words);
}

#[test]
fn cli_plain_generate_prints_one_line() {
    let output = run_cli(&["generate"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert_eq!(stdout.trim().split_whitespace().count(), 12);
}

#[test]
fn cli_accepts_valid_phrase() {
    let output = run_cli(&[
        "validate", "apple", "banana", "cherry", "dog", "egg", "fish", "grape", "house", "ice",
        "juice", "kite", "lemon",
    ]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("Valid"));
}

#[test]
fn cli_reports_shared_letter() {
    let output = run_cli(&[
        "--json",
        "validate",
        "cat dog egg fish goat hat ice jam kite lamp moon car",
    ]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errorCode"], "duplicate_starting_letter");
    assert_eq!(
        json["error"],
        "Duplicate starting letter \"c\" found (word: \"car\")"
    );
}

#[test]
fn cli_reports_duplicate_word() {
    let output = run_cli(&[
        "--json", "validate", "one", "two", "three", "four", "five", "six", "seven", "eight",
        "nine", "ten", "ten", "ten",
    ]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["errorCode"], "duplicate_word");
    assert_eq!(json["error"], "Duplicate word found: \"ten\"");
}

#[test]
fn cli_reports_wrong_length() {
    let output = run_cli(&["--json", "validate", "apple", "banana", "cherry"]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["error"], "Mnemonic must have exactly 12 words, got 3");
}

#[test]
fn cli_imports_24_word_phrase_unchecked() {
    let phrase = ["abandon"; 23].join(" ") + " art";
    let output = run_cli(&["--json", "import", &phrase]);
    assert!(output.status.success(), "{:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["accepted"], true);
    assert_eq!(json["wordCount"], 24);
    assert_eq!(json["contractChecked"], false);
}

#[test]
fn cli_rejects_unsupported_import_length() {
    let output = run_cli(&["--json", "import", "apple banana cherry"]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["accepted"], false);
    assert_eq!(json["errorCode"], "unsupported_word_count");
}

#[test]
fn cli_batch_reports_all_successes() {
    let output = run_cli(&["--json", "test-batch", "-n", "20"]);
    assert!(output.status.success(), "{:?}", output);

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["totalGenerated"], 20);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn cli_parallel_batch_succeeds() {
    let output = run_cli(&["test-batch", "--count", "50", "--parallel"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("All 50 mnemonics generated successfully"));
}

#[test]
fn cli_rejects_zero_batch_count() {
    let output = run_cli(&["test-batch", "--count", "0"]);
    assert!(!output.status.success());
}

#[test]
fn cli_batch_fails_on_small_word_list() {
    let path = std::env::temp_dir().join(format!("mnemonic-core-small-{}.txt", std::process::id()));
    let words: Vec<String> = (0..10).map(|i| format!("w{}", i)).collect();
    std::fs::write(&path, words.join("\n")).expect("write word list");

    let output = run_cli(&[
        "--json",
        "--wordlist",
        path.to_str().expect("utf8 path"),
        "test-batch",
        "-n",
        "3",
    ]);
    let _ = std::fs::remove_file(&path);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["totalGenerated"], 3);
    let errors = json["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors[0],
        "Generation 1 failed: Word list must contain at least 26 words, got 10"
    );
}
