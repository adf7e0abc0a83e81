use assert_cmd::Command;

fn help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("apobec-scatter").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn top_level_help_lists_subcommands() {
    let out = help(&["--help"]);
    for sub in ["run", "stats", "validate"] {
        assert!(out.contains(sub), "help is missing {}", sub);
    }
}

#[test]
fn run_help_lists_flags() {
    let out = help(&["run", "--help"]);
    for flag in ["--out", "--stem", "--dpi", "--no-show", "--json", "--tsv"] {
        assert!(out.contains(flag), "run help is missing {}", flag);
    }
    assert!(out.contains("Figure3"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let mut cmd = Command::cargo_bin("apobec-scatter").unwrap();
    cmd.assert().code(2);
}
