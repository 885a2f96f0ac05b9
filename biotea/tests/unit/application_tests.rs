use biotea::application;
use biotea::cli::Cli;
use biotea::commands::Outcome;
use biotea::config::Config;
use clap::Parser;

async fn run(args: &[&str]) -> Outcome {
    let cli = Cli::parse_from(args);
    application::run(cli.command, &Config::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn placeholders_parse_and_do_nothing() {
    let cases: [(&[&str], &str); 6] = [
        (&["biotea", "update"], "update"),
        (&["biotea", "wizard"], "wizard"),
        (
            &["biotea", "prepare", "agilent", "raw/", "out.csv"],
            "prepare agilent",
        ),
        (
            &["biotea", "prepare", "affymetrix", "cel/", "out.csv"],
            "prepare affymetrix",
        ),
        (&["biotea", "analyze", "opts.yaml", "out/", "in/"], "analyze"),
        (
            &["biotea", "annotations", "apply", "dea.csv"],
            "annotations apply",
        ),
    ];

    for (args, name) in cases {
        assert_eq!(run(args).await, Outcome::NotImplemented(name));
    }
}

#[tokio::test]
async fn annotations_generate_is_a_placeholder() {
    let outcome = run(&[
        "biotea",
        "annotations",
        "generate",
        "annotations/",
        "--organism",
        "rat",
    ])
    .await;
    assert_eq!(outcome, Outcome::NotImplemented("annotations generate"));
}

#[tokio::test]
async fn info_commands_complete() {
    assert_eq!(run(&["biotea", "info"]).await, Outcome::Done);
    assert_eq!(run(&["biotea", "info", "biotea"]).await, Outcome::Done);
}

#[tokio::test]
async fn placeholders_leave_the_filesystem_alone() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("expression.csv");
    let out_arg = out.to_string_lossy().to_string();

    let outcome = run(&["biotea", "prepare", "agilent", "raw/", &out_arg]).await;
    assert_eq!(outcome, Outcome::NotImplemented("prepare agilent"));
    assert!(!out.exists());
}
