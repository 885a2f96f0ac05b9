use biotea::cli::{
    AnnotationsCommands, Cli, Commands, InfoCommands, PlotSize, PrepareCommands, Species,
};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::Path;

#[test]
fn parse_retrieve_positionals() {
    let cli = Cli::parse_from(["biotea", "retrieve", "/tmp/out", "GSE12345"]);
    match cli.command {
        Commands::Retrieve {
            output_path,
            geo_id,
        } => {
            assert_eq!(output_path, Path::new("/tmp/out"));
            assert_eq!(geo_id, "GSE12345");
        }
        _ => panic!("expected retrieve command"),
    }
}

#[test]
fn parse_retrieve_requires_geo_id() {
    let err = Cli::try_parse_from(["biotea", "retrieve", "/tmp/out"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn parse_info_without_subcommand() {
    let cli = Cli::parse_from(["biotea", "info"]);
    assert!(matches!(cli.command, Commands::Info { command: None }));
}

#[test]
fn parse_info_containers() {
    let cli = Cli::parse_from(["biotea", "info", "containers"]);
    assert!(matches!(
        cli.command,
        Commands::Info {
            command: Some(InfoCommands::Containers)
        }
    ));
}

#[test]
fn parse_prepare_agilent_defaults() {
    let cli = Cli::parse_from(["biotea", "prepare", "agilent", "raw/", "expression.csv"]);
    match cli.command {
        Commands::Prepare {
            command: PrepareCommands::Agilent(args),
        } => {
            assert_eq!(args.input_dir, Path::new("raw/"));
            assert_eq!(args.output_file, Path::new("expression.csv"));
            assert_eq!(args.grep_pattern.as_str(), r"\.txt$");
            assert!(!args.plots.remove_controls);
            assert!(args.plots.plot_number.is_none());
            assert_eq!(
                args.plots.plot_size,
                PlotSize {
                    width: 12,
                    height: 5
                }
            );
        }
        _ => panic!("expected prepare agilent command"),
    }
}

#[test]
fn parse_prepare_affymetrix_flags() {
    let cli = Cli::parse_from([
        "biotea",
        "prepare",
        "affymetrix",
        "cel/",
        "expression.csv",
        "--remove-controls",
        "--plot-number",
        "8",
        "--plot-size",
        "20, 10",
    ]);
    match cli.command {
        Commands::Prepare {
            command: PrepareCommands::Affymetrix(args),
        } => {
            assert!(args.plots.remove_controls);
            assert_eq!(args.plots.plot_number, Some(8));
            assert_eq!(
                args.plots.plot_size,
                PlotSize {
                    width: 20,
                    height: 10
                }
            );
        }
        _ => panic!("expected prepare affymetrix command"),
    }
}

#[test]
fn affymetrix_has_no_grep_pattern() {
    let err = Cli::try_parse_from([
        "biotea",
        "prepare",
        "affymetrix",
        "cel/",
        "out.csv",
        "--grep-pattern",
        "x",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn plot_number_must_be_an_integer() {
    let err = Cli::try_parse_from([
        "biotea",
        "prepare",
        "agilent",
        "raw/",
        "out.csv",
        "--plot-number",
        "many",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn plot_size_must_be_width_comma_height() {
    for bad in ["12x5", "12,", "0,5", "a,b"] {
        let result = Cli::try_parse_from([
            "biotea",
            "prepare",
            "agilent",
            "raw/",
            "out.csv",
            "--plot-size",
            bad,
        ]);
        assert!(result.is_err(), "{bad} should be rejected");
    }
}

#[test]
fn grep_pattern_must_compile() {
    let err = Cli::try_parse_from([
        "biotea",
        "prepare",
        "agilent",
        "raw/",
        "out.csv",
        "--grep-pattern",
        "(unclosed",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn parse_analyze_positionals() {
    let cli = Cli::parse_from(["biotea", "analyze", "options.yaml", "out/", "in/"]);
    match cli.command {
        Commands::Analyze {
            options_path,
            output_dir,
            input_dir,
        } => {
            assert_eq!(options_path, Path::new("options.yaml"));
            assert_eq!(output_dir, Path::new("out/"));
            assert_eq!(input_dir, Path::new("in/"));
        }
        _ => panic!("expected analyze command"),
    }
}

#[test]
fn annotations_apply_defaults_to_internal_database() {
    let cli = Cli::parse_from(["biotea", "annotations", "apply", "dea.csv"]);
    match cli.command {
        Commands::Annotations {
            command:
                AnnotationsCommands::Apply {
                    target,
                    annotation_database,
                },
        } => {
            assert_eq!(target, Path::new("dea.csv"));
            assert_eq!(annotation_database, "internal");
        }
        _ => panic!("expected annotations apply command"),
    }
}

#[test]
fn annotations_generate_defaults_to_human() {
    let cli = Cli::parse_from(["biotea", "annotations", "generate", "annotations/"]);
    match cli.command {
        Commands::Annotations {
            command: AnnotationsCommands::Generate { organism, .. },
        } => assert_eq!(organism, Species::Human),
        _ => panic!("expected annotations generate command"),
    }
}

#[test]
fn annotations_generate_accepts_apis() {
    let cli = Cli::parse_from([
        "biotea",
        "annotations",
        "generate",
        "annotations/",
        "--organism",
        "apis",
    ]);
    match cli.command {
        Commands::Annotations {
            command: AnnotationsCommands::Generate { organism, .. },
        } => {
            assert_eq!(organism, Species::Apis);
            assert_eq!(organism.to_string(), "apis");
        }
        _ => panic!("expected annotations generate command"),
    }
}

#[test]
fn annotations_generate_rejects_unknown_organism() {
    let err = Cli::try_parse_from([
        "biotea",
        "annotations",
        "generate",
        "annotations/",
        "--organism",
        "klingon",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn no_arguments_shows_help() {
    let err = Cli::try_parse_from(["biotea"]).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn verbosity_and_config_are_global() {
    let cli = Cli::parse_from([
        "biotea",
        "info",
        "biotea",
        "-vv",
        "--config",
        "biotea.toml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some(Path::new("biotea.toml")));
}
