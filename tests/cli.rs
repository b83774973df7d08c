use aqua_dosing_toolbox::app::{execute, Cli, Command};
use aqua_dosing_toolbox::config::Config;
use clap::Parser;

#[test]
fn unreadable_reading_counts_as_zero() {
    let cli = Cli::try_parse_from([
        "aqua_dosing_toolbox",
        "dose",
        "reef_iodide",
        "--current",
        "abc",
        "--target",
        " 0.2 ",
        "--volume",
        "100",
    ])
    .unwrap();
    match &cli.command {
        Command::Dose { current, target, .. } => {
            assert_eq!(*current, 0.0);
            assert_eq!(*target, 0.2);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    execute(cli.command, &Config::default()).unwrap();
}

#[test]
fn negative_and_missing_readings() {
    let cli = Cli::try_parse_from([
        "aqua_dosing_toolbox",
        "dose",
        "reef_calcium",
        "--current",
        "-5",
        "--volume",
        "40",
    ])
    .unwrap();
    match cli.command {
        Command::Dose { current, target, .. } => {
            assert_eq!(current, -5.0);
            assert_eq!(target, 0.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn volume_is_still_strict() {
    assert!(Cli::try_parse_from([
        "aqua_dosing_toolbox",
        "dose",
        "reef_calcium",
        "--volume",
        "lots",
    ])
    .is_err());
}
