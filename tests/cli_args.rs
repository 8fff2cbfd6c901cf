use clap::Parser;
use passforge::cli::Args;
use passforge::config::Config;

#[test]
fn no_flags_leave_config_untouched() {
    let args = Args::try_parse_from(["passforge"]).expect("parse");
    let mut config = Config::default();
    args.apply(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn flags_override_file_values() {
    let args = Args::try_parse_from([
        "passforge",
        "--length",
        "8",
        "--numbers",
        "false",
        "--symbols",
        "false",
        "--widgets",
        "1",
    ])
    .expect("parse");

    let mut config = Config::default();
    args.apply(&mut config);
    assert_eq!(config.defaults.length, 8);
    assert!(!config.defaults.numbers);
    assert!(!config.defaults.symbols);
    assert_eq!(config.defaults.widgets, 1);
}

#[test]
fn partial_flags_override_only_their_field() {
    let args = Args::try_parse_from(["passforge", "--length", "64"]).expect("parse");
    let mut config = Config::default();
    args.apply(&mut config);
    assert_eq!(config.defaults.length, 64);
    assert!(config.defaults.numbers);
    assert_eq!(config.defaults.widgets, 3);
}

#[test]
fn config_path_flag_is_accepted() {
    let args =
        Args::try_parse_from(["passforge", "--config", "/tmp/custom.toml"]).expect("parse");
    assert_eq!(
        args.config.as_deref(),
        Some(std::path::Path::new("/tmp/custom.toml"))
    );
}
