//! Library integration tests.

use relgate::RelgateError;

#[test]
fn error_types_are_public() {
    let err = RelgateError::VersionRegression {
        local: "1.2.3".into(),
        published: "1.9.9".into(),
    };
    assert!(err.to_string().contains("1.9.9"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> relgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use relgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["relgate", "requirements", "--dev"]);
    if let Commands::Requirements(args) = cli.command {
        assert!(args.dev);
    } else {
        panic!("Expected Requirements command");
    }
}

#[test]
fn observability_init_is_idempotent() {
    use relgate::observability::{init, is_initialized, ObservabilityConfig};

    let config = ObservabilityConfig::default();
    let first = init(&config);
    let second = init(&config);

    assert!(first);
    assert!(!second);
    assert!(is_initialized());
}

#[test]
fn invocation_args_follow_capabilities() {
    use relgate::config::TestSettings;
    use relgate::runner::{Capabilities, TestInvocationArgs};

    let settings = TestSettings::default();

    let ci = TestInvocationArgs::build(Capabilities::default(), &settings);
    assert_eq!(ci.as_slice(), ["-s"]);

    let terminal = TestInvocationArgs::build(
        Capabilities {
            cache_plugin_available: true,
            interactive: true,
        },
        &settings,
    );
    assert_eq!(terminal.as_slice(), ["--ff", "-s", "--maxfail=1"]);
}
