//! Test runner argument assembly.

use std::path::Path;

use crate::config::TestSettings;
use crate::shell::{execute_check, is_interactive_terminal};

/// What the environment offers, probed once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The test-result caching plugin is installed.
    pub cache_plugin_available: bool,
    /// A person is watching the run (terminal attached, not CI).
    pub interactive: bool,
}

impl Capabilities {
    /// Probe the current environment.
    pub fn probe(settings: &TestSettings, project_root: &Path) -> Self {
        let capabilities = Self {
            cache_plugin_available: cache_plugin_available(
                &settings.cache_plugin_probe,
                project_root,
            ),
            interactive: is_interactive_terminal(),
        };
        tracing::debug!("Probed capabilities: {:?}", capabilities);
        capabilities
    }
}

/// Run the plugin probe command; success means the plugin is importable.
///
/// An empty probe disables the plugin.
pub fn cache_plugin_available(probe: &[String], cwd: &Path) -> bool {
    match probe.split_first() {
        Some((program, args)) => execute_check(program, args, Some(cwd)),
        None => false,
    }
}

/// Extra arguments handed to the test runner.
///
/// Built once from [`Capabilities`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInvocationArgs(Vec<String>);

impl TestInvocationArgs {
    /// Assemble the arguments, in order:
    ///
    /// 1. rerun-failures-first, if the caching plugin is available
    /// 2. stream output, always
    /// 3. fail fast, only when interactive
    pub fn build(capabilities: Capabilities, settings: &TestSettings) -> Self {
        let mut args = Vec::new();

        if capabilities.cache_plugin_available {
            args.push(settings.rerun_failures_flag.clone());
        }
        args.push(settings.stream_output_flag.clone());
        if capabilities.interactive {
            args.push(settings.fail_fast_flag.clone());
        }

        Self(args.into_iter().filter(|a| !a.is_empty()).collect())
    }

    /// The assembled tokens.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether `flag` is among the tokens.
    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|a| a == flag)
    }
}
