// crates/config-exporter-cli/src/main.rs
// ============================================================================
// Module: Config Exporter CLI Entry Point
// Description: Command-line frontend for scoped configuration exports.
// Purpose: Parse arguments, run the export pipeline, and map exit codes.
// Dependencies: clap, config-exporter-core, config-exporter-providers, thiserror.
// ============================================================================

//! ## Overview
//! The config exporter CLI wires the Magento CLI oracle and an interactive
//! confirmation gate into the core export orchestrator. All user-facing
//! strings are routed through the i18n catalog to prepare for future
//! localization. A declined confirmation exits cleanly with status 0; every
//! pipeline failure exits non-zero with a localized message on stderr.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::CommandFactory;
use clap::Parser;
use clap::ValueEnum;
use config_exporter_cli::i18n::Locale;
use config_exporter_cli::i18n::set_locale;
use config_exporter_cli::t;
use config_exporter_core::AutoConfirm;
use config_exporter_core::ConfigScope;
use config_exporter_core::ConfirmationGate;
use config_exporter_core::ExportOrchestrator;
use config_exporter_core::ExportOutcome;
use config_exporter_core::ExportRequest;
use config_exporter_core::OutputTarget;
use config_exporter_core::ScopeSelector;
use config_exporter_providers::MagentoCliConfig;
use config_exporter_providers::MagentoCliOracle;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "MAGENTO_CONFIG_EXPORTER_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "magento-config-exporter",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Preferred output language (overrides `MAGENTO_CONFIG_EXPORTER_LANG`).
    #[arg(long, value_enum, value_name = "LANG")]
    lang: Option<LangArg>,
    /// YAML file with the list of config path prefixes (key: `paths`).
    #[arg(value_name = "PATHS_FILE", required_unless_present = "show_version")]
    paths_file: Option<PathBuf>,
    /// Path to the Magento installation (default: current directory).
    #[arg(short = 'd', long = "magento-dir", value_name = "DIR", default_value = ".")]
    magento_dir: PathBuf,
    /// Config scope to export.
    #[arg(short = 's', long = "scope", value_enum, default_value = "default")]
    scope: ScopeArg,
    /// Scope code for non-default scopes (e.g. `english`).
    #[arg(short = 'c', long = "scope-code", value_name = "CODE")]
    scope_code: Option<String>,
    /// Override the output directory.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Do not ask for confirmation before exporting.
    #[arg(short = 'y', long = "no-interaction", action = ArgAction::SetTrue)]
    no_interaction: bool,
    /// Enable debug output on stderr.
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    debug: bool,
}

/// Locale values accepted by `--lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LangArg {
    /// English output.
    En,
    /// Catalan output.
    Ca,
}

/// Converts CLI language selections into catalog locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Scope values accepted by `--scope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScopeArg {
    /// Global default scope.
    Default,
    /// Per-store scope.
    Stores,
    /// Per-website scope.
    Websites,
}

/// Converts CLI scope selections into core scopes.
impl From<ScopeArg> for ConfigScope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::Default => Self::Default,
            ScopeArg::Stores => Self::Stores,
            ScopeArg::Websites => Self::Websites,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the export command.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(paths_file) = cli.paths_file else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let selector = ScopeSelector::new(cli.scope.into(), cli.scope_code)
        .map_err(|err| CliError::new(t!("export.scope_invalid", error = err)))?;
    let install_root = fs::canonicalize(&cli.magento_dir).map_err(|err| {
        CliError::new(t!(
            "export.install_root_invalid",
            path = cli.magento_dir.display(),
            error = err
        ))
    })?;

    let oracle = MagentoCliOracle::new(MagentoCliConfig::new(install_root.clone()));
    let target = OutputTarget::resolve(&selector, cli.output_dir.as_deref(), &install_root);

    if cli.debug {
        let command = oracle.command_line(&selector, None);
        write_stderr_line(&t!("debug.invocation", command = command))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
        write_stderr_line(&t!("debug.target", path = target.path().display()))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!("export.plan.input", path = paths_file.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line(&t!("export.plan.target", path = target.path().display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;

    let auto = AutoConfirm;
    let prompt = PromptGate;
    let gate: &dyn ConfirmationGate = if cli.no_interaction { &auto } else { &prompt };

    let request = ExportRequest {
        catalog_path: paths_file,
        selector,
        install_root,
        output_dir: cli.output_dir,
    };
    let mut orchestrator = ExportOrchestrator::new(&oracle, gate);
    let outcome = orchestrator
        .run(&request)
        .map_err(|err| CliError::new(t!("export.failed", error = err)))?;

    match outcome {
        ExportOutcome::Written {
            path,
            value_count,
            created_directory,
        } => {
            if created_directory {
                write_stdout_line(&t!("export.created_dir", path = path.display()))
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
            write_stdout_line(&t!("export.ok", count = value_count, path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
        ExportOutcome::Declined => {
            write_stderr_line(&t!("export.declined"))
                .map_err(|err| CliError::new(output_error("stderr", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// SECTION: Confirmation Gate
// ============================================================================

/// Interactive confirmation gate reading a yes/no answer from stdin.
struct PromptGate;

impl ConfirmationGate for PromptGate {
    fn interactive(&self) -> bool {
        true
    }

    /// Prompts the operator; any answer other than `y`/`yes` declines, as
    /// does a failed read.
    fn confirm(&self, _target: &OutputTarget) -> bool {
        if write_stdout(&t!("export.prompt")).is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the CLI locale from the `--lang` flag and environment.
fn resolve_locale(flag: Option<LangArg>, env_value: Option<&str>) -> CliResult<Locale> {
    if let Some(flag) = flag {
        return Ok(flag.into());
    }
    match env_value {
        Some(value) => Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        }),
        None => Ok(Locale::En),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a message to stdout without adding a newline, then flushes.
fn write_stdout(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(&mut stdout, "{message}")?;
    stdout.flush()
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

/// Prints CLI help to stdout.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}
