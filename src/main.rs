//! Command-line interface for the icon catalog generator.
//!
//! The CLI acts as the host adapter: it loads asset groups exported by the
//! design tool, evaluates one helper or the full generation plan and writes
//! the result to stdout as JSON. Logs go to stderr.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use icon_catalog::{
    Callback, CatalogConfig, Error, IconCatalog, load_asset_groups, load_config, serialize_error,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line interface for deriving asset catalog layouts.
#[derive(Debug, Parser,)]
#[command(name = "icon-catalog", version, about = "Derive themed asset catalog layouts")]
struct Cli
{
    /// Optional YAML file overriding catalog naming.
    #[arg(long = "config", value_name = "PATH", global = true, env = "ICON_CATALOG_CONFIG")]
    config: Option<PathBuf,>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Aggregate exported icons into per-theme icon sets.
    Icons(InputArgs,),
    /// Invoke one template helper by name.
    Call(CallArgs,),
    /// Evaluate every helper and emit the full generation plan.
    Plan(InputArgs,),
}

#[derive(Debug, Args,)]
/// Arguments shared by commands operating on asset groups.
struct InputArgs
{
    /// JSON file containing the exported asset groups.
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `call` subcommand.
struct CallArgs
{
    /// Helper name, e.g. `getAllThemes` or `bundleNameForTheme`.
    #[arg(value_name = "CALLBACK")]
    callback: String,

    /// JSON file with asset groups, passed as the first argument.
    #[arg(long = "input", value_name = "PATH")]
    input: Option<PathBuf,>,

    /// Additional positional argument encoded as JSON.
    #[arg(long = "arg", value_name = "JSON")]
    args: Vec<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icon_catalog=warn".into(),),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr,),)
        .init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates loading, derivation and serialization errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let catalog = build_catalog(cli.config.as_deref(),)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Icons(args,) => run_icons(&catalog, &args, &mut handle,),
        Command::Call(args,) => run_call(&catalog, &args, &mut handle,),
        Command::Plan(args,) => run_plan(&catalog, &args, &mut handle,),
    }
}

fn build_catalog(config: Option<&Path,>,) -> Result<IconCatalog, Error,>
{
    let config = match config {
        Some(path,) => load_config(path,)?,
        None => CatalogConfig::default(),
    };
    debug!("Using catalog configuration {:?}", config);
    Ok(IconCatalog::new(config,),)
}

fn run_icons<W: io::Write,>(
    catalog: &IconCatalog,
    args: &InputArgs,
    writer: &mut W,
) -> Result<(), Error,>
{
    let groups = load_asset_groups(&args.input,)?;
    let sets = catalog.available_icons(&groups,)?;
    info!("Aggregated {} icon sets", sets.len());
    write_json(writer, &sets, args.pretty,)
}

fn run_plan<W: io::Write,>(
    catalog: &IconCatalog,
    args: &InputArgs,
    writer: &mut W,
) -> Result<(), Error,>
{
    let groups = load_asset_groups(&args.input,)?;
    let plan = catalog.plan(&groups,)?;
    write_json(writer, &plan, args.pretty,)
}

/// Handles the `call` subcommand.
///
/// # Errors
///
/// Returns an [`Error`] when the callback is unknown, an argument is not
/// valid JSON, or the helper itself fails.
fn run_call<W: io::Write,>(
    catalog: &IconCatalog,
    args: &CallArgs,
    writer: &mut W,
) -> Result<(), Error,>
{
    let callback: Callback = args.callback.parse()?;

    let mut arguments = Vec::with_capacity(args.args.len() + 1,);
    if let Some(path,) = args.input.as_deref() {
        let groups = load_asset_groups(path,)?;
        arguments.push(serde_json::to_value(groups,).map_err(serialize_error,)?,);
    }
    for raw in &args.args {
        arguments.push(serde_json::from_str::<Value,>(raw,)?,);
    }

    let value = catalog.invoke(callback, &arguments,)?;
    write_json(writer, &value, args.pretty,)
}

fn write_json<W: io::Write, T: Serialize + ?Sized,>(
    writer: &mut W,
    value: &T,
    pretty: bool,
) -> Result<(), Error,>
{
    let result = if pretty {
        serde_json::to_writer_pretty(writer, value,)
    } else {
        serde_json::to_writer(writer, value,)
    };

    result.map_err(serialize_error,)
}

#[cfg(test)]
mod tests
{
    use std::{collections::BTreeMap, fs, io::Cursor, path::Path};

    use clap::Parser;
    use icon_catalog::IconCatalog;
    use tempfile::tempdir;

    use super::{Cli, Command, build_catalog, run_call, run_icons, run_plan, write_json};

    const ASSETS: &str = r#"[
        {
            "icons": [
                { "origin": { "name": "Icons/Icons/24/home-fill" } },
                { "origin": { "name": "Caviar Icons/16/home-fill" } }
            ]
        }
    ]"#;

    fn output_of(buffer: Cursor<Vec<u8,>,>,) -> String
    {
        String::from_utf8(buffer.into_inner(),).expect("invalid UTF-8",)
    }

    #[test]
    fn cli_parses_icons_command()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "icons",
            "--input",
            "assets.json",
            "--pretty",
        ],)
        .expect("failed to parse CLI",);

        assert!(cli.config.is_none());
        match cli.command {
            Command::Icons(args,) => {
                assert_eq!(args.input, Path::new("assets.json"));
                assert!(args.pretty);
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_call_with_repeated_arguments()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "call",
            "bundleNameForTheme",
            "--arg",
            "\"Caviar\"",
            "--config",
            "catalog.yaml",
        ],)
        .expect("failed to parse CLI",);

        assert_eq!(cli.config.as_deref(), Some(Path::new("catalog.yaml")));
        match cli.command {
            Command::Call(args,) => {
                assert_eq!(args.callback, "bundleNameForTheme");
                assert_eq!(args.args, ["\"Caviar\""]);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    #[test]
    fn write_json_switches_between_compact_and_pretty()
    {
        let value: Vec<String,> = Vec::new();

        let mut buffer = Cursor::new(Vec::new(),);
        write_json(&mut buffer, &value, false,).expect("failed to serialize",);
        assert_eq!(output_of(buffer), "[]");

        let mut buffer = Cursor::new(Vec::new(),);
        write_json(&mut buffer, &serde_json::json!({ "a": 1 }), true,)
            .expect("failed to serialize",);
        assert_eq!(output_of(buffer), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn write_json_reports_unencodable_values()
    {
        let value = BTreeMap::from([((1_u8, 2_u8,), "pair",),],);

        let mut buffer = Cursor::new(Vec::new(),);
        let error = write_json(&mut buffer, &value, false,).expect_err("expected encode failure",);
        assert!(matches!(error, icon_catalog::Error::Serialize { .. }));
    }

    #[test]
    fn icons_command_writes_aggregation()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("assets.json",);
        fs::write(&input, ASSETS,).expect("failed to write input",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "icons",
            "--input",
            input.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);
        let Command::Icons(args,) = cli.command else {
            panic!("unexpected command variant");
        };

        let mut buffer = Cursor::new(Vec::new(),);
        run_icons(&IconCatalog::default(), &args, &mut buffer,).expect("icons command failed",);
        assert_eq!(
            output_of(buffer),
            concat!(
                r#"[{"iconSetName":"default","icons":[{"sizes":["24"],"deprecated":false,"fileName":"home-fill","name":"HomeFill"}]},"#,
                r#"{"iconSetName":"caviar","icons":[{"sizes":["16"],"deprecated":false,"fileName":"home-fill","name":"HomeFill"}]}]"#
            )
        );
    }

    #[test]
    fn call_command_passes_input_as_first_argument()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("assets.json",);
        fs::write(&input, ASSETS,).expect("failed to write input",);

        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "call",
            "getAllThemes",
            "--input",
            input.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);
        let Command::Call(args,) = cli.command else {
            panic!("unexpected command variant");
        };

        let mut buffer = Cursor::new(Vec::new(),);
        run_call(&IconCatalog::default(), &args, &mut buffer,).expect("call command failed",);
        assert_eq!(output_of(buffer), r#"["Default","Caviar"]"#);
    }

    #[test]
    fn call_command_reports_unknown_callback()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "call", "logToConsole",],)
            .expect("failed to parse CLI",);
        let Command::Call(args,) = cli.command else {
            panic!("unexpected command variant");
        };

        let mut buffer = Cursor::new(Vec::new(),);
        let error = run_call(&IconCatalog::default(), &args, &mut buffer,)
            .expect_err("expected unknown callback",);
        match error {
            icon_catalog::Error::Validation {
                message,
            } => {
                assert_eq!(message, "unknown callback 'logToConsole'");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn call_command_reports_invalid_json_argument()
    {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "call",
            "importsForTheme",
            "--arg",
            "Caviar",
        ],)
        .expect("failed to parse CLI",);
        let Command::Call(args,) = cli.command else {
            panic!("unexpected command variant");
        };

        let mut buffer = Cursor::new(Vec::new(),);
        let error = run_call(&IconCatalog::default(), &args, &mut buffer,)
            .expect_err("expected decode error",);
        assert!(matches!(error, icon_catalog::Error::Decode { .. }));
    }

    #[test]
    fn plan_command_uses_configuration()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let input = temp.path().join("assets.json",);
        let config = temp.path().join("catalog.yaml",);
        fs::write(&input, ASSETS,).expect("failed to write input",);
        fs::write(&config, "package_name: BrandIcons\n",).expect("failed to write config",);

        let catalog = build_catalog(Some(&config,),).expect("failed to build catalog",);
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "plan",
            "--input",
            input.to_str().expect("utf8",),
        ],)
        .expect("failed to parse CLI",);
        let Command::Plan(args,) = cli.command else {
            panic!("unexpected command variant");
        };

        let mut buffer = Cursor::new(Vec::new(),);
        run_plan(&catalog, &args, &mut buffer,).expect("plan command failed",);
        let plan: serde_json::Value =
            serde_json::from_str(&output_of(buffer),).expect("plan is valid JSON",);
        assert_eq!(plan["themes"][1]["bundleName"], "BrandIcons_BrandIconsCaviar");
        assert_eq!(
            plan["sizeFolderDescriptors"][0],
            "Sources/BrandIcons/Default.xcassets/24/Contents.json"
        );
    }

    #[test]
    fn build_catalog_reports_missing_configuration()
    {
        let error = build_catalog(Some(Path::new("/nonexistent/catalog.yaml",),),)
            .expect_err("expected io error",);
        assert!(matches!(error, icon_catalog::Error::Io { .. }));
    }
}
