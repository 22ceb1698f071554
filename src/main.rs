use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod catalog;
mod diagnostics;
mod error;
mod introspect;
mod model;
mod render;
mod value;

use catalog::Catalog;
use error::UnsupportedKindError;
use introspect::Introspector;
use model::InspectRequest;
use render::Format;

pub type Result<T> = anyhow::Result<T>;

/// Exit status when the queried value's kind has no type in the catalog.
const EXIT_UNSUPPORTED_KIND: u8 = 2;

#[derive(Parser)]
#[command(name = "object-introspector")]
#[command(about = "Inspect a literal value's type, ancestry and operations", long_about = None)]
struct Cli {
    /// Load types from this JSON catalog instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report type, superclass, ancestor chain and (optionally) operation support.
    Inspect {
        #[arg(allow_hyphen_values = true)]
        literal: String,

        operation: Option<String>,

        /// Also list the supported operations.
        #[arg(long)]
        methods: bool,

        /// With --methods, list only operations declared on the type itself.
        #[arg(long, requires = "methods")]
        own: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print supported operation names, one per line, sorted.
    Methods {
        #[arg(allow_hyphen_values = true)]
        literal: String,

        /// Only operations declared on the type itself.
        #[arg(long)]
        own: bool,
    },

    /// Print whether the value is an instance of TYPE or one of its subtypes.
    IsA {
        #[arg(allow_hyphen_values = true)]
        literal: String,

        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Print the catalog as a type tree.
    Catalog {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> ExitCode {
    // clap exits with 2 on usage errors, which is reserved for unsupported kinds.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    diagnostics::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostics::error_message(format!("{:#}", err)));
            if err.downcast_ref::<UnsupportedKindError>().is_some() {
                ExitCode::from(EXIT_UNSUPPORTED_KIND)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 1) Build the catalog once; it is read-only from here on.
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };
    tracing::debug!(
        source = cli.catalog.as_deref().unwrap_or("built-in"),
        types = catalog.len(),
        "catalog loaded"
    );
    let intro = Introspector::new(&catalog);

    // 2) Answer the query.
    match cli.cmd {
        Commands::Inspect {
            literal,
            operation,
            methods,
            own,
            format,
        } => {
            let value = value::parse_literal(&literal)?;
            tracing::debug!(kind = %value.kind(), "parsed literal");
            let report = model::build_inspect_report(
                &intro,
                &value,
                InspectRequest {
                    operation: operation.as_deref(),
                    methods,
                    own,
                },
            )?;
            print!("{}", render::render_inspect_report(&report, format)?);
            if format == Format::Json {
                println!();
            }
        }
        Commands::Methods { literal, own } => {
            let value = value::parse_literal(&literal)?;
            for op in intro.list_operations(&value, !own)? {
                println!("{}", op);
            }
        }
        Commands::IsA { literal, type_name } => {
            let value = value::parse_literal(&literal)?;
            println!("{}", intro.is_a(&value, &type_name)?);
        }
        Commands::Catalog { format } => {
            let view = model::build_catalog_view(&catalog);
            print!("{}", render::render_catalog(&view, format)?);
            if format == Format::Json {
                println!();
            }
        }
    }

    Ok(())
}
