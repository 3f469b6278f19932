use anyhow::{Context, Result, bail};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use endpointlink::catalog::{BuiltinCatalog, CatalogProvider, JsonCatalog};
use endpointlink::editor::{
    Candidate, DefaultNodeFactory, DocumentSink, apply_effects, build_candidates, list_all,
    resolve_selection,
};
use endpointlink::model::{Document, Endpoint, Package};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Search connector endpoints and attach them to a document",
    long_about = None
)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in connector packages)
    #[arg(long, global = true, value_name = "CATALOG_FILE")]
    catalog: Option<Utf8PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the suggestion list for a query as JSON
    Suggest {
        /// Search text; empty lists every endpoint
        #[arg(default_value = "")]
        query: String,
        /// Browse the whole catalog, ignoring the query
        #[arg(long)]
        all: bool,
    },
    /// Resolve a selection against a document and print the effects as JSON
    Select {
        /// Document JSON file
        #[arg(long, value_name = "DOCUMENT_FILE")]
        document: Utf8PathBuf,
        /// Existing endpoint as `<package>/<Endpoint>`, e.g. `http/Client`
        #[arg(long, conflicts_with = "new", required_unless_present = "new")]
        endpoint: Option<String>,
        /// Name of a new ad-hoc endpoint
        #[arg(long)]
        new: Option<String>,
        /// Apply the effects and save the document
        #[arg(long)]
        write: bool,
    },
}

fn load_packages(path: Option<&Utf8PathBuf>) -> Result<Vec<Package>> {
    Ok(match path {
        Some(p) => JsonCatalog::from_path(p)?.list_packages(),
        None => BuiltinCatalog.list_packages(),
    })
}

/// Find the catalog candidate for `<package>/<Endpoint>`.
fn find_candidate(packages: &[Package], spec: &str) -> Result<Candidate> {
    let (pkg, ep) = spec
        .split_once('/')
        .with_context(|| format!("Expected <package>/<Endpoint>, got {}", spec))?;
    list_all(packages)
        .into_iter()
        .find(|c| matches!(c, Candidate::Existing { package, endpoint }
            if package.name == pkg && endpoint == &Endpoint::new(ep)))
        .with_context(|| format!("No endpoint {} in catalog", spec))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let packages = load_packages(cli.catalog.as_ref())?;

    match cli.command {
        Command::Suggest { query, all } => {
            let candidates = if all {
                list_all(&packages)
            } else {
                build_candidates(&packages, &query)
            };
            println!("{}", serde_json::to_string_pretty(&candidates)?);
        }
        Command::Select {
            document,
            endpoint,
            new,
            write,
        } => {
            let mut doc = Document::load_json(&document)?;
            let (selection, typed) = match (endpoint, new) {
                (Some(spec), _) => (find_candidate(&packages, &spec)?, String::new()),
                (None, Some(name)) => (Candidate::CreateNew, name),
                (None, None) => bail!("Either --endpoint or --new is required"),
            };
            let effects = resolve_selection(&selection, &typed, doc.imports());
            println!("{}", serde_json::to_string_pretty(&effects)?);
            if write {
                apply_effects(&mut doc, &DefaultNodeFactory, &effects);
                doc.save_json(&document)?;
            }
        }
    }
    Ok(())
}
