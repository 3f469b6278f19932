//! Connector package catalogs.
//!
//! The picker only needs read access to the list of known packages. That
//! access goes through [`CatalogProvider`], so callers can back it with a
//! fixed list ([`StaticCatalog`]), a JSON file ([`JsonCatalog`]) or the
//! built-in set of standard connectors ([`builtin_catalog`]).

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use once_cell::sync::Lazy;

use crate::model::Package;

/// Read-only source of connector packages.
pub trait CatalogProvider {
    /// Packages whose name is not listed in `exclude`.
    fn filtered_packages(&self, exclude: &[String]) -> Vec<Package>;

    /// The full candidate universe: every package, nothing excluded.
    fn list_packages(&self) -> Vec<Package> {
        self.filtered_packages(&[])
    }
}

impl<C: CatalogProvider + ?Sized> CatalogProvider for &C {
    fn filtered_packages(&self, exclude: &[String]) -> Vec<Package> {
        (**self).filtered_packages(exclude)
    }
}

fn filter_excluded(packages: &[Package], exclude: &[String]) -> Vec<Package> {
    packages
        .iter()
        .filter(|p| !exclude.iter().any(|e| *e == p.name))
        .cloned()
        .collect()
}

/// Catalog over a fixed, in-memory list of packages.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    packages: Vec<Package>,
}

impl StaticCatalog {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }
}

impl CatalogProvider for StaticCatalog {
    fn filtered_packages(&self, exclude: &[String]) -> Vec<Package> {
        filter_excluded(&self.packages, exclude)
    }
}

/// Catalog loaded from a JSON array of packages, e.g.
/// `[{"org": "wso2", "name": "http", "endpoints": [{"name": "Client"}]}]`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: Utf8PathBuf,
    packages: Vec<Package>,
}

impl JsonCatalog {
    pub fn from_path(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path.as_std_path())
            .with_context(|| format!("Failed to read catalog {}", path))?;
        let packages = Self::parse(&text).with_context(|| format!("Invalid catalog {}", path))?;
        tracing::debug!(%path, packages = packages.len(), "loaded connector catalog");
        Ok(Self {
            path: path.to_path_buf(),
            packages,
        })
    }

    /// Parse catalog JSON text.
    pub fn parse(text: &str) -> Result<Vec<Package>> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalog {
    fn filtered_packages(&self, exclude: &[String]) -> Vec<Package> {
        filter_excluded(&self.packages, exclude)
    }
}

/// Catalog of the standard connector packages shipped with the editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogProvider for BuiltinCatalog {
    fn filtered_packages(&self, exclude: &[String]) -> Vec<Package> {
        filter_excluded(builtin_catalog(), exclude)
    }
}

/// Returns the built-in connector packages.
///
/// Built lazily on first access and cached for the lifetime of the process.
pub fn builtin_catalog() -> &'static [Package] {
    static CATALOG: Lazy<Vec<Package>> = Lazy::new(|| {
        vec![
            Package::new("ballerina", "http", &["Client", "Listener", "WebSocketClient"]),
            Package::new("ballerina", "grpc", &["Client", "Listener"]),
            Package::new(
                "ballerina",
                "jms",
                &["QueueReceiver", "QueueSender", "TopicPublisher", "TopicSubscriber"],
            ),
            Package::new("ballerina", "mysql", &["Client"]),
            Package::new("ballerina", "sql", &["Client"]),
            Package::new("ballerina", "file", &["Listener"]),
            Package::new("wso2", "twitter", &["Client"]),
            Package::new("wso2", "gmail", &["Client"]),
        ]
    });
    &CATALOG
}
