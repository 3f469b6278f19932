use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Catalog entities
// ────────────────────────────────────────────────────────────────────────────

/// A connector package such as `wso2/http`, owning an ordered list of endpoints.
///
/// Packages are supplied by a [`CatalogProvider`](crate::catalog::CatalogProvider)
/// and never mutated by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Namespace (organization) of the package.
    pub org: String,
    /// Package name, unique within `org`.
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl Package {
    pub fn new(org: &str, name: &str, endpoints: &[&str]) -> Self {
        Self {
            org: org.to_string(),
            name: name.to_string(),
            endpoints: endpoints.iter().map(|e| Endpoint::new(e)).collect(),
        }
    }

    /// Identity of this package, without its endpoints.
    pub fn id(&self) -> PackageId {
        PackageId {
            org: self.org.clone(),
            name: self.name.clone(),
        }
    }
}

/// `(org, name)` pair identifying a [`Package`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageId {
    pub org: String,
    pub name: String,
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// A connector endpoint type exposed by a package (e.g. `Client`, `Listener`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
}

impl Endpoint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// An import declaration held by a document.
///
/// `package_name` keeps multi-part names joined by dots (`net.http`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportRef {
    pub org_name: String,
    pub package_name: String,
}

impl ImportRef {
    pub fn new(org_name: &str, package_name: &str) -> Self {
        Self {
            org_name: org_name.to_string(),
            package_name: package_name.to_string(),
        }
    }

    /// True when this import refers to `org/package`, comparing the full package name.
    pub fn matches(&self, org: &str, package: &str) -> bool {
        self.org_name == org && self.package_name == package
    }
}

/// An endpoint declaration placed on a lifeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointNode {
    /// Variable name of the endpoint.
    pub name: String,
    /// Qualified endpoint type (`http:Client`); `None` for ad-hoc endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageId>,
}

impl EndpointNode {
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Target document of the picker: its imports and the endpoints dropped on it.
///
/// `imports` is `None` when the document has no import facility; selections
/// then skip import handling altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub imports: Option<Vec<ImportRef>>,
    #[serde(default)]
    pub endpoints: Vec<EndpointNode>,
}

impl Document {
    /// A document that supports imports and has none yet.
    pub fn with_imports() -> Self {
        Self {
            imports: Some(Vec::new()),
            endpoints: Vec::new(),
        }
    }

    /// Load a document from a JSON file.
    pub fn load_json(path: &Utf8Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let doc = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse document {}", path))?;
        Ok(doc)
    }

    /// Save the document as pretty-printed JSON.
    pub fn save_json(&self, path: &Utf8Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path))?;
        Ok(())
    }
}
