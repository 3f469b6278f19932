//! Applying selection effects to a document.
//!
//! The picker never edits a document directly. It produces [`Effect`]s, and
//! [`apply_effects`] realizes them through a [`DocumentSink`], building the
//! dropped nodes with a [`NodeFactory`].

use super::resolve::Effect;
use crate::model::{Document, Endpoint, EndpointNode, ImportRef, PackageId};

// ────────────────────────────────────────────────────────────────────────────
// Collaborators
// ────────────────────────────────────────────────────────────────────────────

/// The document side of the picker: its import store and the lifeline that
/// accepts dropped endpoint nodes.
pub trait DocumentSink {
    /// Current imports, or `None` if this document has no import facility.
    fn imports(&self) -> Option<&[ImportRef]>;
    /// Append an import. Existing imports are never removed or reordered.
    fn add_import(&mut self, import: ImportRef);
    /// Splice a new endpoint node into the target element.
    fn accept_drop(&mut self, node: EndpointNode);
}

impl DocumentSink for Document {
    fn imports(&self) -> Option<&[ImportRef]> {
        self.imports.as_deref()
    }

    fn add_import(&mut self, import: ImportRef) {
        if let Some(imports) = self.imports.as_mut() {
            if !imports.iter().any(|i| i == &import) {
                imports.push(import);
            }
        }
    }

    fn accept_drop(&mut self, node: EndpointNode) {
        self.endpoints.push(node);
    }
}

/// Builds the concrete nodes a [`DocumentSink`] accepts.
pub trait NodeFactory {
    /// Node for an endpoint of a catalog package.
    fn create_endpoint(&self, package: &PackageId, endpoint: &Endpoint) -> EndpointNode;
    /// Node for an ad-hoc endpoint.
    fn create_named_endpoint(&self, name: &str) -> EndpointNode;
}

/// Names package endpoints `<endpoint>Ep` (first letter lower-cased) and types
/// them `<package>:<Endpoint>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNodeFactory;

/// `Client` -> `clientEp`.
pub fn default_endpoint_name(endpoint: &str) -> String {
    let mut chars = endpoint.chars();
    match chars.next() {
        Some(first) => format!("{}{}Ep", first.to_lowercase(), chars.as_str()),
        None => "endpointEp".to_string(),
    }
}

impl NodeFactory for DefaultNodeFactory {
    fn create_endpoint(&self, package: &PackageId, endpoint: &Endpoint) -> EndpointNode {
        EndpointNode {
            name: default_endpoint_name(&endpoint.name),
            endpoint_type: Some(format!("{}:{}", package.name, endpoint.name)),
            package: Some(package.clone()),
        }
    }

    fn create_named_endpoint(&self, name: &str) -> EndpointNode {
        EndpointNode {
            name: name.to_string(),
            endpoint_type: None,
            package: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Application
// ────────────────────────────────────────────────────────────────────────────

/// Perform `effects` in order against `sink`. Returns the number applied.
pub fn apply_effects<S, F>(sink: &mut S, factory: &F, effects: &[Effect]) -> usize
where
    S: DocumentSink + ?Sized,
    F: NodeFactory + ?Sized,
{
    for effect in effects {
        match effect {
            Effect::RegisterImport { import } => {
                tracing::debug!(
                    org = %import.org_name,
                    package = %import.package_name,
                    "adding import"
                );
                sink.add_import(import.clone());
            }
            Effect::InsertEndpointNode { package, endpoint } => {
                sink.accept_drop(factory.create_endpoint(package, endpoint));
            }
            Effect::CreateNewEndpoint { name } => {
                let mut node = factory.create_named_endpoint(name);
                node.set_name(name);
                sink.accept_drop(node);
            }
        }
    }
    effects.len()
}
