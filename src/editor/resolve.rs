//! Turning a picked candidate into document effects.
//!
//! The resolver only describes what should happen; [`apply_effects`] carries
//! the effects out against a document.
//!
//! [`apply_effects`]: super::operations::apply_effects

use serde::Serialize;

use super::candidates::Candidate;
use super::import::{FragmentParser, ImportStatementParser, import_statement};
use crate::model::{Endpoint, ImportRef, PackageId};

/// A document change requested by a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect")]
pub enum Effect {
    /// Add an import declaration to the document.
    RegisterImport { import: ImportRef },
    /// Place an endpoint of a catalog package on the lifeline.
    InsertEndpointNode {
        package: PackageId,
        endpoint: Endpoint,
    },
    /// Place an ad-hoc endpoint named after the typed text.
    CreateNewEndpoint { name: String },
}

/// Resolves selections, building new imports with a [`FragmentParser`].
#[derive(Debug, Clone, Default)]
pub struct SelectionResolver<P = ImportStatementParser> {
    parser: P,
}

impl SelectionResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: FragmentParser> SelectionResolver<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Effects for `selection`.
    ///
    /// `imports` is `None` when the document cannot hold imports. Effects are
    /// ordered: an import always precedes the node that needs it.
    pub fn resolve(
        &self,
        selection: &Candidate,
        typed_value: &str,
        imports: Option<&[ImportRef]>,
    ) -> Vec<Effect> {
        match selection {
            Candidate::CreateNew => vec![Effect::CreateNewEndpoint {
                name: typed_value.to_string(),
            }],
            Candidate::Existing { package, endpoint } => {
                let mut effects = Vec::with_capacity(2);
                effects.extend(self.plan_import(package, imports));
                effects.push(Effect::InsertEndpointNode {
                    package: package.clone(),
                    endpoint: endpoint.clone(),
                });
                effects
            }
        }
    }

    /// The import `package` still needs, if any.
    ///
    /// Registration is best effort: a fragment that fails to parse is logged
    /// and yields `None`, leaving the endpoint insertion unaffected.
    pub fn plan_import(
        &self,
        package: &PackageId,
        imports: Option<&[ImportRef]>,
    ) -> Option<Effect> {
        let imports = imports?;
        if imports.iter().any(|i| i.matches(&package.org, &package.name)) {
            return None;
        }
        let statement = import_statement(&package.org, &package.name);
        match self.parser.parse_import(&statement) {
            // The parsed import is what gets stored, so check it as well.
            Ok(import)
                if imports
                    .iter()
                    .any(|i| i.matches(&import.org_name, &import.package_name)) =>
            {
                None
            }
            Ok(import) => Some(Effect::RegisterImport { import }),
            Err(err) => {
                tracing::warn!(%package, error = %err, "skipping import registration");
                None
            }
        }
    }
}

/// Resolve `selection` with the default import parser.
pub fn resolve_selection(
    selection: &Candidate,
    typed_value: &str,
    imports: Option<&[ImportRef]>,
) -> Vec<Effect> {
    SelectionResolver::new().resolve(selection, typed_value, imports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::import::ImportParseError;

    fn client(org: &str, pkg: &str) -> Candidate {
        Candidate::Existing {
            package: PackageId {
                org: org.to_string(),
                name: pkg.to_string(),
            },
            endpoint: Endpoint::new("Client"),
        }
    }

    #[test]
    fn no_import_facility_skips_registration() {
        let effects = resolve_selection(&client("wso2", "http"), "", None);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::InsertEndpointNode { .. }));
    }

    #[test]
    fn same_package_other_org_is_imported() {
        let imports = [ImportRef::new("ballerina", "http")];
        let effects = resolve_selection(&client("wso2", "http"), "", Some(&imports[..]));
        assert_eq!(
            effects[0],
            Effect::RegisterImport {
                import: ImportRef::new("wso2", "http")
            }
        );
    }

    #[test]
    fn malformed_org_still_inserts() {
        let effects = resolve_selection(&client("my org", "http"), "", Some(&[] as &[ImportRef]));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::InsertEndpointNode { .. }));
    }

    #[test]
    fn padded_org_is_not_registered() {
        let effects = resolve_selection(&client("wso2 ", "http"), "", Some(&[] as &[ImportRef]));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::InsertEndpointNode { .. }));
    }

    struct NormalizingParser;

    impl FragmentParser for NormalizingParser {
        fn parse_import(&self, _fragment: &str) -> Result<ImportRef, ImportParseError> {
            Ok(ImportRef::new("wso2", "http"))
        }
    }

    #[test]
    fn parsed_import_already_present_is_skipped() {
        let resolver = SelectionResolver::with_parser(NormalizingParser);
        let imports = [ImportRef::new("wso2", "http")];
        let effects = resolver.resolve(&client("WSO2", "http"), "", Some(&imports[..]));
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::InsertEndpointNode { .. }));
    }

    #[test]
    fn typed_value_ignored_for_existing() {
        let effects = resolve_selection(&client("wso2", "http"), "whatever", None);
        assert!(!effects.iter().any(|e| matches!(e, Effect::CreateNewEndpoint { .. })));
    }
}
