//! Connector picker state.
//!
//! [`ConnectorPicker`] holds the small amount of state the search box needs
//! ([`QueryState`] plus the current suggestions) and runs one interaction at
//! a time: [`PickerPhase::Searching`] until a candidate is selected, then
//! [`PickerPhase::Resolved`]. Opening the list or typing again starts a new
//! interaction.

use super::candidates::{Candidate, build_candidates, list_all};
use super::import::{FragmentParser, ImportStatementParser};
use super::operations::{DocumentSink, NodeFactory, apply_effects};
use super::resolve::{Effect, SelectionResolver};
use crate::catalog::CatalogProvider;
use crate::model::ImportRef;

/// Text typed into the search box and whether the endpoint list is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub visible: bool,
}

impl QueryState {
    /// Suggestions for this state against `provider`.
    ///
    /// An empty query lists every endpoint; anything else filters and ends
    /// with the create row.
    pub fn candidates<C: CatalogProvider + ?Sized>(&self, provider: &C) -> Vec<Candidate> {
        let packages = provider.list_packages();
        if self.query.is_empty() {
            list_all(&packages)
        } else {
            build_candidates(&packages, &self.query)
        }
    }
}

/// Where the current interaction stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerPhase {
    #[default]
    Searching,
    Resolved,
}

/// Search-and-select control for attaching an endpoint to a lifeline.
#[derive(Debug, Clone)]
pub struct ConnectorPicker<C, P = ImportStatementParser> {
    catalog: C,
    resolver: SelectionResolver<P>,
    state: QueryState,
    suggestions: Vec<Candidate>,
    phase: PickerPhase,
}

impl<C: CatalogProvider> ConnectorPicker<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_resolver(catalog, SelectionResolver::new())
    }
}

impl<C: CatalogProvider, P: FragmentParser> ConnectorPicker<C, P> {
    pub fn with_resolver(catalog: C, resolver: SelectionResolver<P>) -> Self {
        Self {
            catalog,
            resolver,
            state: QueryState::default(),
            suggestions: Vec::new(),
            phase: PickerPhase::Searching,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    fn begin_interaction(&mut self) {
        if self.phase == PickerPhase::Resolved {
            self.phase = PickerPhase::Searching;
            self.state.query.clear();
        }
    }

    /// Open the endpoint list and show the whole catalog.
    pub fn show_endpoints(&mut self) {
        self.begin_interaction();
        self.state.visible = true;
        self.suggestions = list_all(&self.catalog.list_packages());
    }

    /// Close the endpoint list. The typed text is kept.
    pub fn hide_endpoints(&mut self) {
        self.state.visible = false;
    }

    /// The search text changed; rebuild the suggestions from scratch.
    ///
    /// The search box lives inside the endpoint list, so typing shows it.
    pub fn on_change(&mut self, value: &str) {
        self.begin_interaction();
        self.state.visible = true;
        self.state.query = value.to_string();
        self.suggestions = self.state.candidates(&self.catalog);
    }

    /// Text kept in the input when a suggestion is highlighted: always what
    /// the user typed, never the suggestion itself.
    pub fn suggestion_value(&self, _candidate: &Candidate) -> &str {
        &self.state.query
    }

    /// Resolve the suggestion at `index` against `imports`.
    ///
    /// Returns `None` if `index` is out of range, the list is hidden, or the
    /// interaction was already resolved.
    pub fn select(&mut self, index: usize, imports: Option<&[ImportRef]>) -> Option<Vec<Effect>> {
        if self.phase == PickerPhase::Resolved || !self.state.visible {
            return None;
        }
        let candidate = self.suggestions.get(index)?;
        let effects = self.resolver.resolve(candidate, &self.state.query, imports);
        tracing::debug!(
            index,
            query = %self.state.query,
            effects = effects.len(),
            "connector selected"
        );
        self.phase = PickerPhase::Resolved;
        Some(effects)
    }

    /// Select the suggestion at `index` and apply the result to `sink`.
    pub fn commit<S, F>(&mut self, index: usize, sink: &mut S, factory: &F) -> Option<Vec<Effect>>
    where
        S: DocumentSink + ?Sized,
        F: NodeFactory + ?Sized,
    {
        let effects = self.select(index, sink.imports())?;
        apply_effects(sink, factory, &effects);
        Some(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::model::Package;

    fn picker() -> ConnectorPicker<StaticCatalog> {
        ConnectorPicker::new(StaticCatalog::new(vec![Package::new(
            "wso2",
            "http",
            &["Client", "Listener"],
        )]))
    }

    #[test]
    fn show_endpoints_lists_everything() {
        let mut p = picker();
        p.show_endpoints();
        assert!(p.state().visible);
        assert_eq!(p.suggestions().len(), 2);
        p.hide_endpoints();
        assert!(!p.state().visible);
    }

    #[test]
    fn suggestion_value_is_typed_text() {
        let mut p = picker();
        p.on_change("Cli");
        let first = p.suggestions()[0].clone();
        assert_eq!(p.suggestion_value(&first), "Cli");
    }

    #[test]
    fn select_out_of_range() {
        let mut p = picker();
        p.on_change("cli");
        assert_eq!(p.select(5, None), None);
        assert_eq!(p.phase(), PickerPhase::Searching);
    }

    #[test]
    fn hidden_list_cannot_be_selected_from() {
        let mut p = picker();
        assert_eq!(p.select(0, None), None);

        p.on_change("cli");
        assert!(p.state().visible);
        p.hide_endpoints();
        assert_eq!(p.select(0, None), None);
        assert_eq!(p.phase(), PickerPhase::Searching);

        p.show_endpoints();
        assert!(p.select(0, None).is_some());
    }

    #[test]
    fn resolved_until_new_interaction() {
        let mut p = picker();
        p.on_change("cli");
        assert!(p.select(0, None).is_some());
        assert_eq!(p.phase(), PickerPhase::Resolved);
        assert_eq!(p.select(0, None), None);

        p.show_endpoints();
        assert_eq!(p.phase(), PickerPhase::Searching);
        assert_eq!(p.state().query, "");
        assert!(p.select(1, None).is_some());
    }
}
