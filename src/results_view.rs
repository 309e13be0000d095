use crate::data_models::{Query, SearchResponse};
use crate::search_client::{SearchClient, SearchError};

/// How a search request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(SearchResponse),
    /// The request failed. Kept apart from an empty result set so the page
    /// can say the service is down instead of "no results".
    Failed(String),
}

impl From<Result<SearchResponse, SearchError>> for SearchOutcome {
    fn from(result: Result<SearchResponse, SearchError>) -> Self {
        match result {
            Ok(results) => SearchOutcome::Results(results),
            Err(e) => SearchOutcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No query in the URL.
    Idle,
    Loading,
    Settled(SearchOutcome),
}

/// A request the view has asked for but not yet seen answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub query: Query,
    pub generation: u64,
}

/// Controller behind the results page.
///
/// The router feeds it the `q` parameter on mount and on every change via
/// [`ResultsView::on_query_param`]. Each distinct value yields exactly one
/// [`PendingSearch`]; the caller performs it and hands the outcome back to
/// [`ResultsView::resolve`]. Nothing is debounced, cached or cancelled: if
/// two requests are in flight, whichever is resolved last is what shows.
#[derive(Debug, Clone)]
pub struct ResultsView {
    query: Option<Query>,
    state: ViewState,
    issued: u64,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            query: None,
            state: ViewState::Idle,
            issued: 0,
        }
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Number of requests issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.issued
    }

    pub fn on_query_param(&mut self, param: Option<&str>) -> Option<PendingSearch> {
        let Some(query) = param.and_then(Query::parse) else {
            self.query = None;
            self.state = ViewState::Idle;
            return None;
        };

        if self.query.as_ref() == Some(&query) {
            return None;
        }

        self.issued += 1;
        self.query = Some(query.clone());
        self.state = ViewState::Loading;
        Some(PendingSearch {
            query,
            generation: self.issued,
        })
    }

    /// Settles the view with `outcome`, replacing whatever was shown before.
    /// Ignored while idle, since there is no query to show results for.
    pub fn resolve(&mut self, pending: &PendingSearch, outcome: SearchOutcome) {
        if self.query.is_none() {
            log::debug!(
                "dropping result of request #{} for {:?}: view is idle",
                pending.generation,
                pending.query.as_str()
            );
            return;
        }
        if pending.generation != self.issued {
            log::debug!(
                "request #{} resolved after #{} was issued",
                pending.generation,
                self.issued
            );
        }
        self.state = ViewState::Settled(outcome);
    }

    /// Feeds `param` in and, if that starts a request, runs it to completion.
    pub async fn load(&mut self, client: &dyn SearchClient, param: Option<&str>) {
        if let Some(pending) = self.on_query_param(param) {
            let outcome = client.search(&pending.query).await.into();
            self.resolve(&pending, outcome);
        }
    }
}
