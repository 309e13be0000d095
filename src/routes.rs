use crate::data_models::Query;

/// The pages the site knows about. The mapping is fixed; the router is
/// built from these paths once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Resume,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Search, Route::Resume];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Search => "/search",
            Route::Resume => "/resume",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Where the browser should go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub query: Option<Query>,
}

impl Navigation {
    pub fn to_search(query: Query) -> Navigation {
        Navigation {
            route: Route::Search,
            query: Some(query),
        }
    }

    /// Target URL, e.g. `/search?q=rust%20concepts`.
    pub fn location(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?q={}", self.route.path(), query.encoded()),
            None => self.route.path().to_string(),
        }
    }
}

/// Path of the resume document inside the static directory.
pub const RESUME_PDF: &str = "/resume.pdf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_navigation_location_encodes_query() {
        let nav = Navigation::to_search(Query::parse("c++ & rust").unwrap());
        assert_eq!(nav.location(), "/search?q=c%2B%2B%20%26%20rust");
    }
}
