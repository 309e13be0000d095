//! Server-rendered HTML for the three pages.

use reqwest::Url;

use crate::config::SiteProfile;
use crate::data_models::SearchResult;
use crate::results_view::{ResultsView, SearchOutcome, ViewState};
use crate::routes::{RESUME_PDF, Route};

const PLACEHOLDER: &str = "Search my websites...";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn document_open(title: &str, body_class: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/styles.css">
</head>
<body class="{body_class}">
"#,
        title = escape_html(title),
    )
}

const DOCUMENT_CLOSE: &str = "\n</body>\n</html>\n";

fn document(title: &str, body_class: &str, body: &str) -> String {
    format!("{}{body}{DOCUMENT_CLOSE}", document_open(title, body_class))
}

fn nav_links(profile: &SiteProfile) -> String {
    format!(
        r#"<nav class="main-nav">
<a href="{linkedin}" target="_blank" rel="noopener noreferrer">LinkedIn</a>
<a href="{github}" target="_blank" rel="noopener noreferrer">GitHub</a>
<a href="{resume}" class="resume-btn">Resume</a>
</nav>"#,
        linkedin = escape_html(&profile.linkedin_url),
        github = escape_html(&profile.github_url),
        resume = Route::Resume.path(),
    )
}

fn search_form(value: &str, autofocus: bool) -> String {
    format!(
        r#"<form method="post" action="{action}" class="search-form">
<div class="search-box">
<input type="text" name="q" value="{value}" placeholder="{PLACEHOLDER}" aria-label="Search query"{autofocus}>
<button type="submit" class="search-button" aria-label="Search"><span class="search-icon">&#128269;</span></button>
</div>
</form>"#,
        action = Route::Search.path(),
        value = escape_html(value),
        autofocus = if autofocus { " autofocus" } else { "" },
    )
}

pub fn home_page(profile: &SiteProfile) -> String {
    let body = format!(
        r#"<div class="home-container">
<header class="header">{nav}</header>
<div class="search-container">
<h1 class="logo-title">{owner}</h1>
{form}
</div>
</div>"#,
        nav = nav_links(profile),
        owner = escape_html(&profile.owner),
        form = search_form("", true),
    );
    document(&profile.owner, "home", &body)
}

fn is_web_link(url: &str) -> bool {
    Url::parse(url.trim())
        .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn result_entry(result: &SearchResult) -> String {
    let url = escape_html(&result.url);
    let title = escape_html(&result.title);
    let description = escape_html(&result.description);

    if !is_web_link(&result.url) {
        return format!(
            r#"<article class="result-item">
<span class="result-url">{url}</span>
<h3><span class="result-title">{title}</span></h3>
<p class="result-description">{description}</p>
</article>"#
        );
    }
    format!(
        r#"<article class="result-item">
<a href="{url}" target="_blank" rel="noopener noreferrer" class="result-url">{url}</a>
<h3><a href="{url}" target="_blank" rel="noopener noreferrer" class="result-title">{title}</a></h3>
<p class="result-description">{description}</p>
</article>"#
    )
}

fn results_body(view: &ResultsView) -> String {
    let query = view.query().map(|q| escape_html(q.as_str())).unwrap_or_default();

    match view.state() {
        ViewState::Idle => String::new(),
        ViewState::Loading => r#"<div class="loading-indicator">
<div class="spinner"></div>
<p>Searching...</p>
</div>"#
            .to_string(),
        ViewState::Settled(SearchOutcome::Results(results)) if !results.is_empty() => {
            let mut out = format!(
                r#"<div class="results-info"><p>About {count} results for "<strong>{query}</strong>"</p></div>
<div class="results-list">
"#,
                count = results.len(),
            );
            for result in results {
                out.push_str(&result_entry(result));
                out.push('\n');
            }
            out.push_str("</div>");
            out
        }
        ViewState::Settled(SearchOutcome::Results(_)) => format!(
            r#"<div class="results-info"><div class="no-results">
<h2>No results found for "<strong>{query}</strong>"</h2>
<p>Try different keywords or check your spelling.</p>
</div></div>"#
        ),
        ViewState::Settled(SearchOutcome::Failed(_)) => format!(
            r#"<div class="results-info"><div class="search-failed">
<h2>Search is unavailable right now for "<strong>{query}</strong>"</h2>
<p>Please try again in a moment.</p>
</div></div>"#
        ),
    }
}

/// Everything up to and including the current state of the results area.
/// A streamed response sends this first, while the search is in flight.
pub fn search_page_open(profile: &SiteProfile, view: &ResultsView) -> String {
    let current = view.query().map(|q| q.as_str()).unwrap_or("");
    let title = match view.query() {
        Some(query) => format!("{query} - {}", profile.owner),
        None => profile.owner.clone(),
    };
    let body = format!(
        r#"<div class="search-page">
<header class="search-header">
<div class="header-content">
<a href="{home}" class="logo-small">{owner}</a>
{form}
{nav}
</div>
</header>
<main class="search-results-container">
{results}"#,
        home = Route::Home.path(),
        owner = escape_html(&profile.owner),
        form = search_form(current, view.query().is_none()),
        nav = nav_links(profile),
        results = results_body(view),
    );
    format!("{}{body}", document_open(&title, "search"))
}

/// Sent once the search settles: hides the spinner already on screen and
/// appends the settled results area.
pub fn search_page_settled(view: &ResultsView) -> String {
    format!(
        "\n<style>.loading-indicator {{ display: none; }}</style>\n{}",
        results_body(view)
    )
}

pub const SEARCH_PAGE_CLOSE: &str = "\n</main>\n</div>\n</body>\n</html>\n";

pub fn search_page(profile: &SiteProfile, view: &ResultsView) -> String {
    format!("{}{SEARCH_PAGE_CLOSE}", search_page_open(profile, view))
}

pub fn resume_page(profile: &SiteProfile) -> String {
    let body = format!(
        r#"<div class="resume-container">
<header class="resume-header">
<a href="{home}" class="back-link">&larr; Back to Search</a>
<a href="{pdf}" download class="download-link">Download PDF</a>
</header>
<object data="{pdf}" type="application/pdf" class="resume-viewer">
<div class="fallback">
<p>Unable to display PDF file.</p>
<a href="{pdf}" download class="download-link">Download PDF</a>
</div>
</object>
</div>"#,
        home = Route::Home.path(),
        pdf = RESUME_PDF,
    );
    document(&format!("Resume - {}", profile.owner), "resume", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_home_page_has_search_form_and_nav() {
        let html = home_page(&SiteProfile::default());
        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains(r#"name="q""#));
        assert!(html.contains(r#"href="/resume""#));
        assert!(html.contains("Rhamsez Thevenin"));
    }

    #[test]
    fn test_loading_shows_spinner_only() {
        let mut view = ResultsView::new();
        view.on_query_param(Some("rust concepts"));
        let html = search_page(&SiteProfile::default(), &view);
        assert!(html.contains(r#"<div class="spinner"></div>"#));
        assert!(html.contains("Searching..."));
        assert!(!html.contains("results-list"));
        assert!(!html.contains("No results found"));
        assert!(html.contains(r#"value="rust concepts""#));
    }

    #[test]
    fn test_settled_fragment_hides_spinner() {
        let mut view = ResultsView::new();
        let pending = view.on_query_param(Some("q")).unwrap();
        view.resolve(&pending, SearchOutcome::Results(Vec::new()));
        let fragment = search_page_settled(&view);
        assert!(fragment.contains(".loading-indicator { display: none; }"));
        assert!(fragment.contains(r#"No results found for "<strong>q</strong>""#));
        assert!(!fragment.contains("spinner"));
    }

    #[test]
    fn test_only_web_urls_are_links() {
        assert!(is_web_link("https://x"));
        assert!(is_web_link("HTTP://example.com/a?b=c"));
        assert!(!is_web_link("javascript:alert(1)"));
        assert!(!is_web_link(" JavaScript:alert(1)"));
        assert!(!is_web_link("data:text/html,hi"));
        assert!(!is_web_link("not a url"));

        let entry = result_entry(&SearchResult {
            id: 1,
            url: "javascript:alert(1)".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            score: 0.0,
        });
        assert!(!entry.contains("href="));
        assert!(entry.contains(r#"<span class="result-url">javascript:alert(1)</span>"#));
    }

    #[test]
    fn test_resume_page_embeds_pdf_with_fallback() {
        let html = resume_page(&SiteProfile::default());
        assert!(html.contains(r#"<object data="/resume.pdf" type="application/pdf""#));
        assert!(html.contains("Unable to display PDF file."));
        assert_eq!(html.matches(r#"href="/resume.pdf" download"#).count(), 2);
        assert!(html.contains("Back to Search"));
    }
}
