//! Site navigation driven by an explicit session context.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Who is looking at the site. Built per request instead of read from a
/// global flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub authenticated: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

const PUBLIC_LINKS: &[NavLink] = &[
    link("/", "Home"),
    link("/ai-chat", "AI Assistant"),
    link("/features", "Features"),
    link("/about", "About"),
    link("/contact", "Contact"),
];

const DASHBOARD_LINKS: &[NavLink] = &[
    link("/dashboard", "Dashboard"),
    link("/resume-analyzer", "Resume Analyzer"),
    link("/mock-interview", "Mock Interview"),
    link("/question-bank", "Question Bank"),
    link("/ai-chat", "AI Assistant"),
];

/// Client-side page routes.
pub const PAGE_ROUTES: &[&str] = &[
    "/",
    "/dashboard",
    "/resume-analyzer",
    "/mock-interview",
    "/question-bank",
    "/ai-chat",
    "/login",
    "/signup",
];

/// Pages rendered without the main layout chrome.
pub const AUTH_PAGES: &[&str] = &["/login", "/signup"];

pub fn navigation_links(session: &SessionContext) -> &'static [NavLink] {
    if session.authenticated {
        DASHBOARD_LINKS
    } else {
        PUBLIC_LINKS
    }
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub session: SessionContext,
    pub links: &'static [NavLink],
    pub routes: &'static [&'static str],
    pub auth_pages: &'static [&'static str],
}

/// GET /api/v1/navigation
pub async fn handle_navigation(State(state): State<AppState>) -> Json<NavigationResponse> {
    let session = state.session_context();
    Json(NavigationResponse {
        session,
        links: navigation_links(&session),
        routes: PAGE_ROUTES,
        auth_pages: AUTH_PAGES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_gets_public_links() {
        let links = navigation_links(&SessionContext::default());
        assert_eq!(links[0], link("/", "Home"));
        assert!(links.iter().all(|l| l.href != "/dashboard"));
    }

    #[test]
    fn test_authenticated_session_gets_dashboard_links() {
        let links = navigation_links(&SessionContext {
            authenticated: true,
        });
        let hrefs: Vec<&str> = links.iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "/dashboard",
                "/resume-analyzer",
                "/mock-interview",
                "/question-bank",
                "/ai-chat"
            ]
        );
    }

    #[test]
    fn test_auth_pages_are_routes() {
        assert!(AUTH_PAGES.iter().all(|p| PAGE_ROUTES.contains(p)));
    }
}
