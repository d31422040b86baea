//! Per-request context shared with every view.
//!
//! Building the context is an explicit pipeline stage: [`enrich`] either
//! yields a [`RequestContext`] for the router, or short-circuits with a
//! response of its own.

use axum::response::{IntoResponse, Response};
use common::{derive_breadcrumbs, Breadcrumb, Category, User};
use serde::Serialize;
use tracing::{error, warn};

use super::{error::AppError, view::redirect};
use crate::catalog::CategoryDirectory;
use crate::session::{Session, SessionError, SessionSnapshot};

/// Values computed once per request and handed to whatever renders the
/// response. Field names are the template contract.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// Whether a user is logged in on this session.
    pub login: bool,
    /// Free-form session values at the time the context was built.
    pub session: SessionSnapshot,
    #[serde(rename = "currentUser")]
    pub current_user: Option<User>,
    /// Navigation categories, sorted by title.
    pub categories: Vec<Category>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Outcome of a pipeline stage.
#[derive(Debug)]
pub enum Decision {
    /// Hand the request on to the router with this context.
    Continue(RequestContext),
    /// Stop here and send this response instead.
    ShortCircuit(Response),
}

/// Build the request context for `path`.
///
/// Performs exactly one category lookup. If it fails the request is
/// abandoned in favour of a redirect to `/`. A session store failure is an
/// internal error.
pub async fn enrich(session: &Session, directory: &dyn CategoryDirectory, path: &str) -> Decision {
    let identity = async {
        let login = session.is_authenticated().await?;
        let snapshot = session.snapshot().await?;
        let current_user = session.current_user().await?;
        Ok::<_, SessionError>((login, snapshot, current_user))
    };
    let (login, snapshot, current_user) = match identity.await {
        Ok(identity) => identity,
        Err(e) => {
            error!(error = %e, path, "session could not be read");
            return Decision::ShortCircuit(AppError::from(e).into_response());
        }
    };

    let categories = match directory.find_all_sorted().await {
        Ok(categories) => categories,
        Err(e) => {
            warn!(
                event = "context_enrichment_failed",
                error = %e,
                path,
                "category lookup failed; redirecting to home"
            );
            return Decision::ShortCircuit(redirect("/"));
        }
    };

    Decision::Continue(RequestContext {
        login,
        session: snapshot,
        current_user,
        categories,
        breadcrumbs: derive_breadcrumbs(path),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{InMemoryCategoryDirectory, MockCategoryDirectory};
    use crate::session::handle::{tests::detached, VALUES_KEY};
    use axum::http::{header::LOCATION, StatusCode};
    use common::StoreError;

    fn carol() -> User {
        User {
            id: "u3".into(),
            username: "carol".into(),
            email: "carol@example.com".into(),
        }
    }

    #[tokio::test]
    async fn anonymous_context() {
        let directory = InMemoryCategoryDirectory::with_categories(vec![
            Category::new("2", "Tents", "tents"),
            Category::new("1", "Boots", "boots"),
        ]);
        let session = Session::from(detached());
        let Decision::Continue(ctx) = enrich(&session, &directory, "/products/tents").await else {
            panic!("expected the context to be built");
        };
        assert!(!ctx.login);
        assert!(ctx.current_user.is_none());
        assert_eq!(ctx.categories[0].title, "Boots");
        assert_eq!(ctx.breadcrumbs.len(), 3);
        assert_eq!(ctx.breadcrumbs[2].name, "Tents");
    }

    #[tokio::test]
    async fn authenticated_context_carries_user_and_session_values() {
        let inner = detached();
        inner
            .insert(VALUES_KEY, serde_json::json!({"cart": {"totalQty": 1}}))
            .await
            .unwrap();
        let session = Session::from(inner);
        session.log_in(carol()).await.unwrap();

        let Decision::Continue(ctx) =
            enrich(&session, &InMemoryCategoryDirectory::new(), "/user/profile").await
        else {
            panic!("expected the context to be built");
        };
        assert!(ctx.login);
        assert_eq!(ctx.current_user, Some(carol()));
        assert_eq!(ctx.session["cart"]["totalQty"], 1);
    }

    #[tokio::test]
    async fn directory_is_queried_exactly_once() {
        let mut directory = MockCategoryDirectory::new();
        directory
            .expect_find_all_sorted()
            .times(1)
            .returning(|| Ok(vec![Category::new("1", "Boots", "boots")]));
        let decision = enrich(&Session::from(detached()), &directory, "/").await;
        assert!(matches!(decision, Decision::Continue(ref ctx) if ctx.categories.len() == 1));
    }

    #[tokio::test]
    async fn directory_failure_redirects_home() {
        let mut directory = MockCategoryDirectory::new();
        directory
            .expect_find_all_sorted()
            .times(1)
            .returning(|| Err(StoreError::Unavailable("connection refused".into())));

        let Decision::ShortCircuit(response) =
            enrich(&Session::from(detached()), &directory, "/pages/about-us").await
        else {
            panic!("expected a short-circuit");
        };
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/");
    }

    #[tokio::test]
    async fn serializes_template_field_names() {
        let Decision::Continue(ctx) =
            enrich(&Session::from(detached()), &InMemoryCategoryDirectory::new(), "/").await
        else {
            panic!("expected the context to be built");
        };
        let json = serde_json::to_value(&ctx).unwrap();
        for field in ["login", "session", "currentUser", "categories", "breadcrumbs"] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
    }
}
