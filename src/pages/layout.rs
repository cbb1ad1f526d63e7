//! Shared page chrome: document head and navigation bar
//!
//! Every page is a yew function component rendered to a string with
//! [`ServerRenderer`]. Text reaches the output through `html!`, which does
//! the escaping.

use yew::prelude::*;
use yew::ServerRenderer;

use crate::config::QuizPageDefaults;
use crate::pages::home::HomeBody;
use crate::pages::login::LoginBody;
use crate::pages::not_found::NotFoundBody;
use crate::pages::profile::ProfileBody;
use crate::pages::quiz::{QuizBody, QuizView};
use crate::pages::Page;
use crate::schemas::QuizRequestParams;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:0 auto;padding:1rem}\
nav a{margin-right:1rem}nav a[aria-current=page]{font-weight:bold}\
pre.quiz{white-space:pre-wrap;background:#f6f6f6;padding:1rem;min-height:2rem}\
.error{color:#a00}";

/// Data a page needs to render
///
/// Plain owned values only, so it can cross into the renderer's worker.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Home(QuizPageDefaults),
    Quiz {
        params: QuizRequestParams,
        view: QuizView,
    },
    Login,
    Profile,
    NotFound {
        path: String,
    },
}

impl PageContent {
    pub fn page(&self) -> Page {
        match self {
            PageContent::Home(_) => Page::Home,
            PageContent::Quiz { .. } => Page::Quiz,
            PageContent::Login => Page::Login,
            PageContent::Profile => Page::Profile,
            PageContent::NotFound { .. } => Page::NotFound,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentProps {
    pub app_name: String,
    pub content: PageContent,
}

/// Render `content` as a complete HTML document
pub async fn render(app_name: &str, content: PageContent) -> String {
    let app_name = app_name.to_string();
    let html = ServerRenderer::<Document>::with_props(move || DocumentProps { app_name, content })
        .hydratable(false)
        .render()
        .await;

    format!("<!DOCTYPE html>\n{}", html)
}

#[function_component(Document)]
fn document(props: &DocumentProps) -> Html {
    let page = props.content.page();
    let title = format!("{} | {}", page.title(), props.app_name);

    let body = match &props.content {
        PageContent::Home(defaults) => html! { <HomeBody defaults={defaults.clone()} /> },
        PageContent::Quiz { params, view } => {
            html! { <QuizBody params={params.clone()} view={view.clone()} /> }
        }
        PageContent::Login => html! { <LoginBody /> },
        PageContent::Profile => html! { <ProfileBody /> },
        PageContent::NotFound { path } => html! { <NotFoundBody path={path.clone()} /> },
    };

    html! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{ title }</title>
                <style>{ STYLE }</style>
            </head>
            <body>
                <Nav current={page} />
                <main data-page={page.slug()}>
                    { body }
                </main>
            </body>
        </html>
    }
}

#[derive(Properties, PartialEq)]
struct NavProps {
    current: Page,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    html! {
        <nav>
            { for Page::ROUTED.into_iter().map(|page| {
                let current = page == props.current;
                html! {
                    <a
                        href={page.path()}
                        aria-current={current.then_some("page")}
                    >
                        { page.title() }
                    </a>
                }
            }) }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_document_wraps_body() {
        let html = render("Smart Quiz", PageContent::Login).await;
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Login | Smart Quiz</title>"));
        assert!(html.contains("<main data-page=\"login\">"));
        assert!(html.ends_with("</html>"));
    }

    #[tokio::test]
    async fn test_nav_marks_current_page_only() {
        let html = render("Smart Quiz", PageContent::Profile).await;
        assert!(html.contains("aria-current=\"page\">Profile</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }

    #[tokio::test]
    async fn test_app_name_is_escaped() {
        let html = render("<Quiz>", PageContent::Profile).await;
        assert!(html.contains("Profile | &lt;Quiz&gt;"));
        assert!(!html.contains("<Quiz>"));
    }
}
