//! Home page
//!
//! GET /

use axum::extract::State;
use yew::{function_component, html, Html, Properties};

use crate::config::QuizPageDefaults;
use crate::pages::layout::{self, PageContent};
use crate::pages::Page;
use crate::schemas::{Difficulty, QuestionType};
use crate::server::state::AppState;

pub async fn home_page(State(state): State<AppState>) -> axum::response::Html<String> {
    axum::response::Html(render(&state).await)
}

pub async fn render(state: &AppState) -> String {
    let settings = &state.settings;
    layout::render(
        &settings.app_name,
        PageContent::Home(settings.quiz_defaults.clone()),
    )
    .await
}

#[derive(Properties, PartialEq)]
pub struct HomeBodyProps {
    pub defaults: QuizPageDefaults,
}

/// Landing text plus the form that opens the quiz page
#[function_component(HomeBody)]
pub fn home_body(props: &HomeBodyProps) -> Html {
    let defaults = &props.defaults;

    html! {
        <>
            <h1>{ "Smart Quiz" }</h1>
            <p>{ "Pick a topic and get a freshly generated quiz." }</p>
            <form action={Page::Quiz.path()} method="get">
                <label>
                    { "Topic " }
                    <input type="text" name="topic" placeholder={defaults.topic.clone()} />
                </label>
                <label>
                    { "Difficulty " }
                    <select name="difficulty">
                        { for Difficulty::ALL.into_iter().map(|d| {
                            option(d.as_str(), d.label(), &defaults.difficulty)
                        }) }
                    </select>
                </label>
                <label>
                    { "Question type " }
                    <select name="q_type">
                        { for QuestionType::ALL.into_iter().map(|t| {
                            option(t.as_str(), t.label(), &defaults.question_type)
                        }) }
                    </select>
                </label>
                <button type="submit">{ "Generate quiz" }</button>
            </form>
        </>
    }
}

fn option(value: &'static str, label: &'static str, selected: &str) -> Html {
    html! {
        <option value={value} selected={value == selected}>{ label }</option>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_home() -> String {
        layout::render("Smart Quiz", PageContent::Home(QuizPageDefaults::default())).await
    }

    /// The opening `<option ...>` tag for `value`
    fn option_tag<'a>(html: &'a str, value: &str) -> &'a str {
        let start = html
            .find(&format!("<option value=\"{}\"", value))
            .unwrap_or_else(|| panic!("no option for {value}"));
        let end = start + html[start..].find('>').unwrap();
        &html[start..=end]
    }

    #[tokio::test]
    async fn test_form_targets_quiz_page() {
        let html = render_home().await;
        assert!(html.contains("<form action=\"/quiz\" method=\"get\">"));
        assert!(html.contains("name=\"topic\""));
        assert!(html.contains("<select name=\"q_type\">"));
        assert!(html.contains("<main data-page=\"home\">"));
    }

    #[tokio::test]
    async fn test_configured_defaults_are_preselected() {
        let html = render_home().await;
        assert!(option_tag(&html, "hard").contains("selected"));
        assert!(option_tag(&html, "mcq").contains("selected"));
        assert!(!option_tag(&html, "easy").contains("selected"));
        assert!(html.contains(">Multiple choice</option>"));
        assert!(html.contains("placeholder=\"UPSC Polity\""));
    }

    #[tokio::test]
    async fn test_topic_placeholder_is_escaped() {
        let defaults = QuizPageDefaults {
            topic: "<b>Rust</b>".into(),
            ..QuizPageDefaults::default()
        };
        let html = layout::render("Smart Quiz", PageContent::Home(defaults)).await;
        assert!(!html.contains("<b>Rust</b>"));
    }
}
