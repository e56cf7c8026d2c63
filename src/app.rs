use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::pages::{Board, Home, Projects};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Projects,
    Board,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Home => "Início",
            AppView::Projects => "Projetos",
            AppView::Board => "Quadro",
        }
    }

    pub fn all() -> Vec<AppView> {
        vec![AppView::Home, AppView::Projects, AppView::Board]
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Home);

    provide_context(set_current_view);
    provide_context(AppConfig::load());

    let nav_items = AppView::all()
        .into_iter()
        .map(|item| {
            view! {
                <button
                    class="nav-item"
                    class:active=move || current_view.get() == item
                    on:click=move |_| set_current_view.set(item)
                >
                    {item.as_str()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="app">
            <nav class="sidebar">{nav_items}</nav>
            <main class="app-content">
                {move || match current_view.get() {
                    AppView::Home => view! { <Home /> }.into_any(),
                    AppView::Projects => view! { <Projects /> }.into_any(),
                    AppView::Board => view! { <Board /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_a_label() {
        let labels: Vec<&str> = AppView::all().iter().map(AppView::as_str).collect();
        assert_eq!(labels, vec!["Início", "Projetos", "Quadro"]);
    }
}
