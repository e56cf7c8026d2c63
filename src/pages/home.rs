use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::features::dashboard::{
    use_dashboard, ActiveProjectsTable, DashboardSummary, TotalClientsCard, TotalProjectsCard, TotalValueCard,
};

#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("config context");
    let active_limit = config.dashboard.active_limit;
    let dashboard = use_dashboard(config);

    let summary = Memo::new(move |_| {
        dashboard.projects.with(|projects| {
            dashboard
                .clients
                .with(|clients| DashboardSummary::build(projects, clients, active_limit))
        })
    });

    view! {
        <div class="home-page">
            <div class="summary-grid">
                <TotalProjectsCard
                    is_loading=dashboard.is_loading
                    total=Signal::derive(move || summary.with(|s| s.total_projects))
                    slices=Signal::derive(move || summary.with(|s| s.status_slices.clone()))
                />
                <TotalClientsCard
                    is_loading=dashboard.is_loading
                    total=Signal::derive(move || summary.with(|s| s.total_clients))
                />
                <TotalValueCard
                    is_loading=dashboard.is_loading
                    total=Signal::derive(move || summary.with(|s| s.total_value))
                />
            </div>
            <ActiveProjectsTable
                is_loading=dashboard.is_loading
                projects=Signal::derive(move || summary.with(|s| s.active_projects.clone()))
            />
        </div>
    }
}
