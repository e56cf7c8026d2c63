use leptos::prelude::*;
use chrono::Utc;
use crate::core::format::{format_date, schedule_progress};
use crate::core::models::{Project, ProjectStatus};
use crate::features::dashboard::services::filter_projects;

#[component]
pub fn ActiveProjectsTable(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] projects: Signal<Vec<Project>>,
) -> impl IntoView {
    let (search, set_search) = signal(String::new());

    let rows = move || {
        let today = Utc::now().date_naive();
        let term = search.get();
        projects.with(|projects| {
            filter_projects(projects, &term)
                .into_iter()
                .map(|project| {
                    let status = project.status.unwrap_or(ProjectStatus::Unknown);
                    let progress = schedule_progress(project.start_date.as_deref(), project.end_date.as_deref(), today)
                        .unwrap_or(0);
                    let status_class = format!("status {}", status.badge_class());
                    let due = project.end_date.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td class="project-name">{project.name.clone()}</td>
                            <td>{project.client_name.clone()}</td>
                            <td>
                                <div class="progress">
                                    <div class=format!("progress-bar {}", status_class) style=format!("width: {}%", progress)></div>
                                </div>
                                <span class="progress-label">{format!("{}%", progress)}</span>
                            </td>
                            <td><span class=status_class.clone()>{status.as_str()}</span></td>
                            <td>{due}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="active-projects">
            <div class="table-header">
                <h2>"Projetos Ativos"</h2>
                <input
                    type="search"
                    placeholder="Pesquisar projeto ou cliente"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=move || search.get()
                />
            </div>
            <table>
                <thead>
                    <tr>
                        <th>"Nome Do Projeto"</th>
                        <th>"Cliente"</th>
                        <th>"Progresso"</th>
                        <th>"Status"</th>
                        <th>"Data De Entrega"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if is_loading.get() {
                            view! { <tr><td colspan="5" class="loading">"Carregando..."</td></tr> }.into_any()
                        } else {
                            rows().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
