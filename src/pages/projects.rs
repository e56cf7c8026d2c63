use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::format::{format_brl, format_date};
use crate::core::models::ProjectStatus;
use crate::features::dashboard::{filter_projects, use_dashboard};

/// Every project from the backend, read-only, with the same search as the
/// dashboard table.
#[component]
pub fn Projects() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("config context");
    let dashboard = use_dashboard(config);
    let (search, set_search) = signal(String::new());

    let rows = move || {
        let term = search.get();
        dashboard.projects.with(|projects| {
            let matches = filter_projects(projects, &term);
            if matches.is_empty() {
                return view! { <tr><td colspan="5" class="empty">"Nenhum projeto encontrado"</td></tr> }.into_any();
            }
            matches
                .into_iter()
                .map(|project| {
                    let status = project.status.unwrap_or(ProjectStatus::Unknown);
                    let value = project.value.map(format_brl).unwrap_or_else(|| "-".to_string());
                    let start = project.start_date.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                    let end = project.end_date.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                    view! {
                        <tr>
                            <td class="project-name">
                                {match project.link.clone() {
                                    Some(link) => view! { <a href=link target="_blank">{project.name.clone()}</a> }.into_any(),
                                    None => project.name.clone().into_any(),
                                }}
                            </td>
                            <td>{project.client_name.clone()}</td>
                            <td><span class=format!("status {}", status.badge_class())>{status.as_str()}</span></td>
                            <td>{value}</td>
                            <td>{format!("{} – {}", start, end)}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="projects-page">
            <header class="projects-header">
                <h1>"Projetos"</h1>
                <input
                    type="search"
                    placeholder="Pesquisar projeto ou cliente"
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                    prop:value=move || search.get()
                />
            </header>
            <table>
                <thead>
                    <tr>
                        <th>"Nome Do Projeto"</th>
                        <th>"Cliente"</th>
                        <th>"Status"</th>
                        <th>"Valor"</th>
                        <th>"Período"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if dashboard.is_loading.get() {
                            view! { <tr><td colspan="5" class="loading">"Carregando..."</td></tr> }.into_any()
                        } else {
                            rows()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
