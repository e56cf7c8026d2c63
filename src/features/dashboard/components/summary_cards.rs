use leptos::prelude::*;
use crate::core::format::format_brl;
use crate::features::dashboard::services::{donut_gradient, StatusSlice};

#[component]
pub fn TotalProjectsCard(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] slices: Signal<Vec<StatusSlice>>,
) -> impl IntoView {
    view! {
        <div class="summary-card">
            <h3>"Todos os projetos"</h3>
            {move || {
                if is_loading.get() {
                    view! { <div class="skeleton donut-skeleton"></div> }.into_any()
                } else {
                    let slices = slices.get();
                    let gradient = donut_gradient(&slices);
                    let legend = slices
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <div class="legend-item">
                                    <span class="legend-dot" style=format!("background-color: {}", slice.color)></span>
                                    <span>{slice.label}</span>
                                    <span class="legend-count">{slice.count}</span>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="donut-row">
                            <div class="donut" style=format!("background: {}", gradient)>
                                <span class="donut-total">{move || total.get()}</span>
                            </div>
                            <div class="legend">{legend}</div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn TotalClientsCard(#[prop(into)] is_loading: Signal<bool>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    view! {
        <div class="summary-card">
            <h3>"Total de clientes"</h3>
            <p class="summary-value">
                {move || if is_loading.get() { "…".to_string() } else { total.get().to_string() }}
            </p>
        </div>
    }
}

#[component]
pub fn TotalValueCard(#[prop(into)] is_loading: Signal<bool>, #[prop(into)] total: Signal<f64>) -> impl IntoView {
    view! {
        <div class="summary-card">
            <h3>"Valor total"</h3>
            <p class="summary-value">
                {move || if is_loading.get() { "…".to_string() } else { format_brl(total.get()) }}
            </p>
        </div>
    }
}
