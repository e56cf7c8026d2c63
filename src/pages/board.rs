use leptos::prelude::*;
use crate::core::config::AppConfig;
use crate::core::format::format_brl;
use crate::features::kanban::{use_board, AddColumnForm, KanbanColumn};

#[component]
pub fn Board() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("config context");

    // Board state lives as long as this page; leaving the page discards it
    let hook = use_board(&config.board);
    provide_context(hook);

    let reset_board = move |_| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Restaurar o quadro? Todos os cards serão removidos.").unwrap_or(false))
            .unwrap_or(false);
        if confirmed {
            hook.reset.run(());
        }
    };

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Quadro"</h1>
                <span class="board-total">{move || hook.board.with(|b| format_brl(b.board_total()))}</span>
                <button class="btn-secondary" on:click=reset_board>"Restaurar quadro"</button>
            </header>

            {move || hook.last_error.get().map(|e| view! { <div class="board-error">{e.to_string()}</div> })}

            <div class="kanban-board">
                {move || {
                    hook.board.with(|board| {
                        board
                            .columns()
                            .iter()
                            .cloned()
                            .map(|column| view! { <KanbanColumn column=column /> })
                            .collect_view()
                    })
                }}
                <AddColumnForm />
            </div>
        </div>
    }
}
