use leptos::prelude::*;
use leptos::html::Dialog;
use crate::core::format::format_brl;
use crate::core::models::{CardDraft, Column, ColumnDraft};
use crate::features::kanban::components::{CardForm, KanbanCard};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let hook = use_context::<BoardHook>().expect("board context");
    let add_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (menu_open, set_menu_open) = signal(false);

    let column_id = column.id.clone();

    let on_add = {
        let column_id = column_id.clone();
        Callback::new(move |draft: CardDraft| {
            hook.add_card.run((column_id.clone(), draft));
        })
    };

    let rename = {
        let column_id = column_id.clone();
        let current_title = column.title.clone();
        let color = column.color.clone();
        move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            set_menu_open.set(false);
            let answer = web_sys::window()
                .and_then(|w| w.prompt_with_message_and_default("Nome da coluna", &current_title).ok())
                .flatten();
            let Some(title) = answer else { return };
            match ColumnDraft::new(&title, color.clone()) {
                Ok(draft) => hook.rename_column.run((column_id.clone(), draft)),
                Err(err) => web_sys::console::warn_1(&format!("Column not renamed: {}", err).into()),
            }
        }
    };

    let remove = {
        let column_id = column_id.clone();
        let title = column.title.clone();
        move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            set_menu_open.set(false);
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("Excluir a coluna \"{}\" e todos os seus cards?", title))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                hook.remove_column.run(column_id.clone());
            }
        }
    };

    let on_drag_over = {
        let column_id = column_id.clone();
        move |ev: web_sys::DragEvent| {
            // Without preventDefault the browser refuses the drop
            ev.prevent_default();
            hook.hover.run(column_id.clone());
        }
    };

    let on_drop = {
        let column_id = column_id.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            hook.drop_on.run(column_id.clone());
        }
    };

    let is_drop_target = {
        let column_id = column_id.clone();
        move || hook.drag.with(|d| d.is_hovering(&column_id))
    };

    let card_count = column.cards().len();
    let cards = column
        .cards()
        .iter()
        .cloned()
        .map(|card| {
            let column_id = column_id.clone();
            view! { <KanbanCard card=card column_id=column_id /> }
        })
        .collect_view();

    view! {
        <div
            class="kanban-column"
            class:drop-target=is_drop_target
            on:dragover=on_drag_over
            on:drop=on_drop
        >
            <div class="column-header">
                <div class="column-title">
                    <span class=format!("column-dot {}", column.color)></span>
                    <h3>{column.title.clone()}</h3>
                    <span class="column-total">{format_brl(column.total_amount())}</span>
                    <span class="card-count">{card_count}</span>
                </div>
                <div class="column-menu">
                    <button
                        class="column-menu-btn"
                        on:click=move |e| {
                            e.stop_propagation();
                            set_menu_open.update(|open| *open = !*open);
                        }
                    >"⋯"</button>
                    <div class="column-dropdown" class:show=move || menu_open.get()>
                        <button class="dropdown-item edit-item" on:click=rename>"Editar coluna"</button>
                        <button class="dropdown-item delete-item" on:click=remove>"Excluir coluna"</button>
                    </div>
                </div>
            </div>
            <div class="column-content">
                <button
                    class="add-card-btn"
                    on:click=move |_| {
                        if let Some(dialog) = add_dialog_ref.get() {
                            let _ = dialog.show_modal();
                        }
                    }
                >"+ Adicionar card"</button>
                <CardForm heading="Adicionar novo card" on_submit=on_add dialog_ref=add_dialog_ref />
                {cards}
            </div>
        </div>
    }
}
