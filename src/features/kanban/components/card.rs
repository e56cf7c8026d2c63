use leptos::prelude::*;
use leptos::html::Dialog;
use crate::core::format::format_brl;
use crate::core::models::{Card, CardDraft, CardPatch};
use crate::features::kanban::components::CardForm;
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanCard(card: Card, #[prop(into)] column_id: String) -> impl IntoView {
    let hook = use_context::<BoardHook>().expect("board context");
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let (menu_open, set_menu_open) = signal(false);

    let on_edit = {
        let column_id = column_id.clone();
        let current = card.clone();
        Callback::new(move |draft: CardDraft| match CardPatch::diff(&current, &draft) {
            Ok(patch) if patch.is_empty() => {}
            Ok(patch) => hook.edit_card.run((column_id.clone(), current.id.clone(), patch)),
            Err(e) => web_sys::console::warn_1(&format!("Card not edited: {}", e).into()),
        })
    };

    let on_delete = {
        let column_id = column_id.clone();
        let card_id = card.id.clone();
        move |e: web_sys::MouseEvent| {
            e.stop_propagation();
            set_menu_open.set(false);
            hook.delete_card.run((column_id.clone(), card_id.clone()));
        }
    };

    // The card id also goes into the DataTransfer so the browser treats
    // this as a real drag; the board resolves the source column itself
    let on_drag_start = {
        let card_id = card.id.clone();
        move |ev: web_sys::DragEvent| {
            if let Some(data) = ev.data_transfer() {
                let _ = data.set_data("cardId", &card_id);
            }
            hook.pick_up.run(card_id.clone());
        }
    };

    let is_dragging = {
        let card_id = card.id.clone();
        move || hook.drag.with(|d| d.is_dragging_card(&card_id))
    };

    view! {
        <div
            class="kanban-card"
            class:dragging=is_dragging
            draggable="true"
            on:dragstart=on_drag_start
            on:dragend=move |_| hook.cancel_drag.run(())
        >
            <div class="card-header">
                <h4>{card.title.clone()}</h4>
                <div class="card-menu">
                    <button
                        class="card-menu-btn"
                        on:click=move |e| {
                            e.stop_propagation();
                            set_menu_open.update(|open| *open = !*open);
                        }
                    >"⋯"</button>
                    <div class="card-dropdown" class:show=move || menu_open.get()>
                        <button
                            class="dropdown-item edit-item"
                            on:click=move |e| {
                                e.stop_propagation();
                                set_menu_open.set(false);
                                if let Some(dialog) = edit_dialog_ref.get() {
                                    let _ = dialog.show_modal();
                                }
                            }
                        >"Editar card"</button>
                        <button class="dropdown-item delete-item" on:click=on_delete>"Excluir card"</button>
                    </div>
                </div>
            </div>
            <div class="card-amount">{format_brl(card.amount)}</div>
            <CardForm heading="Editar card" initial=card.clone() on_submit=on_edit dialog_ref=edit_dialog_ref />
        </div>
    }
}
