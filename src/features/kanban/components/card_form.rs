use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use crate::core::format::{format_brl, mask_amount_input, parse_masked_amount};
use crate::core::models::{Card, CardDraft};

/// Dialog for creating a card, or editing one when `initial` is given.
#[component]
pub fn CardForm(
    #[prop(into)] heading: String,
    #[prop(optional)] initial: Option<Card>,
    on_submit: Callback<CardDraft>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let initial_title = initial.as_ref().map(|c| c.title.clone()).unwrap_or_default();
    let initial_amount = initial.as_ref().map(|c| format_brl(c.amount)).unwrap_or_default();

    let (title, set_title) = signal(initial_title.clone());
    let (amount, set_amount) = signal(initial_amount.clone());

    let can_submit = move || !title.get().trim().is_empty() && parse_masked_amount(&amount.get()).is_some();

    let reset_fields = move || {
        set_title.set(initial_title.clone());
        set_amount.set(initial_amount.clone());
    };

    let handle_submit = {
        let reset_fields = reset_fields.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();

            let Some(value) = parse_masked_amount(&amount.get_untracked()) else {
                return;
            };
            match CardDraft::new(title.get_untracked(), value) {
                Ok(draft) => {
                    on_submit.run(draft);
                    reset_fields();
                    if let Some(dialog) = dialog_ref.get() {
                        dialog.close();
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("Card form rejected: {}", e).into());
                }
            }
        }
    };

    // Closing without submitting throws away whatever was typed
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
        reset_fields();
    };

    view! {
        <dialog node_ref=dialog_ref class="modal card-modal" on:click=|e| e.stop_propagation()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{heading}</h3>
                    <button type="button" class="modal-close" on:click=close_modal.clone()>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Nome do projeto"</label>
                        <input
                            type="text"
                            placeholder="Digite o nome do projeto"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"Valor"</label>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="R$ 0,00"
                            on:input=move |ev| set_amount.set(mask_amount_input(&event_target_value(&ev)))
                            prop:value=move || amount.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"Cancelar"</button>
                        <button type="submit" class="btn-primary" disabled=move || !can_submit()>
                            {if is_edit { "Salvar" } else { "Adicionar" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
