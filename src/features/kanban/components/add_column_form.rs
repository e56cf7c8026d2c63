use leptos::prelude::*;
use leptos::ev;
use crate::core::config::AppConfig;
use crate::core::models::ColumnDraft;
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn AddColumnForm() -> impl IntoView {
    let hook = use_context::<BoardHook>().expect("board context");
    let config = use_context::<AppConfig>().expect("config context");

    let default_color = config.board.default_color();
    let palette = config.board.palette.clone();

    let (is_adding, set_is_adding) = signal(false);
    let (title, set_title) = signal(String::new());
    let (selected_color, set_selected_color) = signal(default_color);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match ColumnDraft::new(title.get_untracked(), selected_color.get_untracked()) {
            Ok(draft) => {
                hook.add_column.run(draft);
                set_title.set(String::new());
                set_is_adding.set(false);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Column not created: {}", e).into());
            }
        }
    };

    view! {
        {move || {
            if is_adding.get() {
                let swatches = palette
                    .iter()
                    .cloned()
                    .map(|color| {
                        let color_for_click = color.clone();
                        let color_for_class = color.clone();
                        view! {
                            <button
                                type="button"
                                class=format!("color-swatch {}", color)
                                class:selected=move || selected_color.get() == color_for_class
                                on:click=move |_| set_selected_color.set(color_for_click.clone())
                            ></button>
                        }
                    })
                    .collect_view();

                view! {
                    <form class="add-column-form" on:submit=handle_submit>
                        <input
                            type="text"
                            placeholder="Nome da coluna"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                        <label>"Cor da coluna"</label>
                        <div class="color-grid">{swatches}</div>
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| set_is_adding.set(false)>"Cancelar"</button>
                            <button type="submit" class="btn-primary" disabled=move || title.get().trim().is_empty()>"Criar"</button>
                        </div>
                    </form>
                }
                .into_any()
            } else {
                view! {
                    <button class="add-column-btn" on:click=move |_| set_is_adding.set(true)>"+ Adicionar nova coluna"</button>
                }
                .into_any()
            }
        }}
    }
}
