//! Left sidebar: brand block, profile button, panel toggle, and the
//! reasoning-engine selector.

use leptos::prelude::*;

use crate::state::catalog::{MODELS, descriptor};
use crate::state::ui::UiState;

/// Left sidebar of the chat view.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let current_name = move || descriptor(ui.with(|u| u.selected_model)).name;
    let menu_open = move || ui.with(|u| u.model_menu_open);
    let panel_label = move || if ui.with(|u| u.context_panel_open) { "Hide context" } else { "Show context" };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <div class="identra-logo-slot"></div>
                <div class="identra-title-block">
                    <div class="identra-title">"IDENTRA"</div>
                    <div class="identra-user-label">"OS Console"</div>
                </div>
            </div>

            <button class="identra-profile">
                <div class="identra-avatar"></div>
                <div class="identra-profile-text">
                    <span class="identra-profile-name">"You"</span>
                    <span class="identra-profile-meta">"Profile details"</span>
                </div>
                <span class="sidebar__chevron">"▾"</span>
            </button>

            <button class="sidebar__panel-toggle" on:click=move |_| ui.update(UiState::toggle_context_panel)>
                {panel_label}
            </button>

            <div class="sidebar__engine">
                <div class="model-box-label">"Reasoning engine"</div>
                <div class="model-box" on:click=move |_| ui.update(UiState::toggle_model_menu)>
                    <div class="model-box-value">{current_name}</div>
                    <span class="sidebar__chevron">"▾"</span>

                    <Show when=menu_open>
                        <div class="model-box-menu" on:click=move |ev| ev.stop_propagation()>
                            {MODELS
                                .into_iter()
                                .map(|model| {
                                    let id = model.id;
                                    view! {
                                        <button
                                            class="model-box-item"
                                            data-model=id.as_str()
                                            on:click=move |_| ui.update(|u| u.select_model(id))
                                        >
                                            <span class="model-box-item__icon">{model.icon}</span>
                                            {model.name}
                                            <span class="model-box-item__detail">{model.menu_detail}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </Show>
                </div>
            </div>
        </aside>
    }
}
