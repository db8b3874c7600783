//! Right-hand "Model Context" panel with sample documents and recent items.

use leptos::prelude::*;

use crate::state::catalog::{CONTEXT_DOCUMENTS, ContextDocument, RECENT_ITEMS, descriptor};
use crate::state::ui::UiState;

/// Collapsible side panel. Closed via its header button, reopened from the
/// sidebar.
#[component]
pub fn ContextPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let open = move || ui.with(|u| u.context_panel_open);

    view! {
        <aside class="context-panel" class:context-panel--closed=move || !open()>
            <Show when=open>
                <div class="context-panel__header">
                    <h3 class="context-panel__title">"Model Context"</h3>
                    <button
                        class="context-panel__close"
                        title="Close panel"
                        on:click=move |_| ui.update(UiState::close_context_panel)
                    >
                        "›"
                    </button>
                </div>

                <div class="context-panel__documents">
                    {CONTEXT_DOCUMENTS
                        .into_iter()
                        .map(|doc| view! { <DocumentCard doc=doc/> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="recent-panel">
                    <div class="recent-panel-header">"Recent"</div>
                    {RECENT_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="recent-item">
                                    <div class="recent-item-title">{item.title}</div>
                                    <div class="recent-item-meta">{item.age}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="context-panel__footer">
                    <span class="status-dot"></span>
                    "CROSS-MODEL SYNC ACTIVE"
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn DocumentCard(doc: ContextDocument) -> impl IntoView {
    let model = descriptor(doc.model);

    view! {
        <div class="document-card" data-model=doc.model.as_str()>
            <div class="document-card__body">
                <span class="status-dot"></span>
                <div>
                    <p class="document-card__name">{doc.name}</p>
                    <p class="document-card__size">{doc.size}</p>
                </div>
            </div>
            <div class="document-card__model">{model.name}</div>
        </div>
    }
}
