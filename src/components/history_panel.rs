//! History Panel Component
//!
//! Past requests with a text filter and a "show deleted" toggle.

use leptos::prelude::*;

use crate::components::HistoryCard;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let history = store.history().read();
        store.filter().read().apply(&history)
    });

    view! {
        <section class="bg-white rounded-3xl shadow-sm border border-slate-200 p-6">
            <h2 class="text-xl font-bold text-slate-800 mb-4">"Request History"</h2>
            <div class="flex items-center gap-4 mb-4">
                <input
                    id="historySearchInput"
                    type="text"
                    placeholder="Filter by control number or item..."
                    class="flex-grow border border-slate-300 rounded-full py-2 px-4 text-sm"
                    prop:value=move || store.filter().read().text.clone()
                    on:input=move |ev| { dispatch(&store, Action::SetFilterText(event_target_value(&ev))); }
                />
                <label class="flex items-center gap-2 text-sm text-slate-600">
                    <input
                        id="showDeletedCheckbox"
                        type="checkbox"
                        prop:checked=move || store.filter().read().show_deleted
                        on:change=move |ev| { dispatch(&store, Action::SetShowDeleted(event_target_checked(&ev))); }
                    />
                    "Show deleted"
                </label>
            </div>

            <div id="historyContainer">
                {move || {
                    let records = visible.get();
                    if records.is_empty() {
                        view! {
                            <p class="text-slate-500 text-center py-10">"No requests match the current filters."</p>
                        }.into_any()
                    } else {
                        records
                            .into_iter()
                            .map(|record| view! { <HistoryCard record=record /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
