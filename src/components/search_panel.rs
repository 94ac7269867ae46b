//! Search Panel Component
//!
//! Keyword input with debounced catalog search and an "add to draft" result list.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, AppContext};
use crate::format::format_price;
use crate::models::CatalogItem;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields, AppStore, Effect};

/// Pending debounce timer; replacing or clearing it cancels the old one
type SearchTimer = StoredValue<Option<Timeout>, LocalStorage>;

fn run_effect(effect: Option<Effect>, store: AppStore, timer: SearchTimer, ctx: AppContext) {
    match effect {
        Some(Effect::ScheduleSearch { seq, query }) => {
            let config = ctx.config();
            let timeout = Timeout::new(config.search_debounce_ms, move || {
                spawn_local(async move {
                    match api::keyword_search(&config, &query).await {
                        Ok(results) => {
                            log::debug!("search {:?} returned {} items", query, results.len());
                            dispatch(&store, Action::SearchCompleted { seq, results });
                        }
                        Err(e) => {
                            log::error!("search {:?} failed: {}", query, e);
                            dispatch(&store, Action::SearchFailed { seq });
                        }
                    }
                });
            });
            timer.set_value(Some(timeout));
        }
        Some(Effect::CancelSearch) => timer.set_value(None),
        _ => {}
    }
}

/// One search result row
#[component]
fn SearchResultRow(item: CatalogItem, store: AppStore, timer: SearchTimer, ctx: AppContext) -> impl IntoView {
    let added = {
        let item = item.clone();
        move || store.cart().read().contains(&item)
    };
    let added_for_row = added.clone();
    let row_item = item.clone();
    let button_item = item.clone();

    let detail = format!(
        "{} - {}",
        item.item_brand.as_deref().unwrap_or("N/A"),
        item.supplier.as_deref().unwrap_or("N/A"),
    );

    view! {
        <div class="search-result-item p-4 border-b border-slate-100 last:border-b-0 flex justify-between items-center">
            <div
                class=move || if added_for_row() { "item-details flex-grow cursor-default pr-4" } else { "item-details flex-grow cursor-pointer pr-4" }
                on:click=move |_| {
                    if store.cart().read_untracked().contains(&row_item) {
                        return;
                    }
                    let effect = dispatch(&store, Action::AddItem { item: row_item.clone(), close_results: true });
                    run_effect(effect, store, timer, ctx);
                }
            >
                <p class="font-medium text-slate-800">{item.item_description.clone()}</p>
                <p class="text-sm text-slate-500">
                    {detail}
                    <span class="text-xs font-mono ml-2">{format!("- P{}", format_price(item.unit_cost))}</span>
                </p>
            </div>
            {move || if added() {
                view! {
                    <button class="add-item-btn bg-slate-200 text-slate-500 text-xs font-bold py-1 px-3 rounded-full cursor-not-allowed" disabled>
                        "Added"
                    </button>
                }.into_any()
            } else {
                let item = button_item.clone();
                view! {
                    <button
                        class="add-item-btn bg-indigo-500 text-white text-xs font-bold py-1 px-3 rounded-full hover:bg-indigo-600 transition ml-4"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(&store, Action::AddItem { item: item.clone(), close_results: false });
                        }
                    >
                        "Add"
                    </button>
                }.into_any()
            }}
        </div>
    }
}

/// Search input plus the floating results panel
#[component]
pub fn SearchPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let timer: SearchTimer = StoredValue::new_local(None);

    view! {
        <div class="relative">
            <div class="relative">
                <input
                    id="searchInput"
                    type="text"
                    placeholder="Search supplies (min. 3 characters)..."
                    autocomplete="off"
                    class="w-full border border-slate-300 rounded-full py-3 px-5 focus:ring-2 focus:ring-indigo-500"
                    prop:value=move || store.search().read().query.clone()
                    on:input=move |ev| {
                        let effect = dispatch(&store, Action::QueryChanged(event_target_value(&ev)));
                        run_effect(effect, store, timer, ctx);
                    }
                />
                <Show when=move || store.search().read().loading>
                    <div class="absolute right-4 top-3 animate-spin h-5 w-5 border-2 border-indigo-500 border-t-transparent rounded-full"></div>
                </Show>
            </div>

            <Show when=move || store.search().read().open>
                <div class="absolute z-20 mt-2 w-full max-h-96 overflow-y-auto bg-white border border-slate-200 rounded-2xl shadow-lg">
                    {move || {
                        let results = store.search().read().results.clone();
                        if results.is_empty() {
                            view! { <div class="p-4 text-slate-500">"No results found."</div> }.into_any()
                        } else {
                            results
                                .into_iter()
                                .map(|item| view! { <SearchResultRow item=item store=store timer=timer ctx=ctx /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                    <div class="sticky bottom-0 p-4 bg-gradient-to-t from-white to-transparent text-right">
                        <button
                            class="bg-slate-700 text-white font-bold py-3 px-6 rounded-full hover:bg-slate-800 transition-all shadow-lg"
                            title="Close Search"
                            on:click=move |_| { dispatch(&store, Action::CloseResults); }
                        >
                            "Exit"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
