//! Request Form Component
//!
//! Create/edit form: search, draft table, submit and cancel-edit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DraftTable, SearchPanel};
use crate::context::use_app_context;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

const FORM_SECTION_ID: &str = "requestFormSection";

/// Smooth-scroll the form into view (used when a history entry is opened for editing)
pub fn scroll_to_form() {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_SECTION_ID))
    else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// True when the click landed inside the form section
fn inside_form(ev: &web_sys::MouseEvent) -> bool {
    let section = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_SECTION_ID));
    let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (section, target) {
        (Some(section), Some(target)) => section.contains(Some(&target)),
        _ => false,
    }
}

#[component]
pub fn RequestForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (submitting, set_submitting) = signal(false);

    // Clicking anywhere outside the form hides the search results
    let click_away = window_event_listener(leptos::ev::click, move |ev| {
        if store.search().read_untracked().open && !inside_form(&ev) {
            dispatch(&store, Action::CloseResults);
        }
    });
    on_cleanup(move || click_away.remove());

    let submit = move |_| {
        let items = store.cart().read_untracked().payload();
        if items.is_empty() || submitting.get_untracked() {
            return;
        }
        let mode = store.mode().get_untracked();
        let config = ctx.config();
        set_submitting.set(true);

        spawn_local(async move {
            let result = match mode.editing() {
                Some(control_number) => api::update_request(&config, control_number, &items).await,
                None => api::create_request(&config, &items).await,
            };
            set_submitting.set(false);

            match result {
                Ok(receipt) => {
                    let verb = if mode.editing().is_some() { "updated" } else { "submitted" };
                    log::info!("request {} {}", receipt.control_number, verb);
                    ctx.modal.alert(
                        "Success!",
                        format!("Request {verb} successfully!\nControl Number: {}", receipt.control_number),
                    );
                    dispatch(&store, Action::ResetForm);
                    ctx.reload();
                }
                Err(e) => {
                    log::error!("failed to submit request: {}", e);
                    ctx.modal.alert("Error", "Failed to submit request. Please try again.");
                }
            }
        });
    };

    view! {
        <section id=FORM_SECTION_ID class="bg-white rounded-3xl shadow-sm border border-slate-200 p-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-xl font-bold text-slate-800">{move || store.mode().read().title()}</h2>
                <Show when=move || store.mode().read().editing().is_some()>
                    <button
                        class="text-sm text-slate-500 hover:text-slate-800 underline"
                        on:click=move |_| { dispatch(&store, Action::ResetForm); }
                    >
                        "Cancel Edit"
                    </button>
                </Show>
            </div>

            <SearchPanel />
            <DraftTable />

            <div class="mt-6 text-right">
                <button
                    class="bg-indigo-600 text-white font-bold py-3 px-8 rounded-full hover:bg-indigo-700 transition disabled:bg-slate-300 disabled:cursor-not-allowed"
                    prop:disabled=move || store.cart().read().is_empty() || submitting.get()
                    on:click=submit
                >
                    {move || if submitting.get() { "Saving..." } else { store.mode().read().submit_label() }}
                </button>
            </div>
        </section>
    }
}
