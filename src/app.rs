//! Requisition Dashboard App
//!
//! Main application component: request form, history and dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{DashboardPanel, HistoryPanel, Modal, ModalHandle, RequestForm};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::{dispatch, Action, AppState};

#[component]
pub fn App(config: Config) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(&config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let modal = ModalHandle::new();

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config, modal);
    provide_context(ctx);

    // Load history on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let config = ctx.config();
        log::debug!("loading history, trigger={}", trigger);
        spawn_local(async move {
            match api::list_requests(&config).await {
                Ok(records) => {
                    log::info!("loaded {} requests", records.len());
                    dispatch(&store, Action::HistoryLoaded(records));
                }
                Err(e) => log::error!("failed to load history: {}", e),
            }
        });
    });

    view! {
        <div class="min-h-screen bg-slate-100 text-slate-800">
            <header class="bg-white border-b border-slate-200 px-8 py-4">
                <h1 class="text-2xl font-bold">"Supply Requisition"</h1>
            </header>

            <main class="max-w-7xl mx-auto p-6 grid lg:grid-cols-5 gap-6">
                <div class="lg:col-span-3 space-y-6">
                    <RequestForm />
                    <DashboardPanel />
                </div>
                <div class="lg:col-span-2">
                    <HistoryPanel />
                </div>
            </main>

            <Modal handle=modal />
        </div>
    }
}
