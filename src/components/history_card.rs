//! History Card Component
//!
//! One saved request with edit, delete, print and expand actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::scroll_to_form;
use crate::context::use_app_context;
use crate::format::{format_date, format_price};
use crate::models::RequestRecord;
use crate::print;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields, Effect};

#[component]
pub fn HistoryCard(record: RequestRecord) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let is_deleted = record.is_deleted();
    let cn = record.control_number.clone();

    let expanded = {
        let cn = cn.clone();
        move || store.expanded().read().contains(&cn)
    };

    let on_edit = {
        let cn = cn.clone();
        move |_| {
            if dispatch(&store, Action::BeginEdit(cn.clone())) == Some(Effect::ScrollToForm) {
                scroll_to_form();
            }
        }
    };

    let on_delete = {
        let cn = cn.clone();
        move |_| {
            let cn = cn.clone();
            spawn_local(async move {
                let confirmed = ctx
                    .modal
                    .confirm(
                        "Delete Request",
                        format!("Are you sure you want to delete request {cn}?\nThis action cannot be undone."),
                    )
                    .await;
                if !confirmed {
                    return;
                }
                match api::delete_request(&ctx.config(), &cn).await {
                    Ok(()) => {
                        log::info!("request {} deleted", cn);
                        ctx.modal.alert("Success", format!("Request {cn} has been deleted."));
                        ctx.reload();
                    }
                    Err(e) => {
                        log::error!("failed to delete {}: {}", cn, e);
                        ctx.modal.alert(
                            "Error",
                            format!("Failed to delete request. Server says: {}", e.detail().unwrap_or("Unknown error")),
                        );
                    }
                }
            });
        }
    };

    let on_print = {
        let cn = cn.clone();
        move |_| {
            let Some(record) = store.history().read_untracked().iter().find(|r| r.control_number == cn).cloned() else {
                ctx.modal.alert("Error", "Could not find the request to print.");
                return;
            };
            spawn_local(async move {
                if let Err(e) = print::print_request(&ctx.config(), &record).await {
                    log::error!("failed to print {}: {}", record.control_number, e);
                    ctx.modal.alert("Error", "Could not open the print dialog.");
                }
            });
        }
    };

    let on_toggle = {
        let cn = cn.clone();
        move |_| { dispatch(&store, Action::ToggleExpanded(cn.clone())); }
    };

    let card_class = if is_deleted {
        "border rounded-2xl mb-4 overflow-hidden transition-all bg-red-50 border-red-200 opacity-70"
    } else {
        "border rounded-2xl mb-4 overflow-hidden transition-all bg-white border-slate-200"
    };
    let edited = record.last_edited.is_some();
    let request_date = format_date(&record.request_date);
    let items = record.items;
    let expanded_for_icon = expanded.clone();

    view! {
        <div class=card_class id=format!("history-{cn}")>
            <div class="p-4 flex justify-between items-center">
                <div>
                    <div class="flex items-center space-x-3">
                        <p class=if is_deleted { "font-semibold text-sm text-slate-500 line-through" } else { "font-semibold text-sm text-slate-800" }>
                            {cn.clone()}
                        </p>
                        {is_deleted.then(|| view! {
                            <span class="text-xs font-bold uppercase tracking-wider text-red-700 bg-red-100 px-2 py-0.5 rounded-full">"Deleted"</span>
                        })}
                    </div>
                    <p class="text-xs text-slate-600 mt-1">
                        {request_date}
                        {edited.then(|| view! { <span class="italic text-indigo-600">" (edited)"</span> })}
                    </p>
                </div>
                <div class="flex items-center space-x-1">
                    <button class="icon-btn text-slate-500 hover:text-indigo-600 disabled:text-slate-300 disabled:cursor-not-allowed" title="Edit" disabled=is_deleted on:click=on_edit>
                        "✎"
                    </button>
                    <button class="icon-btn text-slate-500 hover:text-red-600 disabled:text-slate-300 disabled:cursor-not-allowed" title="Delete" disabled=is_deleted on:click=on_delete>
                        "🗑"
                    </button>
                    <button class="icon-btn text-slate-500 hover:text-gray-700" title="Print" on:click=on_print>
                        "⎙"
                    </button>
                    <button class="history-item-toggle icon-btn text-slate-500" title="View Items" on:click=on_toggle>
                        <span class=move || if expanded_for_icon() { "inline-block transition-transform rotate-180" } else { "inline-block transition-transform" }>
                            "▾"
                        </span>
                    </button>
                </div>
            </div>
            <Show when=expanded.clone()>
                <div class=if is_deleted { "p-4 border-t border-red-200 bg-slate-50 text-xs" } else { "p-4 border-t border-slate-200 bg-slate-50 text-xs" }>
                    <table class="w-full">
                        <thead>
                            <tr class="font-semibold">
                                <td class="pb-2">"Item"</td>
                                <td class="pb-2 text-center">"Qty"</td>
                                <td class="pb-2 text-right">"Cost"</td>
                            </tr>
                        </thead>
                        <tbody>
                            {items.iter().map(|item| view! {
                                <tr>
                                    <td class="py-1.5">
                                        {item.item_description.clone()} " "
                                        <em class="text-slate-500">{format!("({})", item.item_brand.as_deref().unwrap_or("N/A"))}</em>
                                    </td>
                                    <td class="py-1.5 text-center">{item.quantity}</td>
                                    <td class="py-1.5 text-right font-mono">{format_price(item.unit_cost)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
