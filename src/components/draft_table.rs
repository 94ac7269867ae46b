//! Draft Table Component
//!
//! Line items of the request being composed, with quantity inputs.

use leptos::prelude::*;

use crate::format::format_price;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

#[component]
pub fn DraftTable() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store
            .cart()
            .read()
            .items()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| {
                view! {
                    <tr class="hover:bg-slate-50">
                        <td class="p-4 text-sm font-medium">{item.item_description}</td>
                        <td class="p-4 text-sm text-slate-600">{item.item_brand.unwrap_or_else(|| "N/A".to_string())}</td>
                        <td class="p-4 text-sm text-slate-600">{item.supplier.unwrap_or_else(|| "N/A".to_string())}</td>
                        <td class="p-4 text-sm text-slate-600 text-right font-mono">{format_price(item.unit_cost)}</td>
                        <td class="p-4 text-center">
                            <input
                                type="number"
                                min="1"
                                class="w-20 text-center border border-slate-300 rounded-full p-2"
                                prop:value=item.quantity.to_string()
                                on:change=move |ev| {
                                    dispatch(&store, Action::SetQuantity { index, raw: event_target_value(&ev) });
                                }
                            />
                        </td>
                        <td class="p-4 text-center">
                            <button
                                class="text-slate-500 hover:text-red-600 p-2 rounded-full transition-colors"
                                title="Remove Item"
                                on:click=move |_| { dispatch(&store, Action::RemoveItem(index)); }
                            >
                                "✕"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || !store.cart().read().is_empty()
            fallback=|| view! {
                <p class="text-slate-500 text-center py-8">"No items added yet. Search above to add supplies."</p>
            }
        >
            <table class="w-full mt-6">
                <thead>
                    <tr class="text-left text-xs uppercase text-slate-500">
                        <th class="p-4">"Description"</th>
                        <th class="p-4">"Brand"</th>
                        <th class="p-4">"Supplier"</th>
                        <th class="p-4 text-right">"Unit Cost"</th>
                        <th class="p-4 text-center">"Quantity"</th>
                        <th class="p-4"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
