//! Dashboard Panel Component
//!
//! Top requested items this month and daily request volume for the last 30 days.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::store::{dispatch, use_app_store, Action, AppStateStoreFields};

/// Bar width relative to the largest value, never below 2% so small counts stay visible
fn bar_percent(value: u32, max: u32) -> u32 {
    if max == 0 || value == 0 {
        return 0;
    }
    ((u64::from(value) * 100 / u64::from(max)) as u32).clamp(2, 100)
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Reload alongside history
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let config = ctx.config();
        spawn_local(async move {
            match api::top_items(&config).await {
                Ok(items) => {
                    dispatch(&store, Action::TopItemsLoaded(items));
                }
                Err(e) => log::error!("failed to load top items: {}", e),
            }
            match api::request_frequency(&config).await {
                Ok(days) => {
                    dispatch(&store, Action::FrequencyLoaded(days));
                }
                Err(e) => log::error!("failed to load request frequency: {}", e),
            }
        });
    });

    let top_items = move || {
        let items = store.dashboard().read().top_items.clone();
        if items.is_empty() {
            return view! { <p class="text-slate-500 text-sm py-4">"No requests this month."</p> }.into_any();
        }
        let max = items.iter().map(|i| i.request_count).max().unwrap_or(0);
        items
            .into_iter()
            .map(|item| {
                let width = format!("width: {}%", bar_percent(item.request_count, max));
                view! {
                    <div class="mb-2">
                        <div class="flex justify-between text-xs text-slate-600">
                            <span class="truncate pr-2">{item.item_description}</span>
                            <span class="font-mono">{item.request_count}</span>
                        </div>
                        <div class="h-2 bg-slate-100 rounded-full">
                            <div class="h-2 bg-indigo-500 rounded-full" style=width></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    let frequency = move || {
        let days = store.dashboard().read().frequency.clone();
        if days.is_empty() {
            return view! { <p class="text-slate-500 text-sm py-4">"No requests in the last 30 days."</p> }.into_any();
        }
        let max = days.iter().map(|d| d.request_count).max().unwrap_or(0);
        view! {
            <table class="w-full text-xs">
                <thead>
                    <tr class="font-semibold text-slate-600">
                        <td class="pb-2">"Date"</td>
                        <td class="pb-2 text-center">"Requests"</td>
                        <td class="pb-2 text-center">"Items"</td>
                        <td class="pb-2 w-1/2"></td>
                    </tr>
                </thead>
                <tbody>
                    {days.into_iter().map(|day| {
                        let width = format!("width: {}%", bar_percent(day.request_count, max));
                        view! {
                            <tr>
                                <td class="py-1 font-mono">{day.date}</td>
                                <td class="py-1 text-center">{day.request_count}</td>
                                <td class="py-1 text-center">{day.item_count}</td>
                                <td class="py-1">
                                    <div class="h-2 bg-emerald-500 rounded-full" style=width></div>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <section class="bg-white rounded-3xl shadow-sm border border-slate-200 p-6">
            <h2 class="text-xl font-bold text-slate-800 mb-4">"Dashboard"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-sm font-semibold text-slate-700 mb-3">"Top Items This Month"</h3>
                    {top_items}
                </div>
                <div>
                    <h3 class="text-sm font-semibold text-slate-700 mb-3">"Request Frequency (30 days)"</h3>
                    {frequency}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(10, 10), 100);
        assert_eq!(bar_percent(5, 10), 50);
        assert_eq!(bar_percent(1, 1000), 2);
        assert_eq!(bar_percent(0, 10), 0);
        assert_eq!(bar_percent(3, 0), 0);
    }
}
