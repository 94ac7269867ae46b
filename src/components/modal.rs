//! Modal Dialog Component
//!
//! Alert and confirm dialogs shared by the whole page.

use futures::channel::oneshot;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogKind {
    Alert,
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    /// Rendered one paragraph per line
    pub message: String,
    pub kind: DialogKind,
}

/// Holds the resolver of the one outstanding confirmation.
///
/// Arming again drops the previous sender, so an earlier confirmation
/// resolves `false` instead of hanging.
#[derive(Debug, Default)]
pub struct ConfirmSlot {
    pending: Option<oneshot::Sender<bool>>,
}

impl ConfirmSlot {
    pub fn arm(&mut self) -> oneshot::Receiver<bool> {
        let (tx, rx) = oneshot::channel();
        self.pending = Some(tx);
        rx
    }

    pub fn resolve(&mut self, answer: bool) {
        if let Some(tx) = self.pending.take() {
            // receiver may already be gone
            let _ = tx.send(answer);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Await a confirmation; a dropped sender counts as "no"
pub async fn answer(rx: oneshot::Receiver<bool>) -> bool {
    rx.await.unwrap_or(false)
}

/// Handle used by components to open dialogs
#[derive(Clone, Copy)]
pub struct ModalHandle {
    dialog: RwSignal<Option<Dialog>>,
    slot: StoredValue<ConfirmSlot>,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self {
            dialog: RwSignal::new(None),
            slot: StoredValue::new(ConfirmSlot::default()),
        }
    }

    pub fn alert(&self, title: impl Into<String>, message: impl Into<String>) {
        self.slot.update_value(|slot| slot.resolve(false));
        self.dialog.set(Some(Dialog {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Alert,
        }));
    }

    /// Resolves true only when the Confirm button is clicked
    pub async fn confirm(&self, title: impl Into<String>, message: impl Into<String>) -> bool {
        let mut receiver = None;
        self.slot.update_value(|slot| receiver = Some(slot.arm()));
        self.dialog.set(Some(Dialog {
            title: title.into(),
            message: message.into(),
            kind: DialogKind::Confirm,
        }));
        match receiver {
            Some(rx) => answer(rx).await,
            None => false,
        }
    }

    pub fn close(&self, answer: bool) {
        self.dialog.set(None);
        self.slot.update_value(|slot| slot.resolve(answer));
    }
}

#[component]
pub fn Modal(handle: ModalHandle) -> impl IntoView {
    let dialog = handle.dialog;

    view! {
        {move || dialog.get().map(|d| {
            let buttons = match d.kind {
                DialogKind::Alert => view! {
                    <button
                        class="bg-indigo-600 text-white font-bold py-2 px-5 rounded-full hover:bg-indigo-700 transition"
                        on:click=move |_| handle.close(false)
                    >
                        "OK"
                    </button>
                }.into_any(),
                DialogKind::Confirm => view! {
                    <button
                        class="bg-slate-200 text-slate-800 font-bold py-2 px-5 rounded-full hover:bg-slate-300 transition"
                        on:click=move |_| handle.close(false)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="bg-red-600 text-white font-bold py-2 px-5 rounded-full hover:bg-red-700 transition"
                        on:click=move |_| handle.close(true)
                    >
                        "Confirm"
                    </button>
                }.into_any(),
            };

            view! {
                <div
                    class="fixed inset-0 bg-black/50 flex items-center justify-center z-50"
                    on:click=move |_| handle.close(false)
                >
                    <div
                        class="modal-content bg-white rounded-2xl shadow-xl p-6 w-full max-w-md"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <h3 class="text-lg font-bold text-slate-800 mb-2">{d.title}</h3>
                        <div class="text-slate-600 mb-6">
                            {d.message.lines().map(|line| view! { <p>{line.to_string()}</p> }).collect_view()}
                        </div>
                        <div class="flex justify-end space-x-3">{buttons}</div>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_confirm_resolves_with_answer() {
        let mut slot = ConfirmSlot::default();
        let rx = slot.arm();
        assert!(slot.is_pending());

        slot.resolve(true);
        assert!(!slot.is_pending());
        assert!(block_on(answer(rx)));
    }

    #[test]
    fn test_dismiss_resolves_false() {
        let mut slot = ConfirmSlot::default();
        let rx = slot.arm();
        slot.resolve(false);
        assert!(!block_on(answer(rx)));
    }

    #[test]
    fn test_second_confirm_supersedes_first() {
        let mut slot = ConfirmSlot::default();
        let first = slot.arm();
        let second = slot.arm();
        slot.resolve(true);

        assert!(!block_on(answer(first)));
        assert!(block_on(answer(second)));
    }

    #[test]
    fn test_resolve_without_pending_is_noop() {
        let mut slot = ConfirmSlot::default();
        slot.resolve(true);
        assert!(!slot.is_pending());
    }
}
