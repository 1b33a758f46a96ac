use crate::shared::icons::icon;
use leptos::prelude::*;

/// Transient notification in the top-right corner.
///
/// Purely presentational: expiry is scheduled by whoever owns `visible`.
#[component]
pub fn Toast(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="toast slide-in" role="status" aria-live="polite">
                <div class="toast__body">
                    <span class="toast__message">{move || message.get()}</span>
                    <button
                        class="toast__close"
                        aria-label="Dismiss notification"
                        on:click=move |_| on_dismiss.run(())
                    >
                        {icon("close")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
