use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (backdrop + positioned surface).
///
/// The frame does not own its lifetime: `on_close` asks the host to close, and
/// the host flips `closing` to play the exit animation before unmounting.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (backdrop click, close button in children).
    on_close: Callback<()>,
    /// Switches enter/exit animation classes. No other effect.
    #[prop(into)]
    closing: Signal<bool>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the backdrop itself,
    // so selecting text inside the modal and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: avoids Leptos event delegation calling a dropped handler
            // when the overlay is removed synchronously during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let overlay_class = move || {
        if closing.get() {
            "modal-overlay fade-out"
        } else {
            "modal-overlay fade-in"
        }
    };

    let modal_class_full = move || {
        let animation = if closing.get() { "slide-out" } else { "slide-in" };
        match modal_class.as_deref() {
            Some(cls) => format!("modal {animation} {cls}"),
            None => format!("modal {animation}"),
        }
    };

    view! {
        <div
            class=overlay_class
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=modal_class_full
                role="dialog"
                aria-modal="true"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
