pub mod global_context;
pub mod header;
pub mod state;

use crate::domain::a001_service::ui::details::ServiceDetails;
use crate::domain::a001_service::ui::list::ServiceList;
use crate::shared::toast::Toast;
use global_context::{use_storefront, StorefrontContext};
use header::Header;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Storefront page layout.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |          Category tabs                   |
/// |          Service grid                    |
/// +------------------------------------------+
///   ServiceDetails overlay / Toast on top
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_storefront();

    install_escape_handler(ctx);

    let overlay_service = Memo::new(move |_| ctx.state.with(|s| s.overlay_service().cloned()));
    let closing = Signal::derive(move || ctx.state.with(|s| s.closing));
    let toast_message = Signal::derive(move || ctx.state.with(|s| s.notification.message.clone()));
    let toast_visible = Signal::derive(move || ctx.state.with(|s| s.notification.visible));

    view! {
        <div class="app-layout">
            <Header />

            <main class="app-main">
                <ServiceList />
            </main>

            {move || {
                overlay_service
                    .get()
                    .map(|service| {
                        view! {
                            <ServiceDetails
                                service=service
                                closing=closing
                                on_close=Callback::new(move |_| ctx.close_overlay())
                                on_notify=Callback::new(move |message: String| ctx.notify(message))
                            />
                        }
                    })
            }}

            <Toast
                message=toast_message
                visible=toast_visible
                on_dismiss=Callback::new(move |_| ctx.dismiss_notification())
            />
        </div>
    }
}

/// Escape closes the overlay. Mounted once for the page lifetime.
fn install_escape_handler(ctx: StorefrontContext) {
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" {
                ctx.close_overlay();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        // Shell lives as long as the app; keep closure alive.
        closure.forget();
    }
}
