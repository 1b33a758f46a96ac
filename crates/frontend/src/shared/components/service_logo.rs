use crate::shared::cdn::cdn_logo_url;
use contracts::catalog::Service;
use contracts::shared::logo::LogoSize;
use leptos::prelude::*;

/// Service logo with a monogram fallback.
///
/// Each instance owns its own failure latch: after the first `error` event the
/// image is never retried for the lifetime of the component.
#[component]
pub fn ServiceLogo(
    service: Service,
    /// Rendered box size in pixels.
    #[prop(optional)]
    display_px: Option<u32>,
    /// Extra class for the logo box.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let display_px = display_px.unwrap_or(96);
    let image_failed = RwSignal::new(false);
    let url = cdn_logo_url(&service.logo, LogoSize::default());
    let alt = format!("{} logo", service.name);
    let letter = service.monogram();
    let px = display_px.to_string();

    view! {
        <div class=format!("service-logo {class}")>
            {move || {
                if url.is_empty() || image_failed.get() {
                    view! { <span class="service-logo__monogram">{letter.clone()}</span> }.into_any()
                } else {
                    view! {
                        <img
                            class="service-logo__image"
                            src=url.clone()
                            alt=alt.clone()
                            width=px.clone()
                            height=px.clone()
                            on:error=move |_| {
                                log::debug!("logo failed to load, showing monogram");
                                image_failed.set(true);
                            }
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
