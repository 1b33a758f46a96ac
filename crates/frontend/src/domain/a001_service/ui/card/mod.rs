use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::service_logo::ServiceLogo;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::catalog::Service;
use leptos::ev;
use leptos::prelude::*;

/// Summary tile of one service.
///
/// Activation only reports upward; opening the overlay is the page's job.
#[component]
#[allow(non_snake_case)]
pub fn ServiceCard(
    service: Service,
    on_select: Callback<()>,
    /// Entrance animation delay for the staggered grid.
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let name = service.name.clone();
    let price = service.price.clone();
    let eta = service.delivery_eta().map(str::to_string);
    let card_class = format!("service-card {}", service.brand_color);
    let label = format!("{} details", service.name);

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == " " {
            ev.prevent_default();
            on_select.run(());
        }
    };

    view! {
        <div
            class="service-card__hit"
            role="button"
            tabindex="0"
            aria-label=label
            on:click=move |_| on_select.run(())
            on:keydown=handle_keydown
        >
            <CardAnimated class=card_class delay_ms=delay_ms>
                <div class="service-card__decor service-card__decor--top"></div>
                <div class="service-card__decor service-card__decor--bottom"></div>

                <div class="service-card__content">
                    <ServiceLogo service=service display_px=96 class="service-card__logo" />

                    <h3 class="service-card__name">{name}</h3>

                    <div class="service-card__price">
                        <Badge variant="price">{format!("From {}", price)}</Badge>
                    </div>

                    {eta.map(|eta| view! {
                        <div class="service-card__eta">
                            <Badge variant="eta">
                                {icon("clock")}
                                <span class="service-card__eta-text">{eta}</span>
                            </Badge>
                        </div>
                    })}

                    <div class="service-card__hover-indicator">{icon("chevron-right")}</div>
                </div>
            </CardAnimated>
        </div>
    }
}
