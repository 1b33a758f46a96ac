use crate::domain::a001_service::ui::card::ServiceCard;
use crate::layout::global_context::use_storefront;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::Button;
use contracts::catalog::Service;
use contracts::enums::service_category::ServiceCategory;
use leptos::prelude::*;

pub const EMPTY_STATE_MESSAGE: &str = "No services available";

/// The grid shows `EMPTY_STATE_MESSAGE` instead of tiles.
pub fn shows_empty_state(services: &[Service]) -> bool {
    services.is_empty()
}

/// Category tabs plus the tile grid of the active category.
#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let ctx = use_storefront();

    let tabs = ServiceCategory::all()
        .into_iter()
        .map(|category| {
            view! {
                <Button
                    variant="tab"
                    pressed=Signal::derive(move || ctx.active_category() == category)
                    on_click=Callback::new(move |_| ctx.select_category(category))
                >
                    {category.display_name()}
                </Button>
            }
        })
        .collect_view();

    let services = Memo::new(move |_| ctx.visible_services());

    view! {
        <div class="category-tabs">
            <nav class="category-tabs__nav">{tabs}</nav>
        </div>

        <div class="service-grid">
            <For
                each=move || services.get().into_iter().enumerate()
                key=|(_, service)| (service.category, service.id.clone())
                children=move |(index, service)| {
                    let selected = service.clone();
                    view! {
                        <ServiceCard
                            service=service
                            delay_ms=stagger_delay(index)
                            on_select=Callback::new(move |_| ctx.open_service(selected.clone()))
                        />
                    }
                }
            />
        </div>

        <Show when=move || services.with(|s| shows_empty_state(s))>
            <div class="service-grid__empty">
                <div class="service-grid__empty-text">{EMPTY_STATE_MESSAGE}</div>
            </div>
        </Show>
    }
}
