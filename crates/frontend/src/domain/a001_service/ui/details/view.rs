use super::view_model::ServiceDetailsViewModel;
use crate::layout::global_context::use_storefront;
use crate::shared::components::service_logo::ServiceLogo;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::catalog::Service;
use leptos::prelude::*;

/// Full details of one service in an overlay.
#[component]
#[allow(non_snake_case)]
pub fn ServiceDetails(
    service: Service,
    on_close: Callback<()>,
    /// Drives the exit animation only.
    #[prop(into)]
    closing: Signal<bool>,
    /// Receives confirmation messages for the toast.
    #[prop(optional)]
    on_notify: Option<Callback<String>>,
) -> impl IntoView {
    let ctx = use_storefront();
    let vm = ServiceDetailsViewModel::new(ctx.contacts(), on_notify);

    let community_url = vm.contacts.community_url.clone();
    let support_handle = vm.contacts.support_handle.clone();
    let messaging_handle = vm.contacts.messaging_handle.clone();
    let copy_label = format!("Copy {} to clipboard", support_handle);
    let messaging_label = format!("Message {} on Telegram", messaging_handle);
    let eta = service
        .delivery_eta()
        .map(str::to_string)
        .unwrap_or_else(|| "-".to_string());

    let requirements = service.requirements.clone();
    let information = service.information.clone();

    let copy_vm = vm.clone();
    let messaging_vm = vm;

    view! {
        <ModalFrame on_close=on_close closing=closing modal_class="service-details".to_string()>
            <button
                class="service-details__close"
                aria-label="Close modal"
                on:click=move |_| on_close.run(())
            >
                {icon("close")}
            </button>

            <div class="service-details__header">
                <div class="service-details__title-row">
                    <ServiceLogo service=service.clone() display_px=80 class="service-details__logo" />
                    <h2 class="service-details__name">{service.name.clone()}</h2>
                </div>

                <section class="service-details__pricing">
                    <h3 class="service-details__section-title">
                        {icon("price")}
                        "Pricing Information"
                    </h3>
                    <div class="service-details__tiers">
                        <div class="service-details__tier">
                            <div class="service-details__tier-label">"Single Account"</div>
                            <div class="service-details__tier-price">{service.single_price.clone()}</div>
                        </div>
                        <div class="service-details__tier">
                            <div class="service-details__tier-label">"Bulk Accounts (100+)"</div>
                            <div class="service-details__tier-price">{service.bulk_price.clone()}</div>
                        </div>
                    </div>
                </section>
            </div>

            <div class="service-details__body">
                <div class="service-details__column">
                    <section class="service-details__panel">
                        <h3 class="service-details__section-title">
                            {icon("check-circle")}
                            "Requirements"
                        </h3>
                        <ul class="service-details__list service-details__list--requirements">
                            {requirements
                                .into_iter()
                                .map(|item| view! { <li><span class="service-details__dot"></span>{item}</li> })
                                .collect_view()}
                        </ul>
                    </section>

                    <section class="service-details__panel">
                        <h3 class="service-details__section-title">
                            {icon("info")}
                            "Information"
                        </h3>
                        <ul class="service-details__list service-details__list--information">
                            {information
                                .into_iter()
                                .map(|item| view! { <li><span class="service-details__dot"></span>{item}</li> })
                                .collect_view()}
                        </ul>
                    </section>
                </div>

                <div class="service-details__column">
                    <a
                        class="button button--primary service-details__community"
                        href=community_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("chat")}
                        <span>"Join Discord Server"</span>
                    </a>

                    <section class="service-details__panel">
                        <h3 class="service-details__section-title">
                            {icon("clock")}
                            "Delivery ETA"
                        </h3>
                        <p class="service-details__eta">{eta}</p>
                    </section>

                    <section class="service-details__panel service-details__panel--grow">
                        <h4 class="service-details__section-title">
                            {icon("support")}
                            "Support Contact"
                        </h4>
                        <div class="service-details__contact">
                            <span class="service-details__contact-label">"Discord"</span>
                            <Button
                                variant="link"
                                size="sm"
                                aria_label=copy_label
                                on_click=Callback::new(move |_| copy_vm.copy_support_handle())
                            >
                                {icon("copy")}
                                {support_handle}
                            </Button>
                        </div>
                        <div class="service-details__contact">
                            <span class="service-details__contact-label">"Telegram"</span>
                            <Button
                                variant="link"
                                size="sm"
                                aria_label=messaging_label
                                on_click=Callback::new(move |_| messaging_vm.open_messaging())
                            >
                                {icon("send")}
                                {messaging_handle}
                            </Button>
                        </div>
                    </section>
                </div>
            </div>
        </ModalFrame>
    }
}
