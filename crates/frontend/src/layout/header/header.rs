use crate::layout::global_context::use_storefront;
use crate::shared::config::{BRAND_LOGO_PATH, PROFILE_BUILDER_URL};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_storefront();
    let support_url = ctx.catalog.with_value(|c| c.community_url().to_string());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__brand">
                    <img class="header__logo" src=BRAND_LOGO_PATH alt="Vault Logo" width="48" height="48" />
                    <div>
                        <h1 class="header__title">"Account Vault"</h1>
                        <p class="header__tagline">"Best Accounts | Quick Delivery"</p>
                    </div>
                </div>

                <div class="header__actions">
                    <a
                        class="button button--primary"
                        href=PROFILE_BUILDER_URL
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("settings")}
                        <span class="header__label--wide">"Profile Builder"</span>
                        <span class="header__label--narrow">"Builder"</span>
                    </a>
                    <a
                        class="button button--glass"
                        href=support_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("chat")}
                        <span class="header__label--wide">"Support"</span>
                        <span class="header__label--narrow">"Help"</span>
                    </a>
                </div>
            </div>
        </header>
    }
}
