use crate::layout::global_context::StorefrontContext;
use crate::layout::Shell;
use crate::shared::data::catalog::bundled_catalog;
use contracts::enums::service_category::ServiceCategory;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let catalog = bundled_catalog().clone();
    log::info!(
        "catalog loaded: {} accounts, {} mail",
        catalog.services(ServiceCategory::Accounts).len(),
        catalog.services(ServiceCategory::Mail).len(),
    );

    // Provide the storefront context (catalog + page state) to the whole app.
    provide_context(StorefrontContext::new(catalog));

    view! {
        <ConfigProvider>
            <Shell />
        </ConfigProvider>
    }
}
