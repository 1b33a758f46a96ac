use crate::layout::state::{PageState, NOTIFICATION_TTL_MS, OVERLAY_CLOSE_DELAY_MS};
use contracts::catalog::{Catalog, CatalogContacts, Service};
use contracts::enums::service_category::ServiceCategory;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Storefront-wide context: the bundled catalog and the page state.
///
/// Timers live here; `PageState` itself stays free of browser APIs.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub catalog: StoredValue<Catalog>,
    pub state: RwSignal<PageState>,
}

impl StorefrontContext {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            state: RwSignal::new(PageState::new()),
        }
    }

    pub fn contacts(&self) -> CatalogContacts {
        self.catalog.with_value(|c| c.contacts().clone())
    }

    pub fn active_category(&self) -> ServiceCategory {
        self.state.with(|s| s.active_category)
    }

    /// Services of the active tab; re-runs when the tab changes.
    pub fn visible_services(&self) -> Vec<Service> {
        let category = self.active_category();
        self.catalog
            .with_value(|c| c.services(category).to_vec())
    }

    pub fn select_category(&self, category: ServiceCategory) {
        log::debug!("select_category: {}", category);
        self.state.update(|s| s.select_category(category));
    }

    pub fn open_service(&self, service: Service) {
        log::debug!("open_service: id='{}'", service.id);
        self.state.update(|s| s.activate_service(service));
    }

    /// Plays the exit animation, then unmounts the overlay.
    pub fn close_overlay(&self) {
        let Some(ticket) = self
            .state
            .try_update(|s| s.request_close())
            .flatten()
        else {
            log::debug!("close_overlay: nothing to close");
            return;
        };

        let state = self.state;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(OVERLAY_CLOSE_DELAY_MS).await;
            let finished = state
                .try_update(|s| s.finish_close(ticket))
                .unwrap_or(false);
            if !finished {
                log::debug!("close_overlay: superseded by a newer selection");
            }
        });
    }

    /// Shows `message` for `NOTIFICATION_TTL_MS`, replacing any toast on screen.
    pub fn notify(&self, message: String) {
        log::info!("notify: {}", message);
        let Some(ticket) = self.state.try_update(|s| s.show_notification(message)) else {
            return;
        };

        let state = self.state;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            let expired = state
                .try_update(|s| s.expire_notification(ticket))
                .unwrap_or(false);
            if !expired {
                log::debug!("notify: superseded by a newer notification or dismissed");
            }
        });
    }

    pub fn dismiss_notification(&self) {
        self.state.update(|s| s.dismiss_notification());
    }
}

pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext context not found")
}
