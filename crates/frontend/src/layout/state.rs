//! Page state of the storefront as plain data plus transition functions.
//!
//! Delayed transitions (overlay close, notification expiry) are split in two:
//! the request returns a ticket, and the timer later hands the ticket back.
//! Every new request of the same kind bumps a generation counter, so a stale
//! ticket is ignored instead of undoing newer state.

use contracts::catalog::{Catalog, Service};
use contracts::enums::service_category::ServiceCategory;

/// Delay between `request_close` and the overlay leaving the DOM.
pub const OVERLAY_CLOSE_DELAY_MS: u32 = 300;
/// Lifetime of a notification before it hides itself.
pub const NOTIFICATION_TTL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    /// Kept after hiding so the toast does not flash empty on the next show.
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub active_category: ServiceCategory,
    pub selected: Option<Service>,
    pub overlay_open: bool,
    pub closing: bool,
    pub notification: NotificationState,
    close_generation: u64,
    notification_generation: u64,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_category(&mut self, category: ServiceCategory) {
        self.active_category = category;
    }

    /// Services of the active tab, in catalog order.
    pub fn visible_services<'a>(&self, catalog: &'a Catalog) -> &'a [Service] {
        catalog.services(self.active_category)
    }

    /// Opens the overlay for `service`. A close still in flight is abandoned.
    pub fn activate_service(&mut self, service: Service) {
        self.selected = Some(service);
        self.overlay_open = true;
        self.closing = false;
        self.close_generation += 1;
    }

    /// Starts the exit animation. Returns `None` when there is nothing to
    /// close or a close is already running.
    pub fn request_close(&mut self) -> Option<CloseTicket> {
        if !self.overlay_open || self.closing {
            return None;
        }
        self.closing = true;
        self.close_generation += 1;
        Some(CloseTicket(self.close_generation))
    }

    /// Completes a close once the animation delay has elapsed.
    /// Returns `false` if the ticket was superseded.
    pub fn finish_close(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 != self.close_generation || !self.closing {
            return false;
        }
        self.overlay_open = false;
        self.selected = None;
        self.closing = false;
        true
    }

    pub fn show_notification(&mut self, message: impl Into<String>) -> NotificationTicket {
        self.notification.message = message.into();
        self.notification.visible = true;
        self.notification_generation += 1;
        NotificationTicket(self.notification_generation)
    }

    /// Hides the notification if `ticket` belongs to the latest show.
    pub fn expire_notification(&mut self, ticket: NotificationTicket) -> bool {
        if ticket.0 != self.notification_generation || !self.notification.visible {
            return false;
        }
        self.notification.visible = false;
        true
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.visible = false;
    }

    /// Service shown in the overlay, if the overlay is mounted.
    pub fn overlay_service(&self) -> Option<&Service> {
        if self.overlay_open {
            self.selected.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_service::ui::details::view_model::copied_message;
    use crate::domain::a001_service::ui::list::{shows_empty_state, EMPTY_STATE_MESSAGE};
    use contracts::catalog::ServiceId;

    enum Pending {
        Close(CloseTicket),
        Expire(NotificationTicket),
    }

    /// Stand-in for the browser timers: fires queued tickets in due order.
    #[derive(Default)]
    struct ManualClock {
        now: u32,
        queue: Vec<(u32, Pending)>,
    }

    impl ManualClock {
        fn close(&mut self, state: &mut PageState) {
            if let Some(ticket) = state.request_close() {
                self.queue
                    .push((self.now + OVERLAY_CLOSE_DELAY_MS, Pending::Close(ticket)));
            }
        }

        fn notify(&mut self, state: &mut PageState, message: &str) {
            let ticket = state.show_notification(message);
            self.queue
                .push((self.now + NOTIFICATION_TTL_MS, Pending::Expire(ticket)));
        }

        fn advance(&mut self, state: &mut PageState, ms: u32) {
            self.now += ms;
            self.queue.sort_by_key(|(due, _)| *due);
            let now = self.now;
            let (due, later): (Vec<_>, Vec<_>) =
                self.queue.drain(..).partition(|(at, _)| *at <= now);
            self.queue = later;
            for (_, pending) in due {
                match pending {
                    Pending::Close(ticket) => {
                        state.finish_close(ticket);
                    }
                    Pending::Expire(ticket) => {
                        state.expire_notification(ticket);
                    }
                }
            }
        }
    }

    fn service(id: &str, category: ServiceCategory) -> Service {
        Service {
            id: ServiceId::new(id),
            name: id.to_uppercase(),
            logo: format!("{id}.com"),
            price: "$1".into(),
            single_price: "$1".into(),
            bulk_price: "$0.50".into(),
            category,
            delivery_eta: None,
            requirements: vec![],
            information: vec![],
            brand_color: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_file(contracts::catalog::CatalogFile {
            accounts: vec![
                service("a1", ServiceCategory::Accounts),
                service("a2", ServiceCategory::Accounts),
            ],
            mail: vec![service("m1", ServiceCategory::Mail)],
            discord_server: "https://discord.gg/test".into(),
            support_username: "vault_support".into(),
            telegram_username: "@vault".into(),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::new();
        assert_eq!(state.active_category, ServiceCategory::Accounts);
        assert!(state.selected.is_none());
        assert!(!state.overlay_open);
        assert!(!state.closing);
        assert!(!state.notification.visible);
    }

    #[test]
    fn test_visible_services_follow_active_category() {
        let catalog = catalog();
        let mut state = PageState::new();
        for category in ServiceCategory::all() {
            state.select_category(category);
            let visible = state.visible_services(&catalog);
            assert!(visible.iter().all(|s| s.category == category));
            assert_eq!(visible, catalog.services(category));
        }
    }

    #[test]
    fn test_empty_partition_shows_empty_state() {
        let catalog = Catalog::from_file(contracts::catalog::CatalogFile {
            accounts: vec![service("a1", ServiceCategory::Accounts)],
            mail: vec![],
            ..Default::default()
        });
        let mut state = PageState::new();

        state.select_category(ServiceCategory::Mail);
        let visible = state.visible_services(&catalog);
        assert!(visible.is_empty());
        assert!(shows_empty_state(visible));
        assert_eq!(EMPTY_STATE_MESSAGE, "No services available");

        state.select_category(ServiceCategory::Accounts);
        let visible = state.visible_services(&catalog);
        assert_eq!(visible.len(), 1);
        assert!(!shows_empty_state(visible));
    }

    #[test]
    fn test_activate_replaces_selection() {
        let mut state = PageState::new();
        state.activate_service(service("a1", ServiceCategory::Accounts));
        state.activate_service(service("a2", ServiceCategory::Accounts));
        assert_eq!(state.overlay_service().unwrap().id, ServiceId::new("a2"));
        assert!(state.overlay_open);
        assert!(!state.closing);
    }

    #[test]
    fn test_close_after_delay() {
        let mut clock = ManualClock::default();
        let mut state = PageState::new();
        state.activate_service(service("a1", ServiceCategory::Accounts));

        clock.close(&mut state);
        assert!(state.closing);
        assert!(state.overlay_open, "overlay stays mounted during the exit animation");

        clock.advance(&mut state, OVERLAY_CLOSE_DELAY_MS - 1);
        assert!(state.overlay_open);

        clock.advance(&mut state, 1);
        assert!(!state.overlay_open);
        assert!(!state.closing);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_second_close_during_window_is_ignored() {
        let mut state = PageState::new();
        state.activate_service(service("a1", ServiceCategory::Accounts));
        let first = state.request_close().unwrap();
        assert!(state.request_close().is_none());
        assert!(state.finish_close(first));
        assert!(!state.overlay_open);
    }

    #[test]
    fn test_close_without_overlay_is_noop() {
        let mut state = PageState::new();
        assert!(state.request_close().is_none());
        assert!(!state.closing);
    }

    #[test]
    fn test_reactivation_during_close_keeps_latest_service() {
        let mut clock = ManualClock::default();
        let mut state = PageState::new();
        state.activate_service(service("a1", ServiceCategory::Accounts));

        clock.close(&mut state);
        clock.advance(&mut state, 100);
        state.activate_service(service("a2", ServiceCategory::Accounts));
        clock.advance(&mut state, OVERLAY_CLOSE_DELAY_MS);

        assert!(state.overlay_open);
        assert!(!state.closing);
        assert_eq!(state.overlay_service().unwrap().id, ServiceId::new("a2"));
    }

    #[test]
    fn test_notification_restart_replaces_text_and_timer() {
        let mut clock = ManualClock::default();
        let mut state = PageState::new();

        clock.notify(&mut state, "foo");
        clock.advance(&mut state, 1000);
        clock.notify(&mut state, "bar");

        clock.advance(&mut state, 2000);
        assert!(state.notification.visible, "first timer must not hide the second toast");
        assert_eq!(state.notification.message, "bar");

        clock.advance(&mut state, 999);
        assert!(state.notification.visible);

        clock.advance(&mut state, 1);
        assert!(!state.notification.visible);
        assert_eq!(state.notification.message, "bar");
    }

    #[test]
    fn test_manual_dismiss() {
        let mut state = PageState::new();
        let ticket = state.show_notification("hello");
        state.dismiss_notification();
        assert!(!state.notification.visible);
        assert!(!state.expire_notification(ticket));
        assert_eq!(state.notification.message, "hello");
    }

    #[test]
    fn test_end_to_end_browse_and_copy() {
        let catalog = catalog();
        let mut clock = ManualClock::default();
        let mut state = PageState::new();

        assert_eq!(state.active_category, ServiceCategory::Accounts);
        let ids: Vec<&str> = state
            .visible_services(&catalog)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a1", "a2"]);

        let target = catalog
            .services(ServiceCategory::Accounts)
            .iter()
            .find(|s| s.id == ServiceId::new("a2"))
            .cloned()
            .unwrap();
        state.activate_service(target);
        let shown = state.overlay_service().unwrap();
        assert_eq!(shown.name, "A2");
        assert_eq!(shown.single_price, "$1");
        assert_eq!(shown.bulk_price, "$0.50");

        let handle = &catalog.contacts().support_handle;
        clock.notify(&mut state, &copied_message(handle));
        assert!(state.notification.visible);
        assert!(state.notification.message.contains("vault_support"));

        clock.advance(&mut state, NOTIFICATION_TTL_MS);
        assert!(!state.notification.visible);
    }
}
