use crate::shared::clipboard::{copy_to_clipboard_with_callback, CopyOutcome};
use crate::shared::config::MESSAGING_LINK_BASE;
use contracts::catalog::CatalogContacts;
use leptos::prelude::*;

/// ViewModel for the service details overlay: contact actions.
#[derive(Clone)]
pub struct ServiceDetailsViewModel {
    pub contacts: CatalogContacts,
    pub on_notify: Option<Callback<String>>,
}

impl ServiceDetailsViewModel {
    pub fn new(contacts: CatalogContacts, on_notify: Option<Callback<String>>) -> Self {
        Self {
            contacts,
            on_notify,
        }
    }

    /// Copies the support chat handle and asks for a confirmation toast.
    pub fn copy_support_handle(&self) {
        let handle = self.contacts.support_handle.clone();
        let on_notify = self.on_notify;
        copy_to_clipboard_with_callback(&self.contacts.support_handle, move |outcome| {
            if outcome == CopyOutcome::Failed {
                log::warn!("support handle was not copied, confirming anyway");
            }
            if let Some(notify) = on_notify {
                notify.run(copied_message(&handle));
            }
        });
    }

    /// Opens the messaging deep link in a new tab. No toast is shown.
    pub fn open_messaging(&self) {
        open_in_new_tab(&messaging_link(&self.contacts.messaging_handle));
    }
}

pub fn copied_message(handle: &str) -> String {
    format!("{} copied to clipboard!", handle)
}

/// `https://t.me/<handle>` with one leading `@` removed.
pub fn messaging_link(handle: &str) -> String {
    let handle = handle.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    format!("{}/{}", MESSAGING_LINK_BASE, handle)
}

fn open_in_new_tab(url: &str) {
    if url.is_empty() {
        log::warn!("open_in_new_tab: empty url ignored");
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("failed to open {}: {:?}", url, e);
    }
}
