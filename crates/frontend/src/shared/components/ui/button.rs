use leptos::prelude::*;

/// Button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "glass", "tab" or "link"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Toggle state for tab buttons, rendered as `aria-pressed` and `--active`
    #[prop(optional)]
    pressed: Option<Signal<bool>>,
    /// Accessible label when the content is an icon
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "glass" => "button--glass",
        "tab" => "button--tab",
        "link" => "button--link",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let active_class = move || {
        if pressed.map(|p| p.get()).unwrap_or(false) {
            "button--active"
        } else {
            ""
        }
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "button {} {} {} {}",
                    variant_class(),
                    size_class(),
                    active_class(),
                    additional_class(),
                )
            }
            aria-pressed=move || pressed.map(|p| p.get().to_string())
            aria-label=move || aria_label.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
