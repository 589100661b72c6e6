use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Success,
    Destructive,
}

impl AlertVariant {
    fn class(&self) -> &'static str {
        match self {
            AlertVariant::Info => "alert alert--info",
            AlertVariant::Success => "alert alert--success",
            AlertVariant::Destructive => "alert alert--destructive",
        }
    }
}

/// Inline status box for form errors and confirmations.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "{variant.class()} {class}",
            role: "alert",
            {children}
        }
    }
}
