use maud::{html, Markup};

/// Red panel shown when a page could not load its data.
pub fn error_panel(message: &str, hint: Option<&str>) -> Markup {
    html! {
        div class="text-center py-12" {
            div class="error-panel bg-red-50 border border-red-200 rounded-lg p-6 max-w-md mx-auto" {
                p class="text-red-800" { "⚠️ " (message) }
                @if let Some(hint) = hint {
                    p class="text-red-600 text-sm mt-2" { (hint) }
                }
            }
        }
    }
}

/// Yellow "nothing here" panel.
pub fn empty_panel(icon: &str, title: &str, body: &str, cta: Option<(&str, &str)>) -> Markup {
    html! {
        div class="text-center py-12" {
            div class="empty-panel bg-yellow-50 border border-yellow-200 rounded-lg p-8 max-w-md mx-auto" {
                div class="text-yellow-600 text-6xl mb-4" { (icon) }
                h3 class="text-lg font-semibold text-yellow-800 mb-2" { (title) }
                p class="text-yellow-700 mb-4" { (body) }
                @if let Some((href, label)) = cta {
                    a href=(href) class="inline-block bg-yellow-100 text-yellow-800 px-4 py-2 rounded-md" { (label) }
                }
            }
        }
    }
}

/// Blocking notice for a failed action.
pub fn alert(message: &str) -> Markup {
    html! {
        div role="alert" class="alert bg-red-50 border border-red-200 rounded-md p-3 mt-2" {
            p class="text-red-800 text-sm" { (message) }
        }
    }
}
