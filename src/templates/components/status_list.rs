use crate::api::models::{Lead, Partner};
use crate::domain::status_board::{
    lead_actions, partner_actions, StatusAction, StatusBoard, StatusStyle, Tracked,
};
use crate::i18n::{get_translation, Language};
use chrono::{DateTime, Utc};
use crate::templates::{dom_id, segment};
use maud::{html, Markup};

pub fn status_badge<S: StatusStyle>(status: S, lang: Language) -> Markup {
    html! {
        span class={ "status-badge inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium " (status.tone().badge_class()) }
             data-status=(status.value())
        {
            (get_translation(lang, status.label_key()))
        }
    }
}

/// One tab of the status filter bar.
pub struct StatusTab<'a> {
    pub href: String,
    pub label: &'a str,
    pub count: usize,
    pub active: bool,
}

pub fn status_tabs(tabs: &[StatusTab<'_>]) -> Markup {
    html! {
        div class="mb-6 border-b border-gray-200" {
            nav class="status-tabs -mb-px flex space-x-8" {
                @for tab in tabs {
                    a href=(tab.href)
                      class={ "py-2 px-1 border-b-2 font-medium text-sm "
                              (if tab.active { "active border-blue-500 text-blue-600" } else { "border-transparent text-gray-500" }) }
                    { (tab.label) " (" (tab.count) ")" }
                }
            }
        }
    }
}

/// The action buttons of one row. Posting swaps the whole row via htmx, and
/// only this row's buttons are disabled while its request is in flight.
fn status_actions<T>(
    board: &StatusBoard<T>,
    item: &T,
    actions: &[StatusAction<T::Status>],
    post_url: &str,
    row_id: &str,
    lang: Language,
) -> Markup
where
    T: Tracked,
    T::Status: StatusStyle,
{
    let t = |key| get_translation(lang, key);
    let in_flight = board.is_in_flight(item.id());

    html! {
        form method="post" action=(post_url)
             hx-post=(post_url) hx-target=(format!("#{row_id}")) hx-swap="outerHTML"
             hx-disabled-elt="find button"
             class="status-actions flex flex-wrap gap-2 mt-4"
        {
            @for action in actions {
                button type="submit" name="status" value=(action.target.value())
                       disabled[board.is_action_disabled(item, action.target)]
                       class={ "px-3 py-1 rounded-md text-xs font-medium " (action.tone.badge_class()) }
                {
                    @if in_flight { (t("admin.updating")) } @else { (t(action.label_key)) }
                }
            }
        }
    }
}

fn format_date(ts: Option<&DateTime<Utc>>, lang: Language) -> String {
    match ts {
        Some(ts) => ts.format(&format!("{} %H:%M", lang.date_format())).to_string(),
        None => "-".to_string(),
    }
}

pub fn lead_row(board: &StatusBoard<Lead>, lead: &Lead, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let row_id = dom_id("lead", &lead.id);
    let post_url = format!("/admin/leads/{}/status", segment(&lead.id));

    html! {
        li id=(row_id) class="lead-row px-6 py-4" {
            div class="flex items-center justify-between mb-2" {
                h3 class="text-lg font-medium text-gray-900 truncate" { (lead.name) }
                (status_badge(lead.status, lang))
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm text-gray-600 mb-3" {
                div { "📧 " a href=(format!("mailto:{}", lead.email)) class="text-blue-600" { (lead.email) } }
                @if let Some(phone) = &lead.phone {
                    div { "📞 " a href=(format!("tel:{phone}")) class="text-blue-600" { (phone) } }
                }
                div { "📅 " (format_date(lead.created_at.as_ref(), lang)) }
                @if let Some(listing_id) = &lead.listing_id {
                    div { "🏠 " (t("admin.listing_id")) " " (listing_id) }
                }
            }

            @if let Some(message) = &lead.message {
                div class="bg-gray-50 rounded-lg p-3 mb-3" {
                    p class="text-sm text-gray-700" { (message) }
                }
            }

            (status_actions(board, lead, &lead_actions(lead.status), &post_url, &row_id, lang))
            div id=(format!("{row_id}-alert")) {}
        }
    }
}

pub fn partner_row(board: &StatusBoard<Partner>, partner: &Partner, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let row_id = dom_id("partner", &partner.id);
    let post_url = format!("/admin/partners/{}/status", segment(&partner.id));

    html! {
        li id=(row_id) class="partner-row px-6 py-4" {
            div class="flex items-center justify-between mb-2" {
                h3 class="text-lg font-medium text-gray-900 truncate" { (partner.name) }
                (status_badge(partner.status, lang))
            }

            div class="grid grid-cols-1 md:grid-cols-2 gap-2 text-sm text-gray-600 mb-3" {
                div { "📧 " a href=(format!("mailto:{}", partner.email)) class="text-blue-600" { (partner.email) } }
                @if let Some(phone) = &partner.phone {
                    div { "📞 " a href=(format!("tel:{phone}")) class="text-blue-600" { (phone) } }
                }
                @if let Some(company) = &partner.company_name {
                    div { "🏢 " (company) }
                }
                div { "📅 " (t("admin.registered")) " " (format_date(partner.created_at.as_ref(), lang)) }
            }

            (status_actions(board, partner, &partner_actions(partner.status), &post_url, &row_id, lang))
            div id=(format!("{row_id}-alert")) {}
        }
    }
}

pub fn leads_list(board: &StatusBoard<Lead>, lang: Language) -> Markup {
    html! {
        div class="bg-white shadow overflow-hidden rounded-md" {
            ul class="leads-list divide-y divide-gray-200" {
                @for lead in board.items() {
                    (lead_row(board, lead, lang))
                }
            }
        }
    }
}

pub fn partners_list(board: &StatusBoard<Partner>, lang: Language) -> Markup {
    html! {
        div class="bg-white shadow overflow-hidden rounded-md" {
            ul class="partners-list divide-y divide-gray-200" {
                @for partner in board.items() {
                    (partner_row(board, partner, lang))
                }
            }
        }
    }
}
