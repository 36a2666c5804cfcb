use crate::api::models::{Lead, LeadStatus, Partner, PartnerStatus};
use crate::domain::status_board::{StatusBoard, StatusStyle, Tracked};
use crate::i18n::{get_translation, translate_with, Language};
use crate::templates::components::{
    empty_panel, error_panel, leads_list, partners_list, status_tabs, StatusTab,
};
use crate::templates::{desktop_layout, Section};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Listings,
    Leads,
    Partners,
}

pub fn admin_nav(active: AdminTab, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);
    let links = [
        (AdminTab::Listings, "/admin/listings", t("admin.nav.listings")),
        (AdminTab::Leads, "/admin/leads", t("admin.nav.leads")),
        (AdminTab::Partners, "/admin/partners", t("admin.nav.partners")),
    ];

    html! {
        nav class="admin-nav flex space-x-8 mb-8" {
            @for (tab, href, label) in links {
                a href=(href)
                  class={ "px-3 py-2 rounded-md text-sm "
                          (if tab == active { "text-blue-600 font-semibold" } else { "text-gray-500 font-medium" }) }
                { (label) }
            }
        }
    }
}

/// Result of loading one admin collection.
pub enum AdminOutcome<T: Tracked> {
    Loaded(StatusBoard<T>),
    Failed(String),
}

pub struct LeadsVm<'a> {
    pub status: Option<LeadStatus>,
    pub outcome: AdminOutcome<Lead>,
    pub api_url: &'a str,
}

pub struct PartnersVm<'a> {
    pub status: Option<PartnerStatus>,
    pub outcome: AdminOutcome<Partner>,
    pub api_url: &'a str,
}

/// Tabs for "All" plus each status. Counts are over the list that was fetched.
fn tabs_for<'a, S: StatusStyle + PartialEq>(
    base: &str,
    current: Option<S>,
    statuses: &[S],
    fetched: &[S],
    lang: Language,
    all_label: &'a str,
) -> Vec<StatusTab<'a>> {
    let mut tabs = vec![StatusTab {
        href: base.to_string(),
        label: all_label,
        count: fetched.len(),
        active: current.is_none(),
    }];

    for status in statuses {
        tabs.push(StatusTab {
            href: format!("{base}?status={}", status.value()),
            label: get_translation(lang, status.label_key()),
            count: fetched.iter().filter(|s| *s == status).count(),
            active: current.as_ref() == Some(status),
        });
    }

    tabs
}

pub fn leads_page(vm: &LeadsVm<'_>, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    let fetched: Vec<LeadStatus> = match &vm.outcome {
        AdminOutcome::Loaded(board) => board.items().iter().map(|l| l.status).collect(),
        AdminOutcome::Failed(_) => Vec::new(),
    };
    let tabs = tabs_for("/admin/leads", vm.status, &LeadStatus::ALL, &fetched, lang, t("admin.tab.all"));

    desktop_layout(
        t("admin.leads.title"),
        lang,
        Section::Admin,
        html! {
            main class="max-w-7xl mx-auto px-4 py-8" {
                (admin_nav(AdminTab::Leads, lang))

                div class="mb-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (t("admin.leads.title")) }
                    p class="mt-2 text-gray-600" { (t("admin.leads.subtitle")) }
                }

                (status_tabs(&tabs))

                @match &vm.outcome {
                    AdminOutcome::Failed(message) => {
                        (error_panel(
                            &format!("{} {}", t("admin.leads.error"), message),
                            Some(translate_with(lang, "error.api_hint", &[("url", vm.api_url)]).as_str()),
                        ))
                    }
                    AdminOutcome::Loaded(board) if board.items().is_empty() => {
                        (empty_panel(
                            "📋",
                            t("admin.leads.empty.title"),
                            &empty_body(lang, "admin.leads.empty", vm.status.map(|s| s.value())),
                            Some(("/listings", t("admin.leads.empty.cta"))),
                        ))
                    }
                    AdminOutcome::Loaded(board) => {
                        (leads_list(board, lang))
                    }
                }
            }
        },
    )
}

pub fn partners_page(vm: &PartnersVm<'_>, lang: Language) -> Markup {
    let t = |key| get_translation(lang, key);

    let fetched: Vec<PartnerStatus> = match &vm.outcome {
        AdminOutcome::Loaded(board) => board.items().iter().map(|p| p.status).collect(),
        AdminOutcome::Failed(_) => Vec::new(),
    };
    let tabs = tabs_for("/admin/partners", vm.status, &PartnerStatus::ALL, &fetched, lang, t("admin.tab.all"));

    desktop_layout(
        t("admin.partners.title"),
        lang,
        Section::Admin,
        html! {
            main class="max-w-7xl mx-auto px-4 py-8" {
                (admin_nav(AdminTab::Partners, lang))

                div class="mb-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (t("admin.partners.title")) }
                    p class="mt-2 text-gray-600" { (t("admin.partners.subtitle")) }
                }

                (status_tabs(&tabs))

                @match &vm.outcome {
                    AdminOutcome::Failed(message) => {
                        (error_panel(
                            &format!("{} {}", t("admin.partners.error"), message),
                            Some(translate_with(lang, "error.api_hint", &[("url", vm.api_url)]).as_str()),
                        ))
                    }
                    AdminOutcome::Loaded(board) if board.items().is_empty() => {
                        (empty_panel(
                            "🤝",
                            t("admin.partners.empty.title"),
                            &empty_body(lang, "admin.partners.empty", vm.status.map(|s| s.value())),
                            None,
                        ))
                    }
                    AdminOutcome::Loaded(board) => {
                        (partners_list(board, lang))
                    }
                }
            }
        },
    )
}

fn empty_body(lang: Language, prefix: &str, status: Option<&str>) -> String {
    match status {
        Some(status) => translate_with(lang, &format!("{prefix}.body_status"), &[("status", status)]),
        None => get_translation(lang, &format!("{prefix}.body")).to_string(),
    }
}
