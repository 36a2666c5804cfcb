// handlers/admin.rs
use crate::api::models::{LeadStatus, PartnerStatus};
use crate::api::ApiResult;
use crate::domain::status_board::{StatusBoard, StatusStyle, Tracked};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{field, is_htmx, query_map, read_form};
use crate::i18n::{get_translation, Language};
use crate::responses::{html_response, html_retarget, see_other};
use crate::state::AppState;
use crate::templates::components::{alert, lead_row, partner_row};
use crate::templates::dom_id;
use crate::templates::pages::{leads_page, partners_page, AdminOutcome, LeadsVm, PartnersVm};
use astra::Request;
use maud::Markup;
use std::str::FromStr;
use tracing::{info, warn};

/// `?status=` filter. Values that name no status are ignored.
fn status_filter<S: FromStr>(req: &Request) -> Option<S> {
    query_map(req).get("status").and_then(|s| s.parse().ok())
}

fn load<T: Tracked>(result: ApiResult<Vec<T>>) -> AdminOutcome<T> {
    match result {
        Ok(envelope) => AdminOutcome::Loaded(StatusBoard::new(envelope.data)),
        Err(err) => AdminOutcome::Failed(err.to_string()),
    }
}

pub fn leads(req: &Request, state: &AppState, lang: Language) -> ResultResp {
    let status = status_filter::<LeadStatus>(req);
    let vm = LeadsVm {
        status,
        outcome: load(state.api.get_leads(status)),
        api_url: state.api_url(),
    };
    html_response(leads_page(&vm, lang))
}

pub fn partners(req: &Request, state: &AppState, lang: Language) -> ResultResp {
    let status = status_filter::<PartnerStatus>(req);
    let vm = PartnersVm {
        status,
        outcome: load(state.api.get_partners(status)),
        api_url: state.api_url(),
    };
    html_response(partners_page(&vm, lang))
}

pub fn update_lead(req: Request, state: &AppState, id: &str, lang: Language) -> ResultResp {
    update_status(
        req,
        StatusRoute { list_path: "/admin/leads", row_prefix: "lead" },
        id,
        lang,
        |target| state.api.update_lead_status(id, target),
        lead_row,
    )
}

pub fn update_partner(req: Request, state: &AppState, id: &str, lang: Language) -> ResultResp {
    update_status(
        req,
        StatusRoute { list_path: "/admin/partners", row_prefix: "partner" },
        id,
        lang,
        |target| state.api.update_partner_status(id, target),
        partner_row,
    )
}

struct StatusRoute {
    list_path: &'static str,
    row_prefix: &'static str,
}

/// One status button press: exactly one PATCH, then either the row with its
/// new status or an alert in the row's alert slot.
fn update_status<T, C, R>(
    req: Request,
    route: StatusRoute,
    id: &str,
    lang: Language,
    call: C,
    row: R,
) -> ResultResp
where
    T: Tracked,
    T::Status: StatusStyle + FromStr,
    C: FnOnce(T::Status) -> ApiResult<T>,
    R: Fn(&StatusBoard<T>, &T, Language) -> Markup,
{
    let htmx = is_htmx(&req);
    let form = read_form(req)?;
    let raw = field(&form, "status");
    let target: T::Status = raw.parse().map_err(|_| {
        warn!(id, status = raw, "status update rejected: unknown status");
        ServerError::BadRequest(format!("unknown status: {raw}"))
    })?;

    match call(target) {
        Ok(envelope) => {
            info!(kind = route.row_prefix, id, status = target.value(), "status updated");
            if !htmx {
                return see_other(route.list_path);
            }

            // The returned entity may still carry the old status.
            let returned_id = envelope.data.id().to_string();
            let mut board = StatusBoard::new(vec![envelope.data]);
            board.begin(&returned_id);
            board.complete(&returned_id, target);
            match board.get(&returned_id) {
                Some(updated) => html_response(row(&board, updated, lang)),
                None => Err(ServerError::InternalError),
            }
        }
        Err(err) if htmx => {
            warn!(kind = route.row_prefix, id, error = %err, "status update failed");
            let message = format!("{}: {err}", get_translation(lang, "status.update_failed"));
            html_retarget(&format!("#{}-alert", dom_id(route.row_prefix, id)), alert(&message))
        }
        Err(err) => Err(err.into()),
    }
}
