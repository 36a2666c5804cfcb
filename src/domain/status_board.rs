// domain/status_board.rs
use crate::api::models::{Lead, LeadStatus, Partner, PartnerStatus};
use std::collections::HashSet;

/// An entity whose status an operator can change from a list view.
pub trait Tracked {
    type Status: Copy + PartialEq;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

impl Tracked for Lead {
    type Status = LeadStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> LeadStatus {
        self.status
    }

    fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
    }
}

impl Tracked for Partner {
    type Status = PartnerStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> PartnerStatus {
        self.status
    }

    fn set_status(&mut self, status: PartnerStatus) {
        self.status = status;
    }
}

/// View state of one status-mutating list.
///
/// Several items may be in flight at once. Only the in-flight item's own
/// actions are disabled. Status changes are applied locally after the server
/// accepted them, never before.
#[derive(Debug, Clone)]
pub struct StatusBoard<T: Tracked> {
    items: Vec<T>,
    in_flight: HashSet<String>,
}

impl<T: Tracked> StatusBoard<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            in_flight: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }

    pub fn is_action_disabled(&self, item: &T, target: T::Status) -> bool {
        item.status() == target || self.is_in_flight(item.id())
    }

    pub fn begin(&mut self, id: &str) {
        self.in_flight.insert(id.to_string());
    }

    pub fn complete(&mut self, id: &str, target: T::Status) {
        self.in_flight.remove(id);
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.set_status(target);
        }
    }

    pub fn fail(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    /// Run one mutation call for `id`, applying `target` only if it succeeds.
    pub fn mutate<R, E>(
        &mut self,
        id: &str,
        target: T::Status,
        call: impl FnOnce() -> Result<R, E>,
    ) -> Result<R, E> {
        self.begin(id);
        match call() {
            Ok(value) => {
                self.complete(id, target);
                Ok(value)
            }
            Err(err) => {
                self.fail(id);
                Err(err)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation of statuses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Yellow,
    Green,
    Red,
    Gray,
}

impl Tone {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-100 text-blue-800",
            Tone::Yellow => "bg-yellow-100 text-yellow-800",
            Tone::Green => "bg-green-100 text-green-800",
            Tone::Red => "bg-red-100 text-red-800",
            Tone::Gray => "bg-gray-100 text-gray-800",
        }
    }
}

/// Label (translation key) and color for a status badge.
pub trait StatusStyle: Copy {
    /// Wire value, as sent in `PATCH .../status`.
    fn value(&self) -> &'static str;
    fn tone(&self) -> Tone;
    fn label_key(&self) -> &'static str;
}

impl StatusStyle for LeadStatus {
    fn value(&self) -> &'static str {
        self.as_str()
    }

    fn tone(&self) -> Tone {
        match self {
            LeadStatus::New => Tone::Blue,
            LeadStatus::Contacted => Tone::Yellow,
            LeadStatus::Converted => Tone::Green,
            LeadStatus::Discarded => Tone::Red,
            LeadStatus::Unknown => Tone::Gray,
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            LeadStatus::New => "lead.status.new",
            LeadStatus::Contacted => "lead.status.contacted",
            LeadStatus::Converted => "lead.status.converted",
            LeadStatus::Discarded => "lead.status.discarded",
            LeadStatus::Unknown => "status.unknown",
        }
    }
}

impl StatusStyle for PartnerStatus {
    fn value(&self) -> &'static str {
        self.as_str()
    }

    fn tone(&self) -> Tone {
        match self {
            PartnerStatus::Pending => Tone::Yellow,
            PartnerStatus::Active => Tone::Green,
            PartnerStatus::Inactive => Tone::Red,
            PartnerStatus::Unknown => Tone::Gray,
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            PartnerStatus::Pending => "partner.status.pending",
            PartnerStatus::Active => "partner.status.active",
            PartnerStatus::Inactive => "partner.status.inactive",
            PartnerStatus::Unknown => "status.unknown",
        }
    }
}

/// A button on an item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction<S> {
    pub target: S,
    pub label_key: &'static str,
    pub tone: Tone,
}

pub fn lead_actions(current: LeadStatus) -> Vec<StatusAction<LeadStatus>> {
    let mut actions = vec![
        StatusAction {
            target: LeadStatus::Contacted,
            label_key: "lead.action.contacted",
            tone: Tone::Yellow,
        },
        StatusAction {
            target: LeadStatus::Converted,
            label_key: "lead.action.converted",
            tone: Tone::Green,
        },
        StatusAction {
            target: LeadStatus::Discarded,
            label_key: "lead.action.discarded",
            tone: Tone::Red,
        },
    ];

    if current != LeadStatus::New {
        actions.push(StatusAction {
            target: LeadStatus::New,
            label_key: "lead.action.new",
            tone: Tone::Blue,
        });
    }

    actions
}

pub fn partner_actions(current: PartnerStatus) -> Vec<StatusAction<PartnerStatus>> {
    let mut actions = vec![
        StatusAction {
            target: PartnerStatus::Active,
            label_key: "partner.action.active",
            tone: Tone::Green,
        },
        StatusAction {
            target: PartnerStatus::Inactive,
            label_key: "partner.action.inactive",
            tone: Tone::Red,
        },
    ];

    if current != PartnerStatus::Pending {
        actions.push(StatusAction {
            target: PartnerStatus::Pending,
            label_key: "partner.action.pending",
            tone: Tone::Yellow,
        });
    }

    actions
}
