// src/domain/reports.rs
//
// Pure reductions over the payments list backing the report pages.

use crate::domain::models::{Payment, Property};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Report months, in fee-schedule order.
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Grouping key for a payment roll-up. Company and Group are the
/// "consolidation levels"; they resolve through the property list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Month,
    PropertyId,
    Company,
    Group,
}

/// Summed dues and receipts for one group of payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentTotals {
    pub total_due: i64,
    pub total_paid: i64,
}

impl PaymentTotals {
    pub fn add(&mut self, payment: &Payment) {
        self.total_due += payment.amount_due;
        self.total_paid += payment.amount_paid;
    }

    /// Collection percentage, `None` when nothing was due. Callers render
    /// the `None` case as "N/A"; a non-finite float never leaves this layer.
    pub fn collection_percentage(&self) -> Option<f64> {
        if self.total_due == 0 {
            None
        } else {
            Some(self.total_paid as f64 / self.total_due as f64 * 100.0)
        }
    }
}

/// Rolls up `payments` by the chosen key. For the Company and Group keys a
/// payment whose property id is not in `properties` has no affiliation to
/// roll up into and is skipped.
pub fn aggregate_payments(
    payments: &[Payment],
    properties: &[Property],
    key: GroupKey,
) -> BTreeMap<String, PaymentTotals> {
    let mut totals: BTreeMap<String, PaymentTotals> = BTreeMap::new();
    for payment in payments {
        let group = match key {
            GroupKey::Month => Some(payment.month.clone()),
            GroupKey::PropertyId => Some(payment.property_id.clone()),
            GroupKey::Company => properties
                .iter()
                .find(|p| p.id == payment.property_id)
                .map(|p| p.company.clone()),
            GroupKey::Group => properties
                .iter()
                .find(|p| p.id == payment.property_id)
                .map(|p| p.group.clone()),
        };
        if let Some(group) = group {
            totals.entry(group).or_default().add(payment);
        }
    }
    totals
}

/// Totals over a payment selection, for the overall and monthly reports.
pub fn overall_totals<'a, I>(payments: I) -> PaymentTotals
where
    I: IntoIterator<Item = &'a Payment>,
{
    let mut totals = PaymentTotals::default();
    for payment in payments {
        totals.add(payment);
    }
    totals
}

/// Day-count difference between the payment date and the fee due date,
/// taken to be the 1st of the same month. Plain date subtraction.
pub fn days_paid_after_due(date_paid: NaiveDate) -> i64 {
    let due = date_paid.with_day(1).unwrap_or(date_paid);
    (date_paid - due).num_days()
}
