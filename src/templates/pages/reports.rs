use crate::domain::models::{Payment, Property};
use crate::domain::reports::{
    aggregate_payments, days_paid_after_due, overall_totals, GroupKey, PaymentTotals, MONTHS,
};
use crate::templates::components::{td, th};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ReportsVm<'a> {
    pub properties: &'a [Property],
    pub payments: &'a [Payment],
    pub month: &'a str,
    pub property_id: &'a str,
}

fn percentage_cell(totals: PaymentTotals) -> Markup {
    html! {
        @match totals.collection_percentage() {
            Some(pct) => { (format!("{pct:.2}%")) }
            None => { "N/A" }
        }
    }
}

fn monthly_report(vm: &ReportsVm) -> Markup {
    let monthly: Vec<&Payment> = vm
        .payments
        .iter()
        .filter(|p| p.month == vm.month)
        .collect();
    let totals = overall_totals(monthly.iter().copied());

    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "Monthly Report - " (vm.month) }
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Property ID")) (th("Location")) (th("Owner"))
                        (th("Amount Due")) (th("Amount Paid"))
                    }
                }
                tbody {
                    @for payment in &monthly {
                        @let property = vm.properties.iter().find(|p| p.id == payment.property_id);
                        tr {
                            (td(html! { (payment.property_id) }))
                            (td(html! { (property.map(|p| p.location.as_str()).unwrap_or("")) }))
                            (td(html! { (property.map(|p| p.owner.as_str()).unwrap_or("")) }))
                            (td(html! { "$" (payment.amount_due) }))
                            (td(html! { "$" (payment.amount_paid) }))
                        }
                    }
                    tr {
                        (td(html! { strong { "Totals" } }))
                        (td(html! {})) (td(html! {}))
                        (td(html! { "$" (totals.total_due) }))
                        (td(html! { "$" (totals.total_paid) }))
                    }
                }
            }
            p { "Collection Percentage: " (percentage_cell(totals)) }
            p {
                a href=(format!("/reports/export?month={}", vm.month)) { "Download spreadsheet" }
            }
        }
    }
}

fn per_property_report(vm: &ReportsVm) -> Markup {
    let rows: Vec<&Payment> = vm
        .payments
        .iter()
        .filter(|p| p.property_id == vm.property_id)
        .collect();
    let property = vm.properties.iter().find(|p| p.id == vm.property_id);
    let totals = overall_totals(rows.iter().copied());

    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 {
                "Per-Property Report - "
                (property.map(|p| p.location.as_str()).unwrap_or(vm.property_id))
            }
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Month")) (th("Amount Due")) (th("Amount Paid"))
                        (th("Date Paid")) (th("% Paid")) (th("Date Paid vs. Due"))
                    }
                }
                tbody {
                    @for payment in &rows {
                        @let paid = PaymentTotals {
                            total_due: payment.amount_due,
                            total_paid: payment.amount_paid,
                        };
                        tr {
                            (td(html! { (payment.month) }))
                            (td(html! { "$" (payment.amount_due) }))
                            (td(html! { "$" (payment.amount_paid) }))
                            (td(html! { (payment.date_paid) }))
                            (td(html! {
                                (percentage_cell(paid))
                                @if payment.amount_paid >= payment.amount_due {
                                    " (Full)"
                                } @else {
                                    " (Partial)"
                                }
                            }))
                            (td(html! { (days_paid_after_due(payment.date_paid)) " days" }))
                        }
                    }
                    tr {
                        (td(html! { strong { "Totals & Averages" } }))
                        (td(html! { "$" (totals.total_due) }))
                        (td(html! { "$" (totals.total_paid) }))
                        (td(html! { "-" }))
                        (td(percentage_cell(totals)))
                        (td(html! { "-" }))
                    }
                }
            }
        }
    }
}

fn consolidated_report(vm: &ReportsVm, title: &str, key: GroupKey) -> Markup {
    let totals = aggregate_payments(vm.payments, vm.properties, key);

    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { (title) }
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Consolidation")) (th("Amount Due")) (th("Amount Paid")) (th("Collection %"))
                    }
                }
                tbody {
                    @for (group, group_totals) in &totals {
                        tr {
                            (td(html! { (group) }))
                            (td(html! { "$" (group_totals.total_due) }))
                            (td(html! { "$" (group_totals.total_paid) }))
                            (td(percentage_cell(*group_totals)))
                        }
                    }
                }
            }
        }
    }
}

fn overall_report(vm: &ReportsVm) -> Markup {
    let totals = overall_totals(vm.payments);

    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "Overall Report" }
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Property ID")) (th("Location")) (th("Owner"))
                        (th("Amount Due")) (th("Amount Paid"))
                    }
                }
                tbody {
                    @for property in vm.properties {
                        @let property_totals = overall_totals(
                            vm.payments.iter().filter(|p| p.property_id == property.id)
                        );
                        tr {
                            (td(html! { (property.id) }))
                            (td(html! { (property.location) }))
                            (td(html! { (property.owner) }))
                            (td(html! { "$" (property_totals.total_due) }))
                            (td(html! { "$" (property_totals.total_paid) }))
                        }
                    }
                    tr {
                        (td(html! { strong { "Totals" } }))
                        (td(html! {})) (td(html! {}))
                        (td(html! { "$" (totals.total_due) }))
                        (td(html! { "$" (totals.total_paid) }))
                    }
                }
            }
            p { "Overall Collection Percentage: " (percentage_cell(totals)) }
        }
    }
}

pub fn reports_page(vm: &ReportsVm) -> Markup {
    desktop_layout(
        "Reports",
        html! {
            main class="container" {
                h1 { "Reports" }

                form action="/reports" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    select name="month" style="padding: 8px;" {
                        @for month in MONTHS {
                            option value=(month) selected[vm.month == month] { (month) }
                        }
                    }
                    select name="property" style="padding: 8px;" {
                        @for property in vm.properties {
                            option value=(property.id) selected[vm.property_id == property.id] {
                                (property.id) " - " (property.location)
                            }
                        }
                    }
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Show" }
                }

                (monthly_report(vm))
                (per_property_report(vm))
                (consolidated_report(vm, "Consolidated Report - by Company", GroupKey::Company))
                (consolidated_report(vm, "Consolidated Report - by Group", GroupKey::Group))
                (overall_report(vm))
            }
        },
    )
}
