use crate::domain::models::{NewsItem, Property, User};
use crate::domain::stats::CategoryBreakdown;
use crate::templates::components::{td, th};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub pending_users: Vec<&'a User>,
    pub properties: &'a [Property],
    pub complaint_stats: Vec<CategoryBreakdown>,
    pub latest_news: Vec<&'a NewsItem>,
}

fn user_approval_section(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "User Approval" }

            form action="/users" method="post" style="display: flex; gap: 10px; align-items: end; flex-wrap: wrap; margin-bottom: 1rem;" {
                div {
                    label for="name" { "Name" } br;
                    input type="text" id="name" name="name" required;
                }
                div {
                    label for="email" { "Email" } br;
                    input type="email" id="email" name="email" required;
                }
                div {
                    label for="contact_number" { "Phone" } br;
                    input type="tel" id="contact_number" name="contact_number" required;
                }
                div {
                    label for="role" { "Type" } br;
                    select id="role" name="role" {
                        option value="Owner" { "Owner" }
                        option value="Renter" { "Renter" }
                    }
                }
                div {
                    label for="property_id" { "Property" } br;
                    input type="text" id="property_id" name="property_id";
                }
                button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Submit Request" }
            }

            @if vm.pending_users.is_empty() {
                p { "No account requests waiting for approval." }
            } @else {
                table style="width: 100%; border-collapse: collapse;" {
                    thead {
                        tr {
                            (th("Name")) (th("Email")) (th("Phone")) (th("Type")) (th("Actions"))
                        }
                    }
                    tbody {
                        @for user in &vm.pending_users {
                            tr {
                                (td(html! { (user.name) }))
                                (td(html! { (user.email) }))
                                (td(html! { (user.contact_number) }))
                                (td(html! { (user.role) }))
                                (td(html! {
                                    form action=(format!("/users/{}/approve", user.id)) method="post" style="display: inline; margin-right: 5px;" {
                                        button type="submit" style="cursor: pointer;" { "Approve" }
                                    }
                                    form action=(format!("/users/{}/reject", user.id)) method="post" style="display: inline;" {
                                        button type="submit" style="cursor: pointer;" { "Reject" }
                                    }
                                }))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn fee_assignment_section(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "Fee Assignment" }

            form action="/properties/fee" method="post" style="display: flex; gap: 10px; align-items: end; flex-wrap: wrap; margin-bottom: 1rem;" {
                div {
                    label for="fee-property" { "Property ID" } br;
                    input type="text" id="fee-property" name="property_id" required;
                }
                div {
                    label for="fee-renter" { "Renter Name" } br;
                    input type="text" id="fee-renter" name="renter" required;
                }
                div {
                    label for="fee-amount" { "Fee Amount" } br;
                    input type="number" id="fee-amount" name="fee" required;
                }
                button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Assign Fee" }
            }

            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Property ID")) (th("Owner")) (th("Renter")) (th("Fee")) (th("Adjust"))
                    }
                }
                tbody {
                    @for property in vm.properties {
                        tr {
                            (td(html! { (property.id) }))
                            (td(html! { (property.owner) }))
                            (td(html! { (property.renter.as_deref().unwrap_or("N/A")) }))
                            (td(html! { "$" (property.fee) }))
                            (td(html! {
                                form action=(format!("/properties/{}/fee", property.id)) method="post" style="display: flex; gap: 5px; margin: 0;" {
                                    input type="number" name="fee" placeholder="New fee" required style="width: 100px;";
                                    button type="submit" style="cursor: pointer;" { "Adjust Fee" }
                                }
                            }))
                        }
                    }
                }
            }
        }
    }
}

fn complaints_section(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "Complaints by Category" }
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        (th("Category")) (th("Total")) (th("Resolved")) (th("Outstanding"))
                    }
                }
                tbody {
                    @for stats in &vm.complaint_stats {
                        tr {
                            (td(html! { (stats.category) }))
                            (td(html! { (stats.total) }))
                            (td(html! { (stats.resolved) }))
                            (td(html! { (stats.outstanding) }))
                        }
                    }
                }
            }
            p { a href="/admin/complaints" { "Respond to complaints" } }
        }
    }
}

fn news_section(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" style="margin-bottom: 2rem;" {
            h3 { "Latest News" }
            ul {
                @for item in &vm.latest_news {
                    li {
                        (item.date) " - " (item.title) " (" (item.broadcast_level) ")"
                    }
                }
            }
            p { a href="/news" { "Manage news" } }
        }
    }
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Dashboard" }

                (user_approval_section(vm))
                (fee_assignment_section(vm))
                (complaints_section(vm))
                (news_section(vm))
            }
        },
    )
}
