use crate::domain::models::{Complaint, ComplaintCategory, ComplaintStatus};
use crate::domain::search::FILTER_ALL;
use crate::templates::components::search_input;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminComplaintsVm<'a> {
    pub complaints: Vec<&'a Complaint>,
    pub search_term: &'a str,
    pub category: &'a str,
}

pub fn admin_complaints_page(vm: &AdminComplaintsVm) -> Markup {
    desktop_layout(
        "Admin Complaints",
        html! {
            main class="container" {
                h1 { "Admin Complaints Management" }

                form action="/admin/complaints" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    (search_input("Search complaints...", vm.search_term))
                    select name="category" style="padding: 8px;" {
                        option value=(FILTER_ALL) selected[vm.category == FILTER_ALL || vm.category.is_empty()] {
                            "All Categories"
                        }
                        @for category in ComplaintCategory::ALL {
                            option value=(category.as_str()) selected[vm.category == category.as_str()] {
                                (category.as_str())
                            }
                        }
                    }
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Filter" }
                }

                @for complaint in &vm.complaints {
                    section class="card" style="margin-bottom: 1rem;" {
                        h3 { (complaint.category) }
                        p style="color: #6b7280; font-size: 0.9em;" {
                            (complaint.date) " | " (complaint.status)
                        }
                        p { (complaint.description) }

                        @match complaint.status {
                            ComplaintStatus::Solved => {
                                p { strong { "Response: " }
                                    (complaint.response.as_deref().unwrap_or(""))
                                }
                            }
                            ComplaintStatus::Pending => {
                                form action=(format!("/admin/complaints/{}/respond", complaint.id)) method="post" {
                                    label for=(format!("response-{}", complaint.id)) { "Response" }
                                    br;
                                    textarea id=(format!("response-{}", complaint.id)) name="response" required rows="2" style="width: 100%;" {}
                                    button type="submit" style="margin-top: 5px; padding: 4px 12px; cursor: pointer;" {
                                        "Respond and Mark Solved"
                                    }
                                }
                            }
                        }
                    }
                }

                @if vm.complaints.is_empty() {
                    p style="text-align: center;" { "No complaints found." }
                }
            }
        },
    )
}
