use crate::domain::models::{Complaint, ComplaintCategory};
use crate::domain::search::FILTER_ALL;
use crate::templates::components::search_input;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ComplaintsVm<'a> {
    pub complaints: Vec<&'a Complaint>,
    pub search_term: &'a str,
    pub category: &'a str,
}

fn category_select(name: &str, selected: &str, with_all: bool) -> Markup {
    html! {
        select name=(name) style="padding: 8px;" {
            @if with_all {
                option value=(FILTER_ALL) selected[selected == FILTER_ALL || selected.is_empty()] {
                    "All Categories"
                }
            }
            @for category in ComplaintCategory::ALL {
                option value=(category.as_str()) selected[selected == category.as_str()] {
                    (category.as_str())
                }
            }
        }
    }
}

pub fn complaints_page(vm: &ComplaintsVm) -> Markup {
    desktop_layout(
        "Complaints",
        html! {
            main class="container" {
                h1 { "Complaints Management" }

                form action="/complaints" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    (search_input("Search complaints...", vm.search_term))
                    (category_select("category", vm.category, true))
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Filter" }
                }

                section class="card" style="margin-bottom: 2rem;" {
                    h3 { "Submit New Complaint" }
                    form action="/complaints" method="post" {
                        div style="margin-bottom: 0.5rem;" {
                            label for="category" { "Category" }
                            br;
                            (category_select("category", "", false))
                        }
                        div style="margin-bottom: 0.5rem;" {
                            label for="description" { "Description" }
                            br;
                            textarea id="description" name="description" required rows="3" style="width: 100%;" {}
                        }
                        div style="margin-bottom: 0.5rem;" {
                            label for="photo" { "Photo reference (optional)" }
                            br;
                            input type="text" id="photo" name="photo" style="width: 100%;";
                        }
                        button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Submit Complaint" }
                    }
                }

                @for complaint in &vm.complaints {
                    section class="card" style="margin-bottom: 1rem;" {
                        h3 { (complaint.category) }
                        p style="color: #6b7280; font-size: 0.9em;" {
                            (complaint.date) " | " (complaint.status)
                        }
                        p { (complaint.description) }
                        @if let Some(response) = &complaint.response {
                            p { strong { "Response: " } (response) }
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
