use crate::domain::models::{ApprovalStatus, User};
use crate::templates::components::{search_input, td, th};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct UsersVm<'a> {
    pub users: Vec<&'a User>,
    pub search_term: &'a str,
}

fn edit_form(user: &User) -> Markup {
    html! {
        details {
            summary { "Edit" }
            form action=(format!("/users/{}/edit", user.id)) method="post" style="display: flex; flex-direction: column; gap: 5px; margin-top: 0.5rem;" {
                input type="text" name="name" required value=(user.name);
                input type="text" name="role" required value=(user.role);
                input type="text" name="property_id" value=(user.property_id.as_deref().unwrap_or(""));
                input type="date" name="dob" value=(user.dob.map(|d| d.to_string()).unwrap_or_default());
                input type="text" name="contact_number" required value=(user.contact_number);
                input type="email" name="email" required value=(user.email);
                button type="submit" style="padding: 4px 12px; cursor: pointer;" { "Save" }
            }
        }
    }
}

pub fn users_page(vm: &UsersVm) -> Markup {
    desktop_layout(
        "Users",
        html! {
            main class="container" {
                h1 { "Users" }

                form action="/users" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    (search_input("Search users...", vm.search_term))
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Search" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                (th("Name")) (th("Role")) (th("Property ID")) (th("Status"))
                                (th("Date of Birth")) (th("Contact Number")) (th("Email")) (th("Actions"))
                            }
                        }
                        tbody {
                            @for user in &vm.users {
                                tr {
                                    (td(html! { (user.name) }))
                                    (td(html! { (user.role) }))
                                    (td(html! { (user.property_id.as_deref().unwrap_or("-")) }))
                                    (td(html! { (user.status) }))
                                    (td(html! {
                                        @match user.dob {
                                            Some(dob) => { (dob) }
                                            None => { "-" }
                                        }
                                    }))
                                    (td(html! { (user.contact_number) }))
                                    (td(html! { (user.email) }))
                                    (td(html! {
                                        @if user.status == ApprovalStatus::Pending {
                                            form action=(format!("/users/{}/approve", user.id)) method="post" style="display: inline; margin-right: 5px;" {
                                                button type="submit" style="cursor: pointer;" { "Approve" }
                                            }
                                            form action=(format!("/users/{}/reject", user.id)) method="post" style="display: inline;" {
                                                button type="submit" style="cursor: pointer;" { "Reject" }
                                            }
                                        }
                                        (edit_form(user))
                                    }))
                                }
                            }
                        }
                    }
                }

                @if vm.users.is_empty() {
                    p style="text-align: center;" { "No users found." }
                }
            }
        },
    )
}
