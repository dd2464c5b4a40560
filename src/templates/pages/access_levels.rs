use crate::domain::models::ACCESS_GRANTS;
use crate::templates::components::{td, th};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn access_levels_page() -> Markup {
    desktop_layout(
        "Access Levels",
        html! {
            main class="container" {
                h1 { "Access Levels" }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                (th("Role")) (th("View")) (th("Edit")) (th("Approve")) (th("Other"))
                            }
                        }
                        tbody {
                            @for grant in &ACCESS_GRANTS {
                                tr {
                                    (td(html! { (grant.role) }))
                                    (td(html! { (grant.view) }))
                                    (td(html! { (grant.edit) }))
                                    (td(html! { (grant.approve) }))
                                    (td(html! { (grant.other) }))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
