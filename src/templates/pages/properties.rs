use crate::domain::access::AccessLevel;
use crate::domain::models::Property;
use crate::templates::components::{search_input, td, th};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct PropertiesVm<'a> {
    /// Already role-filtered and searched.
    pub properties: Vec<&'a Property>,
    pub search_term: &'a str,
    pub access_level: Option<AccessLevel>,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            main class="container" {
                h1 { "Properties" }

                form action="/properties" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    (search_input("Search properties...", vm.search_term))
                    select name="access_level" style="padding: 8px;" {
                        @for level in AccessLevel::ALL {
                            option value=(level.as_str()) selected[vm.access_level == Some(level)] {
                                (level.as_str())
                            }
                        }
                    }
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Apply" }
                }

                div style="overflow-x: auto;" {
                    table style="width: 100%; border-collapse: collapse;" {
                        thead {
                            tr {
                                (th("Property ID")) (th("Owner")) (th("Renter")) (th("Location"))
                                (th("Block Number")) (th("Status")) (th("Cluster")) (th("Company"))
                                (th("Group")) (th("Monthly Fee"))
                            }
                        }
                        tbody {
                            @for property in &vm.properties {
                                tr {
                                    (td(html! { (property.id) }))
                                    (td(html! { (property.owner) }))
                                    (td(html! { (property.renter.as_deref().unwrap_or("None")) }))
                                    (td(html! { (property.location) }))
                                    (td(html! { (property.block_number) }))
                                    (td(html! { (property.status) }))
                                    (td(html! { (property.cluster) }))
                                    (td(html! { (property.company) }))
                                    (td(html! { (property.group) }))
                                    (td(html! { "$" (property.fee) }))
                                }
                            }
                        }
                    }
                }

                @if vm.properties.is_empty() {
                    p style="text-align: center; margin-top: 1rem;" {
                        "No properties found matching your search or access level."
                    }
                }
            }
        },
    )
}
