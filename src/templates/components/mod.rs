use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Plain GET search box that resubmits the current page.
pub fn search_input(placeholder: &str, value: &str) -> Markup {
    html! {
        input type="text" name="search" placeholder=(placeholder) value=(value)
            style="padding: 8px; font-size: 16px; flex-grow: 1;";
    }
}

pub fn th(label: &str) -> Markup {
    html! {
        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { (label) }
    }
}

pub fn td(content: Markup) -> Markup {
    html! {
        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (content) }
    }
}
