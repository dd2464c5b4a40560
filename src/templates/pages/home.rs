// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" {
                h1 { "Property Management Administration" }

                (card("Residents", html! {
                    ul {
                        li { a href="/complaints" { "Submit and track complaints" } }
                        li { a href="/news" { "News and announcements" } }
                    }
                }))

                (card("Administration", html! {
                    ul {
                        li { a href="/dashboard" { "Admin dashboard" } }
                        li { a href="/properties" { "Property register" } }
                        li { a href="/reports" { "Financial reports" } }
                        li { a href="/users" { "User management" } }
                    }
                }))
            }
        },
    )
}
