use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Estate Admin" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/dashboard" { "Dashboard" } }
                            li { a href="/properties" { "Properties" } }
                            li { a href="/complaints" { "Complaints" } }
                            li { a href="/admin/complaints" { "Admin Complaints" } }
                            li { a href="/news" { "News" } }
                            li { a href="/reports" { "Reports" } }
                            li { a href="/users" { "Users" } }
                            li { a href="/access-levels" { "Access Levels" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
