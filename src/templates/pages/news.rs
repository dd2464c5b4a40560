use crate::domain::models::{BroadcastLevel, NewsCategory, NewsItem};
use crate::domain::search::FILTER_ALL;
use crate::templates::components::search_input;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct NewsVm<'a> {
    pub news: Vec<&'a NewsItem>,
    pub search_term: &'a str,
    pub level: &'a str,
}

fn category_select(selected: Option<NewsCategory>) -> Markup {
    html! {
        select name="category" required style="padding: 8px;" {
            @for category in NewsCategory::ALL {
                option value=(category.as_str()) selected[selected == Some(category)] {
                    (category.as_str())
                }
            }
        }
    }
}

fn level_select(selected: Option<BroadcastLevel>) -> Markup {
    html! {
        select name="broadcast_level" required style="padding: 8px;" {
            @for level in BroadcastLevel::ALL {
                option value=(level.as_str()) selected[selected == Some(level)] {
                    (level.as_str())
                }
            }
        }
    }
}

pub fn news_page(vm: &NewsVm) -> Markup {
    desktop_layout(
        "News",
        html! {
            main class="container" {
                h1 { "News and Announcements" }

                section class="card" style="margin-bottom: 2rem;" {
                    h3 { "Post News" }
                    form action="/news" method="post" {
                        div style="margin-bottom: 0.5rem;" {
                            label for="title" { "Title" }
                            br;
                            input type="text" id="title" name="title" required style="width: 100%;";
                        }
                        div style="display: flex; gap: 10px; margin-bottom: 0.5rem;" {
                            (category_select(None))
                            (level_select(None))
                        }
                        div style="margin-bottom: 0.5rem;" {
                            label for="details" { "Details" }
                            br;
                            textarea id="details" name="details" required rows="3" style="width: 100%;" {}
                        }
                        button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Post News" }
                    }
                }

                form action="/news" method="get" style="display: flex; gap: 10px; align-items: center; margin-bottom: 1rem;" {
                    (search_input("Search news...", vm.search_term))
                    select name="level" style="padding: 8px;" {
                        option value=(FILTER_ALL) selected[vm.level == FILTER_ALL || vm.level.is_empty()] {
                            "All Levels"
                        }
                        @for level in BroadcastLevel::ALL {
                            option value=(level.as_str()) selected[vm.level == level.as_str()] {
                                (level.as_str())
                            }
                        }
                    }
                    button type="submit" style="padding: 8px 16px; cursor: pointer;" { "Filter" }
                }

                @for item in &vm.news {
                    section class="card" style="margin-bottom: 1rem;" {
                        h3 { (item.title) }
                        p style="color: #6b7280; font-size: 0.9em;" {
                            (item.category) " | " (item.date) " | " (item.broadcast_level)
                        }
                        p { (item.details) }

                        details {
                            summary { "Edit" }
                            form action=(format!("/news/{}/edit", item.id)) method="post" style="margin-top: 0.5rem;" {
                                div style="margin-bottom: 0.5rem;" {
                                    input type="text" name="title" required value=(item.title) style="width: 100%;";
                                }
                                div style="display: flex; gap: 10px; margin-bottom: 0.5rem;" {
                                    (category_select(Some(item.category)))
                                    (level_select(Some(item.broadcast_level)))
                                }
                                div style="margin-bottom: 0.5rem;" {
                                    textarea name="details" required rows="3" style="width: 100%;" { (item.details) }
                                }
                                button type="submit" style="padding: 4px 12px; cursor: pointer;" { "Save" }
                            }
                        }
                    }
                }

                @if vm.news.is_empty() {
                    p style="text-align: center;" { "No news found." }
                }
            }
        },
    )
}
