use maud::{html, Markup, DOCTYPE};

/// Page chrome shared by every screen: brand header, nav, stylesheet.
pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header {
                    a class="brand" href="/" {
                        (house_icon())
                        h1 { "Open House Finder" }
                    }
                    nav {
                        ul {
                            li { a href="/" { "Browse" } }
                            li { a href="/map/markers.json" { "Map feed" } }
                            li { a href="/api/open-houses" { "API" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

fn house_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" class="icon" width="24" height="24"
            viewBox="0 0 24 24" fill="none" stroke="#2563eb" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round"
        {
            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
        }
    }
}
