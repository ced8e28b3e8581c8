use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · GabayBahay" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header id="siteHeader" class="site-header" {
                    a href="/" class="brand" { "GabayBahay" }
                    p class="tagline" { "Find rooms and bedspaces near campus" }
                    nav {
                        ul {
                            li { a href="/" { "Listings" } }
                            li { a href="/listings.json" { "JSON" } }
                            li { a href="/listings.csv" { "CSV" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    "© " span id="year" { (Utc::now().year()) } " GabayBahay"
                }
            }
        }
    }
}
