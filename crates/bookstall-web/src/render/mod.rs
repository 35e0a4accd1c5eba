//! Catalogue page rendering.

pub mod components;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use bookstall_core::Book;

use crate::config::Config;
use crate::render::components::{PAGE_CSS, book_card};

/// Render the full catalogue page for the given book list.
pub fn catalogue_page(config: &Config, books: &[Book]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.site_name) " — Catalogue" }
                meta name="description" content="Browse the bookstore catalogue.";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="masthead" {
                    h1 { (config.site_name) }
                    p { "Browse the catalogue. Click any book for its raw record." }
                }
                main {
                    div class="shelf" {
                        @if books.is_empty() {
                            p class="empty" { "No books found in the catalogue." }
                        } @else {
                            @for book in books {
                                (book_card(book, &config.api_url))
                            }
                        }
                    }
                }
                footer class="footer" {
                    "Served fresh from the catalogue API on every load."
                }
            }
        }
    }
}
