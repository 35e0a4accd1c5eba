//! Shared HTML components for the catalogue page.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages, plus the inline CSS constants.

use maud::{Markup, html};

use bookstall_core::Book;

/// Inline CSS for the catalogue page.
///
/// Flat, modern design: spacing and subtle background shifts for hierarchy,
/// one card per book in a responsive grid.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#1d4ed8;--accent-soft:#dbeafe;--surface:#fff;--border:rgba(29,78,216,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:1100px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.masthead{text-align:center;padding:2rem 1rem;margin-bottom:2rem;background:var(--surface);border:1px solid var(--border);border-radius:12px;width:100%;max-width:1100px}
.masthead h1{font-size:2.2rem;font-weight:800;letter-spacing:-.03em;color:var(--accent)}
.masthead p{color:var(--fg2);margin-top:.35rem}

.shelf{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:1.25rem}
.book-card{display:block;background:var(--surface);border:1px solid var(--border);border-radius:10px;padding:1.25rem;color:var(--fg);transition:border-color .15s}
.book-card:hover{border-color:var(--accent);text-decoration:none}
.book-title{font-size:1.1rem;font-weight:700;line-height:1.35;margin-bottom:.2rem}
.book-author{font-size:.9rem;color:var(--accent);font-weight:500;margin-bottom:.75rem}
.book-meta{font-size:.85rem;color:var(--fg2)}
.book-meta strong{font-weight:600;color:var(--fg)}
.book-price{font-size:1.05rem;font-weight:700;color:var(--fg)}
.book-genres{margin-top:.75rem;display:flex;flex-wrap:wrap;gap:.35rem}
.genre-tag{font-size:.72rem;font-weight:500;color:var(--accent);background:var(--accent-soft);padding:.15rem .55rem;border-radius:100px}

.empty{grid-column:1/-1;text-align:center;color:var(--fg3);padding:3rem 1rem;font-size:1.05rem}

.footer{margin-top:2.5rem;font-size:.8rem;color:var(--fg3);text-align:center}
"#;

/// CSS for the standalone error page.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#fafafa;color:#111;min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.error-page{max-width:420px;text-align:center;background:#fff;border:1px solid rgba(185,28,28,.25);border-radius:12px;padding:2.5rem 2rem}
.error-page h1{font-size:1.5rem;color:#b91c1c;margin-bottom:.75rem}
.error-page p{color:#555;margin-bottom:1.25rem}
.error-page a{color:#1d4ed8;text-decoration:none;font-weight:600}
.error-page a:hover{text-decoration:underline}
"#;

/// Render one catalogue card.
///
/// The whole card links to the book's raw record on the API, so any entry
/// can be inspected as JSON with a click.
pub fn book_card(book: &Book, api_url: &str) -> Markup {
    html! {
        a class="book-card" href=(format!("{api_url}/books/{}", book.id)) {
            h2 class="book-title" { (book.title) }
            p class="book-author" { (book.author) }
            div class="book-meta" {
                p {
                    strong { "Price: " }
                    span class="book-price" { (format!("${:.2}", book.price)) }
                }
                p {
                    strong { "Rating: " }
                    (format!("{:.1} / 5.0 ({} reviews)", book.rating, book.review_count))
                }
                p {
                    strong { "Published: " }
                    (book.date_published)
                }
            }
            @if let Some(genres) = &book.genre {
                div class="book-genres" {
                    @for genre in genres {
                        span class="genre-tag" { (genre) }
                    }
                }
            }
        }
    }
}
