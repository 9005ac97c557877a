use maud::{Markup, html};

/// Render the top navigation bar with the page title and the about-modal trigger.
pub(crate) fn navbar(title: &str) -> Markup {
    html! {
        nav class="navbar navbar-dark bg-dark pt-3 pb-2 px-3 justify-content" {
            a class="navbar-brand text-success" href="https://albeto4000.github.io/" { "MATTHEW DOLIN" }
            div {
                div class="navbar-text text-capitalize" {
                    (title)
                }
            }
            button class="btn btn-outline-success btn-sm" data-toggle="modal" data-target="#aboutModal" { "About" }
        }
    }
}
