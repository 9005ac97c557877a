use maud::{DOCTYPE, Markup, html};

use crate::chrome;
use crate::partials;

/// Render the full page: head, navbar, main content, about modal, scripts.
/// The navbar is always emitted before the modal.
pub(crate) fn layout(title: &str, content: Option<Markup>) -> Markup {
    let chrome = chrome::render_chrome(title);

    html! {
        (DOCTYPE)
        html lang="en" {
            (partials::head::head(title))
            body {
                (chrome.navbar)

                main class="container py-4" {
                    @if let Some(content) = content {
                        (content)
                    }
                }

                (chrome.modal)

                // Bootstrap's modal toggle needs these
                script src="https://code.jquery.com/jquery-3.3.1.slim.min.js"
                    integrity="sha384-q8i/X+965DzO0rT7abK41JStQIAqVgRVzpbzo5smXKp4YfRvH+8abtTE1Pi6jizo"
                    crossorigin="anonymous" {}
                script src="https://cdnjs.cloudflare.com/ajax/libs/popper.js/1.14.7/umd/popper.min.js"
                    integrity="sha384-UO2eT0CpHqdSJQ6hJty5KVphtPhzWj9WO1clHTMGa3JDZwrnQq4sF86dIHNDz0W1"
                    crossorigin="anonymous" {}
                script src="https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/js/bootstrap.min.js"
                    integrity="sha384-JjSmVgyd0p3pXB1rRibZUAYoIIy6OrQ6VrjIEaFf/nJGzIxFDsf4x0xIM+B07jRM"
                    crossorigin="anonymous" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_is_emitted_before_modal() {
        let markup = layout("QB MVP Predictor", None).into_string();

        let navbar = markup.find("navbar-dark").expect("navbar present");
        let modal = markup.find(r#"id="aboutModal""#).expect("modal present");
        assert!(navbar < modal);
    }

    #[test]
    fn title_lands_in_head_and_chrome() {
        let markup = layout("QB MVP Predictor", None).into_string();

        assert!(markup.contains("<title>QB MVP Predictor</title>"));
        assert!(markup.contains("About &quot;QB MVP Predictor&quot;"));
    }
}
