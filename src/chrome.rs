//! Page chrome: navbar plus about modal, built from the page title.

use maud::Markup;

use crate::partials;

/// The two chrome fragments. Callers emit `navbar` before `modal`.
pub(crate) struct Chrome {
    pub navbar: Markup,
    pub modal: Markup,
}

/// Build both chrome fragments for the given page title.
pub(crate) fn render_chrome(title: &str) -> Chrome {
    Chrome {
        navbar: partials::navbar::navbar(title),
        modal: partials::about::about_modal(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_interpolates_title_into_both_fragments() {
        let chrome = render_chrome("QB MVP Predictor");

        assert!(chrome.navbar.clone().into_string().contains("QB MVP Predictor"));
        assert!(
            chrome
                .modal
                .into_string()
                .contains("About &quot;QB MVP Predictor&quot;")
        );
    }

    #[test]
    fn empty_title_renders_empty_text_node() {
        let chrome = render_chrome("");

        assert!(
            chrome
                .navbar
                .into_string()
                .contains(r#"<div class="navbar-text text-capitalize"></div>"#)
        );
        assert!(chrome.modal.into_string().contains("About &quot;&quot;"));
    }
}
