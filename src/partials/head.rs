use maud::{Markup, html};

/// Render the document head. The modal trigger markup relies on Bootstrap,
/// so its stylesheet is linked here and its scripts at the end of the body.
pub(crate) fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet"
                href="https://stackpath.bootstrapcdn.com/bootstrap/4.3.1/css/bootstrap.min.css"
                integrity="sha384-ggOyR0iXCbMQv3Xipma34MD+dH/1fQ784/j6cY/iJTQUOhcWr7x9JvoRxT2MZw1T"
                crossorigin="anonymous";
            link rel="stylesheet" type="text/css" href="/app.css";
            title { (title) }
        }
    }
}
