/// Escapes markup in user supplied text so it is inert when rendered as HTML.
///
/// Applied to every free-text field on its way out of the API.
pub fn sanitize(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
