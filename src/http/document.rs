//! Full-page document shell.
//!
//! # Responsibilities
//! - Wrap the server-rendered view in a complete HTML document
//! - Embed the navigation state as `APP_PROPS` so the client runtime
//!   can hydrate without refetching
//! - Escape the embedded JSON so it is safe inside a `<script>` tag

use serde::Serialize;
use thiserror::Error;

use crate::app::NavState;
use crate::views::{self, RenderError};

/// Errors that can occur while building a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to serialize page props: {0}")]
    Props(#[from] serde_json::Error),
}

/// Render the complete HTML document for a navigation state.
///
/// The `#content` div holds the markup the client runtime patches over,
/// and the props script must match what `ClientRuntime::hydrate` reads.
pub fn render_page(state: &NavState) -> Result<String, PageError> {
    let content = views::render(state)?.to_html();
    let props = safe_stringify(state)?;

    Ok(format!(
        "<!DOCTYPE html>\
         <html>\
         <head><meta charset=\"utf-8\"><title>Grumblr</title></head>\
         <body>\
         <div id=\"content\">{content}</div>\
         <script>var APP_PROPS = {props};</script>\
         <script src=\"/bundle.js\"></script>\
         </body>\
         </html>"
    ))
}

/// Serialize a value to JSON safe for embedding in a `<script>` tag.
///
/// `</` would let a crafted title close the script element, `<!--` can
/// open an HTML comment inside scripts, and U+2028/U+2029 are line
/// terminators when the JSON is read as JavaScript. The dangerous `<`
/// is replaced with the `\u003c` escape so the output stays valid JSON
/// and hydration can parse it back unchanged.
pub fn safe_stringify<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace("</", "\\u003c/")
        .replace("<!--", "\\u003c!--")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}
