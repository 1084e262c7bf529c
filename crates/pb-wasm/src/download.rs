//! Browser host collaborators: file download and confirmation dialog.

use pb_editor::{ConfirmPrompt, FileSaver, HostError};
use wasm_bindgen::{JsCast, JsValue};

/// Saves by handing the user a temporary object URL through an `<a download>`
/// click. The URL is revoked right after the click.
pub struct BrowserDownload;

impl BrowserDownload {
    fn try_save(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)
    }
}

impl FileSaver for BrowserDownload {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> Result<(), HostError> {
        Self::try_save(bytes, filename, mime).map_err(|err| HostError::Save {
            filename: filename.to_string(),
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        })
    }
}

/// `window.confirm`. A missing window or a blocked dialog counts as "no".
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
