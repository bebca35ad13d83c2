use admin_panel::{DownloadError, Downloader};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Triggers a browser download through a temporary object URL.
#[derive(Debug, Default)]
pub struct BrowserDownloader;

fn browser_error(value: JsValue) -> DownloadError {
    DownloadError::Browser(format!("{:?}", value))
}

fn missing(what: &str) -> DownloadError {
    DownloadError::Browser(format!("{} is not available", what))
}

impl Downloader for BrowserDownloader {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| missing("document"))?;
        let body = document.body().ok_or_else(|| missing("document body"))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(browser_error)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser_error)?
            .dyn_into()
            .map_err(|_| missing("anchor element"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        body.append_child(&anchor).map_err(browser_error)?;
        anchor.click();
        body.remove_child(&anchor).map_err(browser_error)?;
        Url::revoke_object_url(&url).map_err(browser_error)?;

        tracing::info!(filename, bytes = bytes.len(), "download started");
        Ok(())
    }
}
