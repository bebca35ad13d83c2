use crate::download::BrowserDownloader;
use admin_client::HttpClient;
use admin_panel::{Command, Services};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Handles every screen runs its commands against.
#[derive(Clone)]
pub struct Runtime {
    api: Rc<HttpClient>,
    downloader: Rc<BrowserDownloader>,
}

impl Runtime {
    pub fn new(api: HttpClient) -> Self {
        Self {
            api: Rc::new(api),
            downloader: Rc::new(BrowserDownloader),
        }
    }

    /// Executes `command` in the background and hands its outcome to `done`.
    pub fn spawn<C>(&self, command: C, done: Callback<C::Msg>)
    where
        C: Command + 'static,
        C::Msg: 'static,
    {
        let api = Rc::clone(&self.api);
        let downloader = Rc::clone(&self.downloader);

        spawn_local(async move {
            let services = Services::new(&*api, &*downloader);
            let msg = command.execute(&services).await;
            done.emit(msg);
        });
    }
}

impl PartialEq for Runtime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}
