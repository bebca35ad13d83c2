pub mod blog;
pub mod newsletter;

pub use blog::BlogPage;
pub use newsletter::NewsletterPage;

use crate::runtime::Runtime;
use admin_panel::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScreenProps {
    pub runtime: Runtime,
    /// Receives the toasts raised by each update.
    pub on_toasts: Callback<Vec<Toast>>,
}
