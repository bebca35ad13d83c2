pub mod delete_modal;
pub mod pager;
pub mod toasts;

pub use delete_modal::DeleteModal;
pub use pager::Pager;
pub use toasts::ToastStack;

use admin_panel::view::Tone;
use yew::prelude::*;

pub fn badge_class(tone: Tone) -> Classes {
    classes!("badge", format!("badge-{}", tone.as_str()))
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}
