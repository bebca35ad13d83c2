use admin_panel::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    /// Visible toasts keyed by a stable id.
    pub toasts: Vec<(u64, Toast)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|(id, toast)| {
                let id = *id;
                let on_dismiss = props.on_dismiss.clone();
                html! {
                    <div key={id} class={classes!("toast", format!("toast-{}", toast.kind.as_str()))}>
                        <span>{ &toast.text }</span>
                        <button class="toast-close" onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(id))}>
                            { "×" }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
