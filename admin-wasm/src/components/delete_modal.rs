use admin_panel::DeleteDialog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DeleteModalProps {
    pub dialog: DeleteDialog,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation modal shared by both screens. Buttons are disabled while
/// the delete request is outstanding.
#[function_component(DeleteModal)]
pub fn delete_modal(props: &DeleteModalProps) -> Html {
    let dialog = &props.dialog;
    if !dialog.is_open {
        return html! {};
    }

    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <h3>{ dialog.title }</h3>
                <p>{ dialog.message }</p>
                if let Some(name) = &dialog.item_name {
                    <p class="modal-item"><strong>{ name }</strong></p>
                }
                <div class="modal-actions">
                    <button class="btn" disabled={dialog.loading} onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                    <button class="btn btn-danger" disabled={dialog.loading} onclick={on_confirm}>
                        { if dialog.loading { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
