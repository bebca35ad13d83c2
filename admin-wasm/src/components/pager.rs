use admin_panel::pagination::PageControls;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub controls: PageControls,
    pub on_page: Callback<u32>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let controls = &props.controls;
    if !controls.visible {
        return html! {};
    }

    let previous = {
        let on_page = props.on_page.clone();
        let target = controls.current.saturating_sub(1);
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };
    let next = {
        let on_page = props.on_page.clone();
        let target = controls.current.saturating_add(1);
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    html! {
        <div class="pager">
            <span class="pager-summary">{ controls.summary() }</span>
            <div class="pager-buttons">
                <button class="btn" disabled={!controls.has_previous} onclick={previous}>
                    { "Previous" }
                </button>
                { for controls.page_numbers().map(|page| {
                    let on_page = props.on_page.clone();
                    let class = if page == controls.current {
                        classes!("btn", "btn-active")
                    } else {
                        classes!("btn")
                    };
                    html! {
                        <button {class} onclick={Callback::from(move |_: MouseEvent| on_page.emit(page))}>
                            { page }
                        </button>
                    }
                }) }
                <button class="btn" disabled={!controls.has_next} onclick={next}>
                    { "Next" }
                </button>
            </div>
        </div>
    }
}
