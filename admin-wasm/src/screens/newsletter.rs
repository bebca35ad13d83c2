use super::ScreenProps;
use crate::components::{badge_class, DeleteModal, Pager, Spinner};
use admin_client::models::{Status, StatusFilter, SubscriberStatus};
use admin_panel::view::SubscriberRow;
use admin_panel::{NewsletterMsg, NewsletterScreen, Screen, ToastLog};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub struct NewsletterPage {
    screen: NewsletterScreen,
    toasts: ToastLog,
}

impl Component for NewsletterPage {
    type Message = NewsletterMsg;
    type Properties = ScreenProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(NewsletterMsg::Mount);
        Self {
            screen: NewsletterScreen::new(),
            toasts: ToastLog::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Some(command) = self.screen.update(msg, &self.toasts) {
            let done = ctx.link().callback(|msg: NewsletterMsg| msg);
            ctx.props().runtime.spawn(command, done);
        }

        let toasts = self.toasts.drain();
        if !toasts.is_empty() {
            ctx.props().on_toasts.emit(toasts);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let exporting = self.screen.is_exporting();

        html! {
            <div class="screen newsletter-screen">
                <div class="screen-header">
                    <h2>{ "Newsletter Subscribers" }</h2>
                    <button
                        class="btn btn-primary"
                        disabled={exporting}
                        onclick={link.callback(|_| NewsletterMsg::Export)}
                    >
                        { if exporting { "Exporting..." } else { "Export CSV" } }
                    </button>
                </div>

                { self.view_stats() }
                { self.view_toolbar(ctx) }
                { self.view_body(ctx) }

                <Pager
                    controls={self.screen.page_controls()}
                    on_page={link.callback(NewsletterMsg::GoToPage)}
                />

                <DeleteModal
                    dialog={self.screen.delete_dialog()}
                    on_confirm={link.callback(|_| NewsletterMsg::ConfirmDelete)}
                    on_cancel={link.callback(|_| NewsletterMsg::CancelDelete)}
                />
            </div>
        }
    }
}

impl NewsletterPage {
    fn view_stats(&self) -> Html {
        let stats = self.screen.stats();
        let card = |label: &'static str, value: String| {
            html! {
                <div class="stat-card">
                    <span class="stat-label">{ label }</span>
                    <span class="stat-value">{ value }</span>
                </div>
            }
        };

        html! {
            <div class="stats">
                { card("Total Subscribers", stats.total.to_string()) }
                { card("Active", stats.active.to_string()) }
                { card("Unsubscribed", stats.unsubscribed.to_string()) }
            </div>
        }
    }

    fn view_toolbar(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_search = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            NewsletterMsg::SetSearch(input.value())
        });
        let on_filter = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select
                .value()
                .parse::<StatusFilter<SubscriberStatus>>()
                .ok()
                .map(NewsletterMsg::SetFilter)
        });

        html! {
            <div class="toolbar">
                <input
                    type="search"
                    placeholder="Search by email or name..."
                    value={self.screen.search().to_string()}
                    oninput={on_search}
                />
                <select onchange={on_filter}>
                    { for StatusFilter::<SubscriberStatus>::options().into_iter().map(|option| html! {
                        <option
                            value={option.as_query_value()}
                            selected={option == self.screen.filter()}
                        >
                            { option.label() }
                        </option>
                    }) }
                </select>
                <button class="btn" onclick={link.callback(|_| NewsletterMsg::Refresh)}>
                    { "Refresh" }
                </button>
            </div>
        }
    }

    fn view_body(&self, ctx: &Context<Self>) -> Html {
        if self.screen.is_loading() && !self.screen.has_loaded() {
            return html! { <Spinner /> };
        }

        let rows = self.screen.rows();
        if self.screen.has_loaded() && rows.is_empty() {
            return html! {
                <div class="empty-state">
                    <h3>{ "No subscribers found" }</h3>
                </div>
            };
        }

        html! {
            <>
                if self.screen.is_loading() {
                    <Spinner />
                }
                <table class="table">
                    <thead>
                        <tr>
                            <th>{ "Subscriber" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Subscribed" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.into_iter().map(|row| self.view_row(row, ctx)) }
                    </tbody>
                </table>
            </>
        }
    }

    fn view_row(&self, row: SubscriberRow, ctx: &Context<Self>) -> Html {
        let on_status = {
            let id = row.id.clone();
            ctx.link().batch_callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                SubscriberStatus::parse(&select.value()).map(|status| {
                    NewsletterMsg::ChangeStatus {
                        id: id.clone(),
                        status,
                    }
                })
            })
        };
        let on_delete = {
            let id = row.id.clone();
            ctx.link()
                .callback(move |_| NewsletterMsg::RequestDelete(id.clone()))
        };

        html! {
            <tr key={row.id.to_string()}>
                <td>
                    <strong>{ &row.display_name }</strong>
                    <p class="muted">{ &row.email }</p>
                </td>
                <td>
                    // A new key remounts the select, dropping a rejected choice.
                    <select
                        key={format!("{}-{}", row.id, row.revision)}
                        class={badge_class(row.tone)}
                        disabled={row.pending}
                        onchange={on_status}
                    >
                        { for SubscriberStatus::ALL.iter().map(|status| html! {
                            <option value={status.as_str()} selected={*status == row.status}>
                                { status.label() }
                            </option>
                        }) }
                    </select>
                </td>
                <td>{ &row.date }</td>
                <td class="actions">
                    <button class="btn btn-danger" title="Delete" onclick={on_delete}>
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    }
}
