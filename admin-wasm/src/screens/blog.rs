use super::ScreenProps;
use crate::components::{badge_class, DeleteModal, Spinner};
use admin_client::models::{PostStatus, StatusFilter};
use admin_panel::view::{PostRow, NEW_POST_HREF};
use admin_panel::{BlogMsg, BlogScreen, Screen, ToastLog};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub struct BlogPage {
    screen: BlogScreen,
    toasts: ToastLog,
}

impl Component for BlogPage {
    type Message = BlogMsg;
    type Properties = ScreenProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(BlogMsg::Mount);
        Self {
            screen: BlogScreen::new(),
            toasts: ToastLog::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let Some(command) = self.screen.update(msg, &self.toasts) {
            let done = ctx.link().callback(|msg: BlogMsg| msg);
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
        let on_filter = link.batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select
                .value()
                .parse::<StatusFilter<PostStatus>>()
                .ok()
                .map(BlogMsg::SetFilter)
        });

        html! {
            <div class="screen blog-screen">
                <div class="screen-header">
                    <h2>{ "Blog Posts" }</h2>
                    <a class="btn btn-primary" href={NEW_POST_HREF}>{ "New Post" }</a>
                </div>

                <div class="toolbar">
                    <select onchange={on_filter}>
                        { for StatusFilter::<PostStatus>::options().into_iter().map(|option| html! {
                            <option
                                value={option.as_query_value()}
                                selected={option == self.screen.filter()}
                            >
                                { option.label() }
                            </option>
                        }) }
                    </select>
                    <button class="btn" onclick={link.callback(|_| BlogMsg::Refresh)}>
                        { "Refresh" }
                    </button>
                </div>

                { self.view_body(ctx) }

                <DeleteModal
                    dialog={self.screen.delete_dialog()}
                    on_confirm={link.callback(|_| BlogMsg::ConfirmDelete)}
                    on_cancel={link.callback(|_| BlogMsg::CancelDelete)}
                />
            </div>
        }
    }
}

impl BlogPage {
    fn view_body(&self, ctx: &Context<Self>) -> Html {
        if self.screen.is_loading() && !self.screen.has_loaded() {
            return html! { <Spinner /> };
        }

        if self.screen.is_empty() {
            return html! {
                <div class="empty-state">
                    <h3>{ "No blog posts found" }</h3>
                    <p>{ "Create your first blog post to get started." }</p>
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
                            <th>{ "Title" }</th>
                            <th>{ "Author" }</th>
                            <th>{ "Category" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Views" }</th>
                            <th>{ "Date" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.screen.rows().into_iter().map(|row| self.view_row(row, ctx)) }
                    </tbody>
                </table>
            </>
        }
    }

    fn view_row(&self, row: PostRow, ctx: &Context<Self>) -> Html {
        let id = row.id.clone();
        let on_delete = ctx
            .link()
            .callback(move |_| BlogMsg::RequestDelete(id.clone()));

        html! {
            <tr key={row.id.to_string()}>
                <td class="post-title">
                    if let Some(image) = &row.featured_image {
                        <img class="thumb" src={image.clone()} alt={row.title.clone()} />
                    }
                    <div>
                        <strong>{ &row.title }</strong>
                        if let Some(excerpt) = &row.excerpt {
                            <p class="excerpt">{ excerpt }</p>
                        }
                    </div>
                </td>
                <td>{ &row.author }</td>
                <td>
                    { match &row.category {
                        Some(category) => {
                            let style = category
                                .color
                                .as_ref()
                                .map(|color| format!("background-color: {}", color));
                            html! { <span class="category" {style}>{ &category.name }</span> }
                        }
                        None => html! { <span class="muted">{ "Uncategorized" }</span> },
                    } }
                </td>
                <td><span class={badge_class(row.tone)}>{ row.status_label }</span></td>
                <td>{ row.views }</td>
                <td>{ &row.date }</td>
                <td class="actions">
                    <a href={row.view_href.clone()} title="View">{ "View" }</a>
                    <a href={row.edit_href.clone()} title="Edit">{ "Edit" }</a>
                    <button class="btn btn-danger" title="Delete" onclick={on_delete}>
                        { "Delete" }
                    </button>
                </td>
            </tr>
        }
    }
}
