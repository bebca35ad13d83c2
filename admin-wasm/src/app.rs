use crate::api;
use crate::components::ToastStack;
use crate::runtime::Runtime;
use crate::screens::{BlogPage, NewsletterPage};
use admin_panel::Toast;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Blog,
    Newsletter,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Blog => "Blog",
            Tab::Newsletter => "Newsletter",
        }
    }
}

pub enum Msg {
    // Навигация
    SelectTab(Tab),

    // Уведомления
    ShowToasts(Vec<Toast>),
    DismissToast(u64),
}

pub struct App {
    tab: Tab,
    toasts: Vec<(u64, Toast)>,
    next_toast_id: u64,
    runtime: Runtime,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            tab: Tab::Blog,
            toasts: Vec::new(),
            next_toast_id: 0,
            runtime: Runtime::new(api::connect()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTab(tab) => {
                if tab == self.tab {
                    return false;
                }
                self.tab = tab;
                true
            }

            Msg::ShowToasts(toasts) => {
                for toast in toasts {
                    self.toasts.push((self.next_toast_id, toast));
                    self.next_toast_id += 1;
                }
                true
            }

            Msg::DismissToast(id) => {
                self.toasts.retain(|(toast_id, _)| *toast_id != id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_toasts = link.callback(Msg::ShowToasts);

        html! {
            <div class="container admin">
                <nav class="tabs">
                    { for [Tab::Blog, Tab::Newsletter].into_iter().map(|tab| {
                        let class = if tab == self.tab {
                            classes!("tab", "tab-active")
                        } else {
                            classes!("tab")
                        };
                        html! {
                            <button {class} onclick={link.callback(move |_| Msg::SelectTab(tab))}>
                                { tab.label() }
                            </button>
                        }
                    }) }
                </nav>

                { match self.tab {
                    Tab::Blog => html! {
                        <BlogPage runtime={self.runtime.clone()} {on_toasts} />
                    },
                    Tab::Newsletter => html! {
                        <NewsletterPage runtime={self.runtime.clone()} {on_toasts} />
                    },
                } }

                <ToastStack
                    toasts={self.toasts.clone()}
                    on_dismiss={link.callback(Msg::DismissToast)}
                />
            </div>
        }
    }
}
