use crate::routes::Route;
use dioxus::prelude::Navigator as RouterNavigator;
use dioxus::prelude::*;
use mfit_registration::{
    Destination, Navigator, Notice, NoticeSlot, Registration, RegistrationFormView,
};
use std::fmt;

/// Router-backed navigation; notices travel through the shared [`NoticeSlot`].
#[derive(Clone)]
struct DesktopNavigator {
    router: RouterNavigator,
    notices: NoticeSlot,
}

impl fmt::Debug for DesktopNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DesktopNavigator").field("notices", &self.notices).finish_non_exhaustive()
    }
}

impl Navigator for DesktopNavigator {
    fn navigate(&self, destination: Destination, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.notices.put(notice);
        }
        tracing::debug!(%destination, "Navigating");
        self.router.push(Route::from(destination));
    }
}

#[component]
pub(crate) fn Register() -> Element {
    let registration = use_context::<Registration>();
    let navigator = DesktopNavigator { router: use_navigator(), notices: use_context::<NoticeSlot>() };
    let to_login = navigator.clone();

    rsx! {
        main { class: "page",
            RegistrationFormView {
                registration,
                on_registered: move |notice: Notice| navigator.navigate(Destination::Login, Some(notice)),
                on_login: move |()| to_login.navigate(Destination::Login, None),
            }
        }
    }
}

#[component]
pub(crate) fn Login() -> Element {
    let registration = use_context::<Registration>();
    let notices = use_context::<NoticeSlot>();
    let notice = use_hook(move || notices.take());
    let messages = registration.messages;

    rsx! {
        main { class: "page",
            div { class: "register-card",
                if let Some(notice) = notice {
                    div { class: "alert alert-success", role: "status", "{notice}" }
                }
                h1 { class: "register-title", {messages.login_link} }
                p { class: "register-footer",
                    Link { to: Route::Register {}, {messages.title} }
                }
            }
        }
    }
}
