//! Root application component: routing and the launcher/chat shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::{chat::ChatPage, launcher::LauncherPage};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Which top-level view the shell renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellView {
    Launcher,
    Chat,
}

impl ShellView {
    /// Launcher for `/launcher.html` or `/launcher`, chat for anything else.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/launcher.html" | "/launcher" => Self::Launcher,
            _ => Self::Chat,
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/identra-ui.css"/>
        <Title text="Identra"/>

        <Router>
            <Routes fallback=|| view! { <RootShell/> }>
                <Route path=StaticSegment("") view=RootShell/>
                <Route path=StaticSegment("launcher") view=RootShell/>
                <Route path=StaticSegment("launcher.html") view=RootShell/>
            </Routes>
        </Router>
    }
}

/// Shows the loading placeholder until the client has mounted, then the
/// view selected by the current path.
#[component]
fn RootShell() -> impl IntoView {
    let location = use_location();
    let ready = RwSignal::new(false);

    // Effects only run in the browser, after hydration.
    Effect::new(move || ready.set(true));

    move || {
        if !ready.get() {
            return view! { <LoadingScreen/> }.into_any();
        }
        match ShellView::from_path(&location.pathname.get()) {
            ShellView::Launcher => view! { <LauncherPage/> }.into_any(),
            ShellView::Chat => view! { <ChatPage/> }.into_any(),
        }
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__mark">
                <div class="loading-screen__dot"></div>
            </div>
            <p class="loading-screen__label">"Loading Identra"</p>
        </div>
    }
}
