use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod scroll;
mod waitlist;
mod components {
    pub mod accordion;
    pub mod icons;
    pub mod toast;
}
mod pages {
    pub mod landing;
}

use components::toast::ToastProvider;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>
                {"Back to the home page"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 16px;
                    background: #fff7ed;
                    color: #1f2937;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .not-found a {
                    color: #f97316;
                }
                "#}
            </style>
        </div>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("Logger was already initialized");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
