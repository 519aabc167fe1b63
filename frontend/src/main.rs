use log::info;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod anchors;
mod config;
mod styles;
mod motion {
    pub mod block_reveal;
    pub mod ease;
    pub mod latch;
    pub mod parallax;
    pub mod particles;
    pub mod pin;
    pub mod scroll;
    pub mod timeline;
}
mod hooks {
    pub mod frame;
    pub mod media;
    pub mod viewport;
    pub mod visibility;
}
mod components {
    pub mod back_to_top;
    pub mod gold_smoke;
    pub mod header;
    pub mod hero;
    pub mod navbar;
    pub mod reveal;
    pub mod testimonials;
    pub mod text_block;
    pub mod ui;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod methodology;
    pub mod not_found;
    pub mod services;
}

use components::ui;
use hooks::viewport::{PointerProvider, ViewportProvider};
use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <Global css={styles::global()} />
            <style>{ui::STYLE}</style>
            <ViewportProvider>
                <PointerProvider>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </PointerProvider>
            </ViewportProvider>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // A second logger only happens under hot reload; keep the first.
    console_log::init_with_level(config::log_level()).ok();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
