//! Window scroll, size and pointer position, subscribed once at the root and
//! handed down through context. Consumers only read them.

use yew::prelude::*;
use yew_hooks::prelude::*;

use super::media::now_ms;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    /// `performance.now()` of the last move, `None` before the first one.
    pub moved_at: Option<f64>,
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ProviderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (width, height) = use_window_size();
    let viewport = Viewport {
        scroll_y,
        width,
        height,
    };

    html! {
        <ContextProvider<Viewport> context={viewport}>
            { for props.children.iter() }
        </ContextProvider<Viewport>>
    }
}

#[function_component(PointerProvider)]
pub fn pointer_provider(props: &ProviderProps) -> Html {
    let pointer = use_state(Pointer::default);

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set(Pointer {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
                moved_at: Some(now_ms()),
            });
        });
    }

    html! {
        <ContextProvider<Pointer> context={*pointer}>
            { for props.children.iter() }
        </ContextProvider<Pointer>>
    }
}

#[hook]
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>().unwrap_or_default()
}

#[hook]
pub fn use_pointer() -> Pointer {
    use_context::<Pointer>().unwrap_or_default()
}
