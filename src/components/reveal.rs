use yew::prelude::*;

use crate::components::observe::observe_once;

const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that stays dimmed until it first scrolls into view, then is
/// marked visible for good. Later scrolling has no effect.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        observe_once(&element, REVEAL_THRESHOLD, move || visible.set(true))
                    } else {
                        Box::new(|| ())
                    };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal-on-scroll",
                props.class.clone(),
                (*visible).then_some("is-visible")
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
