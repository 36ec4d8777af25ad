use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    /// Id of the element to bring into view.
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
    pub children: Children,
}

/// Anchor that smooth-scrolls a section into view instead of navigating.
/// When the target id does not resolve the click falls through untouched.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let notify = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            let element = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&target));
            if let Some(element) = element {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            notify.emit(());
        })
    };

    html! {
        <a
            href={format!("#{}", props.target)}
            class={props.class.clone()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
