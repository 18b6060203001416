//! Common card container components.

use yew::prelude::*;

/// Props for the Card component.
#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Card content.
    pub children: Children,
    /// Additional CSS classes for the card container.
    #[prop_or_default]
    pub class: Classes,
}

/// Bordered card container.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}

/// Props for the CardContent component.
#[derive(Properties, PartialEq)]
pub struct CardContentProps {
    /// Nested content.
    pub children: Children,
}

/// Padded inner area of a [`Card`].
#[function_component(CardContent)]
pub fn card_content(props: &CardContentProps) -> Html {
    html! {
        <div class="card-content">
            { props.children.clone() }
        </div>
    }
}
