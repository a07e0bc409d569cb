//! Placeholders shown while data loads

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ListSkeletonProps {
    #[prop_or(3)]
    pub rows: usize,
}

/// Full-page placeholder used while session and roles settle
#[function_component(PageSkeleton)]
pub fn page_skeleton() -> Html {
    html! {
        <div class="skeleton skeleton-page" aria-busy="true">
            <div class="skeleton-line skeleton-title"></div>
            <CardSkeleton />
            <CardSkeleton />
        </div>
    }
}

#[function_component(CardSkeleton)]
pub fn card_skeleton() -> Html {
    html! {
        <div class="skeleton skeleton-card" aria-busy="true">
            <div class="skeleton-line skeleton-heading"></div>
            <div class="skeleton-line"></div>
        </div>
    }
}

#[function_component(ListSkeleton)]
pub fn list_skeleton(props: &ListSkeletonProps) -> Html {
    html! {
        <ul class="skeleton skeleton-list" aria-busy="true">
            { for (0..props.rows).map(|_| html! { <li class="skeleton-line"></li> }) }
        </ul>
    }
}
