use crate::model::MessageBanner;
use leptos::prelude::*;

#[component]
pub fn Banner(banner: RwSignal<MessageBanner>) -> impl IntoView {
    view! {
        <div id="message" class=move || banner.with(MessageBanner::class)>
            {move || banner.with(|banner| banner.text().to_string())}
        </div>
    }
}
