use crate::components::activity::ActivityCard;
use crate::model::*;
use leptos::{either::EitherOf3, prelude::*};

#[component]
pub fn ActivityList(
    #[prop(into)] state: Signal<LoadState>,
    banner: RwSignal<MessageBanner>,
) -> impl IntoView {
    view! {
        <div id="activities-list">
            {move || match state.get() {
                LoadState::Loading => EitherOf3::A(view! { <p>"Loading activities..."</p> }),
                LoadState::Failed => EitherOf3::B(view! { <p>{LOAD_FAILED}</p> }),
                LoadState::Loaded(activities) => {
                    EitherOf3::C(
                        activities
                            .into_iter()
                            .map(|activity| view! { <ActivityCard activity banner /> })
                            .collect_view(),
                    )
                }
            }}
        </div>
    }
}
