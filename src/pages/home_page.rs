use crate::components::*;
use crate::model::*;
use leptos::{logging::*, prelude::*, task::spawn_local};
use leptos_meta::Title;

/// The single page: activity cards on one side, the signup form and its message on the other.
///
/// Every load replaces the card list with what the server sent; the dropdown
/// only changes when a load succeeds.
#[component]
pub fn HomePage() -> impl IntoView {
    let board = RwSignal::new(Board::default());
    let banner = RwSignal::new(MessageBanner::default());
    let list_state = Signal::derive(move || board.with(|board| board.state().clone()));

    Effect::new(move |_| {
        spawn_local(async move {
            let state = match HttpApi::from_window() {
                Ok(api) => load_activities(&api).await,
                Err(e) => {
                    error!("Error fetching activities: {}", e);
                    LoadState::Failed
                }
            };
            board.update(|board| board.apply(state));
        });
    });

    view! {
        <Title text="Mergington High School Activities" />
        <div id="home-page">
            <header>
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </header>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList state=list_state banner />
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm board banner />
                <Banner banner />
            </section>
        </div>
    }
}
