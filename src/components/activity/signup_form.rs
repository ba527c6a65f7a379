use crate::model::*;
use leptos::{ev, logging::*, prelude::*, task::spawn_local};

#[component]
pub fn SignupForm(board: RwSignal<Board>, banner: RwSignal<MessageBanner>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (activity, set_activity) = signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let activity = activity.get_untracked();

        spawn_local(async move {
            log!("signing up {} for {}", email, activity);
            let api = match HttpApi::from_window() {
                Ok(api) => api,
                Err(e) => {
                    error!("Error signing up: {}", e);
                    banner.update(|shown| {
                        shown.show(SignupOutcome::failed().notice);
                    });
                    return;
                }
            };
            let outcome = submit_signup(&api, &activity, &email).await;

            let Some(generation) = banner.try_update(|shown| shown.show(outcome.notice)) else {
                warn!("signup finished after the page was gone");
                return;
            };
            if outcome.auto_hide {
                run_after(AUTO_HIDE_AFTER, move || {
                    banner.try_update(|shown| shown.expire(generation));
                });
            }
            if outcome.reset_form {
                set_email.set(String::new());
                set_activity.set(String::new());
            }
            if outcome.refresh {
                spawn_local(async move {
                    let state = load_activities(&api).await;
                    board.update(|board| board.apply(state));
                });
            }
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=activity
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                >
                    <For
                        each=move || board.with(Board::select_options)
                        key=|option| option.value.clone()
                        children=move |option| {
                            view! { <option value=option.value>{option.label}</option> }
                        }
                    />
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
