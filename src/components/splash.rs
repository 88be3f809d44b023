use leptos::prelude::*;

pub const SPLASH_HEADLINE: [&str; 2] = ["uncover hidden patterns", "in X profiles"];

pub const SPLASH_SUBCOPY: &str = "we analyze top accounts, surface overlooked insights, and give \
    you a map of what makes them work \u{2014} no guesswork required.";

/// Marketing copy shown until the first result arrives.
#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <section class="splash">
            <h1 class="splash-headline">
                {SPLASH_HEADLINE[0]}
                <br />
                {SPLASH_HEADLINE[1]}
            </h1>
            <p class="splash-subcopy">{SPLASH_SUBCOPY}</p>
        </section>
    }
}
