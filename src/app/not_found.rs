use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Fallback for every unknown route.
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    {
        let path = pathname.get_untracked();
        tracing::warn!(%path, "no route matched");
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    Effect::new(move |_| {
        log::error!(
            "404 Error: User attempted to access non-existent route: {}",
            pathname.get()
        );
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-[#0A0A0A] text-white p-4">
            <div class="text-center max-w-md">
                <h1 class="text-9xl font-display font-bold mb-4 text-gradient">"404"</h1>
                <p class="text-xl text-gray-400 mb-8">
                    "The page you're looking for seems to have vanished into the digital void."
                </p>
                <a
                    href="/"
                    class="inline-block bg-gradient-to-r from-neon-purple to-neon-blue text-white px-6 py-3 rounded-md"
                >
                    "Return to Home"
                </a>
            </div>
        </div>
    }
}
