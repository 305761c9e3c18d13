mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod not_found;
mod page;
mod progress;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::TrackingConfig;

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use not_found::NotFound;
use page::provide_page_tracking;
use progress::{ProgressBar, SectionIndicator};
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Fullstack developer portfolio: projects, skills and contact."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(TrackingConfig::default());

    view! {
        <Title text="Hamza's Portfolio | Digital Masterpieces" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single page: every section in fixed vertical order.
#[component]
fn HomePage() -> impl IntoView {
    provide_page_tracking();

    view! {
        <div class="min-h-screen bg-[#0A0A0A] text-white">
            <ProgressBar />
            <Header />
            <main>
                <HeroSection />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
            <SectionIndicator />

            <div class="fixed top-0 right-0 w-80 h-80 pointer-events-none">
                <div class="absolute top-0 right-0 w-full h-full bg-neon-purple/5 rounded-bl-full"></div>
            </div>
            <div class="fixed bottom-0 left-0 w-80 h-80 pointer-events-none">
                <div class="absolute bottom-0 left-0 w-full h-full bg-neon-blue/5 rounded-tr-full"></div>
            </div>
        </div>
    }
}
