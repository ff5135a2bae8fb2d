mod construction;
mod contact;
mod dom;
mod donate;
pub mod endpoints;
mod fields;
mod footer;
mod gallery;
mod hero;
mod image;
mod modal;
mod navigation;
mod presentation;
mod programs;
mod toast;
mod verse;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use construction::ConstructionSection;
use contact::ContactForm;
use donate::{DonateTrigger, DonationModal, FloatingDonateButton};
use footer::Footer;
use gallery::GalleryGrid;
use hero::HeroSection;
use navigation::Navigation;
use presentation::ChurchPresentation;
use programs::ProgramsThreeCards;
use toast::{Toaster, Toasts};
use verse::VerseSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/fpvm-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-[#f9fafb] text-gray-900 scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - FPVM Franco-Malagasy") />
        <Meta
            name="description"
            content="FPVM Franco-Malagasy Teny Fiainana Analamahitsy : cultes en malgache et en français, programmes, projet de construction et contact."
        />

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section in page order under one shell.
#[component]
fn HomePage() -> impl IntoView {
    provide_context(Toaster::new());
    provide_context(DonateTrigger::new());

    view! {
        <Title text="Accueil" />
        <Navigation />
        <div class="min-h-screen w-full">
            <HeroSection />
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <main class="space-y-16 sm:space-y-24 lg:space-y-32 py-16 sm:py-24 lg:py-32">
                    <ChurchPresentation />
                    <ProgramsThreeCards />
                    <ConstructionSection />
                    <GalleryGrid />
                    <VerseSection />
                    <ContactForm />
                </main>
            </div>
            <Footer />
        </div>
        <FloatingDonateButton />
        <DonationModal />
        <Toasts />
    }
}
