use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    contact::{ContactError, ContactField, ContactForm, SubmissionTicket},
    section::Section,
    tracking::keyframes::{CONTACT_OFFSET, SECTION_OPACITY},
};

use super::{
    hero::particle,
    page::use_tracking_config,
    reveal::{use_scroll_fade, Reveal},
};

const EMAIL: &str = "hamzaaftab992@gmail.com";
const SOCIAL_URL: &str = "https://github.com/HamzaaAftab?tab=repositories";

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your name",
        ContactField::Email => "your@email.com",
        ContactField::Subject => "What's this about?",
        ContactField::Message => "Tell me about your project...",
    }
}

const INPUT_CLASS: &str = "w-full rounded-md px-3 py-2 bg-white/5 border border-white/10 text-white placeholder:text-gray-500 focus:outline-none focus:border-neon-purple/50 transition-all duration-300";

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let fade = use_scroll_fade(section_ref, SECTION_OPACITY, CONTACT_OFFSET);

    view! {
        <section
            id=Section::Contact.id()
            node_ref=section_ref
            class="py-24 relative"
            style=move || fade.get()
        >
            <div class="particle-container absolute inset-0">
                {(0..20)
                    .map(|i| {
                        let p = particle(i + 300);
                        view! {
                            <div
                                class="absolute w-1 h-1 rounded-full bg-white/10 animate-float"
                                style=format!(
                                    "top: {:.2}%; left: {:.2}%; animation-duration: {:.1}s",
                                    p.top,
                                    p.left,
                                    p.duration,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="absolute inset-0 opacity-5 pointer-events-none bg-grid"></div>

            <div class="container relative z-10">
                <Reveal class="text-center max-w-3xl mx-auto mb-14">
                    <span class="inline-block rounded-full border border-white/10 bg-white/5 text-gray-300 mb-6 px-4 py-1.5 text-xs">
                        "Get in touch"
                    </span>
                    <h2 class="font-display text-3xl md:text-4xl font-bold mb-4 tracking-tight">
                        "Let's " <span class="text-gradient">"collaborate"</span>
                    </h2>
                    <p class="text-gray-300">
                        "Have a project in mind or want to discuss potential opportunities? I'm always open to new challenges and collaborations."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Reveal class="relative" delay_ms=300>
                        <ContactInfo />
                    </Reveal>
                    <Reveal delay_ms=400>
                        <ContactFormPanel />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let details = [
        ("Email", EMAIL),
        ("Location", "Karachi, Pakistan"),
        ("Availability", "Open for freelance & full-time opportunities"),
    ];

    view! {
        <div class="glass-panel p-8 relative group">
            <h3 class="font-display text-2xl font-semibold mb-6">"Contact Information"</h3>
            <div class="space-y-6">
                {details
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="transition-transform duration-500 hover:translate-x-1">
                                <p class="text-sm text-gray-400 mb-1">{label}</p>
                                <p class="text-white font-medium">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()}
                <div>
                    <p class="text-sm text-gray-400 mb-1">"Social"</p>
                    <div class="flex gap-4 mt-2">
                        {["GitHub", "LinkedIn"]
                            .into_iter()
                            .enumerate()
                            .map(|(i, social)| {
                                view! {
                                    <a
                                        href=SOCIAL_URL
                                        class="text-gray-300 hover:text-white transition-colors flex items-center gap-1 group hover:-translate-y-0.5"
                                        style=format!("transition-delay: {}ms", i * 50)
                                    >
                                        {social}
                                        <span class="opacity-0 group-hover:opacity-100 transition-opacity text-xs">
                                            "↗"
                                        </span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="absolute bottom-6 right-6 flex items-center gap-2">
                <span class="relative flex w-3 h-3">
                    <span class="absolute inline-flex h-full w-full rounded-full bg-green-500 opacity-70 animate-ping"></span>
                    <span class="relative inline-flex w-3 h-3 rounded-full bg-green-500"></span>
                </span>
                <span class="text-xs text-green-400">"Available for work"</span>
            </div>
        </div>
    }
}

/// The form plus its toast. Sending is simulated: the fields clear and the
/// toast shows once the submit delay elapses.
#[component]
fn ContactFormPanel() -> impl IntoView {
    let config = use_tracking_config();
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<ContactError>);
    let (toast, set_toast) = signal(false);

    let UseTimeoutFnReturn {
        start: start_toast,
        stop: stop_toast,
        ..
    } = use_timeout_fn(
        move |_: ()| set_toast(false),
        config.toast_duration.as_millis() as f64,
    );

    let UseTimeoutFnReturn {
        start: start_send,
        stop: stop_send,
        ..
    } = use_timeout_fn(
        move |ticket: SubmissionTicket| {
            let Some(sent) = form.try_update(|f| f.finish(ticket)).flatten() else {
                log::debug!("ignoring stale submission {ticket:?}");
                return;
            };
            log::info!("contact message from {} <{}> sent", sent.name, sent.email);
            set_toast(true);
            stop_toast();
            start_toast(());
        },
        config.submit_delay.as_millis() as f64,
    );

    on_cleanup(move || {
        form.try_update(|f| f.cancel());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.begin_submit()) {
            Some(Ok(ticket)) => {
                set_error(None);
                stop_send();
                start_send(ticket);
            }
            Some(Err(err)) => {
                log::warn!("contact form rejected: {err}");
                set_error(Some(err));
            }
            None => {}
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate=true>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <FormField field=ContactField::Name form=form error=error set_error=set_error delay_ms=500 />
                <FormField field=ContactField::Email form=form error=error set_error=set_error delay_ms=600 />
            </div>
            <FormField field=ContactField::Subject form=form error=error set_error=set_error delay_ms=700 />
            <FormField field=ContactField::Message form=form error=error set_error=set_error delay_ms=800 />

            <button
                type="submit"
                class="w-full bg-gradient-to-r from-neon-purple to-neon-blue text-white py-6 rounded-md relative overflow-hidden group disabled:opacity-70"
                disabled=submitting
            >
                <span class="relative z-10 flex items-center justify-center gap-2">
                    {move || if submitting() { "Sending..." } else { "Send message" }}
                </span>
            </button>
        </form>

        <Show when=move || toast.get()>
            <div
                role="status"
                class="fixed bottom-6 right-6 z-50 glass-panel p-4 max-w-sm animate-fade-in"
            >
                <p class="font-semibold">"Message sent successfully!"</p>
                <p class="text-sm text-gray-300">
                    "Thank you for reaching out! I'll get back to you soon."
                </p>
            </div>
        </Show>
    }
}

#[component]
fn FormField(
    field: ContactField,
    form: RwSignal<ContactForm>,
    error: ReadSignal<Option<ContactError>>,
    set_error: WriteSignal<Option<ContactError>>,
    delay_ms: u32,
) -> impl IntoView {
    let field_error = move || {
        error.with(|e| {
            e.as_ref()
                .filter(|e| e.field() == field)
                .map(ToString::to_string)
        })
    };
    let value = move || form.with(|f| f.message().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
        if error.with_untracked(|e| e.as_ref().is_some_and(|e| e.field() == field)) {
            set_error(None);
        }
    };

    let input_type = if field == ContactField::Email { "email" } else { "text" };
    let control = match field {
        ContactField::Message => view! {
            <textarea
                id=field.name()
                name=field.name()
                placeholder=placeholder(field)
                class=format!("{INPUT_CLASS} min-h-[150px]")
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=field.name()
                name=field.name()
                type=input_type
                placeholder=placeholder(field)
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <Reveal delay_ms=delay_ms>
            <label for=field.name() class="block text-sm font-medium text-gray-300 mb-1">
                {field.label()}
            </label>
            {control}
            {move || {
                field_error().map(|msg| view! { <p class="mt-1 text-xs text-red-400">{msg}</p> })
            }}
        </Reveal>
    }
}
