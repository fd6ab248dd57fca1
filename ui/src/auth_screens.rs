//! The login flow screens: base (social/phone choice), phone entry, verify.
//!
//! [`AuthScreen`] owns one [`AuthFlow`] for the whole flow and mirrors its
//! mode into a signal; the child screens are dumb surfaces wired up with
//! event handlers. The per-second cooldown driver lives inside
//! [`VerifyScreen`], so leaving the verify step (or unmounting the flow
//! entirely) cancels the tick with the scope that owns it.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaMagnifyingGlass, FaPhone};
use dioxus_free_icons::Icon;

use api::{Gateway, RestGateway};
use engine::auth::{AuthFlow, AuthMode, BaseMode, SocialProvider};
use engine::phone;

use crate::auth::{use_auth, use_gateway, AuthState};
use crate::strings;

/// The complete phone-verification login flow.
#[component]
pub fn AuthScreen(mode: BaseMode) -> Element {
    let gateway = use_gateway();
    let flow: Rc<AuthFlow<RestGateway>> =
        use_hook(|| Rc::new(AuthFlow::new(gateway.clone(), mode)));
    let mut step = use_signal(|| flow.mode());
    let mut cooldown = use_signal(|| 0u8);
    let mut error = use_signal(|| Option::<String>::None);
    let mut auth = use_auth();

    let choose_phone = {
        let flow = Rc::clone(&flow);
        move |_| {
            error.set(None);
            flow.choose_phone();
            step.set(flow.mode());
        }
    };

    let back = {
        let flow = Rc::clone(&flow);
        move |_| {
            error.set(None);
            flow.back();
            step.set(flow.mode());
        }
    };

    let social = {
        let flow = Rc::clone(&flow);
        move |provider: SocialProvider| {
            let flow = Rc::clone(&flow);
            spawn(async move {
                if let Err(err) = flow.social_sign_in(provider).await {
                    error.set(Some(err.to_string()));
                }
            });
        }
    };

    let submit_phone = {
        let flow = Rc::clone(&flow);
        move |(iso, digits): (String, String)| {
            let flow = Rc::clone(&flow);
            spawn(async move {
                error.set(None);
                let Some(country) = phone::find(&iso) else {
                    return;
                };
                match flow.submit_phone(country, &digits).await {
                    Ok(()) => {
                        cooldown.set(flow.cooldown());
                        step.set(flow.mode());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let submit_code = {
        let flow = Rc::clone(&flow);
        let gateway = gateway.clone();
        move |code: String| {
            let flow = Rc::clone(&flow);
            let gateway = gateway.clone();
            spawn(async move {
                error.set(None);
                if let Err(err) = flow.submit_code(&code).await {
                    error.set(Some(err.to_string()));
                    return;
                }
                // Identity confirmed; refresh the session state. The gate
                // reacts by unmounting this flow.
                match gateway.current_identity().await {
                    Ok(identity) => auth.set(AuthState {
                        identity,
                        loading: false,
                    }),
                    Err(err) => {
                        tracing::warn!(error = %err, "identity probe after verification failed");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let resend = {
        let flow = Rc::clone(&flow);
        move |_| {
            let flow = Rc::clone(&flow);
            spawn(async move {
                match flow.resend().await {
                    Ok(()) => cooldown.set(flow.cooldown()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let tick = {
        let flow = Rc::clone(&flow);
        move |_| {
            // Countdown only runs while there is something to count; a resend
            // resets the flow's cooldown and the next tick picks it back up.
            if flow.cooldown() > 0 {
                cooldown.set(flow.tick());
            }
        }
    };

    match step() {
        AuthMode::Login | AuthMode::Signup => rsx! {
            BaseScreen {
                mode,
                error: error(),
                on_social: social,
                on_phone: choose_phone,
            }
        },
        AuthMode::PhoneEntry => rsx! {
            PhoneScreen {
                error: error(),
                on_back: back,
                on_submit: submit_phone,
            }
        },
        AuthMode::Verify => rsx! {
            VerifyScreen {
                phone_number: flow.pending_phone(),
                cooldown: cooldown(),
                error: error(),
                on_back: back,
                on_submit: submit_code,
                on_resend: resend,
                on_tick: tick,
            }
        },
    }
}

#[component]
fn ErrorBox(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
            "{message}"
        }
    }
}

#[component]
fn BaseScreen(
    mode: BaseMode,
    error: Option<String>,
    on_social: EventHandler<SocialProvider>,
    on_phone: EventHandler<()>,
) -> Element {
    let (title, subtitle) = match mode {
        BaseMode::Login => (strings::auth::SIGN_IN_TITLE, strings::auth::SIGN_IN_SUBTITLE),
        BaseMode::Signup => (strings::auth::SIGN_UP_TITLE, strings::auth::SIGN_UP_SUBTITLE),
    };

    let social_button = |provider: SocialProvider, label: &'static str| {
        rsx! {
            button {
                class: "flex w-full items-center justify-start gap-3 h-12 px-4 border border-neutral-300 rounded cursor-pointer bg-white hover:bg-neutral-50",
                onclick: move |_| on_social.call(provider),
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-white px-4",

            div {
                class: "flex flex-1 flex-col items-center justify-center space-y-6 py-8",

                div {
                    class: "flex flex-col items-center space-y-2 text-center",
                    h1 { class: "text-2xl font-semibold", "{title}" }
                    p { class: "text-sm text-neutral-600 max-w-[250px]", "{subtitle}" }
                }

                div {
                    class: "flex w-full max-w-[400px] flex-col gap-4",

                    ErrorBox { message: error }

                    {social_button(SocialProvider::Facebook, strings::auth::CONTINUE_WITH_FACEBOOK)}
                    {social_button(SocialProvider::Google, strings::auth::CONTINUE_WITH_GOOGLE)}
                    {social_button(SocialProvider::Apple, strings::auth::CONTINUE_WITH_APPLE)}

                    button {
                        class: "flex w-full items-center justify-start gap-3 h-12 px-4 border border-neutral-300 rounded cursor-pointer bg-white hover:bg-neutral-50",
                        onclick: move |_| on_phone.call(()),
                        Icon { icon: FaPhone, width: 18, height: 18 }
                        {strings::auth::CONTINUE_WITH_PHONE}
                    }
                }
            }
        }
    }
}

#[component]
fn PhoneScreen(
    error: Option<String>,
    on_back: EventHandler<()>,
    on_submit: EventHandler<(String, String)>,
) -> Element {
    let mut iso = use_signal(|| phone::default_country().iso.to_string());
    let mut digits = use_signal(String::new);
    let mut picker_open = use_signal(|| false);
    let mut country_query = use_signal(String::new);

    let country = phone::find(&iso())
        .copied()
        .unwrap_or(*phone::default_country());
    let flag = country.flag();

    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-white px-4",

            div {
                class: "flex h-14 items-center gap-4",
                button {
                    class: "rounded-full p-2 hover:bg-neutral-100",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 20, height: 20 }
                }
            }

            div {
                class: "flex flex-1 flex-col justify-center px-4",

                h1 {
                    class: "mb-8 text-center text-2xl font-semibold",
                    {strings::auth::PHONE_TITLE}
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call((iso(), digits()));
                    },
                    class: "flex flex-col gap-6",

                    ErrorBox { message: error }

                    label { class: "text-sm font-medium", {strings::auth::PHONE_LABEL} }

                    button {
                        class: "flex items-center gap-2 h-10 px-3 border border-neutral-300 rounded text-left",
                        r#type: "button",
                        onclick: move |_| picker_open.set(!picker_open()),
                        span { "{flag}" }
                        span { "{country.name}" }
                        span { class: "ml-auto text-neutral-500", "+{country.calling_code}" }
                    }

                    if picker_open() {
                        div {
                            class: "border border-neutral-200 rounded",
                            div {
                                class: "flex items-center gap-2 px-3 py-2 border-b border-neutral-200",
                                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                                input {
                                    class: "h-8 w-full outline-none",
                                    placeholder: strings::auth::COUNTRY_SEARCH_PLACEHOLDER,
                                    value: country_query(),
                                    oninput: move |evt: FormEvent| country_query.set(evt.value()),
                                }
                            }
                            div {
                                class: "max-h-[300px] overflow-y-auto",
                                for option in phone::search(&country_query()) {
                                    button {
                                        key: "{option.iso}",
                                        class: "flex w-full items-center gap-2 px-3 py-2 hover:bg-neutral-50",
                                        r#type: "button",
                                        onclick: {
                                            let selected = option.iso.to_string();
                                            move |_| {
                                                iso.set(selected.clone());
                                                picker_open.set(false);
                                            }
                                        },
                                        span { "{option.flag()}" }
                                        span { "{option.name}" }
                                        span { class: "ml-auto text-neutral-500", "+{option.calling_code}" }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-neutral-600", "+{country.calling_code}" }
                        input {
                            class: "h-10 flex-1 border border-neutral-300 rounded px-3",
                            r#type: "tel",
                            value: digits(),
                            oninput: move |evt: FormEvent| digits.set(evt.value()),
                        }
                    }

                    button {
                        class: "h-11 w-full rounded bg-neutral-900 text-white font-medium",
                        r#type: "submit",
                        {strings::auth::PHONE_CONTINUE}
                    }
                }
            }
        }
    }
}

#[component]
fn VerifyScreen(
    phone_number: String,
    cooldown: u8,
    error: Option<String>,
    on_back: EventHandler<()>,
    on_submit: EventHandler<String>,
    on_resend: EventHandler<()>,
    on_tick: EventHandler<()>,
) -> Element {
    let mut code = use_signal(String::new);

    // Cooldown driver. The task belongs to this screen's scope, so stepping
    // back or finishing the flow cancels it with the screen.
    use_hook(move || {
        spawn(async move {
            loop {
                crate::sleep_one_second().await;
                on_tick.call(());
            }
        });
    });

    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-white px-4",

            div {
                class: "flex h-14 items-center gap-4",
                button {
                    class: "rounded-full p-2 hover:bg-neutral-100",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 20, height: 20 }
                }
            }

            div {
                class: "flex flex-1 flex-col justify-center px-4",

                h1 {
                    class: "mb-2 text-center text-2xl font-semibold",
                    {strings::auth::VERIFY_TITLE}
                }
                p {
                    class: "mb-8 text-center text-sm text-neutral-600",
                    {strings::auth::VERIFY_SUBTITLE}
                    " {phone_number}"
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(code());
                    },
                    class: "flex flex-col gap-6",

                    ErrorBox { message: error }

                    input {
                        class: "h-12 w-full rounded border border-neutral-300 text-center text-2xl tracking-widest",
                        r#type: "text",
                        maxlength: 6,
                        placeholder: strings::auth::VERIFY_PLACEHOLDER,
                        value: code(),
                        oninput: move |evt: FormEvent| code.set(evt.value()),
                    }

                    button {
                        class: "h-11 w-full rounded bg-neutral-900 text-white font-medium",
                        r#type: "submit",
                        {strings::auth::VERIFY_BUTTON}
                    }
                }

                div {
                    class: "mt-6 text-center",
                    if cooldown > 0 {
                        p {
                            class: "text-sm text-neutral-600",
                            {strings::auth::RESEND_TIMER}
                            " {cooldown} "
                            {strings::auth::SECONDS}
                        }
                    } else {
                        button {
                            class: "text-sm font-medium text-neutral-900 underline",
                            onclick: move |_| on_resend.call(()),
                            {strings::auth::RESEND}
                        }
                    }
                }
            }
        }
    }
}
