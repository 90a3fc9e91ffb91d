use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use serde_json::json;
use log::info;

use crate::analytics;
use crate::behaviors;
use crate::stepper;


#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: String,
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let opening = !*is_open;
            if opening {
                analytics::track_with("faq_open", &json!({ "faq_id": id }));
            }
            is_open.set(opening);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}


#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    card_id: String,
    title: String,
    description: String,
    on_learn_more: Callback<MouseEvent>,
}

#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    html! {
        <div class="benefit-card">
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
            <a href="#" class="learn-more" data-card={props.card_id.clone()}
                onclick={props.on_learn_more.clone()}>
                {"Learn more"}
            </a>
        </div>
    }
}


#[function_component(Landing)]
pub fn landing() -> Html {
    let panel_open = use_state(|| false);
    let panel_ref = use_node_ref();

    // Behaviors that work on the rendered DOM wire up once on mount. Each
    // init guards its own elements, so one missing piece of markup never
    // blocks the others.
    {
        use_effect_with_deps(
            move |_| {
                behaviors::init_sticky_cta();
                behaviors::init_section_reveal();
                behaviors::init_keyboard_feedback();
                stepper::dom::init("how-it-works");
                info!("Cuenta landing initialized successfully");
                || ()
            },
            (),
        );
    }

    let on_hero_cta = {
        let panel_open = panel_open.clone();
        let panel_ref = panel_ref.clone();
        Callback::from(move |_e: MouseEvent| {
            let opening = !*panel_open;
            if opening {
                analytics::track("cta_choice_open");
                if let Some(panel) = panel_ref.cast::<Element>() {
                    let panel_open = panel_open.clone();
                    behaviors::close_on_outside_click(
                        panel,
                        Callback::from(move |_| panel_open.set(false)),
                    );
                }
            }
            panel_open.set(opening);
            analytics::track("hero_cta_click");
        })
    };

    let on_choice = {
        let panel_open = panel_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let kind = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("data-type"))
                .unwrap_or_default();
            analytics::track_with("cta_choice_click", &json!({ "type": kind }));
            panel_open.set(false);
        })
    };

    let on_sticky_cta = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        analytics::track("sticky_cta_click");
        if let Some(hero) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(".hero").ok().flatten())
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            hero.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let on_app_cta = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        analytics::track("handoff_app_opened");
        // Deep link stand-in; a real build would hand off to the app here.
        gloo_console::log!("Opening the Cuenta app...");
    });

    let on_learn_more = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let card_id = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.get_attribute("data-card"))
            .unwrap_or_default();
        analytics::track_with("card_learn_more_click", &json!({ "card_id": card_id }));
    });

    let app_cta_style = if behaviors::is_mobile() {
        "display: inline-flex;"
    } else {
        "display: none;"
    };

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Your money, all in one account"}</h1>
                    <p class="hero-subtitle">
                        {"Pay, collect, transfer and grow your money from a single free account. No opening fees, no maintenance fees."}
                    </p>
                    <div class="hero-cta-group">
                        <button id="main-cta" class="hero-cta"
                            aria-haspopup="true"
                            aria-expanded={panel_open.to_string()}
                            onclick={on_hero_cta}>
                            {"Create account"}
                        </button>
                        <a id="app-cta" class="app-cta" href="#" style={app_cta_style}
                            onclick={on_app_cta}>
                            {"Open in the app"}
                        </a>
                    </div>
                    <div id="cta-choice-panel" class="cta-choice-panel" ref={panel_ref}
                        aria-hidden={(!*panel_open).to_string()}>
                        <button class="choice-btn" data-type="personal" onclick={on_choice.clone()}>
                            <strong>{"Personal account"}</strong>
                            <span>{"For your everyday money"}</span>
                        </button>
                        <button class="choice-btn" data-type="business" onclick={on_choice}>
                            <strong>{"Business account"}</strong>
                            <span>{"For collecting and selling"}</span>
                        </button>
                    </div>
                </div>
            </header>

            <div id="sticky-cta" class="sticky-cta" aria-hidden="true">
                <span class="sticky-cta-text">{"Open your free account in minutes"}</span>
                <button class="sticky-cta-btn" onclick={on_sticky_cta}>{"Create account"}</button>
            </div>

            <section class="benefits reveal-section">
                <h2>{"Everything your money needs"}</h2>
                <div class="benefit-grid">
                    <BenefitCard
                        card_id="card"
                        title="A card with no annual fee"
                        description="Request the prepaid card for free and pay anywhere, online and in stores."
                        on_learn_more={on_learn_more.clone()} />
                    <BenefitCard
                        card_id="yields"
                        title="Money that grows daily"
                        description="The balance in your account earns returns every day, with no minimum amount."
                        on_learn_more={on_learn_more.clone()} />
                    <BenefitCard
                        card_id="transfers"
                        title="Free instant transfers"
                        description="Send and receive money instantly to any bank or digital account."
                        on_learn_more={on_learn_more} />
                </div>
            </section>

            <section id="how-it-works" class="how-it-works reveal-section">
                <h2>{"Open your account in three steps"}</h2>
                <div class="progress-rail" aria-hidden="true">
                    <div class="progress-rail-fill"></div>
                </div>
                <ol class="progress-steps">
                    <li class="progress-step">
                        <span class="step-dot"></span>
                        <strong>{"Sign up"}</strong>
                        <p>{"Create your account with just your email and ID. It takes minutes."}</p>
                    </li>
                    <li class="progress-step">
                        <span class="step-dot"></span>
                        <strong>{"Add money"}</strong>
                        <p>{"Top up by transfer, card or in cash at thousands of locations."}</p>
                    </li>
                    <li class="progress-step">
                        <span class="step-dot"></span>
                        <strong>{"Start paying"}</strong>
                        <p>{"Pay services, shop online and send money to anyone."}</p>
                    </li>
                </ol>
            </section>

            <section class="security reveal-section">
                <h2>{"Your money, protected"}</h2>
                <p>
                    {"Every account is protected with two-factor authentication, real-time purchase alerts and the ability to freeze your card from the site at any moment."}
                </p>
            </section>

            <section class="faq reveal-section">
                <h2>{"Frequently asked questions"}</h2>
                <FaqItem id="cost" question="How much does the account cost?">
                    <p>{"Nothing. Opening the account, keeping it and the prepaid card are all free. There are no maintenance fees of any kind."}</p>
                </FaqItem>
                <FaqItem id="requirements" question="What do I need to open an account?">
                    <p>{"Only a valid ID and an email address. You don't need a bank account or any paperwork."}</p>
                </FaqItem>
                <FaqItem id="yields" question="How do the daily returns work?">
                    <p>{"The money in your account is invested in a money-market fund. Returns accrue every day and you can withdraw your balance whenever you want."}</p>
                </FaqItem>
                <FaqItem id="withdraw" question="Can I take my money out whenever I want?">
                    <p>{"Yes. Your balance is always available: transfer it to any bank account or withdraw cash at ATMs with your card."}</p>
                </FaqItem>
            </section>

            <footer class="landing-footer">
                <p>{"Cuenta · a demo landing page. No real accounts are opened here."}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    color: #1a1a2e;
                    background: #ffffff;
                    font-family: 'Inter', -apple-system, sans-serif;
                    line-height: 1.6;
                }

                .landing-page h2 {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }

                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(160deg, #00a2ff 0%, #0064d1 100%);
                    color: #ffffff;
                }

                .hero-content {
                    max-width: 720px;
                    margin: 0 auto;
                    position: relative;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    opacity: 0.92;
                    margin-bottom: 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }

                .hero-cta {
                    padding: 1rem 2.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #0064d1;
                    background: #ffffff;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.2);
                }

                .app-cta {
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 1.5rem;
                    color: #ffffff;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    border-radius: 8px;
                    text-decoration: none;
                }

                .cta-choice-panel {
                    position: absolute;
                    margin-top: 0.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0.75rem;
                    background: #ffffff;
                    border-radius: 12px;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.25);
                    z-index: 20;
                }

                .cta-choice-panel[aria-hidden="true"] {
                    display: none;
                }

                .choice-btn {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    padding: 0.75rem 1rem;
                    background: none;
                    border: none;
                    border-radius: 8px;
                    color: #1a1a2e;
                    text-align: left;
                    cursor: pointer;
                }

                .choice-btn:hover {
                    background: #eef5ff;
                }

                .choice-btn span {
                    font-size: 0.85rem;
                    color: #5a6472;
                }

                .sticky-cta {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 0.75rem 1rem;
                    background: #ffffff;
                    box-shadow: 0 -4px 16px rgba(0, 0, 0, 0.12);
                    transform: translateY(0);
                    transition: transform 0.3s ease;
                    z-index: 30;
                }

                .sticky-cta[aria-hidden="true"] {
                    transform: translateY(110%);
                }

                .sticky-cta-btn {
                    padding: 0.6rem 1.5rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: #0064d1;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                }

                section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .reveal-section {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal-section.reveal-in {
                    opacity: 1;
                    transform: translateY(0);
                }

                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .benefit-card {
                    padding: 1.5rem;
                    border: 1px solid #e3e8ef;
                    border-radius: 12px;
                    transition: box-shadow 0.3s ease;
                }

                .benefit-card:hover {
                    box-shadow: 0 8px 24px rgba(0, 100, 209, 0.12);
                }

                .learn-more {
                    color: #0064d1;
                    font-weight: 600;
                    text-decoration: none;
                }

                .progress-rail {
                    height: 4px;
                    margin: 2.5rem 0 1.5rem;
                    background: #e3e8ef;
                    border-radius: 2px;
                    overflow: hidden;
                }

                .progress-rail-fill {
                    width: 0;
                    height: 100%;
                    background: #0064d1;
                    border-radius: 2px;
                    transition: width 0.15s linear;
                }

                .progress-steps {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .progress-step {
                    opacity: 0.45;
                    transition: opacity 0.3s ease;
                }

                .progress-step .step-dot {
                    display: block;
                    width: 14px;
                    height: 14px;
                    margin-bottom: 0.75rem;
                    background: #b9c4d0;
                    border-radius: 50%;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .progress-step.active {
                    opacity: 1;
                }

                .progress-step.active .step-dot {
                    background: #0064d1;
                    transform: scale(1.2);
                }

                .progress-step p {
                    font-size: 0.95rem;
                    color: #5a6472;
                }

                .faq-item {
                    border: 1px solid #e3e8ef;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #1a1a2e;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #0064d1;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.25rem;
                    color: #5a6472;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.25rem 1.25rem;
                }

                .landing-footer {
                    padding: 2rem;
                    text-align: center;
                    color: #5a6472;
                    border-top: 1px solid #e3e8ef;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }

                    .hero-cta-group {
                        flex-direction: column;
                        align-items: stretch;
                    }

                    .progress-steps {
                        grid-template-columns: 1fr;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal-section,
                    .progress-rail-fill,
                    .progress-step,
                    .sticky-cta {
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
