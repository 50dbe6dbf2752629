mod widgets;

use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{console, window};
use yew::prelude::*;

use crate::catalog::{TimelineSide, CATALOG};
use crate::diagnostics::{event_line, LogLevel};
use crate::motion::{
    nav::NavState,
    reveal::{cascade, HERO_COPY, HERO_IMAGE, PORTFOLIO_CARD, SERVICE_CARD, SKILL_ROW, TIMELINE_NODE},
    tilt::{HERO_TILT, PORTFOLIO_TILT, SERVICE_TILT},
};
use widgets::{scroll_metrics, Background, CustomCursor, Reveal, ScrollProgress, SkillBar, Tilt, Typewriter};

fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    let line = JsValue::from_str(&event_line(level, event, fields));
    match level {
        LogLevel::Info => console::info_1(&line),
        LogLevel::Warn => console::warn_1(&line),
    }
}

enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Scrolled(offset) => next.observe_scroll(offset),
            NavAction::ToggleMenu => next.toggle_menu(),
            NavAction::LinkActivated => next.link_activated(),
        }
        Rc::new(next)
    }
}

#[function_component(NavigationBar)]
fn navigation_bar() -> Html {
    let nav = use_reducer(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with((), move |_| {
            let report = move || {
                if let Some((offset, _, _)) = scroll_metrics() {
                    dispatcher.dispatch(NavAction::Scrolled(offset));
                }
            };
            report();
            let listener = window().map(|win| EventListener::new(&win, "scroll", move |_| report()));
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::ToggleMenu))
    };

    let on_link = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::LinkActivated))
    };

    let menu_icon = if nav.menu_open { "ri-close-line" } else { "ri-menu-3-line" };
    let menu_label = if nav.menu_open { "Close menu" } else { "Open menu" };

    html! {
        <nav class={classes!(nav.is_solid().then_some("scrolled"))}>
            <div class="nav__bar">
                <a href="#home" class="nav__logo" onclick={on_link.clone()}>
                    <div class="logo-icon">{"P"}</div>
                    <span>{CATALOG.profile.brand}</span>
                </a>
                <button
                    class="menu-btn"
                    type="button"
                    aria-label={menu_label}
                    aria-expanded={nav.menu_open.to_string()}
                    onclick={on_toggle}
                >
                    <i class={menu_icon} aria-hidden="true"></i>
                </button>
                <ul class={classes!("nav__links", nav.menu_open.then_some("open"))}>
                    { for CATALOG.nav_links.iter().map(|link| html! {
                        <li key={link.label}>
                            <a href={link.href()} onclick={on_link.clone()}>{link.label}</a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let profile = &CATALOG.profile;

    html! {
        <header class="section__container header__container" id="home">
            <div class="header__content-wrapper">
                <Reveal motion={HERO_COPY} class={classes!("header__content")}>
                    <div class="hire-badge">{profile.badge}</div>
                    <h2 class="header__greeting">{profile.greeting}</h2>
                    <h1 class="header__title">
                        {profile.name}
                        <br />
                        <span class="header__role">
                            <Typewriter phrases={profile.roles} />
                        </span>
                    </h1>
                    <p class="header__description">{profile.description}</p>
                    <div class="header__btns">
                        <a href="#contact" class="btn btn-primary">
                            {"Hire Me "}<i class="ri-briefcase-line" aria-hidden="true"></i>
                        </a>
                        <a href={profile.cv_path} download="" class="btn btn-secondary">
                            {"Download CV "}<i class="ri-download-line" aria-hidden="true"></i>
                        </a>
                    </div>
                </Reveal>
                <Tilt config={HERO_TILT}>
                    <Reveal motion={HERO_IMAGE} class={classes!("header__image")}>
                        <div class="hero-shape"></div>
                        <img src={profile.hero_image} alt={profile.name} />
                    </Reveal>
                </Tilt>
            </div>
        </header>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="section__container about__container" id="about">
            <div>
                <img class="about__image" src={CATALOG.profile.about_image} alt="About Me" loading="lazy" />
                <span class="section__subtitle">{"About Me"}</span>
                <h2 class="section__title">{"Technical Proficiency"}</h2>
                <div class="skills-wrapper">
                    { for cascade(CATALOG.skills, &SKILL_ROW).into_iter().map(|row| html! {
                        <SkillBar
                            key={row.item.skill}
                            delay={row.delay}
                            skill={row.item.skill}
                            percentage={row.item.percentage}
                        />
                    }) }
                </div>
            </div>
            <div class="timeline-container-wrapper">
                <h3 class="timeline__heading">{"My Journey"}</h3>
                <div class="timeline">
                    { for cascade(CATALOG.experience, &TIMELINE_NODE).into_iter().map(|node| html! {
                        <div
                            key={node.item.year}
                            class={classes!("timeline-item", TimelineSide::for_index(node.index).as_str())}
                        >
                            <div class="timeline-dot"></div>
                            <Reveal motion={TIMELINE_NODE} delay={node.delay} class={classes!("timeline-content")}>
                                <span class="timeline__year">{node.item.year}</span>
                                <h3 class="timeline__role">{node.item.role}</h3>
                                <p class="timeline__company">{node.item.company}</p>
                                <p class="timeline__description">{node.item.description}</p>
                            </Reveal>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section class="section__container" id="service">
            <div class="section__header-wrapper">
                <span class="section__subtitle">{"What I Offer"}</span>
                <h2 class="section__title">{"Specialized Services"}</h2>
            </div>
            <div class="service__grid">
                { for cascade(CATALOG.services, &SERVICE_CARD).into_iter().map(|card| html! {
                    <Tilt key={card.item.title} config={SERVICE_TILT}>
                        <Reveal motion={SERVICE_CARD} delay={card.delay} class={classes!("service__card", "glass")}>
                            <div class="service__icon">
                                <i class={card.item.icon.class_name()} aria-hidden="true"></i>
                            </div>
                            <h3>{card.item.title}</h3>
                            <p>{card.item.description}</p>
                        </Reveal>
                    </Tilt>
                }) }
            </div>
        </section>
    }
}

#[function_component(Portfolio)]
fn portfolio() -> Html {
    html! {
        <section class="section__container" id="portfolio">
            <div class="section__header-wrapper">
                <span class="section__subtitle">{"My Work"}</span>
                <h2 class="section__title">{"Featured Projects"}</h2>
            </div>
            <div class="portfolio__grid">
                { for cascade(CATALOG.portfolio, &PORTFOLIO_CARD).into_iter().map(|card| html! {
                    <Tilt key={card.item.title} config={PORTFOLIO_TILT}>
                        <Reveal motion={PORTFOLIO_CARD} delay={card.delay} class={classes!("portfolio__card")}>
                            <img src={card.item.image_source} alt={card.item.title} loading="lazy" />
                            <div class="portfolio__overlay">
                                <h3>{card.item.title}</h3>
                                <div class="portfolio__tags">
                                    { for card.item.tags.iter().map(|tag| html! {
                                        <span key={*tag} class="portfolio__tag">{*tag}</span>
                                    }) }
                                </div>
                            </div>
                        </Reveal>
                    </Tilt>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section class="section__container contact__container" id="contact">
            <span class="section__subtitle">{"Contact Me"}</span>
            <h2 class="section__title">{"Let's Work Together"}</h2>
            <p class="contact__blurb">
                {"Always open to discussing product design work or partnership opportunities."}
            </p>
            <div class="social__links">
                { for CATALOG.social_links.iter().map(|link| {
                    let new_tab = link.kind.opens_in_new_tab();
                    html! {
                        <a
                            key={link.kind.label()}
                            href={link.target_url}
                            class="social__btn"
                            aria-label={link.kind.label()}
                            target={new_tab.then_some("_blank")}
                            rel={new_tab.then_some("noopener noreferrer")}
                        >
                            <i class={link.kind.class_name()} aria-hidden="true"></i>
                        </a>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        match CATALOG.validate() {
            Ok(()) => log_event(
                LogLevel::Info,
                "page_mounted",
                serde_json::json!({
                    "services": CATALOG.services.len(),
                    "experience": CATALOG.experience.len(),
                    "portfolio": CATALOG.portfolio.len(),
                    "social_links": CATALOG.social_links.len(),
                }),
            ),
            Err(error) => log_event(
                LogLevel::Warn,
                "catalog_invalid",
                serde_json::json!({ "message": error.to_string() }),
            ),
        }
        || ()
    });

    html! {
        <>
            <CustomCursor />
            <ScrollProgress />
            <Background />
            <NavigationBar />
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Contact />
            <footer>
                <p>{CATALOG.profile.footer}</p>
            </footer>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
