use crate::actions::ContactActions;
use crate::animation::reveal::{reveal_css, RevealGroup, FEATURE_CARDS, SUPPORT_OPTIONS};
use crate::components::{use_scroll_reveal, ToastHost};
use crate::notifications::{NotifierHandle, ToastStyle};
use crate::platform::browser::{self, BrowserLinkOpener};
use crate::uptime::{Uptime, UPTIME_REFRESH_MS};
use crate::Route;
use chrono::Utc;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::components::Link;

const REVEAL_GROUPS: &[RevealGroup] = &[FEATURE_CARDS, SUPPORT_OPTIONS];

#[function_component(SupportPage)]
pub fn support_page() -> Html {
    html! {
        <ToastHost style={ToastStyle::portal()}>
            <SupportContent />
        </ToastHost>
    }
}

#[function_component(SupportContent)]
fn support_content() -> Html {
    let notifier = use_context::<NotifierHandle>().unwrap_or_default();
    let config = use_state(|| Rc::new(browser::load_config()));
    let contact = {
        let config = (*config).clone();
        let notifier = notifier.0.clone();
        use_state(move || ContactActions::new(config, Rc::new(BrowserLinkOpener), notifier))
    };
    let uptime_label = use_state(String::new);

    {
        let uptime_label = uptime_label.clone();
        use_effect_with_deps(
            move |_| {
                let uptime = Uptime::simulated(
                    Utc::now(),
                    browser::random_below(24),
                    browser::random_below(60),
                );
                uptime_label.set(uptime.label(Utc::now()));
                let interval = Interval::new(UPTIME_REFRESH_MS, move || {
                    uptime_label.set(uptime.label(Utc::now()));
                });
                move || drop(interval)
            },
            (),
        );
    }
    use_scroll_reveal(REVEAL_GROUPS);

    let open_whatsapp = {
        let contact = (*contact).clone();
        Callback::from(move |_: MouseEvent| contact.open_whatsapp())
    };
    let open_perplexity = {
        let contact = (*contact).clone();
        Callback::from(move |_: MouseEvent| contact.open_perplexity())
    };
    let open_docs = {
        let contact = (*contact).clone();
        Callback::from(move |_: MouseEvent| contact.open_docs())
    };
    let scroll_to = |section: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            browser::scroll_to_section(section);
        })
    };

    let system = &config.system;

    html! {
        <div class="portal">
            <style>{ PORTAL_CSS }</style>
            <style>{ reveal_css(REVEAL_GROUPS) }</style>

            <nav class="portal-nav">
                <span class="portal-brand">{ "NuNa Support" }</span>
                <div class="portal-nav-links">
                    <a href="#support" onclick={scroll_to("support")}>{ "Get Help" }</a>
                    <a href="#features" onclick={scroll_to("features")}>{ "Features" }</a>
                    <Link<Route> to={Route::Demo} classes="portal-demo-link">{ "Web Demo" }</Link<Route>>
                </div>
            </nav>

            <header class="portal-hero">
                <h1>{ "Need help with your NuNa system?" }</h1>
                <p>{ "Chat with support, search for answers, or read the docs." }</p>
                <div class="system-info">
                    <div class="system-info-item">
                        <span class="label">{ "Device" }</span>
                        <span class="value">{ &system.device }</span>
                    </div>
                    <div class="system-info-item">
                        <span class="label">{ "OS" }</span>
                        <span class="value">{ &system.os }</span>
                    </div>
                    <div class="system-info-item">
                        <span class="label">{ "Build" }</span>
                        <span class="value">{ &system.build }</span>
                    </div>
                    <div class="system-info-item">
                        <span class="label">{ "Uptime" }</span>
                        <span class="value" id="uptime">{ (*uptime_label).clone() }</span>
                    </div>
                </div>
            </header>

            <section id="support" class="portal-section">
                <h2>{ "Get Support" }</h2>
                <div class="support-options">
                    <div class="support-option whatsapp">
                        <div class="icon">{ "💬" }</div>
                        <h3>{ "WhatsApp" }</h3>
                        <p>{ "Talk to a person. We usually answer within the hour." }</p>
                        <button onclick={open_whatsapp}>{ "Open Chat" }</button>
                    </div>
                    <div class="support-option perplexity">
                        <div class="icon">{ "🤖" }</div>
                        <h3>{ "Perplexity AI" }</h3>
                        <p>{ "Search for answers about NuNa and Windows automation." }</p>
                        <button onclick={open_perplexity}>{ "Ask AI" }</button>
                    </div>
                    <div class="support-option docs">
                        <div class="icon">{ "📚" }</div>
                        <h3>{ "Documentation" }</h3>
                        <p>{ "Setup guides, troubleshooting and release notes." }</p>
                        <button onclick={open_docs}>{ "Read Docs" }</button>
                    </div>
                </div>
            </section>

            <section id="features" class="portal-section">
                <h2>{ "What NuNa Does" }</h2>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>{ "⚡ Automation" }</h3>
                        <p>{ "Runs routine Windows tasks on schedule." }</p>
                    </div>
                    <div class="feature-card">
                        <h3>{ "🔒 Local First" }</h3>
                        <p>{ "Your data stays on your device." }</p>
                    </div>
                    <div class="feature-card">
                        <h3>{ "📊 Monitoring" }</h3>
                        <p>{ "Keeps an eye on system health and uptime." }</p>
                    </div>
                    <div class="feature-card">
                        <h3>{ "🔄 Updates" }</h3>
                        <p>{ "Stays current without getting in your way." }</p>
                    </div>
                </div>
            </section>

            <footer class="portal-footer">
                <p>{ format!("{} · {} · Build {}", system.device, system.os, system.build) }</p>
            </footer>
        </div>
    }
}

const PORTAL_CSS: &str = r#"
.portal {
    min-height: 100vh;
    background: #0a0a0f;
    color: #f0f0f5;
    font-family: 'Outfit', sans-serif;
}
.portal-nav {
    position: sticky;
    top: 0;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    background: rgba(10, 10, 15, 0.85);
    backdrop-filter: blur(10px);
    z-index: 10;
}
.portal-brand {
    font-weight: 700;
    font-size: 1.25rem;
    background: linear-gradient(45deg, #7c3aed, #2563eb);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.portal-nav-links {
    display: flex;
    gap: 1.5rem;
}
.portal-nav-links a {
    color: #a0a0b0;
    text-decoration: none;
    transition: color 0.3s ease;
}
.portal-nav-links a:hover {
    color: #f0f0f5;
}
.portal-hero {
    text-align: center;
    padding: 6rem 2rem 4rem;
}
.portal-hero h1 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}
.portal-hero p {
    color: #a0a0b0;
    font-size: 1.15rem;
}
.system-info {
    display: inline-grid;
    grid-template-columns: repeat(4, auto);
    gap: 2rem;
    margin-top: 2.5rem;
    padding: 1.25rem 2rem;
    background: #1a1a25;
    border: 1px solid rgba(124, 58, 237, 0.3);
    border-radius: 12px;
}
.system-info-item {
    display: flex;
    flex-direction: column;
    gap: 0.25rem;
}
.system-info-item .label {
    color: #7c3aed;
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}
.portal-section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 4rem 2rem;
}
.portal-section h2 {
    text-align: center;
    font-size: 2rem;
    margin-bottom: 2.5rem;
}
.support-options,
.feature-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.5rem;
}
.support-option,
.feature-card {
    background: #1a1a25;
    border: 1px solid rgba(255, 255, 255, 0.05);
    border-radius: 16px;
    padding: 2rem;
}
.support-option .icon {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}
.support-option p,
.feature-card p {
    color: #a0a0b0;
}
.support-option button {
    margin-top: 1.5rem;
    width: 100%;
    padding: 0.75rem 1rem;
    border: none;
    border-radius: 8px;
    color: white;
    font-size: 1rem;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.support-option button:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.3);
}
.support-option.whatsapp button { background: #25D366; }
.support-option.perplexity button { background: #7c3aed; }
.support-option.docs button { background: #2563eb; }
.portal-footer {
    text-align: center;
    color: #606070;
    padding: 2rem;
}
@media (max-width: 768px) {
    .system-info {
        grid-template-columns: repeat(2, auto);
    }
    .portal-hero h1 {
        font-size: 2rem;
    }
}
"#;
