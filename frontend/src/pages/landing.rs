use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionEntry};
use crate::components::icons::{Icon, IconKind};
use crate::scroll::use_smooth_scroll;
use crate::waitlist::WaitlistSignup;

// Section ids, shared by the nav links and the sections they scroll to.
pub const HERO: &str = "hero";
pub const ABOUT: &str = "about";
pub const FEATURES: &str = "features";
pub const TESTIMONIALS: &str = "testimonials";
pub const COMPARISON: &str = "comparison";
pub const FAQ: &str = "faq";
pub const CTA: &str = "cta";

pub const SECTION_IDS: [&str; 7] = [HERO, ABOUT, FEATURES, TESTIMONIALS, COMPARISON, FAQ, CTA];

pub const NAV_LINKS: [(&str, &str); 6] = [
    (HERO, "Home"),
    (ABOUT, "About"),
    (FEATURES, "Features"),
    (TESTIMONIALS, "Testimonials"),
    (COMPARISON, "Comparison"),
    (FAQ, "FAQ"),
];

struct Feature {
    icon: IconKind,
    title: &'static str,
    description: &'static str,
}

const FEATURE_CARDS: [Feature; 3] = [
    Feature {
        icon: IconKind::Shield,
        title: "AI-Moderated Safety",
        description: "Real-time AI moderation to ensure safe, respectful conversations.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Personalized Peer Matching",
        description: "Connect with people who understand your experience.",
    },
    Feature {
        icon: IconKind::Brain,
        title: "Crisis Support",
        description: "Quick escalation and support in times of need.",
    },
];

const VALUE_POINTS: [(&str, &str); 3] = [
    ("Safety & Trust:", "Ensures respectful and productive conversations."),
    ("Privacy:", "AI is there to support, not replace, human interactions."),
    ("Accessibility:", "Support available when and where you need it."),
];

pub const COMPARISON_PLATFORMS: [&str; 4] = ["Our Platform", "7 Cups", "Calm", "Woebot"];

pub const COMPARISON_ROWS: [(&str, [bool; 4]); 3] = [
    ("AI Moderation", [true, false, false, false]),
    ("Peer Support", [true, true, false, false]),
    ("Personalized Matching", [true, false, false, false]),
];

fn hero_cta_href() -> String {
    format!("#{}", CTA)
}

fn faq_entries() -> Vec<AccordionEntry> {
    vec![
        AccordionEntry {
            question: "How does AI moderation work?",
            answer: "Our AI analyzes conversations to ensure they remain safe and respectful, without intruding on privacy. \
                     It uses advanced natural language processing to detect potentially harmful content and intervene when necessary.",
        },
        AccordionEntry {
            question: "Who will I be matched with?",
            answer: "You'll be matched with peers based on shared experiences and support needs. Our algorithm takes into \
                     account factors like your mental health concerns, goals, and preferences to find the most suitable matches.",
        },
        AccordionEntry {
            question: "Is my data safe?",
            answer: "Yes. We prioritize privacy and use AI solely for moderation and safety. All personal data is encrypted, \
                     and we adhere to strict data protection regulations to ensure your information remains confidential.",
        },
    ]
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="site-header">
            <nav>
                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|(id, label)| html! {
                        <li><a href={format!("#{}", id)} class="nav-link">{*label}</a></li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}

#[function_component(ComparisonTable)]
fn comparison_table() -> Html {
    let mark = |supported: bool| {
        if supported {
            html! { <Icon kind={IconKind::CheckCircle} class={classes!("mark", "yes")} /> }
        } else {
            html! { <Icon kind={IconKind::Cross} class={classes!("mark", "no")} /> }
        }
    };

    html! {
        <div class="table-wrapper">
            <table class="comparison-table">
                <thead>
                    <tr>
                        <th class="feature-col">{"Feature"}</th>
                        { for COMPARISON_PLATFORMS.iter().map(|platform| html! { <th>{*platform}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for COMPARISON_ROWS.iter().map(|(feature, support)| html! {
                        <tr>
                            <td class="feature-col">{*feature}</td>
                            { for support.iter().map(|supported| html! { <td>{mark(*supported)}</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

// Collects nothing yet: the form has no submit handler and falls back to the
// browser's default submission.
#[function_component(FeedbackForm)]
fn feedback_form() -> Html {
    html! {
        <form class="feedback-form">
            <div>
                <label for="feedback">{"What do you want most in a mental health community?"}</label>
                <textarea id="feedback" placeholder="Share your thoughts..." />
            </div>
            <div>
                <label for="concern">{"What's your biggest concern with peer support platforms?"}</label>
                <textarea id="concern" placeholder="Tell us your concerns..." />
            </div>
            <button type="submit" class="primary-button">{"Submit Feedback"}</button>
        </form>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_smooth_scroll();

    html! {
        <div class="landing-page">
            <Header />

            <main>
                // Hero Section
                <section id={HERO} class="hero">
                    <div class="container narrow">
                        <h1>{"A Safe, Supportive Community for Mental Health, Enhanced by AI Moderation"}</h1>
                        <p class="hero-subtitle">
                            {"Connect with peers who understand, with AI keeping conversations safe and supportive."}
                        </p>
                        // The button had no action of its own; as a fragment link it
                        // goes through smooth scroll down to the signup form.
                        <a href={hero_cta_href()} class="hero-cta">{"Join the Waitlist"}</a>
                    </div>
                </section>

                // About the Platform
                <section id={ABOUT} class="section white">
                    <div class="container">
                        <h2>{"How It Works"}</h2>
                        <p class="lead">
                            {"Our platform combines the power of peer support with advanced AI moderation to create a safe, \
                              supportive environment for mental health conversations. Connect with others who share similar \
                              experiences while our AI ensures all interactions remain respectful and constructive."}
                        </p>
                    </div>
                </section>

                // Features & Benefits
                <section id={FEATURES} class="section light">
                    <div class="container">
                        <h2>{"Main Features"}</h2>
                        <div class="features-grid">
                            { for FEATURE_CARDS.iter().map(|feature| html! {
                                <div class="feature-card">
                                    <Icon kind={feature.icon} class={classes!("feature-icon")} />
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                // Visual Representation
                <section class="section white">
                    <div class="container">
                        <div class="network-panel">
                            <div class="network-copy">
                                <h2>{"Visualize Your Support Network"}</h2>
                                <p>{"Our platform creates a safe space for meaningful connections, all enhanced by AI to ensure a positive experience."}</p>
                            </div>
                            <div class="network-visual">
                                <div class="network-placeholder">
                                    <p>{"Interactive visualization of support network"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                // Value Proposition
                <section class="section light">
                    <div class="container">
                        <h2>{"Why Peer Support with AI?"}</h2>
                        <ul class="value-list">
                            { for VALUE_POINTS.iter().map(|(label, text)| html! {
                                <li>
                                    <Icon kind={IconKind::CheckCircle} class={classes!("value-icon")} />
                                    <span><strong>{*label}</strong>{" "}{*text}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </section>

                // Testimonials
                <section id={TESTIMONIALS} class="section white">
                    <div class="container">
                        <h2>{"What People Are Saying"}</h2>
                        <div class="testimonials-grid">
                            <blockquote class="testimonial orange">
                                <p>{"\"I want a safe place to talk about mental health without fear of judgment.\""}</p>
                                <footer>{"- Potential User"}</footer>
                            </blockquote>
                            <blockquote class="testimonial yellow">
                                <p>{"\"Knowing there's an AI ensuring safe conversations gives me peace of mind.\""}</p>
                                <footer>{"- Beta Tester"}</footer>
                            </blockquote>
                        </div>
                    </div>
                </section>

                // Comparison Table
                <section id={COMPARISON} class="section light">
                    <div class="container">
                        <h2>{"How We Compare"}</h2>
                        <ComparisonTable />
                    </div>
                </section>

                // FAQ Section
                <section id={FAQ} class="section white">
                    <div class="container">
                        <h2>{"Frequently Asked Questions"}</h2>
                        <Accordion entries={faq_entries()} />
                    </div>
                </section>

                // CTA for Waitlist
                <section id={CTA} class="section cta">
                    <div class="container centered">
                        <h2 class="cta-title">{"Be Part of the Movement"}</h2>
                        <p class="cta-subtitle">{"Sign up now for early access and help build a safe, supportive mental health community."}</p>
                        <WaitlistSignup />
                    </div>
                </section>

                // Feedback Form
                <section class="section light">
                    <div class="container">
                        <h2>{"We Value Your Feedback"}</h2>
                        <FeedbackForm />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container">
                    <p>{"© 2024 PeerAI Platform. All rights reserved."}</p>
                    <div class="footer-links">
                        <a href="#">{"Twitter"}</a>
                        <a href="#">{"LinkedIn"}</a>
                        <a href="#">{"Contact Us"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #fff7ed;
                    color: #1f2937;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 16px;
                }
                .container.narrow {
                    max-width: 48rem;
                }
                .container.centered {
                    text-align: center;
                }
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .nav-links {
                    display: flex;
                    justify-content: center;
                    gap: 24px;
                    list-style: none;
                    margin: 0;
                    padding: 16px;
                }
                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #f97316;
                }
                main {
                    padding-top: 48px;
                }
                .hero {
                    padding: 128px 0;
                    background: #f97316;
                    color: #ffffff;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.2;
                    margin-bottom: 24px;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    margin-bottom: 40px;
                    opacity: 0.9;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 16px 32px;
                    border-radius: 6px;
                    background: #ffffff;
                    color: #f97316;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .hero-cta:hover {
                    background: #ffedd5;
                }
                .section {
                    padding: 80px 0;
                }
                .section.white {
                    background: #ffffff;
                }
                .section.light {
                    background: #fff7ed;
                }
                .section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    color: #f97316;
                    margin-bottom: 48px;
                }
                .lead {
                    font-size: 1.125rem;
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 32px;
                }
                .feature-card {
                    text-align: center;
                    padding: 24px;
                    border-radius: 8px;
                    background: #ffffff;
                    border-top: 4px solid #f97316;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }
                .feature-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .feature-card p {
                    color: #4b5563;
                }
                .icon.feature-icon {
                    width: 48px;
                    height: 48px;
                    color: #f97316;
                }
                .network-panel {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 32px;
                    padding: 32px;
                    border-radius: 8px;
                    background: linear-gradient(to right, #ffedd5, #fef9c3);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .network-panel h2 {
                    text-align: left;
                    margin-bottom: 16px;
                }
                .network-copy,
                .network-visual {
                    flex: 1 1 320px;
                }
                .network-placeholder {
                    aspect-ratio: 16 / 9;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 8px;
                    background: #facc15;
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .value-list {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 0;
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .value-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 8px;
                    padding: 16px;
                    border-radius: 8px;
                    background: #ffffff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .value-list strong {
                    color: #f97316;
                }
                .icon.value-icon {
                    flex-shrink: 0;
                    width: 24px;
                    height: 24px;
                    color: #f97316;
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 32px;
                }
                .testimonial {
                    margin: 0;
                    padding: 24px;
                    border-radius: 8px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .testimonial.orange {
                    background: #fff7ed;
                    border-left: 4px solid #f97316;
                }
                .testimonial.yellow {
                    background: #fefce8;
                    border-left: 4px solid #facc15;
                }
                .testimonial footer {
                    font-size: 0.875rem;
                    color: #ea580c;
                }
                .table-wrapper {
                    overflow-x: auto;
                    border-radius: 8px;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .comparison-table th {
                    padding: 8px;
                    background: #ffedd5;
                    color: #ea580c;
                }
                .comparison-table td {
                    padding: 8px;
                    text-align: center;
                    border-bottom: 1px solid #e5e7eb;
                }
                .comparison-table tr:last-child td {
                    border-bottom: none;
                }
                .comparison-table .feature-col {
                    text-align: left;
                }
                .icon.mark {
                    width: 20px;
                    height: 20px;
                }
                .icon.mark.yes {
                    color: #f97316;
                }
                .icon.mark.no {
                    color: #ef4444;
                }
                .section.cta {
                    background: #facc15;
                }
                .section.cta .cta-title {
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 16px;
                }
                .cta-subtitle {
                    font-size: 1.25rem;
                    color: #374151;
                    margin-bottom: 32px;
                }
                .waitlist-form {
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .waitlist-row {
                    display: flex;
                    gap: 8px;
                }
                .waitlist-input {
                    flex-grow: 1;
                    padding: 8px 12px;
                    border-radius: 6px;
                    border: 1px solid #fdba74;
                    background: rgba(255, 255, 255, 0.8);
                }
                .waitlist-note {
                    margin-top: 8px;
                    font-size: 0.875rem;
                    color: #374151;
                }
                .primary-button {
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    background: #f97316;
                    color: #ffffff;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .primary-button:hover {
                    background: #ea580c;
                }
                .primary-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .feedback-form {
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                }
                .feedback-form label {
                    display: block;
                    margin-bottom: 4px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #ea580c;
                }
                .feedback-form textarea {
                    width: 100%;
                    min-height: 80px;
                    padding: 8px 12px;
                    border-radius: 6px;
                    border: 1px solid #fed7aa;
                    box-sizing: border-box;
                }
                .feedback-form textarea:focus {
                    outline: none;
                    border-color: #f97316;
                }
                .feedback-form .primary-button {
                    align-self: flex-start;
                }
                .site-footer {
                    padding: 32px 0;
                    background: #1f2937;
                    color: #ffffff;
                    text-align: center;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 16px;
                }
                .footer-links a {
                    color: #fdba74;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #fed7aa;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .nav-links {
                        gap: 12px;
                        flex-wrap: wrap;
                    }
                }
                "#}
            </style>
        </div>
    }
}
