use yew::prelude::*;
use chrono::{Datelike, Utc};

use crate::config;

struct Metric {
    label: &'static str,
    value: &'static str,
    description: &'static str,
}

struct Feature {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    bullets: &'static [&'static str],
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

struct CurriculumTrack {
    title: &'static str,
    detail: &'static str,
}

const METRICS: &[Metric] = &[
    Metric {
        label: "Learners worldwide",
        value: "18k+",
        description: "college & high-school students growing faster with Neuronova",
    },
    Metric {
        label: "Project completions",
        value: "72%",
        description: "students launch a portfolio-ready capstone within 8 weeks",
    },
    Metric {
        label: "Mentor network",
        value: "140+",
        description: "industry experts from FAANG, MIT, and Series A startups",
    },
];

const FEATURES: &[Feature] = &[
    Feature {
        id: "mentorship",
        title: "Personalized 1:1 mentorship",
        description: "Every learner is paired with a vetted mentor who keeps them accountable, adapts the pace, and unlocks confidence.",
        bullets: &[
            "Weekly mentor sessions",
            "Goal-based skill mapping",
            "Progress dashboards that adapt",
        ],
    },
    Feature {
        id: "projects",
        title: "Project-based curriculum",
        description: "Learners move from fundamentals to portfolio projects in just weeks with living curricula built alongside industry experts.",
        bullets: &[
            "Real startup briefs",
            "Integrated AI tools & feedback",
            "Showcase-ready portfolio site",
        ],
    },
    Feature {
        id: "community",
        title: "Social learning community",
        description: "Cohort-based challenges and micro-peers provide momentum. Learners collaborate, ship, and celebrate together.",
        bullets: &[
            "24/7 global community",
            "Peer code reviews & studio days",
            "Gamified streaks and rewards",
        ],
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Elena Torres",
        role: "Incoming CS Major, Stanford",
        quote: "Neuronova helped me launch a machine-learning project that became the highlight of my college application. The mentorship was game-changing.",
    },
    Testimonial {
        name: "Ajay Patel",
        role: "High School Senior, Texas",
        quote: "I finally found a program that adapts to how I learn. The weekly mentor syncs and community kept me accountable without feeling overwhelming.",
    },
    Testimonial {
        name: "Melissa Zhang",
        role: "Product Design Intern, Early-stage startup",
        quote: "The curriculum made me think like a designer. Having real client-style briefs gave me proof of work that impressed recruiters.",
    },
];

const CURRICULUM_TRACKS: &[CurriculumTrack] = &[
    CurriculumTrack {
        title: "AI & Data Futures",
        detail: "Build AI copilots, master Python, ship LLM-powered experiences.",
    },
    CurriculumTrack {
        title: "Product Design Lab",
        detail: "Craft end-to-end UX case studies with Figma and user testing.",
    },
    CurriculumTrack {
        title: "Full-Stack Launchpad",
        detail: "Build cloud-native apps with React, Next.js, and serverless APIs.",
    },
];

const HERO_AVATARS: usize = 5;

const SPHERE_CENTER: f64 = 100.0;
const SPHERE_DOT_ORBIT: f64 = 80.0;

// Dot ring of the hero sphere: `count` points evenly spaced on the orbit
// circle, starting at 3 o'clock.
fn sphere_points(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 * 360.0 / count as f64).to_radians();
            (
                SPHERE_CENTER + SPHERE_DOT_ORBIT * angle.cos(),
                SPHERE_CENTER + SPHERE_DOT_ORBIT * angle.sin(),
            )
        })
        .collect()
}

fn copyright_line() -> String {
    format!(
        "© {} Neuronova Learning, Inc. All rights reserved.",
        Utc::now().year()
    )
}

fn arrow_icon() -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path
                d="M5 12h14m0 0-6-6m6 6-6 6"
                stroke="currentColor"
                stroke-width="1.8"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

fn outbound_icon() -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <path
                d="M7 17 17 7m0 0H9m8 0v8"
                stroke="currentColor"
                stroke-width="1.8"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

fn check_icon() -> Html {
    html! {
        <svg aria-hidden="true" width="16" height="16" viewBox="0 0 16 16" fill="none">
            <path
                d="M13 4 6.5 11 3 7.273"
                stroke="currentColor"
                stroke-width="1.6"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

fn sphere_figure() -> Html {
    html! {
        <svg width="200" height="200" viewBox="0 0 200 200" fill="none" aria-hidden="true">
            <defs>
                <linearGradient id="grad1" x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0%" stop-color="#2f62ff" />
                    <stop offset="100%" stop-color="#7b61ff" />
                </linearGradient>
            </defs>
            <circle cx="100" cy="100" r="70" stroke="url(#grad1)" stroke-width="2.5" opacity="0.35" />
            {
                [15, 35, 55].iter().map(|r| html! {
                    <circle
                        key={format!("ring-{r}")}
                        cx="100"
                        cy="100"
                        r={r.to_string()}
                        stroke="url(#grad1)"
                        stroke-width="1.5"
                        opacity="0.5"
                    />
                }).collect::<Html>()
            }
            {
                sphere_points(18).into_iter().enumerate().map(|(i, (x, y))| html! {
                    <circle
                        key={format!("dot-{i}")}
                        cx={format!("{x:.2}")}
                        cy={format!("{y:.2}")}
                        r="2.5"
                        fill="#1f2937"
                        opacity="0.4"
                    />
                }).collect::<Html>()
            }
        </svg>
    }
}

fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <span class="hero-pill">
                            <span class="hero-dot"></span>
                            {"Next-generation learning journeys"}
                        </span>
                        <h1>
                            {"Empower every learner to design their "}
                            <span class="gradient-text">{"future-ready career"}</span>
                            {"."}
                        </h1>
                        <p>
                            {"Neuronova blends adaptive curriculum, mentor-led accountability, and social learning to help ambitious students develop in-demand skills they can showcase today."}
                        </p>
                        <div class="hero-actions">
                            <a class="btn-primary" href="#get-started">
                                {"Explore programs"}
                                { arrow_icon() }
                            </a>
                            <a class="btn-secondary" href="#curriculum">
                                {"View curriculum"}
                            </a>
                        </div>
                        <div class="hero-bottom">
                            <div class="hero-avatar-stack">
                                {
                                    (0..HERO_AVATARS).map(|idx| html! {
                                        <span key={idx.to_string()} class="avatar"></span>
                                    }).collect::<Html>()
                                }
                            </div>
                            <div class="hero-caption">
                                {"Trusted by ambitious students in 23 countries and schools like MIT, UCLA, and UVA."}
                            </div>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-sphere">
                            <div class="hero-glow"></div>
                            <div class="hero-core">
                                { sphere_figure() }
                            </div>
                        </div>
                        <div class="floating-badge">
                            <span>{"Momentum"}</span>
                            <strong>{"4.8 / 5"}</strong>
                            <span>{"Learner satisfaction score"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

fn metrics_section() -> Html {
    html! {
        <section class="metrics">
            <div class="container metrics-grid">
                {
                    METRICS.iter().map(|metric| html! {
                        <article key={metric.label} class="metric-card">
                            <span>{ metric.label }</span>
                            <strong>{ metric.value }</strong>
                            <p>{ metric.description }</p>
                        </article>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

fn value_section() -> Html {
    html! {
        <section class="value-prop" id="value">
            <div class="container value-grid">
                <div class="value-copy card">
                    <h2>{"Personalized pathways engineered to accelerate outcomes."}</h2>
                    <p>
                        {"Static courses can't keep up with the pace of innovation. Neuronova builds bespoke learning paths driven by data and mentor insight, so students ship meaningful work and arrive at their next chapter confident."}
                    </p>
                    <ul>
                        <li>
                            <span class="dot dot-blue"></span>
                            {"Adaptive curriculum aligned with each learner's goals"}
                        </li>
                        <li>
                            <span class="dot dot-yellow"></span>
                            {"Mentorship marketplace with verified industry experts"}
                        </li>
                        <li>
                            <span class="dot dot-purple"></span>
                            {"Applied learning that translates to real outcomes"}
                        </li>
                    </ul>
                </div>
                <div class="value-stats">
                    <div class="value-card card">
                        <h3>{"Outcomes within 90 days"}</h3>
                        <div class="value-stat">
                            <strong>{"67%"}</strong>
                            <span>{"landed internships or competitions"}</span>
                        </div>
                        <div class="value-stat">
                            <strong>{"84%"}</strong>
                            <span>{"reported higher confidence in technical interviews"}</span>
                        </div>
                        <div class="tags">
                            <span class="tag">{"Project sprints"}</span>
                            <span class="tag">{"Mentor pods"}</span>
                            <span class="tag">{"Career narratives"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn features_section() -> Html {
    html! {
        <section class="features" id="curriculum">
            <div class="container">
                <div class="features-intro">
                    <span class="section-heading">{"What's inside"}</span>
                    <div>
                        <h2>{"Programs designed for velocity and depth."}</h2>
                        <p>
                            {"Each track blends cutting-edge curriculum, mentor guidance, and a community that pushes you forward. Start with fundamentals, move into applied labs, and graduate with proof of work recruiters love."}
                        </p>
                    </div>
                </div>
                <div class="features-grid">
                    {
                        FEATURES.iter().map(|feature| html! {
                            <article key={feature.id} class="feature-card card">
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                                <ul>
                                    {
                                        feature.bullets.iter().map(|bullet| html! {
                                            <li key={*bullet}>
                                                { check_icon() }
                                                { *bullet }
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

fn curriculum_section() -> Html {
    html! {
        <section class="curriculum card" id="programs">
            <div class="container curriculum-grid">
                <div>
                    <span class="section-heading">{"Curated tracks"}</span>
                    <h2>{"Choose the lane that matches your ambition."}</h2>
                    <p>
                        {"Every program blends live labs, async content, and community challenges. Mentors co-create a roadmap that keeps momentum high while ensuring mastery of fundamentals."}
                    </p>
                </div>
                <div class="curriculum-list">
                    {
                        CURRICULUM_TRACKS.iter().map(|track| html! {
                            <div key={track.title} class="curriculum-item">
                                <span>{ track.title }</span>
                                <p>{ track.detail }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

fn testimonials_section() -> Html {
    html! {
        <section class="testimonials" id="stories">
            <div class="container">
                <div class="testimonials-heading">
                    <span class="section-heading">{"Student stories"}</span>
                    <h2>{"Proof that personalized learning unlocks real outcomes."}</h2>
                </div>
                <div class="testimonials-grid">
                    {
                        TESTIMONIALS.iter().map(|testimonial| html! {
                            <figure key={testimonial.name} class="testimonial-card card">
                                <blockquote>{ format!("\u{201c}{}\u{201d}", testimonial.quote) }</blockquote>
                                <figcaption>
                                    <strong>{ testimonial.name }</strong>
                                    <span>{ testimonial.role }</span>
                                </figcaption>
                            </figure>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

fn cta_section() -> Html {
    html! {
        <section class="cta" id="get-started">
            <div class="container cta-card card">
                <div>
                    <h2>{"Ready to accelerate your learning journey?"}</h2>
                    <p>
                        {"Get matched with a mentor, outline your personalized roadmap, and join a cohort of students building the future."}
                    </p>
                </div>
                <div class="cta-actions">
                    <a class="btn-primary" href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        {"Book a discovery call"}
                        { outbound_icon() }
                    </a>
                    <a class="btn-secondary" href={config::CONTACT_MAILTO}>
                        {"Talk to our team"}
                    </a>
                </div>
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <span class="footer-logo">{"Neuronova"}</span>
                    <p>
                        {"Empowering the next generation of innovators with personalized learning, real-world projects, and the mentors that make it possible."}
                    </p>
                </div>
                <div class="footer-links">
                    <div>
                        <h4>{"Programs"}</h4>
                        <a href="#curriculum">{"AI & Data"}</a>
                        <a href="#curriculum">{"Product Design"}</a>
                        <a href="#curriculum">{"Full-Stack"}</a>
                    </div>
                    <div>
                        <h4>{"Company"}</h4>
                        <a href="#value">{"Why Neuronova"}</a>
                        <a href="#stories">{"Success Stories"}</a>
                        <a href={config::CONTACT_MAILTO}>{"Contact"}</a>
                    </div>
                    <div>
                        <h4>{"Resources"}</h4>
                        <a href={config::BLOG_URL} target="_blank" rel="noopener noreferrer">{"Blog"}</a>
                        <a href={config::GUIDE_URL} target="_blank" rel="noopener noreferrer">{"Learning Guide"}</a>
                        <a href={config::PRIVACY_URL} target="_blank" rel="noopener noreferrer">{"Privacy"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="container">
                    <span>{ copyright_line() }</span>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            { hero() }
            { metrics_section() }
            { value_section() }
            { features_section() }
            { curriculum_section() }
            { testimonials_section() }
            { cta_section() }
            { footer() }
            <style>
                {r#"
                    .hero {
                        position: relative;
                        padding: 6rem 0 4rem;
                        overflow: hidden;
                    }

                    .hero::before {
                        content: '';
                        position: absolute;
                        top: -40%;
                        right: -20%;
                        width: 70%;
                        height: 120%;
                        background: radial-gradient(circle, rgba(123, 97, 255, 0.14), transparent 65%);
                        pointer-events: none;
                    }

                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1.1fr 0.9fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-pill {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.45rem 1rem;
                        border-radius: 999px;
                        border: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.8);
                        font-size: 0.85rem;
                        font-weight: 500;
                        color: var(--muted);
                        margin-bottom: 1.5rem;
                    }

                    .hero-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: var(--blue);
                        animation: pulse-dot 2s ease-in-out infinite;
                    }

                    .hero-content h1 {
                        font-size: 3.2rem;
                        margin-bottom: 1.25rem;
                    }

                    .gradient-text {
                        background: linear-gradient(120deg, var(--blue), var(--purple));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        color: transparent;
                    }

                    .hero-content > p {
                        font-size: 1.1rem;
                        color: var(--muted);
                        max-width: 34rem;
                        margin-bottom: 2rem;
                    }

                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .hero-bottom {
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                        margin-top: 2.5rem;
                    }

                    .hero-avatar-stack {
                        display: flex;
                    }

                    .avatar {
                        width: 42px;
                        height: 42px;
                        border-radius: 50%;
                        border: 2px solid #fff;
                        background: linear-gradient(135deg, #c7d4ff, #8ea4ff);
                        margin-left: -10px;
                    }

                    .avatar:first-child {
                        margin-left: 0;
                    }

                    .avatar:nth-child(2n) {
                        background: linear-gradient(135deg, #e3ddff, #b4a6ff);
                    }

                    .avatar:nth-child(3n) {
                        background: linear-gradient(135deg, #ffe9c4, #ffd089);
                    }

                    .hero-caption {
                        font-size: 0.9rem;
                        color: var(--muted);
                        max-width: 18rem;
                    }

                    .hero-visual {
                        position: relative;
                        display: flex;
                        justify-content: center;
                    }

                    .hero-sphere {
                        position: relative;
                        width: 320px;
                        height: 320px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(47, 98, 255, 0.25), transparent 70%);
                        filter: blur(10px);
                        animation: glow 6s ease-in-out infinite;
                    }

                    .hero-core {
                        position: relative;
                        width: 260px;
                        height: 260px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid var(--border);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        animation: float 8s ease-in-out infinite;
                    }

                    .floating-badge {
                        position: absolute;
                        right: 0;
                        bottom: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.15rem;
                        padding: 1rem 1.4rem;
                        border-radius: 16px;
                        background: #fff;
                        border: 1px solid var(--border);
                        box-shadow: 0 18px 40px rgba(17, 24, 39, 0.12);
                        animation: float 8s ease-in-out infinite;
                        animation-delay: 1.2s;
                    }

                    .floating-badge span {
                        font-size: 0.8rem;
                        color: var(--muted);
                    }

                    .floating-badge strong {
                        font-family: var(--font-heading);
                        font-size: 1.4rem;
                        color: var(--blue);
                    }

                    .metrics {
                        padding: 2rem 0 4rem;
                    }

                    .metrics-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .metric-card {
                        background: var(--card-bg);
                        border: 1px solid var(--border);
                        border-radius: var(--radius);
                        padding: 1.75rem 2rem;
                    }

                    .metric-card span {
                        font-size: 0.85rem;
                        font-weight: 600;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                        color: var(--muted);
                    }

                    .metric-card strong {
                        display: block;
                        font-family: var(--font-heading);
                        font-size: 2.4rem;
                        background: linear-gradient(120deg, var(--blue), var(--purple));
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        color: transparent;
                        margin: 0.4rem 0;
                    }

                    .metric-card p {
                        color: var(--muted);
                        margin: 0;
                    }

                    .value-prop {
                        padding: 4rem 0;
                    }

                    .value-grid {
                        display: grid;
                        grid-template-columns: 1.2fr 0.8fr;
                        gap: 2rem;
                        align-items: stretch;
                    }

                    .value-copy {
                        padding: 2.5rem;
                    }

                    .value-copy p {
                        color: var(--muted);
                    }

                    .value-copy ul {
                        display: flex;
                        flex-direction: column;
                        gap: 0.9rem;
                        margin-top: 1.5rem;
                    }

                    .value-copy li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .dot {
                        flex-shrink: 0;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                    }

                    .dot-blue {
                        background: var(--blue);
                    }

                    .dot-yellow {
                        background: var(--yellow);
                    }

                    .dot-purple {
                        background: var(--purple);
                    }

                    .value-card {
                        height: 100%;
                        padding: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }

                    .value-stat strong {
                        display: block;
                        font-family: var(--font-heading);
                        font-size: 2rem;
                        color: var(--blue);
                    }

                    .value-stat span {
                        color: var(--muted);
                    }

                    .tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: auto;
                    }

                    .tag {
                        padding: 0.35rem 0.9rem;
                        border-radius: 999px;
                        background: rgba(47, 98, 255, 0.08);
                        color: var(--blue);
                        font-size: 0.85rem;
                        font-weight: 500;
                    }

                    .features {
                        padding: 4rem 0;
                    }

                    .features-intro {
                        display: grid;
                        grid-template-columns: 0.35fr 0.65fr;
                        gap: 2rem;
                        margin-bottom: 2.5rem;
                    }

                    .features-intro p {
                        color: var(--muted);
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .feature-card {
                        padding: 2rem;
                    }

                    .feature-card > p {
                        color: var(--muted);
                    }

                    .feature-card ul {
                        display: flex;
                        flex-direction: column;
                        gap: 0.7rem;
                        margin-top: 1.25rem;
                    }

                    .feature-card li {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        color: var(--ink);
                    }

                    .feature-card li svg {
                        flex-shrink: 0;
                        color: var(--blue);
                    }

                    .curriculum {
                        margin: 2rem auto;
                        max-width: 1120px;
                        padding: 3rem 0;
                    }

                    .curriculum-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .curriculum-grid p {
                        color: var(--muted);
                    }

                    .curriculum-list {
                        display: flex;
                        flex-direction: column;
                    }

                    .curriculum-item {
                        padding: 1.25rem 0;
                        border-bottom: 1px solid var(--border);
                    }

                    .curriculum-item:last-child {
                        border-bottom: none;
                    }

                    .curriculum-item span {
                        font-family: var(--font-heading);
                        font-weight: 600;
                        font-size: 1.1rem;
                    }

                    .curriculum-item p {
                        color: var(--muted);
                        margin: 0.35rem 0 0;
                    }

                    .testimonials {
                        padding: 4rem 0;
                    }

                    .testimonials-heading {
                        max-width: 38rem;
                        margin-bottom: 2.5rem;
                    }

                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .testimonial-card {
                        margin: 0;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }

                    .testimonial-card blockquote {
                        margin: 0 0 1.5rem;
                        color: var(--ink);
                        line-height: 1.7;
                    }

                    .testimonial-card figcaption strong {
                        display: block;
                        font-family: var(--font-heading);
                    }

                    .testimonial-card figcaption span {
                        font-size: 0.9rem;
                        color: var(--muted);
                    }

                    .cta {
                        padding: 4rem 0 6rem;
                    }

                    .cta-card {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        padding: 3rem;
                        background: linear-gradient(120deg, rgba(47, 98, 255, 0.08), rgba(123, 97, 255, 0.08));
                    }

                    .cta-card h2 {
                        margin-bottom: 0.75rem;
                    }

                    .cta-card p {
                        color: var(--muted);
                        max-width: 28rem;
                        margin: 0;
                    }

                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .footer {
                        background: #0f172a;
                        color: #e2e8f0;
                        padding-top: 4rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.4fr;
                        gap: 3rem;
                    }

                    .footer-logo {
                        display: block;
                        font-family: var(--font-heading);
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 1rem;
                    }

                    .footer-grid > div > p {
                        color: #94a3b8;
                        max-width: 24rem;
                    }

                    .footer-links {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .footer-links h4 {
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #94a3b8;
                        margin-bottom: 1rem;
                    }

                    .footer-links a {
                        display: block;
                        color: #cbd5f5;
                        margin-bottom: 0.6rem;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover {
                        color: #fff;
                    }

                    .footer-bottom {
                        border-top: 1px solid rgba(148, 163, 184, 0.2);
                        margin-top: 3rem;
                        padding: 1.5rem 0;
                        font-size: 0.9rem;
                        color: #94a3b8;
                    }

                    @keyframes pulse-dot {
                        0%, 100% { transform: scale(1); opacity: 1; }
                        50% { transform: scale(1.4); opacity: 0.6; }
                    }

                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-12px); }
                    }

                    @keyframes glow {
                        0%, 100% { opacity: 0.7; }
                        50% { opacity: 1; }
                    }

                    @media (max-width: 980px) {
                        .hero-grid,
                        .value-grid,
                        .curriculum-grid {
                            grid-template-columns: 1fr;
                        }

                        .features-intro {
                            grid-template-columns: 1fr;
                            gap: 0.5rem;
                        }

                        .metrics-grid,
                        .features-grid,
                        .testimonials-grid {
                            grid-template-columns: 1fr;
                        }

                        .footer-grid {
                            grid-template-columns: 1fr;
                            gap: 2rem;
                        }

                        .cta-card {
                            flex-direction: column;
                            align-items: flex-start;
                        }

                        .hero-visual {
                            order: -1;
                        }
                    }

                    @media (max-width: 640px) {
                        .hero {
                            padding: 4rem 0 3rem;
                        }

                        .hero-content h1 {
                            font-size: 2.4rem;
                        }

                        .hero-bottom {
                            flex-direction: column;
                            align-items: flex-start;
                        }

                        .footer-links {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_landing() -> String {
        yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await
    }

    // Rendered text goes through the HTML escaper, so source copy has to be
    // compared in escaped form.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    #[tokio::test]
    async fn one_card_per_table_entry() {
        let html = render_landing().await;

        assert_eq!(
            html.matches("class=\"metric-card\"").count(),
            METRICS.len()
        );
        assert_eq!(
            html.matches("class=\"feature-card card\"").count(),
            FEATURES.len()
        );
        assert_eq!(
            html.matches("class=\"testimonial-card card\"").count(),
            TESTIMONIALS.len()
        );
        assert_eq!(
            html.matches("class=\"curriculum-item\"").count(),
            CURRICULUM_TRACKS.len()
        );
    }

    #[tokio::test]
    async fn copy_matches_source_records() {
        let html = render_landing().await;

        for metric in METRICS {
            assert!(html.contains(metric.label), "missing label {}", metric.label);
            assert!(html.contains(metric.value), "missing value {}", metric.value);
            assert!(
                html.contains(&escaped(metric.description)),
                "missing description for {}",
                metric.label
            );
        }

        for feature in FEATURES {
            assert!(html.contains(feature.title));
            assert!(html.contains(&escaped(feature.description)));
            for bullet in feature.bullets {
                assert!(html.contains(&escaped(bullet)), "missing bullet {bullet}");
            }
        }

        for testimonial in TESTIMONIALS {
            assert!(html.contains(testimonial.name));
            assert!(html.contains(testimonial.role));
            assert!(html.contains(&escaped(testimonial.quote)));
        }

        for track in CURRICULUM_TRACKS {
            assert!(html.contains(&escaped(track.title)));
            assert!(html.contains(&escaped(track.detail)));
        }
    }

    #[tokio::test]
    async fn render_order_follows_declaration_order() {
        let html = render_landing().await;

        assert_eq!(FEATURES[0].title, "Personalized 1:1 mentorship");
        assert_eq!(TESTIMONIALS[TESTIMONIALS.len() - 1].name, "Melissa Zhang");

        let feature_positions: Vec<usize> = FEATURES
            .iter()
            .map(|f| html.find(f.title).unwrap())
            .collect();
        assert!(feature_positions.windows(2).all(|w| w[0] < w[1]));

        let testimonial_positions: Vec<usize> = TESTIMONIALS
            .iter()
            .map(|t| html.find(t.name).unwrap())
            .collect();
        assert!(testimonial_positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn internal_anchors_resolve_to_section_ids() {
        let html = render_landing().await;

        let mut targets = Vec::new();
        let mut rest = html.as_str();
        while let Some(pos) = rest.find("href=\"#") {
            let after = &rest[pos + "href=\"#".len()..];
            let end = after.find('"').unwrap();
            targets.push(&after[..end]);
            rest = &after[end..];
        }

        assert!(!targets.is_empty());
        for target in targets {
            assert!(
                html.contains(&format!("id=\"{target}\"")),
                "anchor #{target} has no matching section id"
            );
        }
    }

    #[tokio::test]
    async fn footer_shows_render_time_year() {
        let html = render_landing().await;
        let year = Utc::now().year();
        assert!(html.contains(&format!("© {year} Neuronova Learning, Inc.")));
    }

    #[test]
    fn sphere_ring_spacing_is_twenty_degrees_for_eighteen_points() {
        let points = sphere_points(18);
        assert_eq!(points.len(), 18);

        for (i, (x, y)) in points.iter().enumerate() {
            let angle = (i as f64 * 20.0).to_radians();
            let expected_x = SPHERE_CENTER + SPHERE_DOT_ORBIT * angle.cos();
            let expected_y = SPHERE_CENTER + SPHERE_DOT_ORBIT * angle.sin();
            assert!((x - expected_x).abs() < 1e-9);
            assert!((y - expected_y).abs() < 1e-9);
        }
    }

    #[test]
    fn copyright_line_uses_current_year() {
        let line = copyright_line();
        assert!(line.starts_with("© "));
        assert!(line.contains(&Utc::now().year().to_string()));
        assert!(line.ends_with("All rights reserved."));
    }
}
