use yew::prelude::*;
use web_sys::window;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
}

/// Document-level wrapper around every page: sets the title and meta
/// description, loads the two typeface families and carries the global
/// style tokens. Children render unmodified inside it.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    // Document metadata is set once on mount
    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(config::PAGE_TITLE);

                if let Some(head) = document.head() {
                    match document
                        .query_selector("meta[name='description']")
                        .ok()
                        .flatten()
                    {
                        Some(meta) => {
                            let _ = meta.set_attribute("content", config::PAGE_DESCRIPTION);
                        }
                        None => {
                            if let Ok(meta) = document.create_element("meta") {
                                let _ = meta.set_attribute("name", "description");
                                let _ = meta.set_attribute("content", config::PAGE_DESCRIPTION);
                                let _ = head.append_child(&meta);
                            }
                        }
                    }

                    // The font stylesheet survives remounts, so only add it once
                    let fonts_loaded = document
                        .query_selector("link[data-fonts='neuronova']")
                        .ok()
                        .flatten()
                        .is_some();
                    if !fonts_loaded {
                        if let Ok(link) = document.create_element("link") {
                            let _ = link.set_attribute("rel", "stylesheet");
                            let _ = link.set_attribute("href", config::FONTS_STYLESHEET_URL);
                            let _ = link.set_attribute("data-fonts", "neuronova");
                            let _ = head.append_child(&link);
                        }
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="app-shell">
            { for props.children.iter() }
            <style>
                {r#"
                    :root {
                        --font-body: 'Inter', system-ui, -apple-system, sans-serif;
                        --font-heading: 'Poppins', var(--font-body);
                        --ink: #111827;
                        --muted: #4b5563;
                        --surface: #f7f9ff;
                        --card-bg: #ffffff;
                        --blue: #2f62ff;
                        --purple: #7b61ff;
                        --yellow: #f5b82e;
                        --border: rgba(47, 98, 255, 0.14);
                        --radius: 20px;
                    }

                    * {
                        box-sizing: border-box;
                    }

                    body {
                        margin: 0;
                        font-family: var(--font-body);
                        color: var(--ink);
                        background: var(--surface);
                        line-height: 1.6;
                        -webkit-font-smoothing: antialiased;
                    }

                    h1, h2, h3, h4 {
                        font-family: var(--font-heading);
                        line-height: 1.2;
                        margin: 0 0 1rem 0;
                    }

                    p {
                        margin: 0 0 1rem 0;
                    }

                    a {
                        color: inherit;
                        text-decoration: none;
                    }

                    ul {
                        margin: 0;
                        padding: 0;
                        list-style: none;
                    }

                    .container {
                        max-width: 1120px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .card {
                        background: var(--card-bg);
                        border: 1px solid var(--border);
                        border-radius: var(--radius);
                        box-shadow: 0 18px 40px rgba(17, 24, 39, 0.06);
                    }

                    .section-heading {
                        display: inline-block;
                        font-size: 0.85rem;
                        font-weight: 600;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                        color: var(--blue);
                        margin-bottom: 1rem;
                    }

                    .btn-primary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.9rem 1.6rem;
                        border-radius: 999px;
                        background: linear-gradient(120deg, var(--blue), var(--purple));
                        color: #fff;
                        font-weight: 600;
                        box-shadow: 0 12px 30px rgba(47, 98, 255, 0.35);
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }

                    .btn-primary:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 16px 36px rgba(47, 98, 255, 0.45);
                    }

                    .btn-secondary {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.9rem 1.6rem;
                        border-radius: 999px;
                        border: 1px solid rgba(17, 24, 39, 0.15);
                        background: rgba(255, 255, 255, 0.7);
                        color: var(--ink);
                        font-weight: 600;
                        transition: border-color 0.2s ease, background 0.2s ease;
                    }

                    .btn-secondary:hover {
                        border-color: var(--blue);
                        background: #fff;
                    }
                "#}
            </style>
        </div>
    }
}
