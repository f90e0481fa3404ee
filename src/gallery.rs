//! Component gallery.
//!
//! A static showcase of every button variant and size and every input state,
//! rendered via Leptos SSR.

use leptos::prelude::*;

use crate::STYLESHEET_FILE_NAME;
use crate::ui::attributes::Attributes;
use crate::ui::components::{ButtonVariant, KradoButton, KradoInput, Size};

/// Render the complete gallery document.
pub fn render_page(title: &str) -> String {
    let owner = Owner::new();
    let content = owner.with(|| view! { <Gallery/> }.to_html());
    html_shell(title, &content)
}

/// Generate the HTML shell around rendered content.
fn html_shell(title: &str, content: &str) -> String {
    let title = escape_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/{STYLESHEET_FILE_NAME}">
</head>
<body>
    <main class="krado-gallery">
        <h1>{title}</h1>
        {content}
    </main>
</body>
</html>"#
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Every component state, grouped by component.
#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <ButtonSection/>
        <InputSection/>
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let variants = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            let label = variant.to_string();
            view! { <KradoButton variant=variant>{label}</KradoButton> }
        })
        .collect_view();

    let sizes = Size::ALL
        .into_iter()
        .map(|size| {
            let label = size.to_string();
            view! { <KradoButton size=size>{label}</KradoButton> }
        })
        .collect_view();

    view! {
        <section class="krado-gallery__section" id="buttons">
            <h2>"Buttons"</h2>
            <div class="krado-gallery__row">{variants}</div>
            <div class="krado-gallery__row">
                {sizes}
                <KradoButton loading=true>"Loading..."</KradoButton>
                <KradoButton disabled=true>"Disabled"</KradoButton>
            </div>
            <div class="krado-gallery__row">
                <KradoButton full_width=true variant=ButtonVariant::Outline>
                    "Full width"
                </KradoButton>
            </div>
        </section>
    }
}

#[component]
fn InputSection() -> impl IntoView {
    view! {
        <section class="krado-gallery__section" id="inputs">
            <h2>"Inputs"</h2>
            <form class="krado-gallery__form">
                <KradoInput
                    label="Name"
                    placeholder="Enter your name"
                    required=true
                    attributes={[("name", "name"), ("autocomplete", "name")]}
                />
                <KradoInput
                    label="Email"
                    input_type="email"
                    placeholder="Enter your email"
                    helper_text="We'll never share your email"
                    required=true
                    attributes={[("name", "email")]}
                />
                <KradoInput
                    label="Username"
                    value="taken"
                    helper_text="This username is already taken"
                    error=true
                />
                <KradoInput
                    label="Promo code"
                    value="KRADO10"
                    helper_text="Code applied"
                    success=true
                />
                <KradoInput label="Small" size=Size::Sm placeholder="Small input"/>
                <KradoInput label="Large" size=Size::Lg placeholder="Large input"/>
                <KradoInput label="Disabled" placeholder="Not editable" disabled=true/>
                <KradoButton attributes={Attributes::new().with("type", "submit")}>
                    "Submit"
                </KradoButton>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_links_stylesheet_and_title() {
        let page = render_page("Krado UI");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Krado UI</title>"));
        assert!(page.contains(r#"href="/krado-ui.css""#));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render_page("<Krado & co>");
        assert!(page.contains("<title>&lt;Krado &amp; co&gt;</title>"));
    }

    #[test]
    fn test_page_shows_every_variant() {
        let page = render_page("Krado UI");
        for variant in ButtonVariant::ALL.iter().skip(1) {
            assert!(page.contains(&format!("krado-button--{variant}")), "{variant}");
        }
        assert!(page.contains(r#"type="submit""#));
    }
}
