use invitation_core::VariantOverride;
use leptos::*;
use system_ui::prelude::*;

use super::SECTION_NAV;
use crate::runtime_context::use_invitation_runtime;

fn variant_toggle_label(variant: VariantOverride) -> String {
    format!(
        "Layout: {}. Switch to {}",
        variant.label(),
        variant.next().label()
    )
}

#[component]
/// Fixed header with section navigation and the responsive variant toggle.
///
/// On mobile the navigation collapses behind a menu button; following a link closes it.
pub fn Header() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let names = runtime
        .config
        .with_value(|config| config.content.couple.full_names());
    let menu_open = create_rw_signal(false);
    let is_mobile = move || runtime.device.with(|device| device.is_mobile);

    create_effect(move |_| {
        if !is_mobile() {
            menu_open.set(false);
        }
    });

    let navigate = move |section_id: &'static str| {
        menu_open.set(false);
        runtime.scroll_to_section(section_id);
    };

    view! {
        <header class="site-header" data-menu-open=move || menu_open.get().to_string()>
            <Cluster justify=LayoutJustify::Between wrap=false layout_class="site-header-bar">
                <a
                    class="site-brand"
                    href="#hero"
                    on:click=move |ev| {
                        ev.prevent_default();
                        navigate("hero");
                    }
                >
                    <span class="site-brand-heart" aria-hidden="true">"\u{2665}"</span>
                    <span>{names}</span>
                </a>
                <Cluster gap=LayoutGap::Sm wrap=false layout_class="site-header-actions">
                    <Button
                        variant=ButtonVariant::Quiet
                        ui_slot="variant-toggle"
                        aria_label=Signal::derive(move || variant_toggle_label(runtime.variant.get()))
                        selected=Signal::derive(move || runtime.variant.get() != VariantOverride::Auto)
                        on_click=Callback::new(move |_| runtime.cycle_variant())
                    >
                        {move || runtime.variant.get().label()}
                    </Button>
                    <Show when=is_mobile>
                        <Button
                            variant=ButtonVariant::Quiet
                            ui_slot="menu-toggle"
                            aria_label="Toggle navigation"
                            aria_controls="site-nav"
                            aria_expanded=Signal::derive(move || menu_open.get())
                            on_click=Callback::new(move |_| menu_open.update(|open| *open = !*open))
                        >
                            "\u{2630}"
                        </Button>
                    </Show>
                </Cluster>
            </Cluster>
            <nav
                id="site-nav"
                class="site-nav"
                aria-label="Sections"
                data-collapsed=move || (is_mobile() && !menu_open.get()).to_string()
            >
                {SECTION_NAV
                    .iter()
                    .map(|&(section_id, label)| {
                        view! {
                            <a
                                class="site-nav-link"
                                href=format!("#{section_id}")
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    navigate(section_id);
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
/// Closing thanks with the wedding date and hashtag.
pub fn Footer() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (names, hashtag, date) = runtime.config.with_value(|config| {
        (
            config.content.couple.full_names(),
            config.content.hashtag.clone(),
            config
                .countdown_event()
                .map(|event| event.display_date.clone())
                .unwrap_or_default(),
        )
    });

    view! {
        <footer class="site-footer">
            <Stack align=LayoutAlign::Center gap=LayoutGap::Sm>
                <Heading level=3 role=TextRole::Display tone=TextTone::Gold>
                    {names}
                </Heading>
                <Text tone=TextTone::Secondary>
                    "Thank you for being part of our special day. Your presence and blessings mean the world to us."
                </Text>
                <Text role=TextRole::Label>{date}</Text>
                {(!hashtag.is_empty())
                    .then(|| view! { <Badge tone=TextTone::Accent>{hashtag}</Badge> })}
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    "Made with \u{2665} for our special day"
                </Text>
            </Stack>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_label_names_the_current_and_next_variant() {
        assert_eq!(
            variant_toggle_label(VariantOverride::Auto),
            "Layout: Auto. Switch to Mobile"
        );
        assert_eq!(
            variant_toggle_label(VariantOverride::Desktop),
            "Layout: Desktop. Switch to Auto"
        );
    }

    #[test]
    fn navigation_covers_every_section_in_page_order() {
        let ids: Vec<_> = SECTION_NAV.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ["hero", "story", "events", "family", "venue"]);
    }
}
