use invitation_core::{EventInfo, ParticleKind};
use leptos::*;
use system_ui::prelude::*;

use super::{reveal::use_section_reveal, CountdownPanel, ParticleField};
use crate::runtime_context::use_invitation_runtime;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Map link for `event`: the configured URL, else a map search for the venue and address.
pub(crate) fn directions_url(event: &EventInfo) -> String {
    match event.map_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!(
            "{MAPS_SEARCH_URL}{}",
            urlencoding::encode(&format!("{}, {}", event.venue, event.address))
        ),
    }
}

#[component]
/// Opening section with the couple's names and the wedding date.
pub fn Hero() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (names, tagline, date) = runtime.config.with_value(|config| {
        (
            config.content.couple.full_names(),
            config.content.tagline.clone(),
            config
                .countdown_event()
                .map(|event| event.display_date.clone())
                .unwrap_or_default(),
        )
    });
    let desktop = move || runtime.device.with(|device| !device.is_mobile);

    view! {
        <section id="hero" class="hero" aria-label=names.clone()>
            <Show when=desktop>
                <div class="hero-rings" aria-hidden="true">
                    <span class="hero-ring"></span>
                    <span class="hero-ring"></span>
                </div>
            </Show>
            <ParticleField kind=ParticleKind::Hearts seed=11 />
            <Stack align=LayoutAlign::Center gap=LayoutGap::Lg layout_class="hero-content">
                <Text role=TextRole::Display tone=TextTone::Gold>
                    "You Are Cordially Invited"
                </Text>
                <Heading level=1 role=TextRole::Display tone=TextTone::Gold>
                    {names}
                </Heading>
                {(!tagline.is_empty())
                    .then(|| view! { <Text tone=TextTone::Secondary>{tagline}</Text> })}
                <Badge tone=TextTone::Accent>{date}</Badge>
                <Button
                    variant=ButtonVariant::Quiet
                    layout_class="hero-scroll"
                    on_click=Callback::new(move |_| runtime.scroll_to_section("story"))
                >
                    "Discover Our Story"
                </Button>
            </Stack>
        </section>
    }
}

#[component]
/// Timeline of relationship milestones.
pub fn LoveStory() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (section_ref, visible) = use_section_reveal();
    let milestones = runtime
        .config
        .with_value(|config| config.content.love_story.clone());

    view! {
        <PageSection
            id="story"
            section_ref=section_ref
            visible=visible
            title="Our Love Story"
            subtitle="Every love story is beautiful, but ours is our favorite"
            layout_class="love-story"
        >
            <ParticleField kind=ParticleKind::Hearts count=20 seed=21 />
            <ParticleField kind=ParticleKind::Sparkles count=60 seed=22 />
            <ol class="story-timeline">
                {milestones
                    .into_iter()
                    .enumerate()
                    .map(|(index, milestone)| {
                        let side = if index % 2 == 0 { "start" } else { "end" };
                        view! {
                            <li class="story-milestone" data-side=side>
                                <Card variant=SurfaceVariant::Festive elevation=Elevation::Overlay>
                                    <Badge tone=TextTone::Gold>{milestone.year}</Badge>
                                    <Heading level=3>{milestone.title}</Heading>
                                    <Text tone=TextTone::Secondary>{milestone.description}</Text>
                                </Card>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </PageSection>
    }
}

fn countdown_block() -> View {
    let runtime = use_invitation_runtime();
    let countdown = runtime.config.with_value(|config| {
        config
            .countdown_event()
            .map(|event| (event.name.clone(), config.event_target(event)))
    });

    match countdown {
        Some((name, Ok(target))) => view! {
            <Stack align=LayoutAlign::Center layout_class="events-countdown">
                <Heading level=3 tone=TextTone::Gold>"Counting Down to Forever"</Heading>
                <Text tone=TextTone::Secondary>{format!("until the {name}")}</Text>
                <CountdownPanel target=target />
            </Stack>
        }
        .into_view(),
        Some((name, Err(err))) => {
            logging::error!("countdown for `{name}` disabled: {err}");
            ().into_view()
        }
        None => ().into_view(),
    }
}

#[component]
/// Ceremony schedule with the live countdown.
pub fn Events() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (section_ref, visible) = use_section_reveal();
    let events = runtime
        .config
        .with_value(|config| config.content.events.clone());

    view! {
        <PageSection
            id="events"
            section_ref=section_ref
            visible=visible
            title="Wedding Events"
            subtitle="Join us as we celebrate the beginning of forever"
            layout_class="events"
        >
            <ParticleField kind=ParticleKind::Sparkles count=80 seed=31 />
            <ParticleField kind=ParticleKind::Floating count=100 seed=32 />
            {countdown_block()}
            <Grid columns=2 layout_class="event-grid">
                {events
                    .into_iter()
                    .map(|event| {
                        view! {
                            <Card layout_class="event-card" ui_slot="event">
                                <Heading level=3 tone=TextTone::Gold>{event.name}</Heading>
                                {(!event.description.is_empty()).then(|| {
                                    view! { <Text tone=TextTone::Secondary>{event.description}</Text> }
                                })}
                                <dl class="event-facts">
                                    <dt>"Date"</dt>
                                    <dd>{event.display_date}</dd>
                                    <dt>"Time"</dt>
                                    <dd>{event.display_time}</dd>
                                    <dt>"Venue"</dt>
                                    <dd>
                                        <span class="event-venue">{event.venue}</span>
                                        <span class="event-address">{event.address}</span>
                                        <span class="event-location">{event.location}</span>
                                    </dd>
                                </dl>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>
        </PageSection>
    }
}

#[component]
/// Tribute to the parents.
pub fn Family() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (section_ref, visible) = use_section_reveal();
    let family = runtime
        .config
        .with_value(|config| config.content.family.clone());

    view! {
        <PageSection
            id="family"
            section_ref=section_ref
            visible=visible
            title="With Blessings of Family"
            subtitle="With the eternal blessings of our parents and the unwavering support of our families, we embark on this sacred journey together."
            layout_class="family"
        >
            <ParticleField kind=ParticleKind::Hearts count=25 seed=41 />
            <ParticleField kind=ParticleKind::Sparkles count=60 seed=42 />
            <Grid columns=2 layout_class="family-grid">
                <Card variant=SurfaceVariant::Festive>
                    <Badge tone=TextTone::Gold>"Father"</Badge>
                    <Heading level=3>{family.father}</Heading>
                </Card>
                <Card variant=SurfaceVariant::Festive>
                    <Badge tone=TextTone::Gold>"Mother"</Badge>
                    <Heading level=3>{family.mother}</Heading>
                </Card>
            </Grid>
            {(!family.message.is_empty()).then(|| {
                view! {
                    <Text tone=TextTone::Secondary layout_class="family-message">
                        {family.message}
                    </Text>
                }
            })}
        </PageSection>
    }
}

#[component]
/// Venue cards with map links.
pub fn Venue() -> impl IntoView {
    let runtime = use_invitation_runtime();
    let (section_ref, visible) = use_section_reveal();
    let events = runtime
        .config
        .with_value(|config| config.content.events.clone());

    view! {
        <PageSection
            id="venue"
            section_ref=section_ref
            visible=visible
            title="Venue Details"
            subtitle="Find your way to our celebrations"
            layout_class="venue"
        >
            <ParticleField kind=ParticleKind::Sparkles count=100 seed=51 />
            <ParticleField kind=ParticleKind::Floating count=120 seed=52 />
            <Grid columns=2 layout_class="venue-grid">
                {events
                    .into_iter()
                    .map(|event| {
                        let href = directions_url(&event);
                        view! {
                            <Card layout_class="venue-card" ui_slot="venue">
                                <Badge tone=TextTone::Accent>{event.name}</Badge>
                                <Heading level=3 tone=TextTone::Gold>{event.venue}</Heading>
                                <Text>{event.address}</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {event.location}
                                </Text>
                                <a
                                    class="venue-directions"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Get Directions"
                                </a>
                            </Card>
                        }
                    })
                    .collect_view()}
            </Grid>
        </PageSection>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn wedding() -> EventInfo {
        EventInfo {
            id: "wedding".to_string(),
            name: "Wedding Ceremony".to_string(),
            venue: "V.G. Lawn, Datala Road".to_string(),
            address: "Chandrapur, Maharashtra".to_string(),
            ..EventInfo::default()
        }
    }

    #[test]
    fn configured_map_links_are_used_verbatim() {
        let event = EventInfo {
            map_url: Some(" https://maps.app.goo.gl/P5z5Bxhexik7dUNM8 ".to_string()),
            ..wedding()
        };
        assert_eq!(
            directions_url(&event),
            "https://maps.app.goo.gl/P5z5Bxhexik7dUNM8"
        );
    }

    #[test]
    fn missing_map_links_fall_back_to_an_encoded_search() {
        assert_eq!(
            directions_url(&wedding()),
            "https://www.google.com/maps/search/?api=1&query=V.G.%20Lawn%2C%20Datala%20Road%2C%20Chandrapur%2C%20Maharashtra"
        );

        let blank = EventInfo {
            map_url: Some("   ".to_string()),
            ..wedding()
        };
        assert_eq!(directions_url(&blank), directions_url(&wedding()));
    }

    #[test]
    fn non_ascii_venue_names_are_percent_encoded() {
        let event = EventInfo {
            venue: "Café & Co".to_string(),
            address: "Pune".to_string(),
            ..wedding()
        };
        assert_eq!(
            directions_url(&event),
            "https://www.google.com/maps/search/?api=1&query=Caf%C3%A9%20%26%20Co%2C%20Pune"
        );
    }
}
