use super::*;

#[component]
/// Full-width page section with an anchor id and a titled header.
///
/// When `visible` is set the section carries `data-visible`, which the stylesheet uses to hold
/// the entrance animation until the section scrolls into view.
pub fn PageSection(
    id: &'static str,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] section_ref: Option<NodeRef<html::Section>>,
    #[prop(optional, into)] visible: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let heading_id = format!("{id}-title");
    let section_ref = section_ref.unwrap_or_else(create_node_ref);
    view! {
        <section
            node_ref=section_ref
            id=id
            data-visible=move || visible.map(|visible| bool_token(visible.get()))
            class=merge_layout_class("ui-page-section", layout_class)
            aria-labelledby=heading_id.clone()
            data-ui-primitive="true"
            data-ui-kind="page-section"
            data-ui-variant=variant.token()
        >
            <header class="ui-page-section-header">
                <h2 id=heading_id class="ui-page-section-title">{title}</h2>
                {subtitle.map(|subtitle| view! { <p class="ui-page-section-subtitle">{subtitle}</p> })}
            </header>
            {children()}
        </section>
    }
}

#[component]
/// Shared card surface for event, milestone, and venue tiles.
pub fn Card(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Shared heading primitive. `level` selects the element from `h1` to `h4`.
pub fn Heading(
    #[prop(default = 3)] level: u8,
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let role = role.token();
    let tone = tone.token();
    match level {
        1 => view! {
            <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-variant=role data-ui-tone=tone>
                {children()}
            </h1>
        }
        .into_view(),
        2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-variant=role data-ui-tone=tone>
                {children()}
            </h2>
        }
        .into_view(),
        3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-variant=role data-ui-tone=tone>
                {children()}
            </h3>
        }
        .into_view(),
        _ => view! {
            <h4 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-variant=role data-ui-tone=tone>
                {children()}
            </h4>
        }
        .into_view(),
    }
}

#[component]
/// Compact label badge.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || non_empty(aria_label.get())
            aria-controls=aria_controls
            aria-expanded=move || aria_expanded.as_ref().map(|expanded| bool_token(expanded.get()))
            title=move || non_empty(title.get())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
