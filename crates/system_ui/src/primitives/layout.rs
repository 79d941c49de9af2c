use super::*;

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal cluster. Wraps by default; `wrap = false` keeps a single row.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(default = true)] wrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
            data-ui-wrap=bool_token(wrap)
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive card grid.
///
/// `columns` is the desktop column count; the stylesheet collapses the grid to one column when
/// the root carries `data-device="mobile"`.
pub fn Grid(
    #[prop(default = 2)] columns: u8,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            style=format!("--ui-grid-columns:{}", columns.max(1))
        >
            {children()}
        </div>
    }
}
