#![forbid(unsafe_code)]

//! The rendering entry point: registration plus modifier application.
//!
//! The engine never draws anything. A [`RenderBackend`] (the native UI
//! toolkit adapter) produces an opaque `Output` per component and knows
//! how to wrap an output in each modifier; the engine contributes the
//! fixed choreography around it:
//!
//! 1. register the component (idempotent, first-write-wins),
//! 2. ask the backend for the base render,
//! 3. fold the component's *allowed* modifiers over it, left to right,
//!    in original server order.
//!
//! Backends render container children by recursing through [`render`]
//! themselves (the component hands them the child [`Handle`]s). That
//! keeps registration a render-time effect: a tab page or modal body the
//! backend chooses not to materialize never enters the registry.

use crate::component::{Component, Handle};
use crate::modifier::Modifier;
use crate::registry::SharedRegistry;

/// Adapter to the native UI toolkit.
pub trait RenderBackend {
    /// Whatever the toolkit's displayable tree type is. The engine never
    /// inspects it.
    type Output;

    /// Produce the base render for one component. Container variants
    /// expose their children via [`Component::children`] /
    /// [`Component::tabs`]; render the ones that should be visible by
    /// calling [`render`] on them with the same registry.
    fn base_render(&mut self, component: &Component, registry: &SharedRegistry) -> Self::Output;

    /// Wrap a render in one modifier. Only modifiers from the
    /// component's allow-list ever arrive here.
    fn apply_modifier(&mut self, output: Self::Output, modifier: &Modifier) -> Self::Output;
}

/// Render one component: register it, then apply its eligible modifiers
/// over the backend's base render.
///
/// This is the single entry point the external UI layer calls to turn a
/// decoded tree into a displayable one.
pub fn render<B>(handle: &Handle, registry: &SharedRegistry, backend: &mut B) -> B::Output
where
    B: RenderBackend + ?Sized,
{
    registry.borrow_mut().register(handle);
    let component = handle.borrow();
    let mut output = backend.base_render(&component, registry);
    let allowed = component.allowed_modifiers();
    for modifier in component.modifiers() {
        if allowed.contains(&modifier.kind()) {
            output = backend.apply_modifier(output, modifier);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;
    use crate::modifier::{Color, ModifierKind};
    use crate::registry::Registry;

    /// Test backend producing a bracketed trace of the render pipeline.
    struct TraceBackend;

    impl RenderBackend for TraceBackend {
        type Output = String;

        fn base_render(&mut self, component: &Component, registry: &SharedRegistry) -> String {
            let children: Vec<String> = component
                .children()
                .iter()
                .map(|child| render(child, registry, self))
                .collect();
            if children.is_empty() {
                format!("{}({})", component.kind().wire_name(), component.id())
            } else {
                format!(
                    "{}({})[{}]",
                    component.kind().wire_name(),
                    component.id(),
                    children.join(",")
                )
            }
        }

        fn apply_modifier(&mut self, output: String, modifier: &Modifier) -> String {
            format!("{}<{output}>", modifier.kind().wire_name())
        }
    }

    fn text(id: &str, modifiers: Vec<Modifier>) -> Handle {
        Component::Text {
            id: id.into(),
            modifiers,
            text: "x".into(),
        }
        .into_handle()
    }

    #[test]
    fn render_registers_the_component() {
        let registry = Registry::shared();
        let t = text("t1", vec![]);
        render(&t, &registry, &mut TraceBackend);
        assert!(registry.borrow().find("t1").is_some());
    }

    #[test]
    fn render_recurses_and_registers_children() {
        let registry = Registry::shared();
        let row = Component::Row {
            id: "r".into(),
            modifiers: vec![],
            children: vec![text("a", vec![]), text("b", vec![])],
        }
        .into_handle();
        let out = render(&row, &registry, &mut TraceBackend);
        assert_eq!(out, "ROW(r)[TEXT(a),TEXT(b)]");
        assert!(registry.borrow().find("a").is_some());
        assert!(registry.borrow().find("b").is_some());
    }

    #[test]
    fn allowed_modifiers_apply_in_server_order() {
        let registry = Registry::shared();
        let t = text(
            "t",
            vec![
                Modifier::ForegroundColor { color: Color::Red },
                Modifier::Padding,
            ],
        );
        let out = render(&t, &registry, &mut TraceBackend);
        // Left-to-right fold: padding wraps the color-wrapped base.
        assert_eq!(out, "PADDING<FOREGROUND_COLOR<TEXT(t)>>");
    }

    #[test]
    fn out_of_list_modifiers_are_dropped() {
        let registry = Registry::shared();
        // Sliders permit only padding.
        let slider = Component::Slider {
            id: "s".into(),
            modifiers: vec![
                Modifier::ForegroundColor { color: Color::Red },
                Modifier::Padding,
                Modifier::Size {
                    width: 10,
                    height: None,
                },
            ],
            range_start: 0,
            range_end: 10,
            value: 0,
        }
        .into_handle();
        let out = render(&slider, &registry, &mut TraceBackend);
        assert_eq!(out, "PADDING<SLIDER(s)>");
    }

    #[test]
    fn empty_filtered_list_returns_base_unchanged() {
        let registry = Registry::shared();
        let t = text("t", vec![]);
        assert_eq!(render(&t, &registry, &mut TraceBackend), "TEXT(t)");
    }

    #[test]
    fn duplicate_id_renders_but_first_stays_authoritative() {
        let registry = Registry::shared();
        let first = text("dup", vec![]);
        let second = text("dup", vec![]);
        render(&first, &registry, &mut TraceBackend);
        render(&second, &registry, &mut TraceBackend);
        let found = registry.borrow().find("dup").unwrap();
        assert!(std::rc::Rc::ptr_eq(&found, &first));
    }

    #[test]
    fn unrendered_tab_pages_stay_unregistered() {
        let registry = Registry::shared();
        let tabs = Component::TabView {
            id: "tabs".into(),
            modifiers: vec![],
            tabs: vec![crate::component::Tab {
                name: "Home".into(),
                icon: "house".into(),
                page: text("page", vec![]),
            }],
        }
        .into_handle();
        // TraceBackend only walks children(), not tabs().
        render(&tabs, &registry, &mut TraceBackend);
        assert!(registry.borrow().find("tabs").is_some());
        assert!(registry.borrow().find("page").is_none());
        assert_eq!(tabs.borrow().kind(), ComponentKind::TabView);
    }

    #[test]
    fn empty_modifier_never_reaches_backend() {
        // Empty is outside every allow-list.
        for kind in [ComponentKind::Text, ComponentKind::Button, ComponentKind::Empty] {
            assert!(!kind.allowed_modifiers().contains(&ModifierKind::Empty));
        }
    }
}
