#![forbid(unsafe_code)]

//! End-to-end session flows over a stubbed transport: navigation,
//! payload submission, change application, and modal presentation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use sdui_core::{
    Action, Component, ComponentKind, Modifier, RenderBackend, SharedRegistry, render,
};
use sdui_runtime::{CONNECTION_FAILED, Session, Transport, TransportError};
use sdui_schema::{ChangeSet, ComponentPayload, FieldValue, ViewNode};

/// Scripted transport: serves canned screens and responses, records
/// every submission it receives.
#[derive(Default)]
struct StubTransport {
    screens: HashMap<String, ViewNode>,
    change_set: RefCell<ChangeSet>,
    next_screen: RefCell<Option<ViewNode>>,
    submissions: Rc<RefCell<Vec<(String, Vec<ComponentPayload>)>>>,
    fail: Rc<Cell<bool>>,
}

impl StubTransport {
    fn with_screen(route: &str, json: &str) -> Self {
        let mut stub = Self::default();
        stub.screens
            .insert(route.to_owned(), serde_json::from_str(json).unwrap());
        stub
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn fetch_screen(&self, route: &str) -> Result<ViewNode, TransportError> {
        if self.fail.get() {
            return Err(TransportError::request(route, "connection refused"));
        }
        self.screens.get(route).cloned().ok_or(TransportError::Status {
            route: route.to_owned(),
            status: 404,
        })
    }

    async fn submit_for_changes(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ChangeSet, TransportError> {
        self.submissions
            .borrow_mut()
            .push((route.to_owned(), payload.to_vec()));
        if self.fail.get() {
            return Err(TransportError::request(route, "connection refused"));
        }
        Ok(self.change_set.borrow().clone())
    }

    async fn submit_for_screen(
        &self,
        route: &str,
        payload: &[ComponentPayload],
    ) -> Result<ViewNode, TransportError> {
        self.submissions
            .borrow_mut()
            .push((route.to_owned(), payload.to_vec()));
        if self.fail.get() {
            return Err(TransportError::request(route, "connection refused"));
        }
        Ok(self.next_screen.borrow_mut().take().expect("no screen scripted"))
    }
}

/// Backend producing a flat textual trace; renders every child, so
/// everything reachable through `children()` gets registered.
struct TextTree;

impl RenderBackend for TextTree {
    type Output = String;

    fn base_render(&mut self, component: &Component, registry: &SharedRegistry) -> String {
        let children: Vec<String> = component
            .children()
            .iter()
            .map(|child| render(child, registry, self))
            .collect();
        if children.is_empty() {
            component.id().to_owned()
        } else {
            format!("{}[{}]", component.id(), children.join(","))
        }
    }

    fn apply_modifier(&mut self, output: String, _modifier: &Modifier) -> String {
        output
    }
}

const LOGIN_SCREEN: &str = r#"{
    "id": "root", "type": "COLUMN",
    "children": [
        {"id": "title", "type": "TEXT", "text": "Sign in"},
        {"id": "user", "type": "TEXT_INPUT", "text": "User name",
         "validator": {"type": "REGEX", "value": "[a-z]+"}},
        {"id": "go", "type": "BUTTON", "text": "Log in",
         "action": {"type": "REQUEST_WITH_PAYLOAD_AND_UI_CHANGES",
                    "destination": "/login",
                    "payloadRequirements": [{"id": "user", "type": "TEXT_INPUT"}]}},
        {"id": "about", "type": "BUTTON", "text": "About",
         "action": {"type": "TRIGGER_MODAL", "destination": "m1"}},
        {"id": "m1", "type": "MODAL",
         "children": [{"id": "welcome", "type": "TEXT", "text": "Welcome!"}]}
    ]
}"#;

/// Navigate and render, then pull the decoded action off a registered
/// button, the way a UI layer reacts to a press.
fn button_action(session: &Session<StubTransport>, id: &str) -> Action {
    let handle = session
        .registry()
        .borrow()
        .find_as(id, ComponentKind::Button)
        .expect("button not registered");
    let action = match &*handle.borrow() {
        Component::Button { action, .. } => action.clone(),
        _ => None,
    };
    action.expect("button is inert")
}

#[tokio::test]
async fn navigate_decodes_and_registers_the_screen() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    let mut session = Session::new(transport);

    session.navigate("login").await;
    let trace = session.render(&mut TextTree);

    assert_eq!(session.route(), Some("login"));
    assert_eq!(trace, "root[title,user,go,about,m1[welcome]]");
    let registry = session.registry().borrow();
    assert!(registry.find("user").is_some());
    assert!(registry.find_as("m1", ComponentKind::Modal).is_some());
}

#[tokio::test]
async fn trigger_modal_presents_the_registered_modal() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);

    let action = button_action(&session, "about");
    assert!(matches!(action, Action::TriggerModal { .. }));
    session.trigger(&action).await;

    let modal = session
        .registry()
        .borrow()
        .find_as("m1", ComponentKind::Modal)
        .unwrap();
    assert!(matches!(
        &*modal.borrow(),
        Component::Modal { is_presented: true, .. }
    ));
}

#[tokio::test]
async fn submit_sends_collected_payload_and_applies_changes() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    *transport.change_set.borrow_mut() = ChangeSet {
        changes: vec![FieldValue::new("go", "BUTTON", "text", "Welcome back")],
    };
    let submissions = Rc::clone(&transport.submissions);
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);

    session
        .registry()
        .borrow()
        .find("user")
        .unwrap()
        .borrow_mut()
        .set_text_input("alice");

    let action = button_action(&session, "go");
    session.trigger(&action).await;

    // The transport saw the collected text input.
    let recorded = submissions.borrow();
    let (route, payload) = &recorded[0];
    assert_eq!(route, "/login");
    assert_eq!(payload[0].id, "user");
    assert_eq!(payload[0].payload[0].field_name, "text");
    assert_eq!(payload[0].payload[0].value, "alice");

    // And the returned change set landed on the tree.
    let registry = session.registry().borrow();
    let button = registry.find("go").unwrap();
    assert!(matches!(
        &*button.borrow(),
        Component::Button { text, .. } if text == "Welcome back"
    ));
}

#[tokio::test]
async fn failed_submit_leaves_the_tree_untouched() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    *transport.change_set.borrow_mut() = ChangeSet {
        changes: vec![FieldValue::new("go", "BUTTON", "text", "Welcome back")],
    };
    let fail = Rc::clone(&transport.fail);
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);

    fail.set(true);
    let action = button_action(&session, "go");
    session.trigger(&action).await;

    let registry = session.registry().borrow();
    let button = registry.find("go").unwrap();
    assert!(matches!(
        &*button.borrow(),
        Component::Button { text, .. } if text == "Log in"
    ));
}

#[tokio::test]
async fn screen_submit_replaces_tree_and_clears_registry() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    *transport.next_screen.borrow_mut() =
        Some(serde_json::from_str(r#"{"id": "home", "type": "TEXT", "text": "Hello"}"#).unwrap());
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);
    assert!(!session.registry().borrow().is_empty());

    let action = Action::SubmitForScreen {
        destination: "/login".to_owned(),
        requirements: vec![],
    };
    session.trigger(&action).await;

    // The old screen's ids are gone; rendering the new tree registers it.
    assert!(session.registry().borrow().find("go").is_none());
    let trace = session.render(&mut TextTree);
    assert_eq!(trace, "home");
    assert!(session.registry().borrow().find("home").is_some());
}

#[tokio::test]
async fn connection_failure_shows_placeholder_screen() {
    let transport = StubTransport::default();
    transport.fail.set(true);
    let mut session = Session::new(transport);

    session.navigate("login").await;

    assert!(matches!(
        &*session.root().borrow(),
        Component::Text { text, .. } if text == CONNECTION_FAILED
    ));
}

#[tokio::test]
async fn mutate_action_applies_without_network() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);

    let action = Action::Mutate {
        changes: vec![FieldValue::new("title", "TEXT", "text", "Signed out")],
    };
    session.trigger(&action).await;

    let registry = session.registry().borrow();
    let title = registry.find("title").unwrap();
    assert!(matches!(
        &*title.borrow(),
        Component::Text { text, .. } if text == "Signed out"
    ));
}

#[tokio::test]
async fn conditional_action_is_gated_on_input_validity() {
    let transport = StubTransport::with_screen("login", LOGIN_SCREEN);
    let mut session = Session::new(transport);
    session.navigate("login").await;
    session.render(&mut TextTree);

    let action = Action::CheckThenMutate {
        checks: vec![FieldValue::new("user", "TEXT_INPUT", "isValid", "true")],
        changes: vec![FieldValue::new("title", "TEXT", "text", "Ready")],
    };

    // Empty input: the validator has not accepted anything yet.
    session.trigger(&action).await;
    {
        let registry = session.registry().borrow();
        let title = registry.find("title").unwrap();
        assert!(matches!(
            &*title.borrow(),
            Component::Text { text, .. } if text == "Sign in"
        ));
    }

    session
        .registry()
        .borrow()
        .find("user")
        .unwrap()
        .borrow_mut()
        .set_text_input("alice");
    session.trigger(&action).await;
    let registry = session.registry().borrow();
    let title = registry.find("title").unwrap();
    assert!(matches!(
        &*title.borrow(),
        Component::Text { text, .. } if text == "Ready"
    ));
}
