//! Tests for the modal controller state machine.

use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::{Key, PointerTarget};

use super::{ModalController, ModalSurface};
use crate::catalog::{ProjectCatalog, ProjectMeta, ProjectRecord};
use crate::constants::classes;
use crate::keybindings::KeyBindings;
use crate::render::{CarouselPatch, ModalView};

/// Surface double that records what the controller asked it to do.
#[derive(Default)]
struct RecordingSurface {
    shown: RefCell<Vec<ModalView>>,
    hidden: RefCell<usize>,
    patches: RefCell<Vec<CarouselPatch>>,
    scroll_calls: RefCell<Vec<bool>>,
}

impl RecordingSurface {
    fn scroll_enabled(&self) -> bool {
        self.scroll_calls.borrow().last().copied().unwrap_or(true)
    }

    fn last_patch(&self) -> Option<CarouselPatch> {
        self.patches.borrow().last().cloned()
    }

    fn patch_count(&self) -> usize {
        self.patches.borrow().len()
    }
}

impl ModalSurface for RecordingSurface {
    fn show_modal(&self, view: &ModalView) {
        self.shown.borrow_mut().push(view.clone());
    }

    fn hide_modal(&self) {
        *self.hidden.borrow_mut() += 1;
    }

    fn patch_carousel(&self, patch: &CarouselPatch) {
        self.patches.borrow_mut().push(patch.clone());
    }

    fn set_background_scroll(&self, enabled: bool) {
        self.scroll_calls.borrow_mut().push(enabled);
    }
}

fn builtin_controller() -> (ModalController<RecordingSurface>, Rc<RecordingSurface>) {
    let surface = Rc::new(RecordingSurface::default());
    let controller = ModalController::new(ProjectCatalog::builtin(), Rc::clone(&surface));
    (controller, surface)
}

#[test]
fn test_initially_closed() {
    let (controller, surface) = builtin_controller();
    assert!(!controller.is_open());
    assert!(controller.current_project().is_none());
    assert_eq!(controller.current_image_index(), 0);
    assert!(surface.scroll_calls.borrow().is_empty());
}

#[test]
fn test_open_every_key() {
    let catalog = ProjectCatalog::builtin();
    let keys: Vec<String> = catalog.keys().map(str::to_string).collect();
    for key in keys {
        let (mut controller, surface) = builtin_controller();
        assert!(controller.open(&key));
        assert!(controller.is_open());
        assert_eq!(controller.current_key(), Some(key.as_str()));
        assert_eq!(controller.current_project(), catalog.lookup(&key));
        assert_eq!(controller.current_image_index(), 0);
        assert!(!surface.scroll_enabled(), "background scroll locked for {}", key);
        assert_eq!(surface.shown.borrow().len(), 1);
    }
}

#[test]
fn test_open_unknown_key_while_closed() {
    let (mut controller, surface) = builtin_controller();
    assert!(!controller.open("portfolio-v2"));
    assert!(!controller.is_open());
    assert!(surface.shown.borrow().is_empty());
    assert!(surface.scroll_calls.borrow().is_empty());
}

#[test]
fn test_open_unknown_key_while_open() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    controller.next_image();
    controller.next_image();

    assert!(!controller.open("missing"));
    assert_eq!(controller.current_key(), Some("ems"));
    assert_eq!(controller.current_image_index(), 2);
    assert_eq!(surface.shown.borrow().len(), 1);
}

#[test]
fn test_ems_cycles_back_to_start() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");

    let view = surface.shown.borrow()[0].clone();
    assert_eq!(
        view.body
            .find_by_id(crate::constants::ids::CAROUSEL_COUNTER)
            .map(|c| c.text_content()),
        Some("1 / 6".to_string())
    );

    for _ in 0..6 {
        assert!(controller.next_image());
    }
    assert_eq!(controller.current_image_index(), 0);
    let patch = surface.last_patch().expect("patched after navigation");
    assert_eq!(patch.counter, "1 / 6");
    assert_eq!(patch.active_thumbnail, 0);
    assert_eq!(patch.image_src, "images/Login.png");
    assert_eq!(patch.image_alt, "Employee Management System (OJT) screenshot 1");
    assert_eq!(surface.patch_count(), 6);
}

#[test]
fn test_previous_wraps_to_last() {
    let (mut controller, surface) = builtin_controller();
    controller.open("thesis");
    controller.previous_image();
    assert_eq!(controller.current_image_index(), 2);
    assert_eq!(surface.last_patch().map(|p| p.counter), Some("3 / 3".to_string()));
}

#[test]
fn test_previous_then_next_is_identity() {
    let (mut controller, _surface) = builtin_controller();
    controller.open("manual");
    for start in 0..3 {
        controller.jump_to_image(start);
        controller.previous_image();
        controller.next_image();
        assert_eq!(controller.current_image_index(), start);
        controller.next_image();
        controller.previous_image();
        assert_eq!(controller.current_image_index(), start);
    }
}

#[test]
fn test_patch_always_tracks_index() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    let moves = [true, true, false, true, true, true, true, false, false];
    for forward in moves {
        if forward {
            controller.next_image();
        } else {
            controller.previous_image();
        }
        let patch = surface.last_patch().expect("patch");
        assert_eq!(patch.active_thumbnail, controller.current_image_index());
        assert_eq!(
            patch.counter,
            format!("{} / 6", controller.current_image_index() + 1)
        );
    }
}

#[test]
fn test_single_image_navigation_is_noop() {
    let (mut controller, surface) = builtin_controller();
    controller.open("spotify");

    let view = surface.shown.borrow()[0].clone();
    assert!(view.body.find_by_id(crate::constants::ids::CAROUSEL_COUNTER).is_none());
    assert!(view
        .body
        .find_all_by_class(crate::constants::classes::CAROUSEL_NAV)
        .is_empty());

    controller.next_image();
    controller.previous_image();
    assert_eq!(controller.current_image_index(), 0);
    assert_eq!(surface.patch_count(), 0);
}

#[test]
fn test_navigation_while_closed_is_noop() {
    let (mut controller, surface) = builtin_controller();
    assert!(!controller.next_image());
    assert!(!controller.previous_image());
    assert!(!controller.jump_to_image(0));
    assert_eq!(surface.patch_count(), 0);
}

#[test]
fn test_no_images_navigation_is_noop() {
    let record = ProjectRecord::new("Text only", ProjectMeta::new("Writer", "Print", "Pen"), "Words.");
    let surface = Rc::new(RecordingSurface::default());
    let mut controller = ModalController::new(
        ProjectCatalog::from_entries([("text".to_string(), record)]),
        Rc::clone(&surface),
    );
    assert!(controller.open("text"));
    assert!(!controller.next_image());
    assert!(!controller.previous_image());
    assert!(!controller.jump_to_image(0));
    assert_eq!(controller.current_image_index(), 0);
    assert_eq!(surface.patch_count(), 0);
}

#[test]
fn test_jump_to_image() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    assert!(controller.jump_to_image(4));
    assert_eq!(controller.current_image_index(), 4);
    assert_eq!(surface.last_patch().map(|p| p.active_thumbnail), Some(4));
}

#[test]
fn test_jump_out_of_range_rejected() {
    let (mut controller, surface) = builtin_controller();
    controller.open("thesis");
    controller.jump_to_image(1);
    assert!(!controller.jump_to_image(3));
    assert!(!controller.jump_to_image(usize::MAX));
    assert_eq!(controller.current_image_index(), 1);
    assert_eq!(surface.patch_count(), 1);
}

#[test]
fn test_close_resets_state() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    controller.next_image();
    controller.next_image();
    controller.jump_to_image(5);

    assert!(controller.close());
    assert!(!controller.is_open());
    assert!(controller.current_project().is_none());
    assert_eq!(controller.current_image_index(), 0);
    assert_eq!(*surface.hidden.borrow(), 1);
    assert!(surface.scroll_enabled());
}

#[test]
fn test_close_is_idempotent() {
    let (mut controller, surface) = builtin_controller();
    assert!(!controller.close());
    controller.open("manual");
    assert!(controller.close());
    assert!(!controller.close());
    assert_eq!(*surface.hidden.borrow(), 1);
    assert_eq!(*surface.scroll_calls.borrow(), vec![false, true]);
}

#[test]
fn test_reopen_starts_at_first_image() {
    let (mut controller, _surface) = builtin_controller();
    controller.open("ems");
    controller.jump_to_image(3);
    controller.close();
    controller.open("ems");
    assert_eq!(controller.current_image_index(), 0);
}

#[test]
fn test_switch_project_keeps_single_scroll_lock() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    controller.next_image();
    controller.open("thesis");
    assert_eq!(controller.current_key(), Some("thesis"));
    assert_eq!(controller.current_image_index(), 0);
    assert_eq!(*surface.scroll_calls.borrow(), vec![false]);

    controller.close();
    assert_eq!(*surface.scroll_calls.borrow(), vec![false, true]);
}

#[test]
fn test_dropping_open_controller_restores_scroll() {
    let (mut controller, surface) = builtin_controller();
    controller.open("ems");
    assert!(!surface.scroll_enabled());
    drop(controller);
    assert!(surface.scroll_enabled());
}

#[test]
fn test_thesis_escape_closes() {
    let (mut controller, surface) = builtin_controller();
    controller.open("thesis");
    assert!(controller.handle_key(Key::Escape));
    assert!(!controller.is_open());
    assert!(surface.scroll_enabled());
}

#[test]
fn test_arrow_keys_navigate() {
    let (mut controller, _surface) = builtin_controller();
    controller.open("ems");
    assert!(controller.handle_key(Key::ArrowRight));
    assert!(controller.handle_key(Key::ArrowRight));
    assert!(controller.handle_key(Key::ArrowLeft));
    assert_eq!(controller.current_image_index(), 1);
    assert!(!controller.handle_key(Key::Char('a')));
    assert_eq!(controller.current_image_index(), 1);
}

#[test]
fn test_custom_bindings_drive_navigation_and_hints() {
    let surface = Rc::new(RecordingSurface::default());
    let keys = KeyBindings {
        previous_image: Key::Char('h'),
        next_image: Key::Char('l'),
        ..KeyBindings::default()
    };
    let mut controller =
        ModalController::new(ProjectCatalog::builtin(), Rc::clone(&surface)).with_keybindings(keys);
    controller.open("ems");

    assert!(!controller.handle_key(Key::ArrowRight));
    assert_eq!(controller.current_image_index(), 0);
    assert!(controller.handle_key(Key::Char('l')));
    assert!(controller.handle_key(Key::Char('l')));
    assert!(controller.handle_key(Key::Char('h')));
    assert_eq!(controller.current_image_index(), 1);

    let shown = surface.shown.borrow();
    let view = shown.last().expect("modal shown");
    let hint = view.body.find_all_by_class(classes::CAROUSEL_HINT)[0].text_content();
    assert_eq!(hint, "Use H L keys to navigate");
    let titles: Vec<&str> = view
        .body
        .find_all_by_class(classes::CAROUSEL_NAV)
        .into_iter()
        .filter_map(|button| button.get_attr("title"))
        .collect();
    assert_eq!(titles, vec!["Previous image (H key)", "Next image (L key)"]);
}

#[test]
fn test_keys_inert_while_closed() {
    let (mut controller, surface) = builtin_controller();
    assert!(!controller.handle_key(Key::Escape));
    assert!(!controller.handle_key(Key::ArrowRight));
    assert!(!controller.handle_key(Key::ArrowLeft));
    assert_eq!(*surface.hidden.borrow(), 0);
    assert_eq!(surface.patch_count(), 0);
}

#[test]
fn test_backdrop_closes_panel_does_not() {
    let (mut controller, surface) = builtin_controller();
    controller.open("manual");
    assert!(!controller.handle_pointer(PointerTarget::Panel));
    assert!(controller.is_open());
    assert!(controller.handle_pointer(PointerTarget::Backdrop));
    assert!(!controller.is_open());
    assert!(surface.scroll_enabled());
}

#[test]
fn test_record_without_challenges_has_no_section() {
    let record = ProjectRecord::new("Plain", ProjectMeta::new("r", "p", "t"), "desc")
        .with_images(&["a.png", "b.png"])
        .with_features(&["only features"]);
    let surface = Rc::new(RecordingSurface::default());
    let mut controller = ModalController::new(
        ProjectCatalog::from_entries([("plain".to_string(), record)]),
        Rc::clone(&surface),
    );
    controller.open("plain");
    let view = surface.shown.borrow()[0].clone();
    assert!(view
        .body
        .find_all_by_class(crate::constants::classes::PROJECT_CHALLENGES)
        .is_empty());
}
