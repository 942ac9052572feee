//! End-to-end resize scenarios driven through the public controller API.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use sidebar::config::{BoundsTable, SidebarConfig};
use sidebar::consts::LIMIT_REACHED_CLASS;
use sidebar::panel::ResizablePanel;
use sidebar::size::{Side, SidebarSize, WidthBounds};
use sidebar::storage::{MemoryStorage, StorageBackend};
use sidebar::view::{ClassTarget, Cursor, PanelView};

/// Recording panel element with a simulated millisecond clock.
#[derive(Default)]
struct Recorder {
    inline_width: Cell<Option<u32>>,
    classes: RefCell<HashMap<ClassTarget, BTreeSet<&'static str>>>,
    timers: RefCell<Vec<(u64, ClassTarget, &'static str)>>,
    now_ms: Cell<u64>,
    cursor_overridden: Cell<bool>,
}

impl Recorder {
    fn width(&self) -> Option<u32> {
        self.inline_width.get()
    }

    fn has(&self, target: ClassTarget, class: &str) -> bool {
        self.classes.borrow().get(&target).is_some_and(|set| set.contains(class))
    }

    fn tick(&self, ms: u64) {
        let now = self.now_ms.get() + ms;
        self.now_ms.set(now);
        let mut timers = self.timers.borrow_mut();
        let mut classes = self.classes.borrow_mut();
        timers.retain(|(at, target, class)| {
            if *at > now {
                return true;
            }
            if let Some(set) = classes.get_mut(target) {
                set.remove(class);
            }
            false
        });
    }
}

impl PanelView for Recorder {
    fn rendered_width(&self) -> Option<f64> {
        Some(f64::from(self.inline_width.get().unwrap_or(0)))
    }

    fn set_width(&self, px: u32) {
        self.inline_width.set(Some(px));
    }

    fn clear_width(&self) {
        self.inline_width.set(None);
    }

    fn add_class(&self, target: ClassTarget, class: &'static str) {
        self.classes.borrow_mut().entry(target).or_default().insert(class);
    }

    fn remove_class(&self, target: ClassTarget, class: &'static str) {
        if let Some(set) = self.classes.borrow_mut().get_mut(&target) {
            set.remove(class);
        }
    }

    fn remove_class_after(&self, target: ClassTarget, class: &'static str, delay_ms: u32) {
        self.timers.borrow_mut().push((self.now_ms.get() + u64::from(delay_ms), target, class));
    }

    fn remove_class_next_frame(&self, target: ClassTarget, class: &'static str) {
        self.remove_class(target, class);
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.cursor_overridden.set(cursor != Cursor::Default);
    }
}

fn medium_240_500_320() -> SidebarConfig {
    let mut config = SidebarConfig::default();
    config.lhs = BoundsTable { medium: WidthBounds::new(240, 500, 320), ..config.lhs };
    config
}

fn mount(backend: &MemoryStorage) -> ResizablePanel<Recorder, &MemoryStorage> {
    let mut panel = ResizablePanel::new(Side::Lhs, SidebarSize::Medium, medium_240_500_320(), Recorder::default(), backend)
        .with_user(Some("alice".to_owned()));
    panel.mount();
    panel
}

#[test]
fn drag_snap_release_and_remount() {
    let backend = MemoryStorage::new();

    let mut panel = mount(&backend);
    assert_eq!(panel.view().width(), Some(320));

    // Drag left by 50px.
    panel.pointer_down(600.0);
    assert!(panel.view().cursor_overridden.get());
    panel.pointer_move(550.0);
    assert_eq!(panel.view().width(), Some(270));

    // Further left by 300px: below min, snaps.
    panel.pointer_move(250.0);
    assert_eq!(panel.view().width(), Some(240));
    assert!(panel.view().has(ClassTarget::Handle, LIMIT_REACHED_CLASS));

    panel.pointer_up();
    assert!(!panel.view().cursor_overridden.get());
    assert_eq!(backend.get_item("user_alice_lhs_width").unwrap().as_deref(), Some("240"));

    panel.view().tick(800);
    assert!(!panel.view().has(ClassTarget::Handle, LIMIT_REACHED_CLASS));

    let remounted = mount(&backend);
    assert_eq!(remounted.view().width(), Some(240));
}

#[test]
fn drag_grows_by_exact_pixel_delta() {
    let backend = MemoryStorage::new();
    let mut panel = mount(&backend);
    for n in [1_u32, 17, 90, 180] {
        panel.double_click();
        panel.pointer_down(100.0);
        panel.pointer_move(100.0 + f64::from(n));
        panel.pointer_up();
        assert_eq!(panel.view().width(), Some(320 + n));
    }
}

#[test]
fn double_click_after_drag_restores_default() {
    let backend = MemoryStorage::new();
    let mut panel = mount(&backend);
    panel.pointer_down(0.0);
    panel.pointer_move(2000.0);
    panel.pointer_up();
    assert_eq!(panel.view().width(), Some(500));
    panel.double_click();
    assert_eq!(panel.view().width(), Some(320));
    assert_eq!(panel.store().get("alice"), Some(320));
}

#[test]
fn users_keep_separate_widths() {
    let backend = MemoryStorage::new();
    let mut alice = mount(&backend);
    alice.pointer_down(0.0);
    alice.pointer_move(60.0);
    alice.pointer_up();

    let mut bob = ResizablePanel::new(Side::Lhs, SidebarSize::Medium, medium_240_500_320(), Recorder::default(), &backend)
        .with_user(Some("bob".to_owned()));
    bob.mount();
    assert_eq!(bob.view().width(), Some(320));
    assert_eq!(alice.persisted_width(), Some(380));
}
