//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the drag source `S` and drop target `T` descriptors, so the
//! caller decides what a source and a target are. The release handler gets
//! `(source, Option<target>)`; `None` means the drag ended outside every
//! target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
pub struct DndSignals<S: 'static, T: 'static> {
    pub dragging_read: ReadSignal<Option<S>>,
    pub dragging_write: WriteSignal<Option<S>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<S>>,
    pub pending_write: WriteSignal<Option<S>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Last pointer position while dragging, for drag previews
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
}

impl<S: 'static, T: 'static> Clone for DndSignals<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static, T: 'static> Copy for DndSignals<S, T> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a release
const DRAG_END_GRACE_MS: i32 = 100;

pub fn create_dnd_signals<S, T>() -> DndSignals<S, T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<S>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<S>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
    }
}

impl<S, T> DndSignals<S, T>
where
    S: Clone + PartialEq + Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `source` is the one being dragged (tracked)
    pub fn is_dragging(&self, source: &S) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(source))
    }

    /// Whether any drag is in progress (tracked)
    pub fn is_active(&self) -> bool {
        self.dragging_read.with(Option::is_some)
    }

    /// Whether `target` is the current drop target (tracked)
    pub fn is_over(&self, target: &T) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(target))
    }
}

/// End drag operation
pub fn end_drag<S, T>(dnd: &DndSignals<S, T>)
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable sources
/// Records pending drag with start position
pub fn make_on_mousedown<S, T>(dnd: DndSignals<S, T>, source: S) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    S: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input, select or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Avoid text selection while dragging
            ev.prevent_default();
            dnd.pending_write.set(Some(source.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove on the document - starts drag if moved enough
pub fn bind_global_mousemove<S, T>(dnd: DndSignals<S, T>)
where
    S: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.pointer_write.set((ev.client_x(), ev.client_y()));
            return;
        }

        let pending = dnd.pending_read.get_untracked();
        if pending.is_some() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.pointer_write.set((ev.client_x(), ev.client_y()));
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<S, T>(dnd: DndSignals<S, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    S: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    make_on_target_mouseenter_filtered(dnd, target, |_: &S| true)
}

/// Like [`make_on_target_mouseenter`], but the target only lights up for
/// sources `accepts` lets through
pub fn make_on_target_mouseenter_filtered<S, T, F>(
    dnd: DndSignals<S, T>,
    target: T,
    accepts: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    S: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(&S) -> bool + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let accepted = dnd.dragging_read.with_untracked(|d| d.as_ref().is_some_and(|s| accepts(s)));
        if accepted {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<S, T>(dnd: DndSignals<S, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind mouseup on the document for drop detection
///
/// `on_drop` runs only for real drags (not clicks), with the hovered target
/// or `None` when released outside every target.
pub fn bind_global_mouseup<S, T, F>(dnd: DndSignals<S, T>, on_drop: F)
where
    S: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(S, Option<T>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        if let Some(source) = dragging {
            end_drag(&dnd);
            on_drop(source, drop_target);
        } else {
            // Plain click: leave drag_just_ended alone so the click still lands
            dnd.drop_target_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_and_over_follow_signals() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<u32, &'static str>();
            assert!(!dnd.is_active());
            assert!(!dnd.is_dragging(&7));

            dnd.dragging_write.set(Some(7));
            dnd.drop_target_write.set(Some("title"));
            assert!(dnd.is_active());
            assert!(dnd.is_dragging(&7));
            assert!(dnd.is_over(&"title"));
            assert!(!dnd.is_over(&"parent"));
        });
    }
}
