//! In-memory DOM used by the carousel integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use newsdeck_core::carousel::{
    CarouselHost, EventOutcome, FrameScheduler, GapStyle, ListenTarget,
    NavControl, NavEvent, NavHandler, TrackElement,
};

#[derive(Debug, Clone)]
pub struct FakeTrack {
    pub id: usize,
    pub left: Rc<Cell<f64>>,
    pub scroll_width: f64,
    pub client_width: f64,
    pub item_width: Option<f64>,
    pub gap: GapStyle,
    pub smooth_targets: Rc<RefCell<Vec<f64>>>,
}

impl FakeTrack {
    /// `items` cards of `item_width` with a 16px gap, `client_width` visible.
    pub fn new(items: u32, item_width: f64, client_width: f64) -> Self {
        let gap = 16.0;
        Self {
            id: 0,
            left: Rc::new(Cell::new(0.0)),
            scroll_width: f64::from(items) * item_width
                + f64::from(items.saturating_sub(1)) * gap,
            client_width,
            item_width: Some(item_width),
            gap: GapStyle {
                column_gap: "16px".into(),
                gap: "16px".into(),
            },
            smooth_targets: Rc::default(),
        }
    }
}

impl TrackElement for FakeTrack {
    fn scroll_left(&self) -> f64 {
        self.left.get()
    }
    fn set_scroll_left(&self, value: f64) {
        self.left.set(value);
    }
    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }
    fn client_width(&self) -> f64 {
        self.client_width
    }
    fn first_item_width(&self) -> Option<f64> {
        self.item_width
    }
    fn gap_style(&self) -> GapStyle {
        self.gap.clone()
    }
    fn smooth_scroll_to(&self, left: f64) {
        self.smooth_targets.borrow_mut().push(left);
        self.left.set(left);
    }
}

type PendingFrames = Rc<RefCell<Vec<Box<dyn FnOnce(f64)>>>>;

#[derive(Clone, Default)]
pub struct FakeFrames {
    pending: PendingFrames,
}

impl FrameScheduler for FakeFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.pending.borrow_mut().push(callback);
    }
}

impl FakeFrames {
    /// Run every queued frame at `timestamp`; returns how many ran.
    pub fn run(&self, timestamp: f64) -> usize {
        let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let ran = due.len();
        for callback in due {
            callback(timestamp);
        }
        ran
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeNode {
    Root,
    Wrapper(usize),
    Control(usize, NavControl),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKey {
    Control(usize, NavControl),
    Track(usize),
}

#[derive(Debug)]
pub struct FakeWrapper {
    pub attrs: RefCell<BTreeMap<String, String>>,
    pub track: Option<FakeTrack>,
    pub controls: bool,
}

impl FakeWrapper {
    pub fn carousel(data_count: &str, track: FakeTrack) -> Self {
        Self::with_layout("carousel", data_count, Some(track))
    }

    pub fn with_layout(layout: &str, data_count: &str, track: Option<FakeTrack>) -> Self {
        let attrs = BTreeMap::from([
            ("data-layout".to_string(), layout.to_string()),
            ("data-count".to_string(), data_count.to_string()),
        ]);
        Self {
            attrs: RefCell::new(attrs),
            track,
            controls: true,
        }
    }

    pub fn without_controls(mut self) -> Self {
        self.controls = false;
        self
    }
}

#[derive(Default)]
pub struct FakeDocument {
    wrappers: Vec<FakeWrapper>,
    pub smooth_scroll: bool,
    pub frames: FakeFrames,
    pub probes: Cell<usize>,
    listeners: RefCell<Vec<(ListenerKey, NavHandler)>>,
}

impl FakeDocument {
    pub fn new(smooth_scroll: bool) -> Self {
        Self {
            smooth_scroll,
            ..Self::default()
        }
    }

    pub fn push(&mut self, mut wrapper: FakeWrapper) -> usize {
        let id = self.wrappers.len();
        if let Some(track) = wrapper.track.as_mut() {
            track.id = id;
        }
        self.wrappers.push(wrapper);
        id
    }

    pub fn wrapper_attr(&self, id: usize, name: &str) -> Option<String> {
        self.wrappers[id].attrs.borrow().get(name).cloned()
    }

    pub fn track(&self, id: usize) -> &FakeTrack {
        self.wrappers[id].track.as_ref().expect("wrapper has a track")
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver `event` to every handler bound to `key`.
    pub fn dispatch(&self, key: ListenerKey, event: NavEvent) -> Vec<EventOutcome> {
        let handlers: Vec<NavHandler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(bound, _)| *bound == key)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        handlers.iter().map(|handler| handler(&event)).collect()
    }
}

impl CarouselHost for FakeDocument {
    type Node = FakeNode;
    type Track = FakeTrack;
    type Frames = FakeFrames;

    fn wrappers(&self, root: &FakeNode) -> Vec<FakeNode> {
        match root {
            FakeNode::Root => (0..self.wrappers.len()).map(FakeNode::Wrapper).collect(),
            _ => Vec::new(),
        }
    }

    fn attribute(&self, node: &FakeNode, name: &str) -> Option<String> {
        match node {
            FakeNode::Wrapper(id) => self.wrapper_attr(*id, name),
            _ => None,
        }
    }

    fn set_attribute(&self, node: &FakeNode, name: &str, value: &str) {
        if let FakeNode::Wrapper(id) = node {
            self.wrappers[*id]
                .attrs
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
    }

    fn track(&self, wrapper: &FakeNode) -> Option<FakeTrack> {
        match wrapper {
            FakeNode::Wrapper(id) => self.wrappers[*id].track.clone(),
            _ => None,
        }
    }

    fn control(&self, wrapper: &FakeNode, control: NavControl) -> Option<FakeNode> {
        match wrapper {
            FakeNode::Wrapper(id) if self.wrappers[*id].controls => {
                Some(FakeNode::Control(*id, control))
            }
            _ => None,
        }
    }

    fn listen(&self, target: ListenTarget<FakeNode, FakeTrack>, handler: NavHandler) {
        let key = match target {
            ListenTarget::Control(FakeNode::Control(id, _), control) => {
                ListenerKey::Control(id, control)
            }
            ListenTarget::Control(other, _) => panic!("not a control: {other:?}"),
            ListenTarget::Track(track) => ListenerKey::Track(track.id),
        };
        self.listeners.borrow_mut().push((key, handler));
    }

    fn supports_smooth_scroll(&self) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.smooth_scroll
    }

    fn frames(&self) -> FakeFrames {
        self.frames.clone()
    }
}
