use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io::{self, Cursor};
use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_document, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, RcDom, SerializableHandle};

use crate::node;

/// A click travelling root-ward through the tree. Handlers can stop the
/// bubble or mark the default action as cancelled, which is how a badge
/// inside a link keeps the host page's own handler from firing.
pub struct ClickEvent {
    target: Handle,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    fn new(target: Handle) -> Self {
        Self {
            target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn target(&self) -> &Handle {
        &self.target
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

type ClickHandler = Rc<dyn Fn(&Document, &mut ClickEvent)>;

/// Synthetic document handle: a mutable rc-based tree plus the handful of
/// host-environment behaviors the widget depends on (click dispatch, scroll
/// position, modal state, animation frames). Everything runs single-threaded
/// and cooperatively, so interior mutability is safe here.
pub struct Document {
    dom: RcDom,
    handlers: RefCell<HashMap<usize, Vec<ClickHandler>>>,
    scroll: Cell<(f64, f64)>,
    frame_tasks: RefCell<VecDeque<Box<dyn FnOnce(&Document)>>>,
    open_modal: RefCell<Option<Handle>>,
}

impl Document {
    pub fn parse(html: &str) -> io::Result<Self> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut Cursor::new(html))?;
        Ok(Self::from_dom(dom))
    }

    /// Parses markup the way `innerHTML` would: in a `<body>` context.
    pub fn parse_body_fragment(html: &str) -> io::Result<Self> {
        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("body")),
            Vec::new(),
        )
        .from_utf8()
        .read_from(&mut Cursor::new(html))?;
        Ok(Self::from_dom(dom))
    }

    fn from_dom(dom: RcDom) -> Self {
        Self {
            dom,
            handlers: RefCell::new(HashMap::new()),
            scroll: Cell::new((0.0, 0.0)),
            frame_tasks: RefCell::new(VecDeque::new()),
            open_modal: RefCell::new(None),
        }
    }

    pub fn root(&self) -> Handle {
        self.dom.document.clone()
    }

    pub fn serialize(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        let handle: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut buf, &handle, SerializeOpts::default())?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Disconnected copy of the page: serialized and reparsed, so mutating
    /// the copy can never touch the live tree. This is what gets handed to
    /// the content extractor.
    pub fn snapshot(&self) -> io::Result<Document> {
        Document::parse(&self.serialize()?)
    }

    pub fn html_element(&self) -> Option<Handle> {
        self.elements_by_tag("html").into_iter().next()
    }

    pub fn body(&self) -> Option<Handle> {
        self.elements_by_tag("body").into_iter().next()
    }

    /// The page's declared language (`<html lang="...">`), if any.
    pub fn document_lang(&self) -> Option<String> {
        let html = self.html_element()?;
        node::get_attr(&html, "lang").filter(|l| !l.trim().is_empty())
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<Handle> {
        self.find_elements(|n| node::tag_name(n).as_deref() == Some(tag))
    }

    pub fn element_by_id(&self, id: &str) -> Option<Handle> {
        self.find_elements(|n| node::get_attr(n, "id").as_deref() == Some(id))
            .into_iter()
            .next()
    }

    /// Elements matching `pred`, in document order.
    pub fn find_elements<F>(&self, pred: F) -> Vec<Handle>
    where
        F: Fn(&Handle) -> bool,
    {
        node::descendants(&self.dom.document)
            .into_iter()
            .filter(|n| node::tag_name(n).is_some() && pred(n))
            .collect()
    }

    /// Top-level nodes of a fragment parse (children of the synthetic
    /// `<html>` wrapper the parser inserts).
    pub fn fragment_children(&self) -> Vec<Handle> {
        self.html_element()
            .map(|html| html.children.borrow().clone())
            .unwrap_or_default()
    }

    pub fn on_click<F>(&self, target: &Handle, handler: F)
    where
        F: Fn(&Document, &mut ClickEvent) + 'static,
    {
        self.handlers
            .borrow_mut()
            .entry(node::node_id(target))
            .or_default()
            .push(Rc::new(handler));
    }

    /// Bubbles a click from `target` up to the root, running handlers on
    /// each node until propagation is stopped. Returns the event so callers
    /// can observe whether the host page would still have seen the click.
    pub fn dispatch_click(&self, target: &Handle) -> ClickEvent {
        let mut event = ClickEvent::new(target.clone());
        let mut current = Some(target.clone());
        while let Some(n) = current {
            let node_handlers: Vec<ClickHandler> = self
                .handlers
                .borrow()
                .get(&node::node_id(&n))
                .cloned()
                .unwrap_or_default();
            for handler in node_handlers {
                handler(self, &mut event);
            }
            if event.propagation_stopped {
                break;
            }
            current = node::parent(&n);
        }
        event
    }

    /// Drops every handler registered on `target` or anything below it.
    pub fn clear_handlers(&self, target: &Handle) {
        let mut handlers = self.handlers.borrow_mut();
        handlers.remove(&node::node_id(target));
        for n in node::descendants(target) {
            handlers.remove(&node::node_id(&n));
        }
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        self.scroll.get()
    }

    pub fn set_scroll_offset(&self, x: f64, y: f64) {
        self.scroll.set((x, y));
    }

    /// Opens `dialog` as the document's modal. Mirrors the host-environment
    /// quirk the dialog controller has to undo: opening a modal resets the
    /// scroll position to the origin.
    pub fn show_modal(&self, dialog: &Handle) {
        *self.open_modal.borrow_mut() = Some(dialog.clone());
        self.scroll.set((0.0, 0.0));
    }

    pub fn close_modal(&self) {
        *self.open_modal.borrow_mut() = None;
    }

    pub fn open_modal(&self) -> Option<Handle> {
        self.open_modal.borrow().clone()
    }

    pub fn request_animation_frame<F>(&self, task: F)
    where
        F: FnOnce(&Document) + 'static,
    {
        self.frame_tasks.borrow_mut().push_back(Box::new(task));
    }

    /// Runs the tasks queued so far; tasks queued while running land in the
    /// next frame. Returns how many ran.
    pub fn run_animation_frame(&self) -> usize {
        let tasks: Vec<_> = self.frame_tasks.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }
}
