//! Adapter between a pointer source, a [`Rotator`] and a presentation sink.
//!
//! A [`PointerSource`] reports raw client coordinates (origin top-left, y
//! growing downward) together with the element box at event time. The
//! adapter converts them into center-relative, y-up coordinates before
//! driving the rotator, and a default listener hands `-alpha` to the
//! [`PresentationSink`]. Both capabilities are injected, so the whole flow
//! can be exercised without a browser.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use std::cell::RefCell;
use std::rc::Rc;

use yew::Callback;

use crate::error::BindError;
use crate::model::{RotationListener, Rotator};

/// A rotator shared between event handlers and its owner.
///
/// Listeners run while the rotator is mutably borrowed, so a listener must
/// not borrow it again.
pub type SharedRotator = Rc<RefCell<Rotator>>;

/// Layout box of the bound element in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// One pointer position as reported by a source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub frame: ElementBox,
}

impl PointerSample {
    /// Position relative to the element center, positive to the top-right.
    pub fn to_local(&self) -> (f64, f64) {
        let (cx, cy) = self.frame.center();
        (self.client_x - cx, cy - self.client_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Start(PointerSample),
    Move(PointerSample),
    End,
}

/// Delivers gesture events for one element.
pub trait PointerSource {
    /// Register the gesture handler. It returns `true` when the event was
    /// consumed; sources suppress the default browser action only then.
    fn listen(&mut self, handler: Callback<PointerEvent, bool>) -> Result<(), BindError>;
}

/// Receives the visual rotation for the bound element.
pub trait PresentationSink {
    /// Rotate the element by `degrees` about its own center.
    fn set_rotation(&self, degrees: f64);
}

/// Feed one pointer event into `rotator`. Moves while idle are not consumed.
pub fn dispatch(rotator: &RefCell<Rotator>, event: PointerEvent) -> bool {
    match event {
        PointerEvent::Start(sample) => {
            let (x, y) = sample.to_local();
            rotator.borrow_mut().rotate_start(x, y);
            true
        }
        PointerEvent::Move(sample) => {
            if !rotator.borrow().is_rotating() {
                return false;
            }
            let (x, y) = sample.to_local();
            rotator.borrow_mut().rotate_move(x, y);
            true
        }
        PointerEvent::End => {
            rotator.borrow_mut().rotate_stop();
            true
        }
    }
}

/// A rotator wired to its source. Dropping the binding drops the source,
/// which detaches whatever the source attached.
pub struct Binding<S> {
    rotator: SharedRotator,
    // held only so its listeners live as long as the binding
    _source: S,
    default_listener: RotationListener,
}

impl<S> Binding<S> {
    pub fn rotator(&self) -> SharedRotator {
        self.rotator.clone()
    }

    /// The listener forwarding angles to the presentation sink.
    pub fn default_listener(&self) -> &RotationListener {
        &self.default_listener
    }

    pub fn current_alpha(&self) -> f64 {
        self.rotator.borrow().current_alpha()
    }

    /// End any gesture in progress, e.g. when the pointer leaves the page.
    pub fn stop(&self) {
        self.rotator.borrow_mut().rotate_stop();
    }
}

/// Wire `rotator` to `source` and drive `sink` through a default listener,
/// which is registered ahead of any listener added later.
pub fn bind<S, P>(mut rotator: Rotator, mut source: S, sink: P) -> Result<Binding<S>, BindError>
where
    S: PointerSource,
    P: PresentationSink + 'static,
{
    let default_listener = Callback::from(move |alpha: f64| sink.set_rotation(0.0 - alpha));
    rotator.add_listener(default_listener.clone());
    let rotator = Rc::new(RefCell::new(rotator));

    let handler = {
        let rotator = rotator.clone();
        Callback::from(move |event: PointerEvent| dispatch(&rotator, event))
    };
    source.listen(handler)?;
    log::debug!("rotator bound");

    Ok(Binding {
        rotator,
        _source: source,
        default_listener,
    })
}
