//! Browser implementations of the pointer source and presentation sink.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};
use yew::Callback;

use crate::binding::{
    Binding, ElementBox, PointerEvent, PointerSample, PointerSource, PresentationSink, bind,
};
use crate::config::{CONFIG_ATTRIBUTE, RotatorConfig};
use crate::error::BindError;
use crate::model::Rotator;
use crate::util::format_rotate;

pub type ElementBinding = Binding<ElementPointerSource>;

type Sampler = fn(&Event, ElementBox) -> Option<PointerSample>;

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Start,
    Move,
    End,
}

fn frame_of(element: &HtmlElement) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

// First finger only; extra touches are ignored.
fn touch_sample(e: &Event, frame: ElementBox) -> Option<PointerSample> {
    let touch = e.dyn_ref::<TouchEvent>()?.touches().item(0)?;
    Some(PointerSample {
        client_x: touch.client_x() as f64,
        client_y: touch.client_y() as f64,
        frame,
    })
}

fn mouse_sample(e: &Event, frame: ElementBox) -> Option<PointerSample> {
    let m = e.dyn_ref::<MouseEvent>()?;
    Some(PointerSample {
        client_x: m.client_x() as f64,
        client_y: m.client_y() as f64,
        frame,
    })
}

/// Touch and mouse listeners on one element.
///
/// Listeners stay attached until the source is dropped.
pub struct ElementPointerSource {
    element: HtmlElement,
    config: RotatorConfig,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl ElementPointerSource {
    pub fn new(element: HtmlElement, config: RotatorConfig) -> Self {
        Self {
            element,
            config,
            listeners: Vec::new(),
        }
    }

    fn event_closure(
        &self,
        phase: Phase,
        sample: Sampler,
        handler: Callback<PointerEvent, bool>,
    ) -> Closure<dyn FnMut(Event)> {
        let element = self.element.clone();
        let prevent = self.config.prevent_default;
        Closure::wrap(Box::new(move |e: Event| {
            let event = match phase {
                Phase::End => PointerEvent::End,
                Phase::Start | Phase::Move => {
                    let Some(s) = sample(&e, frame_of(&element)) else {
                        return;
                    };
                    if phase == Phase::Start {
                        PointerEvent::Start(s)
                    } else {
                        PointerEvent::Move(s)
                    }
                }
            };
            if handler.emit(event) && prevent {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>)
    }

    fn attach(
        &mut self,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<(), BindError> {
        self.element
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listen {
                event,
                reason: format!("{:?}", e),
            })?;
        self.listeners.push((event, closure));
        Ok(())
    }
}

impl PointerSource for ElementPointerSource {
    fn listen(&mut self, handler: Callback<PointerEvent, bool>) -> Result<(), BindError> {
        let mut wiring: Vec<(&'static str, Phase, Sampler)> = Vec::new();
        if self.config.touch {
            wiring.push(("touchstart", Phase::Start, touch_sample));
            wiring.push(("touchmove", Phase::Move, touch_sample));
            wiring.push(("touchend", Phase::End, touch_sample));
        }
        if self.config.mouse {
            wiring.push(("mousedown", Phase::Start, mouse_sample));
            wiring.push(("mousemove", Phase::Move, mouse_sample));
            wiring.push(("mouseup", Phase::End, mouse_sample));
        }
        for (event, phase, sample) in wiring {
            let closure = self.event_closure(phase, sample, handler.clone());
            self.attach(event, closure)?;
        }
        log::debug!("listening for {} pointer events", self.listeners.len());
        Ok(())
    }
}

impl Drop for ElementPointerSource {
    fn drop(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            if let Err(e) = self
                .element
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove `{}` listener: {:?}", event, e);
            }
        }
    }
}

/// Applies the rotation as a CSS transform on the element.
pub struct ElementStyleSink {
    element: HtmlElement,
    precision: usize,
    transform_origin: String,
}

impl ElementStyleSink {
    pub fn new(element: HtmlElement, config: &RotatorConfig) -> Self {
        Self {
            element,
            precision: config.precision,
            transform_origin: config.transform_origin.clone(),
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log::warn!("failed to set `{}`: {:?}", property, e);
        }
    }
}

impl PresentationSink for ElementStyleSink {
    fn set_rotation(&self, degrees: f64) {
        self.set_style("transform", &format_rotate(degrees, self.precision));
        self.set_style("transform-origin", &self.transform_origin);
    }
}

/// Look `key` up as an element id, then as a CSS selector, and bind it.
pub fn hook_to_element(key: &str) -> Result<ElementBinding, BindError> {
    let document = web_sys::window()
        .ok_or(BindError::NoWindow)?
        .document()
        .ok_or(BindError::NoDocument)?;
    let element = document
        .get_element_by_id(key)
        .or_else(|| document.query_selector(key).ok().flatten())
        .ok_or_else(|| BindError::ElementNotFound(key.to_string()))?;
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::NotAnHtmlElement(key.to_string()))?;
    hook_to_html_element(element)
}

/// Bind an element using the config in its `data-rotator` attribute.
pub fn hook_to_html_element(element: HtmlElement) -> Result<ElementBinding, BindError> {
    let config = RotatorConfig::from_attribute(element.get_attribute(CONFIG_ATTRIBUTE).as_deref())?;
    hook_with_config(element, config)
}

pub fn hook_with_config(
    element: HtmlElement,
    config: RotatorConfig,
) -> Result<ElementBinding, BindError> {
    let sink = ElementStyleSink::new(element.clone(), &config);
    let source = ElementPointerSource::new(element, config);
    bind(Rotator::new(), source, sink)
}
