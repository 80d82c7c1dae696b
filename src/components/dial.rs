use web_sys::HtmlElement;
use yew::prelude::*;
use yew_rotator::{ElementBinding, hook_to_html_element};

use super::{angle_readout::AngleReadout, dial_controls::DialControls};

// One decimal is plenty for the demo knob
const DIAL_CONFIG: &str = r#"{"precision": 1}"#;

#[derive(Properties, PartialEq, Clone)]
pub struct DialProps {
    pub on_reset: Callback<()>,
}

#[function_component(Dial)]
pub fn dial(props: &DialProps) -> Html {
    let dial_ref = use_node_ref();
    let binding = use_mut_ref(|| None::<ElementBinding>);
    let alpha = use_state(|| 0.0_f64);
    let rotating = use_state(|| false);

    {
        let dial_ref = dial_ref.clone();
        let binding = binding.clone();
        let alpha = alpha.clone();
        let rotating = rotating.clone();
        use_effect_with((), move |_| {
            match dial_ref.cast::<HtmlElement>() {
                Some(element) => match hook_to_html_element(element) {
                    Ok(b) => {
                        let rotator = b.rotator();
                        let alpha = alpha.clone();
                        let rotating = rotating.clone();
                        // readout only; the element itself is turned by the default listener
                        rotator.borrow_mut().add_listener(Callback::from(move |a: f64| {
                            alpha.set(a);
                            rotating.set(true);
                        }));
                        *binding.borrow_mut() = Some(b);
                    }
                    Err(e) => log::error!("failed to bind dial: {}", e),
                },
                None => log::error!("dial_ref not attached to an element"),
            }
            move || {
                binding.borrow_mut().take();
            }
        });
    }

    // Gesture end is not reported to listeners, so track it from the release events
    let on_release = {
        let rotating = rotating.clone();
        Callback::from(move |_: MouseEvent| rotating.set(false))
    };
    let on_touch_release = {
        let rotating = rotating.clone();
        Callback::from(move |_: TouchEvent| rotating.set(false))
    };
    let on_stop: Callback<()> = {
        let binding = binding.clone();
        let rotating = rotating.clone();
        Callback::from(move |()| {
            if let Some(b) = &*binding.borrow() {
                b.stop();
            }
            rotating.set(false);
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:24px;">
            <div
                ref={dial_ref}
                id="dial"
                data-rotator={DIAL_CONFIG}
                onmouseup={on_release}
                ontouchend={on_touch_release}
                style="width:220px; height:220px; border-radius:50%; background:#161b22; border:2px solid #30363d; display:flex; justify-content:center; padding-top:8px; box-sizing:border-box; cursor:grab; user-select:none; touch-action:none;"
            >
                <span style="color:#f0883e; font-size:24px;">{"▲"}</span>
            </div>
            <AngleReadout alpha={*alpha} rotating={*rotating} />
            <DialControls on_stop={on_stop} on_reset={props.on_reset.clone()} />
        </div>
    }
}
