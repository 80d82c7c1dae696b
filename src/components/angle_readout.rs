use yew::prelude::*;
use yew_rotator::util::format_degrees;

#[derive(Properties, PartialEq, Clone)]
pub struct AngleReadoutProps {
    pub alpha: f64,
    pub rotating: bool,
}

#[function_component(AngleReadout)]
pub fn angle_readout(props: &AngleReadoutProps) -> Html {
    let color = if props.rotating { "#58a6ff" } else { "#c9d1d9" };
    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:4px;">
        <div style={format!("font-size:28px; font-weight:600; font-variant-numeric:tabular-nums; color:{};", color)}>
            { format_degrees(props.alpha) }
        </div>
        <div style="font-size:11px; opacity:0.7;">{ if props.rotating { "rotating" } else { "idle" } }</div>
    </div>}
}
