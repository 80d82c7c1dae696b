use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DialControlsProps {
    pub on_stop: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(DialControls)]
pub fn dial_controls(props: &DialControlsProps) -> Html {
    let stop = {
        let cb = props.on_stop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={stop}>{"Stop"}</button>
        <button onclick={reset}>{"Reset"}</button>
    </div>}
}
