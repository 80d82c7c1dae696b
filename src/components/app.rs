use super::dial::Dial;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Bumping the generation remounts the dial with a fresh rotator at 0°
    let generation = use_state(|| 0_u32);
    let on_reset: Callback<()> = {
        let generation = generation.clone();
        Callback::from(move |()| {
            log::debug!("reset dial");
            generation.set(*generation + 1);
        })
    };

    html! {
        <div id="root" style="width:100vw; height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <Dial key={generation.to_string()} on_reset={on_reset} />
        </div>
    }
}
