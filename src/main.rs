mod components;

use components::app::App;

fn main() {
    yew_rotator::util::init_logging(log::Level::Debug);
    yew::Renderer::<App>::new().render();
}
