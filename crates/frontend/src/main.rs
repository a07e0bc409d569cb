use sportiva_frontend::App;

fn main() {
    sportiva_frontend_common::logging::init();
    yew::Renderer::<App>::new().render();
}
