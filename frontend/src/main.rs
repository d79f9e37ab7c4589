use nuna_portal::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo_console::error!(format!("Logger already installed: {}", e));
    }
    log::info!("✅ NuNa Support Portal initialized");
    yew::Renderer::<App>::new().render();
}
