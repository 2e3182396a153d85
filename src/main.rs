use lna_web::config::CONFIG;
use lna_web::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 LNA news client starting ({})", CONFIG.environment);
    log::debug!("🔧 API: {}", CONFIG.api_url);

    yew::Renderer::<App>::new().render();
}
