#[cfg(not(target_arch = "wasm32"))]
use env_logger::Env;
use macroquad::prelude::*;
use pitchboard_web_lib::run;

fn window_conf() -> Conf {
    Conf {
        window_title: "Pitchboard".to_owned(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    run().await;
}
