use app::App;

mod apis;
mod app;
mod form;
mod render;
mod utilities;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    utilities::logger::init();
    dotenvy::dotenv().ok();

    match App::new() {
        Ok(mut app) => app.run().await,
        Err(err) => log::error!("configuración inválida: {err}"),
    }
}
