use std::sync::Arc;

use tokio::runtime::Handle;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .ok();

    log::info!("rendering default parameters into output/");

    let controller = qr_studio::HeadlessController::new(
        Arc::new(qr_studio::QrcodePngEncoder::new()),
        qr_studio::PngFilePresenter::new(),
        "output",
        Handle::current(),
    );

    controller.generate().await;
    controller.write()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
