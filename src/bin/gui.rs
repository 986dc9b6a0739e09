fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .ok();

    let presenter_factory = qr_studio::PixelsPresenterFactory::new();
    let command = qr_studio::GuiCommand::new(presenter_factory, ".");

    command.run()
}
