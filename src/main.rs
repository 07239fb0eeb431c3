use env_logger::Env;

fn main() -> anyhow::Result<()> {
    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    catalog_explorer::cli::run()
}
