use super::prompt::Prompter;
use super::render::Renderer;
use super::session::Session;
use super::setup::parse_cli;
use chrono::Datelike;
use shelfapp::api::ShelfApi;
use shelfapp::config::ShelfConfig;
use shelfapp::error::Result;
use shelfapp::store::fs_backend::FsBackend;
use std::io;
use std::path::PathBuf;
use tracing::info;

pub fn run() -> Result<()> {
    let cli = parse_cli();

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = ShelfConfig::load(&work_dir)?.with_data_file(cli.data_file);
    info!(path = %config.data_file.display(), "opening catalog");

    let mut api = ShelfApi::open(FsBackend::new(&config.data_file))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());
    let renderer = Renderer::new(console::colors_enabled());

    let mut session = Session::new(
        &mut api,
        prompter,
        renderer,
        current_year(),
        config.title_case,
    );
    session.run()
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
