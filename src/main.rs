//! Tauri Build Action - builds a Tauri application for every architecture of
//! the host OS and collects the installers into one directory.

use std::process;
use tauri_build_action::cli;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            if std::env::var_os("GITHUB_ACTIONS").is_some() {
                // Workflow command; surfaces as an annotation on the run
                println!("::error::{e}");
            }
            if let Some(code) = e.command_exit_code() {
                log::debug!("failing command exited with {code}");
            }
            1
        }
    };

    process::exit(exit_code);
}
