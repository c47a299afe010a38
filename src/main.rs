#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        focusframe::logging::init();
        tracing::error!("focusframe needs a Windows desktop (layered tool windows)");
        std::process::exit(1);
    }
}
