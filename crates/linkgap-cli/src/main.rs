use clap::Parser;
use linkgap::{Cli, run};

fn main() {
    #[cfg(unix)]
    restore_default_sigpipe();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Reports over long logs are often piped into `grep -m1` or `head`; exit
/// quietly when the reader goes away instead of failing the write.
#[cfg(unix)]
fn restore_default_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
