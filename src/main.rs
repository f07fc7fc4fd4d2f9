fn main() {
    #[cfg(feature = "cli")]
    runlength::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("runlength: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
