fn main() {
    #[cfg(feature = "cli")]
    maddr::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("maddr: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
