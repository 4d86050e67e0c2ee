fn main() {
    #[cfg(feature = "cli")]
    lzp::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("lzp: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
