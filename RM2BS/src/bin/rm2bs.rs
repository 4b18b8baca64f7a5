//! `rm2bs` command-line entry point

fn main() -> anyhow::Result<()> {
    rm2bs::cli::run_cli()
}
