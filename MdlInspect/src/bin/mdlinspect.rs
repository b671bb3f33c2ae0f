fn main() -> anyhow::Result<()> {
    mdlinspect::cli::run_cli()
}
