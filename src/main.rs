use debug_log::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
