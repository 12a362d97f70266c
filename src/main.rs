use anyhow::Result;

fn main() -> Result<()> {
    llama_tools::app::run()
}
