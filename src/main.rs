use anyhow::Result;

fn main() -> Result<()> {
    deadline_agenda::cli::run()
}
