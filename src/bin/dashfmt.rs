use dashfmt::Result;
use dashfmt::loader::SnapshotSource;
use dashfmt::render::render_snapshot;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    // Force colored output even when not in a TTY, unless NO_COLOR opts out
    if env::var_os("NO_COLOR").is_none() {
        colored::control::set_override(true);
    }

    let arg = env::args().nth(1);
    let source = SnapshotSource::from_arg(arg.as_deref())?;
    let snapshot = source.load().await?;

    println!("{}", render_snapshot(&snapshot)?);

    Ok(())
}
