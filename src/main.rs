//! The addend command-line executable.

fn main() -> anyhow::Result<()> {
    addend::run()
}
