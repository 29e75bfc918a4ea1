use std::io::Write;
use std::path::PathBuf;

use alexagonal::core::assets::AssetReader;
use alexagonal::core::audit::PROMPT_FILE;

pub fn run(assets_dir: PathBuf) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let prompt = rt.block_on(AssetReader::new(assets_dir).read(PROMPT_FILE))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
