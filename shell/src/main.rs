mod config;
mod protocol;
mod session;
mod wordlist;

use std::io;

use anyhow::Result;
use config::ShellConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordtrie_engine::Dict;

fn main() -> Result<()> {
    // Responses go to stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = ShellConfig::load()?;
    info!(
        wordlist = ?config.dictionary.wordlist,
        strict = config.dictionary.strict,
        pretty = config.session.pretty,
        "loaded wordtrie config"
    );

    let mut dict = Dict::new();
    if let Some(path) = config.dictionary.wordlist.clone() {
        let stats = wordlist::load_into(&mut dict, &path, config.dictionary.strict)?;
        info!(
            new_words = stats.new_words,
            repeats = stats.repeats,
            skipped = stats.skipped,
            nodes = dict.node_count(),
            "seeded dictionary from {}",
            path.display()
        );
    }

    info!("wordtrie shell ready, JSONL requests on stdin");
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(stdin.lock(), stdout.lock(), &mut dict, config.session.pretty)
}
