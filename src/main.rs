use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::warn;
use std::{
    env,
    fs,
    path::{Path, PathBuf},
};

use lyrics_ruby_json::{
    lyrics::{
        element::LyricsElement,
        parser::{parse_lyrics_with_options, ParseOptions, UnterminatedHtml},
    },
    pronunciation::{registry::PronunciationRegistry, table::PronunciationTable},
};

static LYRICS_SUFFIX: &str = "md";

struct Args {
    lyrics_path: String,
    output_path: Option<String>,
    series_id: Option<String>,
    dictionary_path: Option<String>,
    flush_unterminated_html: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("s", "series", "series id of the pronunciation table", "ID");
    opts.optopt(
        "d",
        "dictionary-dir",
        "directory of <series-id>.csv pronunciation tables",
        "DIR",
    );
    opts.optflag(
        "",
        "flush-unterminated-html",
        "keep an HTML block that is not closed before the end of a file",
    );

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let lyrics_path = matches
        .free
        .get(0)
        .context("path to lyrics directory is required")?
        .clone();
    let output_path = matches.free.get(1).cloned();

    Ok(Args {
        lyrics_path,
        output_path,
        series_id: matches.opt_str("s"),
        dictionary_path: matches.opt_str("d"),
        flush_unterminated_html: matches.opt_present("flush-unterminated-html"),
    })
}

enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir_all(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save_lyrics(&self, relative_path: &Path, parsed: &[Vec<LyricsElement>]) -> Result<()> {
        if let BuildOut::File { root } = &self {
            let path = root.join(relative_path).with_extension("json");
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            fs::write(&path, serde_json::to_string(parsed)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(())
    }
}

fn collect_lyrics_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_lyrics_files(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(LYRICS_SUFFIX) {
            files.push(path);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = get_args()?;

    let lyrics_path = PathBuf::from(&args.lyrics_path);
    ensure!(
        lyrics_path.is_dir(),
        "Directory not found: {}",
        lyrics_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    let mut registry = PronunciationRegistry::builtin()?;
    if let Some(dictionary_path) = &args.dictionary_path {
        registry
            .load_csv_dir(Path::new(dictionary_path))
            .context("Failed to load pronunciation tables")?;
    }

    let table = match &args.series_id {
        Some(series_id) => {
            if !registry.series_ids().contains(&series_id.as_str()) {
                warn!("Unknown series {:?}, no fixed pronunciation is used", series_id);
            }
            registry.lookup(series_id)
        }
        None => PronunciationTable::empty(),
    };

    let options = ParseOptions {
        unterminated_html: if args.flush_unterminated_html {
            UnterminatedHtml::Flush
        } else {
            UnterminatedHtml::Discard
        },
    };

    let mut files = Vec::new();
    collect_lyrics_files(&lyrics_path, &mut files)?;
    files.sort();

    println!("Processing {} files...", files.len());

    let pb = create_progress_bar(files.len() as u64);
    for path in files.iter().progress_with(pb) {
        (|| {
            let document = fs::read_to_string(path)?;
            let parsed = parse_lyrics_with_options(&document, table, &options);

            let relative_path = path.strip_prefix(&lyrics_path)?;
            out.save_lyrics(relative_path, &parsed)?;

            Ok::<_, anyhow::Error>(())
        })()
        .with_context(|| format!("Failed to process lyrics: {}", path.display()))?;
    }

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
