use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt as _;
use tracing::info;

use cadence::{extract_complete_sentences, segment_stream, StreamConfig};

#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(about = "Streaming sentence segmenter for low-latency speech synthesis")]
#[command(version)]
struct Args {
    /// Input file to segment; reads stdin when omitted
    input: Option<PathBuf>,

    /// Defer segments shorter than this many code points
    #[arg(long, default_value_t = 6)]
    min_len: usize,

    /// Split-point search window in code points (0 = no cap)
    #[arg(long, default_value_t = 200)]
    max_len: usize,

    /// Disable comma splitting for the first utterance
    #[arg(long)]
    no_first_pass: bool,

    /// Run one eager extraction over the whole input instead of streaming
    #[arg(long)]
    eager: bool,

    /// Stats output file path (JSON)
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunStats {
    sentences_emitted: usize,
    remainder_len: usize,
    duration_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting cadence");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate the input path early to fail fast with a clear error
    if let Some(ref path) = args.input {
        if !path.is_file() {
            anyhow::bail!("Input path is not a readable file: {}", path.display());
        }
    }

    let start_time = std::time::Instant::now();

    let (emitted, remainder_len) = if args.eager {
        run_eager(&args).await?
    } else {
        run_streaming(&args).await?
    };

    let stats = RunStats {
        sentences_emitted: emitted,
        remainder_len,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    if let Some(ref stats_path) = args.stats_out {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(stats_path, json).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    info!(?stats, "Segmentation complete");
    Ok(())
}

/// One-shot eager extraction over the full input.
async fn run_eager(args: &Args) -> Result<(usize, usize)> {
    let text = match args.input {
        Some(ref path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buffer = String::new();
            let mut stdin = BufReader::new(tokio::io::stdin());
            tokio::io::AsyncReadExt::read_to_string(&mut stdin, &mut buffer).await?;
            buffer
        }
    };

    let (sentences, remainder) = extract_complete_sentences(&text);
    for sentence in &sentences {
        println!("{sentence}");
    }
    if !remainder.is_empty() {
        println!("{remainder}");
    }

    Ok((sentences.len(), remainder.len()))
}

/// Line-by-line streaming segmentation, printing sentences as they complete.
async fn run_streaming(args: &Args) -> Result<(usize, usize)> {
    let config = StreamConfig {
        min_sentence_len: args.min_len,
        max_sentence_len: args.max_len,
        eager_first: !args.no_first_pass,
    };

    // WHY: lines() strips the newline; it is re-prepended to each following
    // line so the carried remainder and the next line never glue into one
    // word, and list-item breaks stay visible to the scanner
    let chunks: Box<dyn futures::Stream<Item = String> + Unpin + Send> = match args.input {
        Some(ref path) => {
            let file = tokio::fs::File::open(path).await?;
            let lines = LinesStream::new(BufReader::new(file).lines());
            Box::new(lines.filter_map(line_joiner()))
        }
        None => {
            let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
            Box::new(lines.filter_map(line_joiner()))
        }
    };

    let (tx, mut rx) = mpsc::channel(32);
    let printer = tokio::spawn(async move {
        let mut emitted = 0usize;
        while let Some(sentence) = rx.recv().await {
            println!("{sentence}");
            emitted += 1;
        }
        emitted
    });

    segment_stream(chunks, config, tx).await?;
    let emitted = printer.await?;

    // The driver flushes its tail on finish, so nothing is left carried
    Ok((emitted, 0))
}

fn line_joiner() -> impl FnMut(std::io::Result<String>) -> Option<String> {
    let mut first = true;
    move |line| match line {
        Ok(line) => {
            if first {
                first = false;
                Some(line)
            } else {
                Some(format!("\n{line}"))
            }
        }
        Err(e) => {
            tracing::warn!("Skipping unreadable input line: {e}");
            None
        }
    }
}
