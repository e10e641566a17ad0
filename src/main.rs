// src/main.rs
// Replays a recorded frame stream through the engine and prints the final state.
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mocap_stream::{
    BodyPart, EngineConfig, FramePipeline, FrameRecorder, FrameSource, LineSource, MocapEngine,
    ParameterKind,
};

/// Replay a recorded motion-capture frame stream.
#[derive(Parser, Debug)]
#[command(name = "mocap-replay")]
#[command(about = "Decode a recorded frame stream and print the final joint state")]
struct Args {
    /// Frame file, one frame per line (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Engine config as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write decoded frames to this CSV file
    #[arg(long)]
    record: Option<PathBuf>,
}

fn run<S: FrameSource>(source: S, config: EngineConfig, record: Option<PathBuf>) -> Result<()> {
    let tracked = config.tracked_part;
    let engine = MocapEngine::new(config.clone()).context("invalid engine config")?;
    let mut pipeline = FramePipeline::new(source, engine);
    if let Some(path) = record {
        let recorder = FrameRecorder::create(&path, config.frame_width())
            .with_context(|| format!("cannot record to {}", path.display()))?;
        pipeline = pipeline.with_recorder(recorder);
    }
    let summary = pipeline.drain().context("frame source failed")?;
    info!(
        "replayed {} frames, {} degraded ({} slots)",
        summary.frames, summary.degraded_frames, summary.degraded_slots
    );
    let engine = pipeline.into_engine();
    let pose = engine.pose(tracked);
    let foot = engine.foot_state();
    println!("frames: {}", summary.frames);
    println!("foot state: ({:.4}, {:.4})", foot.x, foot.y);
    println!(
        "{tracked:?} position: [{:.4}, {:.4}, {:.4}]",
        pose.position.x, pose.position.y, pose.position.z
    );
    let hips = engine.sequence(BodyPart::Hips, ParameterKind::Position, 10, 10.0);
    println!("Hips position @10Hz, last {} samples:", hips.ncols());
    for (axis, row) in ["x", "y", "z"].iter().zip(hips.rows()) {
        let values: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
        println!("  {axis}: {}", values.join(" "));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    match args.input.as_deref().filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            run(LineSource::new(BufReader::new(file)), config, args.record)
        }
        None => run(LineSource::new(io::stdin().lock()), config, args.record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn help_flags_print_usage() {
        for flag in ["-h", "--help"] {
            let err = Args::try_parse_from(["mocap-replay", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn options_accept_equals_form() {
        let args =
            Args::try_parse_from(["mocap-replay", "--config=engine.json", "frames.txt"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("engine.json")));
        assert_eq!(args.input, Some(PathBuf::from("frames.txt")));
        assert!(args.record.is_none());
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = Args::try_parse_from(["mocap-replay", "--speed", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
