use clap::{App, AppSettings, Arg, ArgMatches};
use log::info;
use slpa::{front_end::parse, graph::Graph, propagation::PropagationDriver};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

fn handle_detect(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = std::fs::read_to_string(matches.value_of("INPUT").unwrap())?;
    let edge_list = parse(&input)?;
    info!(
        "declared {} vertices and {} edges",
        edge_list.num_vertices(),
        edge_list.num_edges()
    );
    let mut graph = Graph::build(
        edge_list.num_vertices(),
        edge_list.num_edges(),
        edge_list.into_edges(),
    )?;
    let iterations = matches.value_of("ITERATIONS").unwrap().parse().unwrap();
    let threshold = matches.value_of("THRESHOLD").unwrap().parse().unwrap();
    let seed = matches.value_of("seed").map(|s| s.parse().unwrap());
    info!(
        "propagating for {} rounds with threshold {}",
        iterations, threshold
    );
    let communities = PropagationDriver::new(iterations, threshold, seed).run(&mut graph);
    info!("detected {} communities", communities.len());
    let file = File::create(matches.value_of("OUTPUT").unwrap())?;
    communities.write_into(&mut BufWriter::new(file))?;
    Ok(())
}

fn validate_iterations(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(iterations) if iterations >= 1 => Ok(()),
        _ => Err(format!("invalid iteration count: {}", value)),
    }
}

fn validate_threshold(value: String) -> Result<(), String> {
    match value.parse::<f64>() {
        Ok(threshold) if (0.0..=1.0).contains(&threshold) => Ok(()),
        _ => Err(format!("invalid threshold (expected [0, 1]): {}", value)),
    }
}

fn validate_seed(value: String) -> Result<(), String> {
    value
        .parse::<u64>()
        .map(|_| ())
        .map_err(|_| format!("invalid seed: {}", value))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("slpa")
        .about("Detects overlapping communities by speaker-listener label propagation")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("INPUT")
                .help("The edge-list file (\"V E\" header, one \"u v\" edge per line)")
                .required(true),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("The output file (one community per line)")
                .required(true),
        )
        .arg(
            Arg::with_name("ITERATIONS")
                .help("The number of propagation rounds")
                .required(true)
                .validator(validate_iterations),
        )
        .arg(
            Arg::with_name("THRESHOLD")
                .help("The post-processing threshold in [0, 1]")
                .required(true)
                .validator(validate_threshold),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seeds the random source for a reproducible run")
                .validator(validate_seed),
        )
        .get_matches();
    handle_detect(&matches)
}
