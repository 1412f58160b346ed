use std::path::PathBuf;

pub const DATASET_ENV: &str = "COSTARGRAPH_DATASET";
const DEFAULT_DATASET: &str = "data/marvel.tsv";
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub dataset: PathBuf,
    pub data_dir: PathBuf,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub json: bool,
    pub command: String,
    pub command_args: Vec<String>,
}

impl CommandLineConfig {
    /// Parses `args` (program name first). The dataset falls back to
    /// `$COSTARGRAPH_DATASET`, then to `data/marvel.tsv`.
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        Self::from_args_with_env(args, std::env::var(DATASET_ENV).ok())
    }

    pub fn from_args_with_env(args: &[&str], dataset_env: Option<String>) -> Result<Self, String> {
        let mut dataset = dataset_env
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
        let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        let mut verbose = false;
        let mut log_level = None;
        let mut json = false;
        let mut command = String::from("interactive");
        let mut command_args = Vec::new();
        let mut command_set = false;
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--dataset" => {
                    dataset = PathBuf::from(
                        *iter
                            .next()
                            .ok_or_else(|| "--dataset requires a value".to_string())?,
                    );
                }
                "--data-dir" => {
                    data_dir = PathBuf::from(
                        *iter
                            .next()
                            .ok_or_else(|| "--data-dir requires a value".to_string())?,
                    );
                }
                "--log-level" => {
                    log_level = Some(
                        iter.next()
                            .ok_or_else(|| "--log-level requires a value".to_string())?
                            .to_string(),
                    );
                }
                "--verbose" | "-v" => verbose = true,
                "--json" => json = true,
                "--command" if !command_set => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                    command_set = true;
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown flag {other}"));
                }
                _ if command_set => command_args.push(arg.to_string()),
                _ => {
                    command = arg.to_string();
                    command_set = true;
                }
            }
        }
        Ok(Self {
            dataset,
            data_dir,
            verbose,
            log_level,
            json,
            command,
            command_args,
        })
    }

    pub fn help() -> &'static str {
        "Usage: costargraph [--dataset PATH] [--data-dir DIR] [-v|--verbose] [--log-level LEVEL] [--json] [COMMAND] [ARGS...]\n\
         \n\
         Commands:\n\
         \x20 interactive         prompt for two characters and show how they connect (default)\n\
         \x20 path FROM TO        print the shortest connection between FROM and TO\n\
         \x20 script [FILE]       run a test script from FILE or standard input\n\
         \x20 status              print node, edge and group counts\n"
    }
}
