use exemplate::runtime::{run_from_env, run_in};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: exemplate [ROOT]

Copies every `<name>.example` file under ROOT (default: the current
directory) to a sibling `<name>` file, overwriting what is already there.

Options:
  -h, --help  Print help
";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    root: Option<PathBuf>,
    help: bool,
}

fn parse_cli_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                options.help = true;
            }
            _ if arg.starts_with('-') => return Err(format!("unknown argument: {arg}")),
            _ => {
                if options.root.is_some() {
                    return Err(format!("unexpected extra argument: {arg}"));
                }
                options.root = Some(PathBuf::from(arg));
            }
        }
    }
    Ok(options)
}

fn main() {
    let options = match parse_cli_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    let run_result = match options.root {
        Some(root) => run_in(root),
        None => run_from_env(),
    };

    if let Err(err) = run_result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
