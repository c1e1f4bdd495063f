use clap::Parser;
use flexor::LinearSystem;

#[derive(Parser)]
struct Inputs {
    #[clap(short, long)]
    /// The JSON file containing the system (i.e., "columns" and "b")
    pub input: String,

    #[clap(short, long)]
    /// The file where to write the solution. It is printed to the
    /// standard output if not given.
    pub output: Option<String>,
}

fn main() {
    env_logger::init();
    let inputs = Inputs::parse();

    let system = match LinearSystem::from_file(&inputs.input) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let x = match system.solve() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let json = match serde_json::to_string(&x) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match inputs.output {
        Some(output) => {
            if let Err(e) = std::fs::write(&output, json) {
                eprintln!("Could not write file '{}': {}", output, e);
                std::process::exit(1);
            }
            log::info!("Solution written to '{}'", output);
        }
        None => println!("{}", json),
    }
}
