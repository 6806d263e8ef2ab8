//! Router generator CLI.

use std::path::Path;

use routerc::commands::{parse_cli_options, run_generate, run_selectors, CliError};

fn main() {
    routerc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" => {
            if args.len() < 3 {
                eprintln!("Usage: routergen generate <manifest.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --name=<Name>        Router contract name (default: Router)");
                eprintln!("  --template=<path>    Custom template file");
                eprintln!("  --receive            Emit a plain-value receive function");
                eprintln!("  --diamond            Emit diamond-compatibility scaffolding");
                eprintln!("  --skip-coverage      Drop coverage-instrumentation functions (c_0x...)");
                eprintln!("  --exclude=<a,b,...>  Drop functions by name");
                eprintln!("  -o <path>            Write output to a file (default: stdout)");
                std::process::exit(1);
            }
            let result = parse_cli_options(&args[3..])
                .and_then(|options| run_generate(Path::new(&args[2]), &options));
            exit_on_error(result);
        }
        "selectors" => {
            if args.len() < 3 {
                eprintln!("Usage: routergen selectors <manifest.json> [--skip-coverage] [--exclude=<a,b,...>]");
                std::process::exit(1);
            }
            let result = parse_cli_options(&args[3..])
                .and_then(|options| run_selectors(Path::new(&args[2]), &options));
            exit_on_error(result);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("error: unknown command '{command}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Router generator");
    println!();
    println!("Usage: routergen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <manifest.json>   Generate a router contract");
    println!("  selectors <manifest.json>  List routed selectors in dispatch order");
    println!("  help                       Show this message");
    println!();
    println!("The manifest is a JSON array of {{contractName, deployedAddress, abi}}");
    println!("entries; abi is an inline ABI array or a path relative to the manifest.");
    println!();
    println!("Set RUST_LOG=debug to trace each generation stage.");
}
