use ui5gen::RawFlags;

fn main() {
    let flags = RawFlags::parse_cli();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match ui5gen::generate(&flags, &cwd) {
        Ok(dest) => {
            println!("✅ Created UI5 project at {}", dest.display());
            println!("Next steps: cd into the project and run 'npm install'.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
