use flightstick_core::{InputSource, all_sources};

pub fn run() {
    let sources = all_sources();

    println!("Found {} simulated input device(s):\n", sources.len());
    for src in &sources {
        let info = src.info();
        println!("  {:<16} {}", info.name, info.description);
    }
}
