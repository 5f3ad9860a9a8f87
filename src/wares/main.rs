use colored::Colorize;
use std::io;
use wares::api::InventoryApi;
use wares::cli::{menu, print};
use wares::store::fs::FileStore;

const INVENTORY_FILE: &str = "inventory.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let store = FileStore::new(INVENTORY_FILE);
    let (mut api, warning) = InventoryApi::open(store);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if let Some(warning) = warning {
        print::print_messages(&mut out, &[warning])?;
    }
    menu::run_loop(&mut api, &mut input, &mut out)
}
