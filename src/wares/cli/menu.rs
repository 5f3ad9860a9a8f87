use crate::api::InventoryApi;
use crate::cli::print;
use crate::commands::add::NewProduct;
use crate::error::WaresError;
use crate::model::StockAction;
use crate::store::InventoryStore;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// The interactive menu loop. Reads free-text operator input from `input`,
/// writes everything to `out`; never terminates except via option 7 or EOF.
pub fn run_loop<S, R, W>(api: &mut InventoryApi<S>, input: &mut R, out: &mut W) -> io::Result<()>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(out)?;
        let choice = match prompt(input, out, "Enter your choice (1-7): ")? {
            Some(line) => line,
            None => break,
        };

        match choice.trim() {
            "1" => handle_add(api, input, out)?,
            "2" => handle_update(api, input, out)?,
            "3" => handle_search(api, input, out)?,
            "4" => handle_low_stock(api, out)?,
            "5" => handle_total_value(api, out)?,
            "6" => handle_sales_stats(api, out)?,
            "7" => {
                match api.save() {
                    Ok(result) => print::print_messages(out, &result.messages)?,
                    Err(err) => print::print_error(out, &err)?,
                }
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "{}", "Invalid choice. Please try again.".red())?,
        }
    }
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Inventory Management System ===".bold())?;
    writeln!(out, "1. Add New Product")?;
    writeln!(out, "2. Update Quantity (Sell/Restock)")?;
    writeln!(out, "3. Search Product")?;
    writeln!(out, "4. Show Low Stock")?;
    writeln!(out, "5. Calculate Total Inventory Value")?;
    writeln!(out, "6. Show Most/Least Sold Items")?;
    writeln!(out, "7. Exit")?;
    Ok(())
}

/// One line of operator input, prompt included. `None` means EOF, which the
/// loop treats as exit so a closed pipe never spins.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn handle_add<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Add New Product ---")?;

    let name = match prompt(input, out, "Enter product name: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    if name.trim().is_empty() {
        return print::print_error(out, &WaresError::EmptyName);
    }

    let category = match prompt(input, out, "Enter category: ")? {
        Some(category) => category,
        None => return Ok(()),
    };
    let quantity_raw = match prompt(input, out, "Enter quantity: ")? {
        Some(raw) => raw,
        None => return Ok(()),
    };
    let price_raw = match prompt(input, out, "Enter price: ")? {
        Some(raw) => raw,
        None => return Ok(()),
    };
    let threshold_raw = match prompt(input, out, "Enter low stock threshold: ")? {
        Some(raw) => raw,
        None => return Ok(()),
    };

    let parsed = (
        quantity_raw.trim().parse::<i64>(),
        price_raw.trim().parse::<f64>(),
        threshold_raw.trim().parse::<i64>(),
    );
    let (quantity, price, low_stock_threshold) = match parsed {
        (Ok(quantity), Ok(price), Ok(threshold)) => (quantity, price, threshold),
        _ => {
            return writeln!(
                out,
                "{}",
                "Invalid input. Quantity and threshold must be integers, price must be a number."
                    .red()
            );
        }
    };

    let outcome = api.add_product(NewProduct {
        name,
        category,
        quantity,
        price,
        low_stock_threshold,
    });
    match outcome {
        Ok(result) => print::print_messages(out, &result.messages),
        Err(err) => print::print_error(out, &err),
    }
}

fn handle_update<S: InventoryStore, R: BufRead, W: Write>(
    api: &mut InventoryApi<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Update Quantity ---")?;

    let name = match prompt(input, out, "Enter product name to update: ")? {
        Some(name) => name,
        None => return Ok(()),
    };
    let current = match api.inventory().find(name.trim()) {
        Some(product) => (product.name.clone(), product.quantity),
        None => {
            return print::print_error(out, &WaresError::ProductNotFound(name.trim().to_string()))
        }
    };
    writeln!(out, "Current quantity of '{}': {}", current.0, current.1)?;

    let action_raw = match prompt(input, out, "Type 'sell' to sell or 'restock' to add stock: ")? {
        Some(raw) => raw,
        None => return Ok(()),
    };
    let action = match action_raw.parse::<StockAction>() {
        Ok(action) => action,
        Err(err) => return print::print_error(out, &err),
    };

    let amount_prompt = match action {
        StockAction::Sell => "Enter quantity to sell: ",
        StockAction::Restock => "Enter quantity to restock: ",
    };
    let amount_raw = match prompt(input, out, amount_prompt)? {
        Some(raw) => raw,
        None => return Ok(()),
    };
    let amount = match amount_raw.trim().parse::<i64>() {
        Ok(amount) => amount,
        Err(_) => return writeln!(out, "{}", "Invalid quantity.".red()),
    };

    match api.update_stock(&name, action, amount) {
        Ok(result) => print::print_messages(out, &result.messages),
        Err(err) => print::print_error(out, &err),
    }
}

fn handle_search<S: InventoryStore, R: BufRead, W: Write>(
    api: &InventoryApi<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Search Product ---")?;

    let query = match prompt(input, out, "Enter name or category to search: ")? {
        Some(query) => query,
        None => return Ok(()),
    };
    match api.search(&query) {
        Ok(result) => {
            print::print_products(out, &result.listed)?;
            print::print_messages(out, &result.messages)
        }
        Err(err) => print::print_error(out, &err),
    }
}

fn handle_low_stock<S: InventoryStore, W: Write>(
    api: &InventoryApi<S>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n--- Low Stock Alert ---")?;

    match api.low_stock() {
        Ok(result) => {
            for product in &result.listed {
                writeln!(
                    out,
                    "{}",
                    format!(
                        "LOW STOCK: {} (Qty: {}, Threshold: {})",
                        product.name, product.quantity, product.low_stock_threshold
                    )
                    .yellow()
                )?;
            }
            print::print_messages(out, &result.messages)
        }
        Err(err) => print::print_error(out, &err),
    }
}

fn handle_total_value<S: InventoryStore, W: Write>(
    api: &InventoryApi<S>,
    out: &mut W,
) -> io::Result<()> {
    match api.total_value() {
        Ok(result) => {
            let total = result.total_value.unwrap_or(0.0);
            writeln!(
                out,
                "\nTotal Inventory Value: {}",
                print::money(total).bold()
            )
        }
        Err(err) => print::print_error(out, &err),
    }
}

fn handle_sales_stats<S: InventoryStore, W: Write>(
    api: &InventoryApi<S>,
    out: &mut W,
) -> io::Result<()> {
    match api.sales_stats() {
        Ok(result) => {
            if let Some(stats) = &result.stats {
                writeln!(out, "\n--- Sales Statistics ---")?;
                writeln!(
                    out,
                    "Most Sold: {} ({} sold)",
                    stats.most_sold.name, stats.most_sold.sold_count
                )?;
                writeln!(
                    out,
                    "Least Sold: {} ({} sold)",
                    stats.least_sold.name, stats.least_sold.sold_count
                )?;
            }
            print::print_messages(out, &result.messages)
        }
        Err(err) => print::print_error(out, &err),
    }
}
